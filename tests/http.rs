//! End-to-end tests for the viewer web application.
//!
//! Each test starts the router on an ephemeral port and talks to it with a
//! cookie-keeping client, the way a browser would.

use nbview::handlers::{LOAD_FAILED_MESSAGE, WRONG_EXTENSION_MESSAGE};
use nbview::{app, AppState};
use reqwest::{multipart, Client, StatusCode};
use std::path::PathBuf;
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = Arc::new(AppState::default());
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client() -> Client {
    Client::builder().cookie_store(true).build().unwrap()
}

fn fixture_bytes(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(&path).unwrap()
}

async fn upload(client: &Client, base: &str, name: &str, bytes: Vec<u8>) -> reqwest::Response {
    let part = multipart::Part::bytes(bytes).file_name(name.to_string());
    let form = multipart::Form::new().part("file", part);
    client
        .post(format!("{}/upload", base))
        .multipart(form)
        .send()
        .await
        .unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_index_starts_session_in_empty_state() {
    let base = spawn_app().await;
    let resp = client().get(&base).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(cookie.starts_with("nbview_session="));
    let body = resp.text().await.unwrap();
    assert!(body.contains("No notebook loaded"));
    assert!(body.contains(r#"action="/upload""#));
}

#[tokio::test]
async fn test_upload_view_theme_download_clear() {
    let base = spawn_app().await;
    let client = client();

    let resp = upload(&client, &base, "sample.ipynb", fixture_bytes("sample.ipynb")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = resp.text().await.unwrap();
    assert!(page.contains("sample.ipynb"));
    assert!(page.contains(r#"src="/notebook?theme=github""#));

    let html = client
        .get(format!("{}/notebook", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("<h1>Sample Notebook</h1>"));
    assert!(html.contains("/styles/github.min.css"));

    let resp = client
        .post(format!("{}/theme", base))
        .form(&[("theme", "monokai")])
        .send()
        .await
        .unwrap();
    assert!(resp.text().await.unwrap().contains(r#"<option value="monokai" selected>"#));

    let themed = client
        .get(format!("{}/notebook", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(themed.contains("/styles/monokai.min.css"));
    assert_eq!(
        themed.replace("monokai.min.css", "github.min.css"),
        html,
        "a theme change only swaps the stylesheet"
    );

    let preview = client
        .get(format!("{}/notebook?theme=nord", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(preview.contains("/styles/nord.min.css"));

    let resp = client
        .get(format!("{}/download", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["content-disposition"],
        "attachment; filename=\"sample.html\""
    );
    assert_eq!(resp.text().await.unwrap(), themed);

    let cells: serde_json::Value = client
        .get(format!("{}/api/cells", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cells["file_name"], "sample.ipynb");
    assert_eq!(cells["cells"].as_array().map(Vec::len), Some(5));
    assert_eq!(cells["cells"][1]["outputs"][2]["type"], "image");

    let resp = client.post(format!("{}/clear", base)).send().await.unwrap();
    assert!(resp.text().await.unwrap().contains("No notebook loaded"));
    let resp = client
        .get(format!("{}/notebook", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_notebook_is_rejected() {
    let base = spawn_app().await;
    let client = client();

    let resp = upload(&client, &base, "broken.ipynb", b"{\"cells\": [".to_vec()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = resp.text().await.unwrap();
    assert!(body.contains(LOAD_FAILED_MESSAGE));
    assert!(body.contains("No notebook loaded"));

    let resp = client
        .get(format!("{}/notebook", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_failed_upload_drops_previous_notebook() {
    let base = spawn_app().await;
    let client = client();

    upload(&client, &base, "sample.ipynb", fixture_bytes("sample.ipynb")).await;
    let resp = upload(&client, &base, "broken.ipynb", b"not json".to_vec()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .get(format!("{}/api/cells", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_extension_is_rejected() {
    let base = spawn_app().await;
    let resp = upload(&client(), &base, "notes.json", fixture_bytes("sample.ipynb")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(resp.text().await.unwrap().contains(WRONG_EXTENSION_MESSAGE));
}

#[tokio::test]
async fn test_notebook_without_session_is_not_found() {
    let base = spawn_app().await;
    let resp = Client::new()
        .get(format!("{}/download", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
