//! HTTP route handlers for the viewer application.
//!
//! Every handler works against the caller's viewer session. Uploads are
//! parsed exactly once; all later views, theme changes and downloads render
//! from the stored cells.

use crate::files::{content_disposition, download_file_name, is_notebook_file_name, sanitize_file_name};
use crate::models::LoadedNotebook;
use crate::parser::parse_notebook_bytes;
use crate::render::notebook_to_html;
use crate::session::{session_cookie, session_token, ViewerSession};
use crate::templates::render_viewer;
use crate::AppState;
use axum::{
    extract::{Multipart, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load notebook. Please check the file format.";
pub const WRONG_EXTENSION_MESSAGE: &str = "Please upload a .ipynb file";
pub const NO_FILE_MESSAGE: &str = "No file uploaded";
pub const NOT_LOADED_MESSAGE: &str = "No notebook loaded";

// ============================================================================
// Session Helpers
// ============================================================================

/// The caller's session token, creating a session when the cookie is missing
/// or stale. The returned headers carry the `Set-Cookie` for a new session.
fn resolve_session(state: &AppState, jar: &CookieJar) -> (String, HeaderMap) {
    let mut headers = HeaderMap::new();

    if let Some(token) = session_token(jar) {
        if state.sessions.contains(&token) {
            return (token, headers);
        }
    }

    let token = state.sessions.create();
    let cookie = session_cookie(&token, state.config.session_ttl_hours);
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        headers.insert(header::SET_COOKIE, value);
    }
    (token, headers)
}

fn current_session(state: &AppState, jar: &CookieJar) -> Option<ViewerSession> {
    session_token(jar).and_then(|token| state.sessions.get(&token))
}

fn viewer_page(state: &AppState, token: &str, notice: Option<&str>) -> Html<String> {
    let session = state.sessions.get(token);
    let theme = state.sessions.theme(token);
    Html(render_viewer(session.as_ref(), &theme, notice))
}

// ============================================================================
// Index Handler
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let (token, headers) = resolve_session(&state, &jar);
    (headers, viewer_page(&state, &token, None)).into_response()
}

// ============================================================================
// Upload Handler
// ============================================================================

pub async fn upload(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Response {
    let (token, headers) = resolve_session(&state, &jar);

    let mut file_name = String::new();
    let mut file_data = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            file_name = field.file_name().unwrap_or_default().to_string();

            match field.bytes().await {
                Ok(bytes) => file_data = bytes.to_vec(),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read upload");
                    return (
                        StatusCode::BAD_REQUEST,
                        headers,
                        viewer_page(&state, &token, Some(&format!("Failed to read file: {}", e))),
                    )
                        .into_response();
                }
            }
            break;
        }
    }

    let file_name = sanitize_file_name(&file_name);

    if file_data.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            headers,
            viewer_page(&state, &token, Some(NO_FILE_MESSAGE)),
        )
            .into_response();
    }

    if !is_notebook_file_name(&file_name) {
        return (
            StatusCode::BAD_REQUEST,
            headers,
            viewer_page(&state, &token, Some(WRONG_EXTENSION_MESSAGE)),
        )
            .into_response();
    }

    let cells = match parse_notebook_bytes(&file_data) {
        Ok(cells) => cells,
        Err(e) => {
            tracing::warn!(file = %file_name, error = %e, "failed to parse notebook");
            state.sessions.clear(&token);
            return (
                StatusCode::BAD_REQUEST,
                headers,
                viewer_page(&state, &token, Some(LOAD_FAILED_MESSAGE)),
            )
                .into_response();
        }
    };

    tracing::info!(file = %file_name, cells = cells.len(), bytes = file_data.len(), "loaded notebook");

    state.sessions.load(
        &token,
        LoadedNotebook {
            file_name,
            size_bytes: file_data.len() as u64,
            loaded_at: Utc::now(),
            cells,
        },
    );

    (headers, Redirect::to("/")).into_response()
}

// ============================================================================
// Theme Handler
// ============================================================================

#[derive(Deserialize)]
pub struct ThemeForm {
    pub theme: String,
}

pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    axum::Form(form): axum::Form<ThemeForm>,
) -> Response {
    let (token, headers) = resolve_session(&state, &jar);
    let theme = form.theme.trim();
    if !theme.is_empty() {
        state.sessions.set_theme(&token, theme);
    }
    (headers, Redirect::to("/")).into_response()
}

// ============================================================================
// Notebook Handlers
// ============================================================================

#[derive(Deserialize)]
pub struct NotebookQuery {
    pub theme: Option<String>,
}

/// The rendered notebook document, as shown inside the viewer frame.
pub async fn notebook(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<NotebookQuery>,
) -> Response {
    let session = match current_session(&state, &jar) {
        Some(s) => s,
        None => return (StatusCode::NOT_FOUND, NOT_LOADED_MESSAGE).into_response(),
    };
    let nb = match session.notebook {
        Some(ref nb) => nb,
        None => return (StatusCode::NOT_FOUND, NOT_LOADED_MESSAGE).into_response(),
    };

    let theme = query
        .theme
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| session.theme.clone());

    Html(notebook_to_html(&nb.cells, &theme)).into_response()
}

pub async fn download(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let session = match current_session(&state, &jar) {
        Some(s) => s,
        None => return (StatusCode::NOT_FOUND, NOT_LOADED_MESSAGE).into_response(),
    };
    let nb = match session.notebook {
        Some(ref nb) => nb,
        None => return (StatusCode::NOT_FOUND, NOT_LOADED_MESSAGE).into_response(),
    };

    let html = notebook_to_html(&nb.cells, &session.theme);
    let filename = download_file_name(Some(&nb.file_name));
    tracing::info!(file = %filename, theme = %session.theme, "notebook downloaded");

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&filename)),
        ],
        html,
    )
        .into_response()
}

pub async fn clear(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let (token, headers) = resolve_session(&state, &jar);
    state.sessions.clear(&token);
    (headers, Redirect::to("/")).into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// The normalized cell model of the loaded notebook as JSON.
pub async fn api_cells(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    match current_session(&state, &jar).and_then(|s| s.notebook) {
        Some(nb) => axum::Json(serde_json::json!({
            "file_name": nb.file_name,
            "cells": nb.cells,
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(serde_json::json!({ "error": NOT_LOADED_MESSAGE })),
        )
            .into_response(),
    }
}
