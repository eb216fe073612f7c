//! Viewer page: input panel on the left, rendered notebook on the right.
//!
//! The notebook is shown through a sandboxed iframe pointed at `/notebook`,
//! which keeps unescaped rich outputs away from the application page.

use crate::session::ViewerSession;
use crate::render::html_escape;

use super::components::{action_buttons, base_html, error_message, file_info, theme_selector, upload_form};

// ============================================================================
// Viewer Template
// ============================================================================

pub fn render_viewer(session: Option<&ViewerSession>, theme: &str, notice: Option<&str>) -> String {
    let notebook = session.and_then(|s| s.notebook.as_deref());

    let notice_html = notice.map(error_message).unwrap_or_default();

    let info_html = notebook.map(file_info).unwrap_or_default();

    let preview_html = match notebook {
        Some(_) => format!(
            r#"<iframe class="notebook-frame" src="/notebook?theme={}" sandbox="allow-scripts" title="Rendered notebook"></iframe>"#,
            html_escape(&urlencoding::encode(theme))
        ),
        None => r#"<div class="empty-state">
                <h2>No notebook loaded</h2>
                <p>Upload a .ipynb file to preview it here.</p>
            </div>"#
            .to_string(),
    };

    let content = format!(
        r#"<div class="layout">
        <aside class="input-panel" id="input-panel">
            {notice}
            {upload}
            {info}
            {themes}
            {actions}
        </aside>
        <main class="preview-panel">
            {preview}
        </main>
    </div>"#,
        notice = notice_html,
        upload = upload_form(),
        info = info_html,
        themes = theme_selector(theme),
        actions = action_buttons(notebook.is_some()),
        preview = preview_html,
    );

    let title = match notebook {
        Some(nb) => format!("{} - Notebook Viewer", nb.file_name),
        None => "Notebook Viewer".to_string(),
    };

    base_html(&title, &content, notebook.map(|nb| nb.file_name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoadedNotebook;
    use chrono::Utc;
    use std::sync::Arc;

    fn session(loaded: bool) -> ViewerSession {
        ViewerSession {
            notebook: loaded.then(|| {
                Arc::new(LoadedNotebook {
                    file_name: "demo.ipynb".into(),
                    size_bytes: 2048,
                    loaded_at: Utc::now(),
                    cells: vec![],
                })
            }),
            theme: "github".into(),
            expires: Utc::now(),
        }
    }

    #[test]
    fn test_empty_state_without_notebook() {
        let html = render_viewer(None, "github", None);
        assert!(html.contains("No notebook loaded"));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("/download"));
    }

    #[test]
    fn test_loaded_notebook_shows_frame() {
        let s = session(true);
        let html = render_viewer(Some(&s), "atom-one-dark", None);
        assert!(html.contains(r#"src="/notebook?theme=atom-one-dark""#));
        assert!(html.contains(r#"sandbox="allow-scripts""#));
        assert!(html.contains("demo.ipynb"));
        assert!(html.contains("2 KB"));
        assert!(html.contains(r#"href="/download""#));
    }

    #[test]
    fn test_notice_is_shown() {
        let s = session(false);
        let html = render_viewer(Some(&s), "github", Some("Failed to load notebook."));
        assert!(html.contains(r#"<div class="message error">Failed to load notebook.</div>"#));
        assert!(html.contains("No notebook loaded"));
    }

    #[test]
    fn test_theme_is_encoded_in_frame_url() {
        let s = session(true);
        let html = render_viewer(Some(&s), "base16/a b", None);
        assert!(html.contains(r#"src="/notebook?theme=base16%2Fa%20b""#));
    }
}
