//! Shared HTML components for the viewer application.
//!
//! Contains the navigation bar, the input panel pieces (upload form, file
//! info, theme selector, actions) and the base HTML template.

use crate::config::THEMES;
use crate::files::format_file_size;
use crate::models::LoadedNotebook;
use crate::render::html_escape;

use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(file_name: Option<&str>) -> String {
    let current = match file_name {
        Some(name) => format!(r#"<span class="current-file">{}</span>"#, html_escape(name)),
        None => String::new(),
    };

    format!(
        r#"<nav class="nav-bar">
            <a href="/" class="brand">Notebook Viewer</a>
            <span class="spacer"></span>
            {}
        </nav>"#,
        current
    )
}

// ============================================================================
// Input Panel
// ============================================================================

pub fn upload_form() -> &'static str {
    r#"<form class="upload-area" action="/upload" method="post" enctype="multipart/form-data">
            <p>Choose a Jupyter notebook (.ipynb) to render</p>
            <input type="file" name="file" accept=".ipynb" required>
            <button type="submit" class="btn primary">Load Notebook</button>
        </form>"#
}

pub fn file_info(notebook: &LoadedNotebook) -> String {
    format!(
        r#"<div class="file-info">
            <div class="file-name">{name}</div>
            <div class="file-meta">{size} &middot; {cells} cells ({code} code, {markdown} markdown)</div>
            <div class="file-meta">Loaded {loaded}</div>
        </div>"#,
        name = html_escape(&notebook.file_name),
        size = format_file_size(notebook.size_bytes),
        cells = notebook.cells.len(),
        code = notebook.code_cell_count(),
        markdown = notebook.markdown_cell_count(),
        loaded = notebook.loaded_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

/// Theme dropdown. A theme not in the list is kept as an extra option so
/// the current selection always shows.
pub fn theme_selector(current: &str) -> String {
    let mut options = String::new();
    if !THEMES.iter().any(|(id, _)| *id == current) {
        options.push_str(&format!(
            r#"<option value="{0}" selected>{0}</option>"#,
            html_escape(current)
        ));
    }
    for (id, label) in THEMES {
        let selected = if *id == current { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            id, selected, label
        ));
    }

    format!(
        r#"<form class="theme-form" action="/theme" method="post">
            <label for="theme-selector">Theme</label>
            <select id="theme-selector" name="theme" onchange="this.form.submit()">{}</select>
            <noscript><button type="submit" class="btn">Apply</button></noscript>
        </form>"#,
        options
    )
}

pub fn action_buttons(loaded: bool) -> String {
    if !loaded {
        return String::new();
    }
    r#"<div class="actions">
            <a class="btn primary" href="/download">Download HTML</a>
            <form action="/clear" method="post">
                <button type="submit" class="btn">Clear</button>
            </form>
        </div>"#
        .to_string()
}

pub fn error_message(message: &str) -> String {
    format!(r#"<div class="message error">{}</div>"#, html_escape(message))
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str, file_name: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {nav}
    {content}
</body>
</html>"#,
        title = html_escape(title),
        nav = nav_bar(file_name),
    )
}
