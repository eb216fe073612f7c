//! Notebook to HTML conversion.
//!
//! Renders the normalized cell model into one self-contained HTML document:
//! embedded notebook stylesheet, highlight.js references for the selected
//! theme, and one `nb-cell` block per cell. Rendering is total; unknown cell
//! kinds render as nothing.
//!
//! Markdown and `text/html` outputs are inserted unescaped, as notebook rich
//! outputs are expected to carry markup. Embed the result in a sandboxed
//! frame when the notebook is untrusted.

use crate::markdown::markdown_to_html;
use crate::models::{CellOutput, NotebookCell};
use crate::templates::NOTEBOOK_STYLE;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Base URL of the highlight.js distribution referenced by rendered notebooks.
pub const HIGHLIGHT_JS_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0";

/// Language grammar tagged on code cell inputs.
pub const CODE_LANGUAGE: &str = "python";

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Outputs
// ============================================================================

pub fn render_output(output: &CellOutput) -> String {
    match output {
        CellOutput::Text { content } => preformatted("nb-output-text", content),
        CellOutput::Error {
            name,
            message,
            traceback,
        } => {
            let traceback = traceback
                .as_ref()
                .map(|lines| lines.join("\n"))
                .unwrap_or_default();
            format!(
                "<div class=\"nb-output-error\"><pre>{}: {}\n{}</pre></div>",
                html_escape(name),
                html_escape(message),
                html_escape(&traceback)
            )
        }
        CellOutput::Image {
            mime_type,
            base64_value,
        } => format!(
            r#"<div class="nb-output-image"><img src="data:{};base64,{}" alt="Output"></div>"#,
            mime_type, base64_value
        ),
        CellOutput::Markdown { value } => format!(
            r#"<div class="nb-output-markdown">{}</div>"#,
            markdown_to_html(&value.join())
        ),
        CellOutput::Data { mime_type, value } => match mime_type.as_str() {
            "text/html" => format!(r#"<div class="nb-output-html">{}</div>"#, value.join()),
            _ => preformatted("nb-output-text", &value.join()),
        },
    }
}

fn preformatted(class: &str, text: &str) -> String {
    format!(
        r#"<div class="{}"><pre>{}</pre></div>"#,
        class,
        html_escape(text)
    )
}

// ============================================================================
// Cells
// ============================================================================

pub fn render_markdown_cell(source: &str) -> String {
    format!(
        r#"
        <div class="nb-cell nb-markdown-cell">
            <div class="nb-cell-content">
                {}
            </div>
        </div>
    "#,
        markdown_to_html(source)
    )
}

pub fn render_code_cell(source: &str, outputs: &[CellOutput]) -> String {
    let outputs_html = if outputs.is_empty() {
        String::new()
    } else {
        let rendered: String = outputs.iter().map(render_output).collect();
        format!(r#"<div class="nb-outputs">{}</div>"#, rendered)
    };

    format!(
        r#"
        <div class="nb-cell nb-code-cell">
            <div class="nb-input">
                <div class="nb-input-prompt">In:</div>
                <div class="nb-input-area">
                    <pre><code class="language-{lang}">{source}</code></pre>
                </div>
            </div>
            {outputs}
        </div>
    "#,
        lang = CODE_LANGUAGE,
        source = html_escape(source),
        outputs = outputs_html,
    )
}

pub fn render_cell(cell: &NotebookCell) -> String {
    match cell {
        NotebookCell::Code { source, outputs } => render_code_cell(source, outputs),
        NotebookCell::Markdown { source } => render_markdown_cell(source),
        NotebookCell::Other { .. } => String::new(),
    }
}

// ============================================================================
// Document
// ============================================================================

/// URL of the highlight.js stylesheet for `theme`. The theme is not checked
/// against any known list.
pub fn theme_stylesheet_url(theme: &str) -> String {
    format!("{}/styles/{}.min.css", HIGHLIGHT_JS_CDN, theme)
}

/// Render a complete HTML document for the given cells.
pub fn notebook_to_html(cells: &[NotebookCell], theme: &str) -> String {
    let cells_html: String = cells.iter().map(render_cell).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Jupyter Notebook</title>

    <!-- Highlight.js for syntax highlighting -->
    <link rel="stylesheet" href="{stylesheet}">
    <script src="{cdn}/highlight.min.js"></script>
    <script src="{cdn}/languages/{lang}.min.js"></script>

    <style>{style}</style>
</head>
<body>
    <div class="nb-notebook">
        {cells}
    </div>

    <script>
        document.addEventListener('DOMContentLoaded', function() {{
            hljs.highlightAll();
        }});
    </script>
</body>
</html>"#,
        stylesheet = html_escape(&theme_stylesheet_url(theme)),
        cdn = HIGHLIGHT_JS_CDN,
        lang = CODE_LANGUAGE,
        style = NOTEBOOK_STYLE,
        cells = cells_html,
    )
}
