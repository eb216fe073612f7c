//! CSS styles for the notebook viewer.
//!
//! `STYLE` styles the viewer application pages. `NOTEBOOK_STYLE` is embedded
//! into every rendered notebook document; its class names are the stable
//! contract other tooling relies on.

// ============================================================================
// Application Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;
    --green: #859900;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}

.nav-bar .brand { font-weight: 600; color: var(--base01); }
.nav-bar .spacer { flex: 1; }

.layout {
    display: flex;
    gap: 1rem;
    padding: 1rem;
    height: calc(100vh - 48px);
}

.input-panel {
    width: 320px;
    flex-shrink: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.preview-panel {
    flex: 1;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: #fff;
    overflow: hidden;
    display: flex;
}

.upload-area {
    border: 2px dashed var(--muted);
    border-radius: 6px;
    padding: 1.5rem 1rem;
    text-align: center;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.upload-area p { font-size: 0.85rem; color: var(--muted); }

.file-info {
    border: 1px solid var(--border);
    border-radius: 4px;
    padding: 0.75rem;
    background: var(--accent);
    font-size: 0.85rem;
}

.file-info .file-name { font-weight: 600; color: var(--base01); word-break: break-all; }
.file-info .file-meta { color: var(--muted); }

.theme-form, .actions { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
.theme-form label { font-size: 0.85rem; }

select, input[type="file"] { font-family: inherit; font-size: 0.85rem; }

.btn {
    padding: 0.4rem 0.8rem;
    border: 1px solid var(--muted);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.85rem;
    font-family: inherit;
}
.btn:hover { background: var(--accent); text-decoration: none; }
.btn.primary { background: var(--link); border-color: var(--link); color: white; }
.btn.primary:hover { background: var(--link-hover); }

.message {
    padding: 0.75rem 1rem;
    border-radius: 4px;
    font-size: 0.85rem;
}
.message.error { background: #fbe3e0; color: var(--red); border: 1px solid #f2b8b2; }

.empty-state {
    margin: auto;
    text-align: center;
    color: var(--muted);
}
.empty-state h2 { font-size: 1.1rem; font-weight: 600; margin-bottom: 0.5rem; }

.notebook-frame { flex: 1; border: none; width: 100%; height: 100%; }

@media (max-width: 768px) {
    .layout { flex-direction: column; height: auto; }
    .input-panel { width: 100%; }
    .preview-panel { min-height: 70vh; }
}
"#;

// ============================================================================
// Notebook Document Styles
// ============================================================================

pub const NOTEBOOK_STYLE: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    color: #000;
    background-color: #fff;
    padding: 20px;
}

.nb-notebook { max-width: 100%; margin: 0 auto; }

.nb-cell {
    border-top: 1px solid transparent;
    border-bottom: 1px solid transparent;
}
.nb-cell:hover { background-color: #f9f9f9; }

/* Markdown cells */
.nb-markdown-cell { padding: 10px 20px; }
.nb-markdown-cell h1 { font-size: 2em; margin: 0.67em 0; font-weight: 600; }
.nb-markdown-cell h2 { font-size: 1.5em; margin: 0.75em 0; font-weight: 600; }
.nb-markdown-cell h3 { font-size: 1.17em; margin: 0.83em 0; font-weight: 600; }
.nb-markdown-cell p { margin: 1em 0; }
.nb-markdown-cell code {
    background-color: #f5f5f5;
    padding: 2px 6px;
    border-radius: 3px;
    font-family: 'Consolas', 'Monaco', 'Courier New', monospace;
    font-size: 0.9em;
}
.nb-markdown-cell a { color: #0066cc; text-decoration: none; }
.nb-markdown-cell a:hover { text-decoration: underline; }
.nb-markdown-cell ul { margin: 1em 0; padding-left: 2em; }
.nb-markdown-cell li { margin: 0.5em 0; }

/* Code cells */
.nb-code-cell { display: flex; flex-direction: column; }

.nb-input {
    display: flex;
    background-color: #f7f7f7;
    border: 1px solid #e0e0e0;
    border-radius: 4px;
    margin: 10px 20px;
}

.nb-input-prompt {
    padding: 10px 15px;
    color: #303f9f;
    font-family: 'Consolas', 'Monaco', 'Courier New', monospace;
    font-weight: 600;
    min-width: 60px;
    text-align: right;
    border-right: 1px solid #e0e0e0;
    background-color: #fafafa;
    flex-shrink: 0;
}

.nb-input-area { flex: 1; overflow-x: auto; }
.nb-input-area pre { margin: 0; padding: 10px 15px; overflow-x: auto; }
.nb-input-area code {
    font-family: 'Consolas', 'Monaco', 'Courier New', monospace;
    font-size: 13px;
    line-height: 1.5;
}

/* Outputs */
.nb-outputs { margin: 0 20px 10px 20px; }

.nb-output-text,
.nb-output-error,
.nb-output-html,
.nb-output-markdown {
    background-color: #fff;
    border: 1px solid #e0e0e0;
    border-radius: 4px;
    margin-top: 5px;
}

.nb-output-text pre,
.nb-output-error pre {
    padding: 10px 15px;
    margin: 0;
    overflow-x: auto;
    font-family: 'Consolas', 'Monaco', 'Courier New', monospace;
    font-size: 13px;
    line-height: 1.5;
    white-space: pre-wrap;
    word-wrap: break-word;
}

.nb-output-error { background-color: #fff5f5; border-color: #ffcdd2; }
.nb-output-error pre { color: #c62828; }

.nb-output-image {
    padding: 10px;
    text-align: center;
    background-color: #fff;
    border: 1px solid #e0e0e0;
    border-radius: 4px;
    margin-top: 5px;
}
.nb-output-image img { max-width: 100%; height: auto; }

.nb-output-html,
.nb-output-markdown { padding: 10px 15px; }

/* Responsive */
@media (max-width: 768px) {
    body { padding: 10px; }
    .nb-input { margin: 10px 5px; }
    .nb-outputs { margin: 0 5px 10px 5px; }
    .nb-markdown-cell { padding: 10px; }
    .nb-input-prompt { min-width: 40px; padding: 10px 8px; font-size: 12px; }
    .nb-input-area pre,
    .nb-output-text pre,
    .nb-output-error pre { font-size: 12px; }
}
"#;
