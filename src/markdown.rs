//! Minimal markdown rendering for notebook cells and `text/markdown` outputs.
//!
//! This is a sequence of regex replacements, each applied to the result of
//! the previous one. It is not CommonMark: raw HTML passes through untouched,
//! emphasis inside links is not handled, and only the first run of list items
//! is wrapped in a `<ul>`.

use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Rules
// ============================================================================

/// Ordered replacement rules. Headings run most-specific first and bold runs
/// before italic so `**` is not eaten as two single stars.
static INLINE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // Headings
        (r"(?mR)^### (.*)$", "<h3>${1}</h3>"),
        (r"(?mR)^## (.*)$", "<h2>${1}</h2>"),
        (r"(?mR)^# (.*)$", "<h1>${1}</h1>"),
        // Bold
        (r"(?R)\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        (r"(?R)__(.+?)__", "<strong>${1}</strong>"),
        // Italic
        (r"(?R)\*(.+?)\*", "<em>${1}</em>"),
        (r"(?R)_(.+?)_", "<em>${1}</em>"),
        // Inline code
        (r"(?R)`(.+?)`", "<code>${1}</code>"),
        // Links
        (
            r"\[([^\]]+)\]\(([^)]+)\)",
            r#"<a href="${2}" target="_blank">${1}</a>"#,
        ),
        // Line breaks
        (r"\n\n", "</p><p>"),
        (r"\n", "<br>"),
        // List items
        (r"(?mR)^\* (.+)$", "<li>${1}</li>"),
        (r"(?mR)^- (.+)$", "<li>${1}</li>"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| match Regex::new(pattern) {
        Ok(re) => Some((re, replacement)),
        Err(e) => {
            tracing::error!(pattern, error = %e, "invalid markdown rule");
            None
        }
    })
    .collect()
});

/// The first run of list items, greedy across everything in between.
static LIST_RUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)(<li>.*</li>)").ok());

// ============================================================================
// Rendering
// ============================================================================

/// Render a markdown fragment to HTML. Empty input renders as nothing.
pub fn markdown_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut html = text.to_string();
    for (re, replacement) in INLINE_RULES.iter() {
        html = re.replace_all(&html, *replacement).into_owned();
    }

    if let Some(re) = LIST_RUN.as_ref() {
        html = re.replacen(&html, 1, "<ul>${1}</ul>").into_owned();
    }

    format!("<p>{}</p>", html)
}

// ============================================================================
// Tests
// ============================================================================
