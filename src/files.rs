//! File name and size helpers for uploads and downloads.

pub const NOTEBOOK_EXTENSION: &str = ".ipynb";
pub const DEFAULT_DOWNLOAD_NAME: &str = "notebook.html";

/// Uploads are only accepted with the notebook extension.
pub fn is_notebook_file_name(name: &str) -> bool {
    name.ends_with(NOTEBOOK_EXTENSION)
}

/// Name offered for the rendered HTML: the first `.ipynb` becomes `.html`.
pub fn download_file_name(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.replacen(NOTEBOOK_EXTENSION, ".html", 1),
        _ => DEFAULT_DOWNLOAD_NAME.to_string(),
    }
}

/// Strip path components and characters that would break a
/// `Content-Disposition` header.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .collect();
    if cleaned.trim().is_empty() {
        DEFAULT_DOWNLOAD_NAME.to_string()
    } else {
        cleaned
    }
}

/// `Content-Disposition` value for downloading `name`, with an ASCII
/// fallback and the UTF-8 name percent-encoded in `filename*`.
pub fn content_disposition(name: &str) -> String {
    let ascii: String = name
        .chars()
        .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { '_' })
        .filter(|c| *c != '"' && *c != '\\')
        .collect();
    if ascii == name {
        format!("attachment; filename=\"{}\"", name)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii,
            urlencoding::encode(name)
        )
    }
}

/// Human readable size in base 1024, rounded to two decimals.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut i = 0;
    while i < UNITS.len() - 1 && bytes >= 1024u64.pow(i as u32 + 1) {
        i += 1;
    }
    let value = (bytes as f64 / 1024u64.pow(i as u32) as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[i])
}
