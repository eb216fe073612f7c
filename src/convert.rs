//! Offline conversion of a notebook file to a standalone HTML file.

use crate::files::{download_file_name, is_notebook_file_name};
use crate::parser::parse_notebook_bytes;
use crate::render::notebook_to_html;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ConvertSummary {
    pub output: PathBuf,
    pub cells: usize,
    pub bytes_written: usize,
}

/// Where the HTML goes when no output path is given: next to the input,
/// with `.ipynb` replaced by `.html`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = input.file_name().and_then(|n| n.to_str());
    input.with_file_name(download_file_name(file_name))
}

pub async fn convert_file(input: &Path, output: Option<&Path>, theme: &str) -> Result<ConvertSummary> {
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if !is_notebook_file_name(file_name) {
        bail!("{} is not a .ipynb file", input.display());
    }

    let bytes = tokio::fs::read(input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;
    let cells = parse_notebook_bytes(&bytes)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    let html = notebook_to_html(&cells, theme);

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    tokio::fs::write(&output, &html)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(cells = cells.len(), theme, "wrote {}", output.display());

    Ok(ConvertSummary {
        output,
        cells: cells.len(),
        bytes_written: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/tmp/work/analysis.ipynb")),
            PathBuf::from("/tmp/work/analysis.html")
        );
    }

    #[tokio::test]
    async fn test_convert_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");

        let summary = convert_file(&fixture_path("sample.ipynb"), Some(&output), "vs2015")
            .await
            .unwrap();
        assert_eq!(summary.output, output);
        assert_eq!(summary.cells, 5);

        let html = std::fs::read_to_string(&output).unwrap();
        assert_eq!(html.len(), summary.bytes_written);
        assert!(html.contains("/styles/vs2015.min.css"));
        assert!(html.contains("<h1>Sample Notebook</h1>"));
    }

    #[tokio::test]
    async fn test_convert_writes_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("copy.ipynb");
        std::fs::copy(fixture_path("sample.ipynb"), &input).unwrap();

        let summary = convert_file(&input, None, "github").await.unwrap();
        assert_eq!(summary.output, dir.path().join("copy.html"));
        assert!(summary.output.exists());
    }

    #[tokio::test]
    async fn test_convert_rejects_wrong_extension() {
        let err = convert_file(Path::new("notes.json"), None, "github")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("is not a .ipynb file"));
    }

    #[tokio::test]
    async fn test_convert_reports_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.ipynb");
        std::fs::write(&input, "{ not json").unwrap();

        let err = convert_file(&input, None, "github").await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        assert!(err.downcast_ref::<crate::FormatError>().is_some());
        assert!(!dir.path().join("broken.html").exists());
    }
}
