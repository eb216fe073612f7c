//! Data models for the notebook viewer.
//!
//! This module contains the normalized notebook model produced by the parser
//! and consumed by the renderer, plus the records the web application keeps
//! for a loaded notebook.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Cells
// ============================================================================

/// One normalized notebook cell. `source` is always a single joined string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotebookCell {
    Code {
        source: String,
        outputs: Vec<CellOutput>,
    },
    Markdown {
        source: String,
    },
    /// Any other raw `cell_type` (e.g. `raw`). Renders as nothing.
    Other {
        cell_type: String,
        source: String,
    },
}

impl NotebookCell {
    /// The cell kind as it appears in the raw document.
    pub fn kind(&self) -> &str {
        match self {
            NotebookCell::Code { .. } => "code",
            NotebookCell::Markdown { .. } => "markdown",
            NotebookCell::Other { cell_type, .. } => cell_type,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            NotebookCell::Code { source, .. }
            | NotebookCell::Markdown { source }
            | NotebookCell::Other { source, .. } => source,
        }
    }

    /// Outputs of a code cell; `None` for every other kind.
    pub fn outputs(&self) -> Option<&[CellOutput]> {
        match self {
            NotebookCell::Code { outputs, .. } => Some(outputs),
            _ => None,
        }
    }
}

// ============================================================================
// Outputs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellOutput {
    /// A `stream` output (stdout/stderr), already joined.
    Text { content: String },
    /// An `error` output. The traceback is joined only when rendered.
    Error {
        name: String,
        message: String,
        traceback: Option<Vec<String>>,
    },
    /// Any `image/*` payload, base64 encoded.
    Image {
        mime_type: String,
        base64_value: String,
    },
    /// A `text/markdown` payload.
    Markdown { value: MimeValue },
    /// Every other MIME type, notably `text/plain` and `text/html`.
    Data { mime_type: String, value: MimeValue },
}

impl CellOutput {
    /// Tag used in the JSON form of the model.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellOutput::Text { .. } => "text",
            CellOutput::Error { .. } => "error",
            CellOutput::Image { .. } => "image",
            CellOutput::Markdown { .. } => "markdown",
            CellOutput::Data { .. } => "data",
        }
    }
}

/// A MIME bundle payload as found in the raw document: a string, a list of
/// string fragments, or (for JSON-like MIME types) arbitrary structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MimeValue {
    Text(String),
    Fragments(Vec<String>),
    Structured(serde_json::Value),
}

impl MimeValue {
    /// Apply the join rule: fragments are concatenated with no separator,
    /// structured values are coerced to their JSON text.
    pub fn join(&self) -> String {
        match self {
            MimeValue::Text(s) => s.clone(),
            MimeValue::Fragments(parts) => parts.concat(),
            MimeValue::Structured(serde_json::Value::Null) => String::new(),
            MimeValue::Structured(value) => value.to_string(),
        }
    }
}

impl From<&str> for MimeValue {
    fn from(s: &str) -> Self {
        MimeValue::Text(s.to_string())
    }
}

// ============================================================================
// Loaded Notebook (web application state)
// ============================================================================

/// A parsed upload, retained so theme changes never re-parse.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedNotebook {
    pub file_name: String,
    pub size_bytes: u64,
    pub loaded_at: DateTime<Utc>,
    pub cells: Vec<NotebookCell>,
}

impl LoadedNotebook {
    pub fn code_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, NotebookCell::Code { .. }))
            .count()
    }

    pub fn markdown_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, NotebookCell::Markdown { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_value_join() {
        assert_eq!(MimeValue::from("abc").join(), "abc");
        assert_eq!(
            MimeValue::Fragments(vec!["a\n".into(), "b".into()]).join(),
            "a\nb"
        );
        assert_eq!(MimeValue::Structured(serde_json::Value::Null).join(), "");
        assert_eq!(
            MimeValue::Structured(serde_json::json!({"a": 1})).join(),
            r#"{"a":1}"#
        );
    }

    #[test]
    fn test_mime_value_untagged_deserialize() {
        let v: MimeValue = serde_json::from_str(r#""x""#).unwrap();
        assert_eq!(v, MimeValue::Text("x".into()));
        let v: MimeValue = serde_json::from_str(r#"["x", "y"]"#).unwrap();
        assert_eq!(v, MimeValue::Fragments(vec!["x".into(), "y".into()]));
        let v: MimeValue = serde_json::from_str(r#"{"k": [1, 2]}"#).unwrap();
        assert!(matches!(v, MimeValue::Structured(_)));
    }

    #[test]
    fn test_cell_accessors() {
        let cell = NotebookCell::Other {
            cell_type: "raw".into(),
            source: "text".into(),
        };
        assert_eq!(cell.kind(), "raw");
        assert_eq!(cell.source(), "text");
        assert!(cell.outputs().is_none());

        let cell = NotebookCell::Code {
            source: "1 + 1".into(),
            outputs: vec![],
        };
        assert_eq!(cell.kind(), "code");
        assert_eq!(cell.outputs().map(|o| o.len()), Some(0));
    }

    #[test]
    fn test_output_serializes_with_type_tag() {
        let out = CellOutput::Text {
            content: "hi".into(),
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "hi");
        assert_eq!(out.type_name(), "text");
    }
}
