//! Notebook parsing.
//!
//! Turns raw `.ipynb` text into the normalized [`NotebookCell`] model. The
//! parse is deliberately lenient: only malformed input fails, missing or
//! oddly-typed fields degrade to empty strings and empty sequences.

use crate::error::Result;
use crate::models::{CellOutput, MimeValue, NotebookCell};
use serde_json::{Map, Value};

// ============================================================================
// Join Rule
// ============================================================================

/// Normalize a multi-fragment text field into one string.
///
/// Arrays are concatenated with no separator. Missing, `null` and `false`
/// become the empty string; other scalars are coerced to text.
pub fn join_source(source: Option<&Value>) -> String {
    match source {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(parts)) => parts.iter().map(fragment_text).collect(),
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn fragment_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

// ============================================================================
// Outputs
// ============================================================================

/// Expand a cell's raw outputs, preserving raw order. Unknown output types
/// are dropped.
pub fn parse_outputs(outputs: &[Value]) -> Vec<CellOutput> {
    let empty = Map::new();
    let mut parsed = Vec::with_capacity(outputs.len());

    for out in outputs {
        let obj = out.as_object().unwrap_or(&empty);
        match obj.get("output_type").and_then(Value::as_str) {
            Some("stream") => parsed.push(CellOutput::Text {
                content: join_source(obj.get("text")),
            }),
            Some("execute_result") | Some("display_data") => {
                let data = obj.get("data").and_then(Value::as_object).unwrap_or(&empty);
                parsed.extend(parse_data(data));
            }
            Some("error") => parsed.push(CellOutput::Error {
                name: string_field(obj, "ename"),
                message: string_field(obj, "evalue"),
                traceback: obj
                    .get("traceback")
                    .and_then(Value::as_array)
                    .map(|lines| lines.iter().map(fragment_text).collect()),
            }),
            other => {
                tracing::trace!(output_type = ?other, "skipping unrecognized output");
            }
        }
    }

    parsed
}

/// Expand a MIME bundle into one output per entry, in document order.
pub fn parse_data(data: &Map<String, Value>) -> Vec<CellOutput> {
    data.iter()
        .map(|(mime_type, value)| {
            if mime_type.starts_with("image/") {
                CellOutput::Image {
                    mime_type: mime_type.clone(),
                    base64_value: join_source(Some(value)),
                }
            } else if mime_type == "text/markdown" {
                CellOutput::Markdown {
                    value: mime_value(value),
                }
            } else {
                CellOutput::Data {
                    mime_type: mime_type.clone(),
                    value: mime_value(value),
                }
            }
        })
        .collect()
}

fn mime_value(value: &Value) -> MimeValue {
    match value {
        Value::String(s) => MimeValue::Text(s.clone()),
        Value::Array(parts) if parts.iter().all(Value::is_string) => {
            MimeValue::Fragments(parts.iter().map(fragment_text).collect())
        }
        other => MimeValue::Structured(other.clone()),
    }
}

// ============================================================================
// Notebook
// ============================================================================

/// Parse notebook text into normalized cells.
///
/// Fails only when the text is not valid JSON. A document without a `cells`
/// array parses to an empty notebook.
pub fn parse_notebook(text: &str) -> Result<Vec<NotebookCell>> {
    let doc: Value = serde_json::from_str(text)?;
    let empty = Map::new();

    let cells: Vec<NotebookCell> = doc
        .get("cells")
        .and_then(Value::as_array)
        .map(|cells| cells.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|cell| {
            let obj = cell.as_object().unwrap_or(&empty);
            let source = join_source(obj.get("source"));
            match obj.get("cell_type").and_then(Value::as_str) {
                Some("code") => {
                    let outputs = obj
                        .get("outputs")
                        .and_then(Value::as_array)
                        .map(|o| parse_outputs(o))
                        .unwrap_or_default();
                    NotebookCell::Code { source, outputs }
                }
                Some("markdown") => NotebookCell::Markdown { source },
                other => NotebookCell::Other {
                    cell_type: other.unwrap_or_default().to_string(),
                    source,
                },
            }
        })
        .collect();

    tracing::debug!(
        cells = cells.len(),
        outputs = cells
            .iter()
            .filter_map(NotebookCell::outputs)
            .map(<[CellOutput]>::len)
            .sum::<usize>(),
        "parsed notebook"
    );

    Ok(cells)
}

/// Parse raw upload bytes. Invalid UTF-8 is a format error too.
pub fn parse_notebook_bytes(bytes: &[u8]) -> Result<Vec<NotebookCell>> {
    let text = std::str::from_utf8(bytes)?;
    parse_notebook(text)
}

// ============================================================================
// Tests
// ============================================================================
