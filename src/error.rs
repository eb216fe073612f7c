//! Error types for notebook parsing.

use thiserror::Error;

/// The input is not well-formed structured data.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Upload bytes are not valid UTF-8
    #[error("notebook is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Malformed JSON syntax
    #[error("notebook is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl FormatError {
    /// Line and column of a JSON syntax error, when known.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            FormatError::InvalidJson(e) => Some((e.line(), e.column())),
            FormatError::InvalidUtf8(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
