//! Clipboard and delimited I/O error types

use thiserror::Error;

/// Result type for clipboard operations
pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

/// Errors that can occur while encoding, decoding, reading or writing
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Encoded text was not valid UTF-8
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] gridkit_core::Error),
}

impl<W> From<csv::IntoInnerError<W>> for ClipboardError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        ClipboardError::Io(err.into_error())
    }
}
