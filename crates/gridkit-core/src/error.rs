//! Error types for gridkit-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridkit-core
///
/// Every fallible table operation leaves the table unchanged when it
/// returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (count: {1})")]
    RowOutOfRange(usize, usize),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (count: {1})")]
    ColumnOutOfRange(usize, usize),

    /// Column not found by name
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Column name already in use
    #[error("Column name already exists: {0}")]
    DuplicateColumn(String),

    /// Argument rejected before touching the table
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a new invalid-argument error with a message
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// True for the out-of-range family (bad row or column index)
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::RowOutOfRange(..) | Error::ColumnOutOfRange(..))
    }

    /// True when a named column was missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ColumnNotFound(_))
    }
}
