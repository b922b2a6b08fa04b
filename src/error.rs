//! Typed failures for the array and the table.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// An element operation handle was not supplied to the builder.
    #[error("missing element operation handle: {0}")]
    MissingHandle(&'static str),

    #[error("index {index} out of bounds for array of size {size}")]
    OutOfBounds { index: usize, size: usize },

    /// The duplicate handle declined to produce a copy.
    #[error("element duplication failed")]
    DuplicateFailed,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("missing pair operation handle: {0}")]
    MissingHandle(&'static str),

    /// The pair duplicate handle declined to produce a copy; the table is unchanged.
    #[error("pair duplication failed")]
    DuplicateFailed,

    #[error("key not found")]
    KeyNotFound,
}

impl From<ArrayError> for TableError {
    fn from(e: ArrayError) -> Self {
        match e {
            ArrayError::MissingHandle(name) => TableError::MissingHandle(name),
            ArrayError::DuplicateFailed => TableError::DuplicateFailed,
            // Positions come from `locate`, so a stale index means the key is gone.
            ArrayError::OutOfBounds { .. } => TableError::KeyNotFound,
        }
    }
}
