//! Buffer error types

use thiserror::Error;

/// Errors that can occur when mutating the buffer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Line index outside the currently valid range
    #[error("invalid line number {line_number}: buffer has {line_count} lines")]
    InvalidIndex {
        /// The rejected index
        line_number: usize,
        /// Buffer length at the time of the call
        line_count: usize,
    },
}

/// Buffer result
pub type BufferResult<T> = Result<T, BufferError>;
