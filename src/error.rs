//! Custom error types for the nanospec crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every error is detected eagerly, before any output record is constructed.
/// There is no recovery path that substitutes default values for corrupt
/// fields and no internal retry.
#[derive(Debug, Error)]
pub enum ScanError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer is too short to hold the common configuration head, so it
    /// cannot be classified.
    #[error("malformed header: need {expected} bytes to classify, got {actual}")]
    MalformedHeader { expected: usize, actual: usize },

    /// The buffer is too short for the fixed-size record it declares.
    #[error("truncated buffer: expected {expected} bytes, got {actual}")]
    TruncatedBuffer { expected: usize, actual: usize },

    /// The declared slew section count is inconsistent with the buffer length.
    #[error(
        "section count mismatch: {num_sections} sections require {expected} bytes, got {actual}"
    )]
    SectionCountMismatch {
        num_sections: usize,
        expected: usize,
        actual: usize,
    },

    /// The external spectral library reported a non-success status.
    #[error("spectral interpretation failed with status {status}")]
    InterpretationFailed { status: i32 },
}

/// A convenience `Result` type alias using the crate's `ScanError` type.
pub type Result<T> = std::result::Result<T, ScanError>;
