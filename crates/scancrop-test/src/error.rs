//! Error types for the test framework

use thiserror::Error;

/// A single failed comparison recorded by [`RegParams`](crate::RegParams)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Boolean comparison failed
    #[error("boolean comparison failed at index {index}: expected {expected}")]
    BoolMismatch { index: usize, expected: bool },

    /// Rectangle set comparison failed
    #[error("rect comparison failed at index {index}: expected {expected}, got {actual}")]
    RectMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
