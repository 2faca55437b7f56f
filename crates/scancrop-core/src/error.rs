//! Error types for scancrop-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Scancrop core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Rectangle corners violate `x1 >= x0` / `y1 >= y0`
    #[error("invalid rectangle: ({x0}, {y0})-({x1}, {y1})")]
    InvalidRectangle { x0: i32, y0: i32, x1: i32, y1: i32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for scancrop-core operations
pub type Result<T> = std::result::Result<T, Error>;
