//! Error types for scancrop-region

use thiserror::Error;

/// Errors that can occur during clustering and candidate selection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] scancrop_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl RegionError {
    /// Check whether this error reports a rectangle with inverted corners
    pub fn is_invalid_rectangle(&self) -> bool {
        matches!(
            self,
            RegionError::Core(scancrop_core::Error::InvalidRectangle { .. })
        )
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
