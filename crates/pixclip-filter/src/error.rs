//! Error types for pixclip-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixclip_core::Error),

    /// Buffer is neither a single plane nor a stack of planes
    #[error("unsupported buffer shape {shape:?}: expected rank 2 (H, W) or rank 3 (H, W, C)")]
    UnsupportedShape {
        /// Shape of the rejected buffer
        shape: Vec<usize>,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
