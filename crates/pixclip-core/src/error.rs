//! Error types for pixclip-core
//!
//! Provides a unified error type for construction and access of planes
//! and image buffers. Each variant carries enough context for diagnostics
//! without exposing the storage layout.

use thiserror::Error;

/// PixelClip core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid plane dimensions
    #[error("invalid plane dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A buffer shape with a zero-length axis
    #[error("invalid buffer shape {0:?}: every axis must be non-empty")]
    InvalidShape(Vec<usize>),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Sample count does not match the declared shape
    #[error("data length {actual} doesn't match shape {shape:?} ({expected} samples)")]
    DataLength {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    /// Channel index outside the buffer's channel axis
    #[error("channel {channel} out of range for {channels} channel(s)")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// Operation requires a rank-3 buffer (or a rank-2 one)
    #[error("expected a rank-{expected} buffer, got shape {shape:?}")]
    RankMismatch { expected: usize, shape: Vec<usize> },

    /// Plane dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for PixelClip core operations
pub type Result<T> = std::result::Result<T, Error>;
