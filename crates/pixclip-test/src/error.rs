//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression test inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a plane or buffer
    #[error("failed to build test image: {0}")]
    Core(#[from] pixclip_core::Error),

    /// Empty or inverted sample range
    #[error("invalid sample range [{low}, {high})")]
    InvalidRange { low: f32, high: f32 },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
