//! Error types for pixclip-host

use pixclip_filter::FilterError;
use thiserror::Error;

/// Errors raised while driving the filter through a host application
#[derive(Debug, Error)]
pub enum HostError {
    /// The host could not be reached
    #[error("host connection failed: {0}")]
    Connection(String),

    /// Locking, reading, or writing the host image failed
    #[error("host I/O failed: {0}")]
    Io(String),

    /// The host has no current image
    #[error("no image loaded in the host")]
    NoImageLoaded,

    /// The host image could not be filtered
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),
}

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;
