//! PixelClip Core - Basic data structures for the PixelClip filter
//!
//! This crate provides the containers shared by the filter and the host
//! orchestration layers:
//!
//! - [`Plane`] - A single-channel `f32` image
//! - [`ImageBuffer`] - A rank-2 (grayscale) or rank-3 (H×W×C) sample buffer
//! - [`Error`] / [`Result`] - Construction and access errors

pub mod buffer;
pub mod error;
pub mod plane;

pub use buffer::ImageBuffer;
pub use error::{Error, Result};
pub use plane::Plane;
