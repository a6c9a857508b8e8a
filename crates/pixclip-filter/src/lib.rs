//! pixclip-filter - Threshold neighborhood filtering
//!
//! This crate provides the PixelClip filter:
//!
//! - [`pixel_clip_plane`] - replace sub-threshold samples of one plane by
//!   the mean of their valid 3x3 neighbors
//! - [`pixel_clip`] - apply the plane filter to a grayscale or
//!   multi-channel [`ImageBuffer`](pixclip_core::ImageBuffer)
//!
//! Both are pure: the input is never modified and a new image is returned.

pub mod clip;
pub mod dispatch;
mod error;

pub use error::{FilterError, FilterResult};

pub use clip::{ClipStats, pixel_clip_plane, pixel_clip_plane_with_stats};
pub use dispatch::{
    ClipReport, DEFAULT_THRESHOLD, PixelClipOptions, pixel_clip, pixel_clip_with_options,
};
