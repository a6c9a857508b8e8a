//! PixelClip - threshold neighborhood filtering for raster images
//!
//! PixelClip suppresses dark outliers: every sample below a threshold is
//! replaced by the mean of the samples in its 3x3 neighborhood that reach
//! the threshold, or by the threshold itself when none do. Grayscale
//! `[H, W]` and interleaved `[H, W, C]` buffers are supported, with each
//! channel filtered independently.
//!
//! # Example
//!
//! ```
//! use pixclip::{ImageBuffer, pixel_clip};
//!
//! let image = ImageBuffer::new(vec![3, 3], vec![
//!     0.0, 0.0, 1.0,
//!     0.0, 1.0, 1.0,
//!     1.0, 1.0, 1.0,
//! ]).unwrap();
//! let clipped = pixel_clip(&image, 0.5).unwrap();
//! assert_eq!(clipped.data(), &[1.0; 9]);
//! ```
//!
//! Running against a host application goes through the [`host`] module:
//!
//! ```
//! use pixclip::host::{DefaultThreshold, MemoryHost, PixelClipConfig, RunOutcome, run_pixel_clip};
//!
//! let mut host = MemoryHost::new();
//! let outcome = run_pixel_clip(&mut host, &mut DefaultThreshold, &PixelClipConfig::default());
//! assert_eq!(outcome.unwrap(), RunOutcome::NoImageLoaded);
//! ```

// Re-export core types
pub use pixclip_core::*;

// Re-export the remaining crates as modules
pub use pixclip_filter as filter;
pub use pixclip_host as host;

pub use pixclip_filter::{FilterError, PixelClipOptions, pixel_clip, pixel_clip_plane};
