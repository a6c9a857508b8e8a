//! Channel dispatch for the threshold neighborhood filter
//!
//! Applies [`pixel_clip_plane`](crate::pixel_clip_plane) to every plane of
//! an [`ImageBuffer`]:
//!
//! - rank 2 `[H, W]`: the buffer is a single plane
//! - rank 3 `[H, W, C]`: each channel is filtered on its own, with no
//!   information shared between channels
//!
//! Any other rank is rejected with [`FilterError::UnsupportedShape`] before
//! any work is done.

use crate::clip::{ClipStats, pixel_clip_plane_with_stats};
use crate::{FilterError, FilterResult};
use pixclip_core::{ImageBuffer, Plane};
use rayon::prelude::*;

/// Default threshold, suited to images normalized to `[0, 1]`
pub const DEFAULT_THRESHOLD: f32 = 0.0001;

/// Options for [`pixel_clip_with_options`]
#[derive(Debug, Clone)]
pub struct PixelClipOptions {
    /// Samples below this value are replaced
    pub threshold: f32,
    /// Filter channels concurrently on the rayon thread pool
    pub parallel: bool,
}

impl Default for PixelClipOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            parallel: true,
        }
    }
}

impl PixelClipOptions {
    /// Options with the given threshold and default parallelism
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Per-channel replacement counters for one filtered buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipReport {
    /// One entry per channel, in channel order
    pub channels: Vec<ClipStats>,
}

impl ClipReport {
    /// Counters summed over all channels
    pub fn total(&self) -> ClipStats {
        let mut total = ClipStats::default();
        for stats in &self.channels {
            total.merge(stats);
        }
        total
    }
}

/// Filter every plane of `buffer` with the given threshold.
///
/// # Arguments
///
/// * `buffer` - Grayscale `[H, W]` or interleaved `[H, W, C]` buffer
/// * `threshold` - Samples below this value are replaced
///
/// # Returns
///
/// A new buffer of the same shape; `buffer` is not modified.
///
/// # Errors
///
/// Returns `FilterError::UnsupportedShape` if the buffer rank is neither 2
/// nor 3.
///
/// # Examples
///
/// ```
/// use pixclip_core::ImageBuffer;
/// use pixclip_filter::pixel_clip;
///
/// let buf = ImageBuffer::new(vec![2, 2], vec![0.0, 4.0, 4.0, 4.0]).unwrap();
/// let out = pixel_clip(&buf, 1.0).unwrap();
/// assert_eq!(out.data(), &[4.0, 4.0, 4.0, 4.0]);
/// ```
pub fn pixel_clip(buffer: &ImageBuffer, threshold: f32) -> FilterResult<ImageBuffer> {
    let options = PixelClipOptions::with_threshold(threshold);
    pixel_clip_with_options(buffer, &options).map(|(out, _)| out)
}

/// Filter every plane of `buffer`, returning the result and per-channel
/// counters.
///
/// # Arguments
///
/// * `buffer` - Grayscale `[H, W]` or interleaved `[H, W, C]` buffer
/// * `options` - Threshold and channel parallelism
///
/// # Returns
///
/// The filtered buffer and one [`ClipStats`] per channel, in channel
/// order. The output does not depend on `options.parallel`.
///
/// # Errors
///
/// Returns `FilterError::UnsupportedShape` if the buffer rank is neither 2
/// nor 3.
pub fn pixel_clip_with_options(
    buffer: &ImageBuffer,
    options: &PixelClipOptions,
) -> FilterResult<(ImageBuffer, ClipReport)> {
    match *buffer.shape() {
        [_, _] => clip_gray(buffer, options.threshold),
        [_, _, channels] => clip_channels(buffer, channels, options),
        _ => Err(FilterError::UnsupportedShape {
            shape: buffer.shape().to_vec(),
        }),
    }
}

fn clip_gray(buffer: &ImageBuffer, threshold: f32) -> FilterResult<(ImageBuffer, ClipReport)> {
    let plane = buffer.to_plane()?;
    let (out, stats) = pixel_clip_plane_with_stats(&plane, threshold);
    log::debug!(
        "pixel clip: gray {}x{}, replaced={}, fallback={}",
        plane.width(),
        plane.height(),
        stats.replaced,
        stats.fallback
    );

    let report = ClipReport {
        channels: vec![stats],
    };
    Ok((ImageBuffer::from_plane(&out), report))
}

fn clip_channels(
    buffer: &ImageBuffer,
    channels: usize,
    options: &PixelClipOptions,
) -> FilterResult<(ImageBuffer, ClipReport)> {
    let threshold = options.threshold;
    let clip_one = |c: usize| -> FilterResult<(Plane, ClipStats)> {
        let plane = buffer.extract_channel(c)?;
        Ok(pixel_clip_plane_with_stats(&plane, threshold))
    };

    let results: Vec<(Plane, ClipStats)> = if options.parallel {
        (0..channels)
            .into_par_iter()
            .map(clip_one)
            .collect::<FilterResult<_>>()?
    } else {
        (0..channels).map(clip_one).collect::<FilterResult<_>>()?
    };

    let mut out = buffer.clone();
    let mut report = ClipReport::default();
    for (c, (plane, stats)) in results.into_iter().enumerate() {
        log::debug!(
            "pixel clip: channel {} of {}, replaced={}, fallback={}",
            c,
            channels,
            stats.replaced,
            stats.fallback
        );
        out.set_channel(c, &plane)?;
        report.channels.push(stats);
    }

    Ok((out, report))
}
