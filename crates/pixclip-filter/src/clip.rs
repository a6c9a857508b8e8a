//! Threshold neighborhood filter
//!
//! Replaces every sample below a threshold with the mean of the samples in
//! its 3x3 window that are at or above the threshold. Samples at or above
//! the threshold pass through unchanged.
//!
//! Window rules:
//! - The window holds 9 samples, the center included. A sub-threshold
//!   center never counts towards its own mean, but it is still one of the
//!   9 positions examined.
//! - Offsets outside the plane replicate the nearest edge sample, so an
//!   edge pixel may see the same valid sample more than once.
//! - A window with no valid sample yields the threshold itself.
//! - The filter is single-pass: means are computed from the input plane
//!   only, never from values replaced earlier in the same pass.

use pixclip_core::Plane;

/// Counters collected while filtering one plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipStats {
    /// Sub-threshold samples that were rewritten
    pub replaced: usize,
    /// Rewritten samples whose window held no valid sample
    pub fallback: usize,
}

impl ClipStats {
    /// Add another plane's counters to this one
    pub fn merge(&mut self, other: &ClipStats) {
        self.replaced += other.replaced;
        self.fallback += other.fallback;
    }
}

/// Replacement value for a sub-threshold sample with the given window.
///
/// Returns `None` when no window sample is `>= threshold`.
#[inline]
fn valid_mean(window: &[f32; 9], threshold: f32) -> Option<f32> {
    let mut sum = 0.0f64;
    let mut count = 0u32;
    for &v in window {
        if v >= threshold {
            sum += v as f64;
            count += 1;
        }
    }
    (count > 0).then(|| (sum / count as f64) as f32)
}

/// Filter a plane, replacing sub-threshold samples by their valid
/// neighbor mean.
///
/// # Arguments
///
/// * `plane` - Input plane, left unmodified
/// * `threshold` - Samples below this value are replaced
///
/// # Returns
///
/// A new plane of the same size. This function never fails: a NaN
/// threshold compares false against every sample, so nothing is replaced.
///
/// # Examples
///
/// ```
/// use pixclip_core::Plane;
/// use pixclip_filter::pixel_clip_plane;
///
/// let plane = Plane::from_rows(&[[1.0, 2.0, 3.0], [4.0, 0.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
/// let out = pixel_clip_plane(&plane, 0.5);
/// assert_eq!(out.get_pixel(1, 1).unwrap(), 5.0);
/// ```
pub fn pixel_clip_plane(plane: &Plane, threshold: f32) -> Plane {
    pixel_clip_plane_with_stats(plane, threshold).0
}

/// Same as [`pixel_clip_plane`], also returning replacement counters.
pub fn pixel_clip_plane_with_stats(plane: &Plane, threshold: f32) -> (Plane, ClipStats) {
    let (w, h) = plane.dimensions();
    let mut out = plane.clone();
    let mut stats = ClipStats::default();

    for y in 0..h {
        for x in 0..w {
            // NaN samples are never below the threshold and pass through
            if !(plane.get_pixel_unchecked(x, y) < threshold) {
                continue;
            }

            let window = plane.neighborhood_3x3(x, y);
            let value = match valid_mean(&window, threshold) {
                Some(mean) => mean,
                None => {
                    stats.fallback += 1;
                    threshold
                }
            };
            out.set_pixel_unchecked(x, y, value);
            stats.replaced += 1;
        }
    }

    (out, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_valid_mean() {
        let window = [0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 6.0];
        assert_eq!(valid_mean(&window, 1.0), Some(3.0));
        assert_eq!(valid_mean(&window, 7.0), None);
        assert_eq!(valid_mean(&[f32::NAN; 9], 0.0), None);
    }

    #[test]
    fn test_center_pixel_interior_mean() {
        let plane =
            Plane::from_rows(&[[1.0, 2.0, 3.0], [4.0, 0.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        let (out, stats) = pixel_clip_plane_with_stats(&plane, 0.5);

        // 1+2+3+4+6+7+8+9 = 40 over 8 valid samples
        assert_eq!(out.get_pixel(1, 1).unwrap(), 5.0);
        assert_eq!(stats, ClipStats { replaced: 1, fallback: 0 });
        for (i, (&a, &b)) in out.data().iter().zip(plane.data()).enumerate() {
            if i != 4 {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_corner_counts_replicated_samples() {
        // Window of (0, 0): rows [r0, r0, r1], cols [0, 0, 1]
        //   0 0 4 / 0 0 4 / 2 2 6 -> valid 4, 4, 2, 2, 6
        let plane = Plane::from_rows(&[[0.0, 4.0], [2.0, 6.0]]).unwrap();
        let out = pixel_clip_plane(&plane, 1.0);
        assert_close(out.get_pixel(0, 0).unwrap(), 18.0 / 5.0);
        assert_eq!(out.get_pixel(1, 0).unwrap(), 4.0);
        assert_eq!(out.get_pixel(0, 1).unwrap(), 2.0);
        assert_eq!(out.get_pixel(1, 1).unwrap(), 6.0);
    }

    #[test]
    fn test_fallback_to_threshold() {
        let plane = Plane::new(4, 3).unwrap();
        let (out, stats) = pixel_clip_plane_with_stats(&plane, 0.0001);
        assert!(out.data().iter().all(|&v| v == 0.0001));
        assert_eq!(stats, ClipStats { replaced: 12, fallback: 12 });
    }

    #[test]
    fn test_input_not_modified() {
        let plane = Plane::from_rows(&[[0.0, 0.0], [0.0, 3.0]]).unwrap();
        let before = plane.clone();
        let _ = pixel_clip_plane(&plane, 1.0);
        assert_eq!(plane, before);
    }

    #[test]
    fn test_single_pass_does_not_spread() {
        // Height 1: every row offset replicates row 0
        let plane = Plane::from_rows(&[[0.0, 0.0, 0.0, 0.0, 10.0]]).unwrap();
        let out = pixel_clip_plane(&plane, 1.0);
        assert_eq!(out.row(0), &[1.0, 1.0, 1.0, 10.0, 10.0]);
    }

    #[test]
    fn test_nan_threshold_is_noop() {
        let plane = Plane::from_rows(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();
        let (out, stats) = pixel_clip_plane_with_stats(&plane, f32::NAN);
        assert_eq!(out, plane);
        assert_eq!(stats, ClipStats::default());
    }

    #[test]
    fn test_nan_samples_pass_through() {
        let plane = Plane::from_rows(&[[f32::NAN, 0.0], [4.0, 4.0]]).unwrap();
        let out = pixel_clip_plane(&plane, 1.0);
        assert!(out.get_pixel(0, 0).unwrap().is_nan());
        assert_eq!(out.get_pixel(1, 0).unwrap(), 4.0);
    }

    #[test]
    fn test_stats_merge() {
        let mut total = ClipStats { replaced: 2, fallback: 1 };
        total.merge(&ClipStats { replaced: 3, fallback: 0 });
        assert_eq!(total, ClipStats { replaced: 5, fallback: 1 });
    }
}
