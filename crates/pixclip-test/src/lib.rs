//! pixclip-test - Regression test framework for PixelClip
//!
//! Provides [`RegParams`], which numbers and records every comparison made
//! by a regression test so that a failing run lists all mismatches rather
//! than stopping at the first one, plus seeded generators for random test
//! images.
//!
//! # Usage
//!
//! ```ignore
//! use pixclip_test::RegParams;
//!
//! let mut rp = RegParams::new("pixclip_plane");
//! rp.compare_values(1.0, result.get_pixel(0, 0)? as f64, 0.0);
//! rp.compare_planes(&expected, &result, 1e-6);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use pixclip_core::{ImageBuffer, Plane};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a plane of uniformly distributed samples in `[low, high)`
///
/// The same seed always yields the same plane.
pub fn random_plane(seed: u64, width: u32, height: u32, low: f32, high: f32) -> TestResult<Plane> {
    if !(low < high) {
        return Err(TestError::InvalidRange { low, high });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let size = (width as usize) * (height as usize);
    let data = (0..size).map(|_| rng.random_range(low..high)).collect();
    Ok(Plane::from_data(width, height, data)?)
}

/// Generate an `[height, width, channels]` buffer of uniformly distributed
/// samples in `[low, high)`
pub fn random_buffer(
    seed: u64,
    width: usize,
    height: usize,
    channels: usize,
    low: f32,
    high: f32,
) -> TestResult<ImageBuffer> {
    if !(low < high) {
        return Err(TestError::InvalidRange { low, high });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height * channels)
        .map(|_| rng.random_range(low..high))
        .collect();
    Ok(ImageBuffer::new(vec![height, width, channels], data)?)
}
