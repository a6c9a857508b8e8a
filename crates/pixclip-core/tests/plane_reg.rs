//! Plane regression test
//!
//! Tests plane construction, pixel access, statistics, and the
//! edge-replicated 3x3 neighborhood.

use pixclip_core::{Error, Plane};
use pixclip_test::{RegParams, random_plane};

// ==========================================================================
// Test 1: construction and access
// ==========================================================================

#[test]
fn plane_reg_creation() {
    let mut rp = RegParams::new("plane_creation");

    let plane = Plane::new(640, 480).unwrap();
    rp.compare_values(640.0, plane.width() as f64, 0.0);
    rp.compare_values(480.0, plane.height() as f64, 0.0);
    let all_zero = plane.data().iter().all(|&v| v == 0.0);
    rp.compare_values(1.0, if all_zero { 1.0 } else { 0.0 }, 0.0);

    let filled = Plane::new_with_value(10, 4, 0.25).unwrap();
    rp.compare_values(0.25, filled.min_value() as f64, 0.0);
    rp.compare_values(0.25, filled.max_value() as f64, 0.0);

    let rows = Plane::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    rp.compare_values(5.0, rows.get_pixel(1, 1).unwrap() as f64, 0.0);
    rp.compare_values(6.0, rows.row(1)[2] as f64, 0.0);

    assert!(matches!(
        Plane::new(0, 3),
        Err(Error::InvalidDimension { width: 0, height: 3 })
    ));
    assert!(Plane::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    assert!(Plane::from_data(2, 2, vec![0.0; 3]).is_err());

    assert!(rp.cleanup(), "plane_creation regression test failed");
}

#[test]
fn plane_reg_pixel_access() {
    let mut rp = RegParams::new("plane_access");

    let mut plane = Plane::new(5, 3).unwrap();
    plane.set_pixel(4, 2, -7.5).unwrap();
    plane.set_pixel_unchecked(0, 1, 3.0);
    rp.compare_values(-7.5, plane.get_pixel(4, 2).unwrap() as f64, 0.0);
    rp.compare_values(3.0, plane.get_pixel_unchecked(0, 1) as f64, 0.0);
    rp.compare_values(-7.5, plane.min_value() as f64, 0.0);
    rp.compare_values(3.0, plane.max_value() as f64, 0.0);

    assert!(plane.get_pixel(5, 0).is_err());
    assert!(plane.set_pixel(0, 3, 1.0).is_err());

    plane.row_mut(0).fill(2.0);
    rp.compare_values(10.0, plane.row(0).iter().sum::<f32>() as f64, 0.0);

    assert!(rp.cleanup(), "plane_access regression test failed");
}

// ==========================================================================
// Test 2: neighborhood
// ==========================================================================

/// Compare every window of a random plane against direct clamped lookups.
#[test]
fn plane_reg_neighborhood_random() {
    let mut rp = RegParams::new("plane_neighborhood");

    for (seed, w, h) in [(1, 1, 1), (2, 1, 7), (3, 9, 1), (4, 13, 6)] {
        let plane = random_plane(seed, w, h, -1.0, 1.0).unwrap();
        for y in 0..h {
            for x in 0..w {
                let window = plane.neighborhood_3x3(x, y);
                let mut k = 0;
                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        let sx = (x as i64 + dx).clamp(0, w as i64 - 1) as u32;
                        let sy = (y as i64 + dy).clamp(0, h as i64 - 1) as u32;
                        let expected = plane.get_pixel(sx, sy).unwrap();
                        rp.compare_values(expected as f64, window[k] as f64, 0.0);
                        k += 1;
                    }
                }
                rp.compare_values(plane.get_pixel(x, y).unwrap() as f64, window[4] as f64, 0.0);
            }
        }
    }

    assert!(rp.cleanup(), "plane_neighborhood regression test failed");
}
