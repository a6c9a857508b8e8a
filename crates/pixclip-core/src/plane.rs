//! Plane - single-channel floating-point image
//!
//! A `Plane` is a 2D array of `f32` samples: one channel of an image, as
//! handed to the neighborhood filter.
//!
//! # Examples
//!
//! ```
//! use pixclip_core::Plane;
//!
//! let mut plane = Plane::new(100, 50).unwrap();
//! plane.set_pixel(10, 20, 0.5).unwrap();
//! assert_eq!(plane.get_pixel(10, 20).unwrap(), 0.5);
//! assert_eq!(plane.min_value(), 0.0);
//! ```

use crate::error::{Error, Result};

/// Floating-point image plane
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<f32>,
}

impl Plane {
    /// Create a new plane with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new plane with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixclip_core::Plane;
    ///
    /// let plane = Plane::new_with_value(4, 3, 0.25).unwrap();
    /// assert_eq!(plane.get_pixel(3, 2).unwrap(), 0.25);
    /// ```
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Plane {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create a plane from raw row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are zero or the data length doesn't
    /// match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataLength {
                shape: vec![height as usize, width as usize],
                expected,
                actual: data.len(),
            });
        }

        Ok(Plane {
            width,
            height,
            data,
        })
    }

    /// Create a plane from a list of equally long rows
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` for an empty list or empty rows,
    /// and `Error::DimensionMismatch` if a row's length differs from the
    /// first row's.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixclip_core::Plane;
    ///
    /// let plane = Plane::from_rows(&[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]).unwrap();
    /// assert_eq!(plane.dimensions(), (3, 2));
    /// assert_eq!(plane.get_pixel(2, 1).unwrap(), 5.0);
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in rows {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::DimensionMismatch {
                    expected: (width, 1),
                    actual: (row.len() as u32, 1),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Plane {
            width,
            height,
            data,
        })
    }

    /// Get the plane width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the plane height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the plane dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the sample at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        let idx = self.checked_index(x, y)?;
        Ok(self.data[idx])
    }

    /// Set the sample at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get the sample at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the sample at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f32) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a row of samples
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get a mutable row of samples
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        let start = (y as usize) * (self.width as usize);
        &mut self.data[start..start + self.width as usize]
    }

    /// Set all samples to the specified value
    pub fn set_all(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Smallest sample value. NaN samples are ignored unless every sample
    /// is NaN.
    pub fn min_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::NAN, f32::min)
    }

    /// Largest sample value. NaN samples are ignored unless every sample
    /// is NaN.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::NAN, f32::max)
    }

    /// Get the 3x3 window centered on (x, y), with edge replication.
    ///
    /// Samples are ordered row by row, offsets `dy, dx` in `-1, 0, 1`; the
    /// center sample is at index 4. Offsets that fall outside the plane
    /// take the value of the nearest in-bounds row/column, so border pixels
    /// see repeated edge samples rather than zeros.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixclip_core::Plane;
    ///
    /// let plane = Plane::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(
    ///     plane.neighborhood_3x3(0, 0),
    ///     [1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 3.0, 3.0, 4.0]
    /// );
    /// ```
    pub fn neighborhood_3x3(&self, x: u32, y: u32) -> [f32; 9] {
        let rows = [
            self.row(y.saturating_sub(1)),
            self.row(y),
            self.row((y + 1).min(self.height - 1)),
        ];
        let cols = [
            x.saturating_sub(1) as usize,
            x as usize,
            (x + 1).min(self.width - 1) as usize,
        ];

        let mut window = [0.0f32; 9];
        for (r, row) in rows.iter().enumerate() {
            for (c, &col) in cols.iter().enumerate() {
                window[r * 3 + c] = row[col];
            }
        }
        window
    }

    fn checked_index(&self, x: u32, y: u32) -> Result<usize> {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.data.len(),
            });
        }
        Ok(idx)
    }
}
