//! ImageBuffer - n-dimensional sample buffer
//!
//! `ImageBuffer` is the host-facing image container: a row-major `f32`
//! array with an explicit shape. Images use one of two layouts:
//!
//! - rank 2, `[height, width]`: a single grayscale plane
//! - rank 3, `[height, width, channels]`: channels interleaved per pixel
//!
//! Other ranks can be represented so that consumers can reject them with a
//! meaningful error instead of failing at construction time.

use crate::error::{Error, Result};
use crate::plane::Plane;

/// Row-major n-dimensional image buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    /// Extent of each axis, outermost first
    shape: Vec<usize>,
    /// Sample data (row-major, last axis fastest)
    data: Vec<f32>,
}

impl ImageBuffer {
    /// Create a buffer from a shape and row-major data
    ///
    /// # Arguments
    ///
    /// * `shape` - Extent of each axis, outermost first
    /// * `data` - Samples in row-major order, last axis fastest
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidShape` if any axis is zero, and
    /// `Error::DataLength` if `data.len()` isn't the product of the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixclip_core::ImageBuffer;
    ///
    /// let buf = ImageBuffer::new(vec![2, 3, 3], vec![0.0; 18]).unwrap();
    /// assert_eq!(buf.rank(), 3);
    /// assert_eq!(buf.channels(), Some(3));
    /// ```
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Result<Self> {
        if shape.contains(&0) {
            return Err(Error::InvalidShape(shape));
        }

        let expected = shape.iter().product::<usize>();
        if data.len() != expected {
            return Err(Error::DataLength {
                shape,
                expected,
                actual: data.len(),
            });
        }

        Ok(ImageBuffer { shape, data })
    }

    /// Create a rank-2 buffer holding a copy of `plane`
    pub fn from_plane(plane: &Plane) -> Self {
        ImageBuffer {
            shape: vec![plane.height() as usize, plane.width() as usize],
            data: plane.data().to_vec(),
        }
    }

    /// Create a rank-3 buffer by interleaving equally sized planes
    ///
    /// Plane `c` becomes channel `c`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for an empty list and
    /// `Error::DimensionMismatch` if the planes differ in size.
    pub fn from_planes(planes: &[Plane]) -> Result<Self> {
        let first = planes
            .first()
            .ok_or_else(|| Error::InvalidParameter("at least one plane is required".into()))?;
        let (width, height) = first.dimensions();
        if let Some(other) = planes.iter().find(|p| p.dimensions() != (width, height)) {
            return Err(Error::DimensionMismatch {
                expected: (width, height),
                actual: other.dimensions(),
            });
        }

        let channels = planes.len();
        let pixels = (width as usize) * (height as usize);
        let mut data = vec![0.0f32; pixels * channels];
        for (c, plane) in planes.iter().enumerate() {
            for (i, &v) in plane.data().iter().enumerate() {
                data[i * channels + c] = v;
            }
        }

        Ok(ImageBuffer {
            shape: vec![height as usize, width as usize, channels],
            data,
        })
    }

    /// Number of axes
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Extent of each axis
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no samples (never true once constructed)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Height of an image buffer (rank 2 or 3)
    pub fn height(&self) -> Option<usize> {
        self.image_dims().map(|(_, h, _)| h)
    }

    /// Width of an image buffer (rank 2 or 3)
    pub fn width(&self) -> Option<usize> {
        self.image_dims().map(|(w, _, _)| w)
    }

    /// Channel count: 1 for rank 2, the last axis for rank 3
    pub fn channels(&self) -> Option<usize> {
        self.image_dims().map(|(_, _, c)| c)
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Convert a rank-2 buffer into a plane
    ///
    /// # Errors
    ///
    /// Returns `Error::RankMismatch` for any other rank.
    pub fn to_plane(&self) -> Result<Plane> {
        match self.shape[..] {
            [h, w] => Plane::from_data(w as u32, h as u32, self.data.clone()),
            _ => Err(Error::RankMismatch {
                expected: 2,
                shape: self.shape.clone(),
            }),
        }
    }

    /// Copy one channel of a rank-3 buffer into a new plane
    ///
    /// # Errors
    ///
    /// Returns `Error::RankMismatch` if the buffer isn't rank 3 and
    /// `Error::ChannelOutOfRange` if `channel >= channels`.
    pub fn extract_channel(&self, channel: usize) -> Result<Plane> {
        let (w, h, channels) = self.rank3_dims()?;
        if channel >= channels {
            return Err(Error::ChannelOutOfRange { channel, channels });
        }

        let data = self
            .data
            .iter()
            .skip(channel)
            .step_by(channels)
            .copied()
            .collect();
        Plane::from_data(w as u32, h as u32, data)
    }

    /// Overwrite one channel of a rank-3 buffer with `plane`
    ///
    /// # Errors
    ///
    /// Returns `Error::RankMismatch`, `Error::ChannelOutOfRange`, or
    /// `Error::DimensionMismatch` if the plane doesn't match the buffer.
    pub fn set_channel(&mut self, channel: usize, plane: &Plane) -> Result<()> {
        let (w, h, channels) = self.rank3_dims()?;
        if channel >= channels {
            return Err(Error::ChannelOutOfRange { channel, channels });
        }
        let expected = (w as u32, h as u32);
        if plane.dimensions() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: plane.dimensions(),
            });
        }

        for (dst, &v) in self
            .data
            .iter_mut()
            .skip(channel)
            .step_by(channels)
            .zip(plane.data())
        {
            *dst = v;
        }
        Ok(())
    }

    /// Smallest sample value, ignoring NaN samples
    pub fn min_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::NAN, f32::min)
    }

    /// (width, height, channels) for rank 2 and rank 3 buffers
    fn image_dims(&self) -> Option<(usize, usize, usize)> {
        match self.shape[..] {
            [h, w] => Some((w, h, 1)),
            [h, w, c] => Some((w, h, c)),
            _ => None,
        }
    }

    fn rank3_dims(&self) -> Result<(usize, usize, usize)> {
        match self.shape[..] {
            [h, w, c] => Ok((w, h, c)),
            _ => Err(Error::RankMismatch {
                expected: 3,
                shape: self.shape.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_2x2() -> ImageBuffer {
        // Pixel (x, y) channel c holds 100*c + 10*y + x
        let mut data = Vec::new();
        for y in 0..2 {
            for x in 0..2 {
                for c in 0..3 {
                    data.push((100 * c + 10 * y + x) as f32);
                }
            }
        }
        ImageBuffer::new(vec![2, 2, 3], data).unwrap()
    }

    #[test]
    fn test_buffer_new_validates_shape() {
        assert!(ImageBuffer::new(vec![2, 3], vec![0.0; 6]).is_ok());
        assert!(matches!(
            ImageBuffer::new(vec![2, 3], vec![0.0; 5]),
            Err(Error::DataLength {
                expected: 6,
                actual: 5,
                ..
            })
        ));
        assert_eq!(
            ImageBuffer::new(vec![2, 0, 3], vec![]),
            Err(Error::InvalidShape(vec![2, 0, 3]))
        );
    }

    #[test]
    fn test_buffer_other_ranks_representable() {
        let rank1 = ImageBuffer::new(vec![4], vec![1.0; 4]).unwrap();
        assert_eq!(rank1.rank(), 1);
        assert_eq!(rank1.channels(), None);
        assert_eq!(rank1.width(), None);

        let rank4 = ImageBuffer::new(vec![1, 2, 2, 2], vec![0.0; 8]).unwrap();
        assert_eq!(rank4.rank(), 4);
        assert_eq!(rank4.height(), None);
    }

    #[test]
    fn test_buffer_plane_roundtrip() {
        let plane = Plane::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let buf = ImageBuffer::from_plane(&plane);
        assert_eq!(buf.shape(), &[2, 3]);
        assert_eq!(buf.width(), Some(3));
        assert_eq!(buf.height(), Some(2));
        assert_eq!(buf.channels(), Some(1));
        assert_eq!(buf.to_plane().unwrap(), plane);
    }

    #[test]
    fn test_to_plane_rejects_rank3() {
        let buf = rgb_2x2();
        assert!(matches!(
            buf.to_plane(),
            Err(Error::RankMismatch { expected: 2, .. })
        ));
    }

    #[test]
    fn test_extract_channel() {
        let buf = rgb_2x2();
        let green = buf.extract_channel(1).unwrap();
        assert_eq!(green.dimensions(), (2, 2));
        assert_eq!(green.data(), &[100.0, 101.0, 110.0, 111.0]);

        assert_eq!(
            buf.extract_channel(3),
            Err(Error::ChannelOutOfRange {
                channel: 3,
                channels: 3
            })
        );
    }

    #[test]
    fn test_set_channel_leaves_other_channels() {
        let mut buf = rgb_2x2();
        let plane = Plane::new_with_value(2, 2, -1.0).unwrap();
        buf.set_channel(2, &plane).unwrap();

        assert_eq!(buf.extract_channel(2).unwrap(), plane);
        assert_eq!(buf.extract_channel(0).unwrap().data(), &[0.0, 1.0, 10.0, 11.0]);

        let wrong = Plane::new(3, 2).unwrap();
        assert!(matches!(
            buf.set_channel(0, &wrong),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_from_planes_interleaves() {
        let buf = rgb_2x2();
        let planes: Vec<Plane> = (0..3).map(|c| buf.extract_channel(c).unwrap()).collect();
        let rebuilt = ImageBuffer::from_planes(&planes).unwrap();
        assert_eq!(rebuilt, buf);

        assert!(ImageBuffer::from_planes(&[]).is_err());
        let mismatched = [Plane::new(2, 2).unwrap(), Plane::new(2, 3).unwrap()];
        assert!(matches!(
            ImageBuffer::from_planes(&mismatched),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_min_value() {
        let buf = rgb_2x2();
        assert_eq!(buf.min_value(), 0.0);
    }
}
