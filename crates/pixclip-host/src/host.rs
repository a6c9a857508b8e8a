//! Host application interface
//!
//! [`ImageHost`] is the capability set the orchestration needs from an
//! imaging application: connect, lock the current image, read it, replace
//! its pixels, and write to the host's log. The filter crates never see a
//! host; only [`run_pixel_clip`](crate::run_pixel_clip) does.

use std::ops::{Deref, DerefMut};

use pixclip_core::ImageBuffer;

use crate::HostResult;

/// The host's current image
#[derive(Debug, Clone, PartialEq)]
pub struct HostImage {
    /// Pixel data, `[H, W]` or `[H, W, C]`
    pub buffer: ImageBuffer,
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Number of channels
    pub channels: usize,
}

impl HostImage {
    /// Describe a buffer, taking the dimensions from its shape.
    ///
    /// Buffers that are not rank 2 or 3 report zero dimensions; the filter
    /// rejects them later.
    pub fn from_buffer(buffer: ImageBuffer) -> Self {
        HostImage {
            width: buffer.width().unwrap_or(0),
            height: buffer.height().unwrap_or(0),
            channels: buffer.channels().unwrap_or(0),
            buffer,
        }
    }
}

/// Operations a host imaging application exposes to PixelClip
pub trait ImageHost {
    /// Establish the connection to the host
    fn connect(&mut self) -> HostResult<()>;

    /// Take the exclusive lock on the current image
    fn acquire_lock(&mut self) -> HostResult<()>;

    /// Release the image lock taken by [`acquire_lock`](Self::acquire_lock)
    fn release_lock(&mut self) -> HostResult<()>;

    /// Fetch the current image, or `None` if nothing is loaded
    fn current_image(&mut self) -> HostResult<Option<HostImage>>;

    /// Replace the pixels of the current image
    fn set_image_pixels(&mut self, pixels: &ImageBuffer) -> HostResult<()>;

    /// Write a line to the host's log
    fn log(&mut self, message: &str);
}

/// Scoped exclusive lock on a host image.
///
/// The lock is released when the guard is dropped, on success and error
/// paths alike. A failed release is logged, never raised.
pub struct ImageLock<'a, H: ImageHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: ImageHost + ?Sized> ImageLock<'a, H> {
    /// Acquire the lock on `host`
    pub fn acquire(host: &'a mut H) -> HostResult<Self> {
        host.acquire_lock()?;
        Ok(ImageLock { host })
    }
}

impl<H: ImageHost + ?Sized> Deref for ImageLock<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: ImageHost + ?Sized> DerefMut for ImageLock<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: ImageHost + ?Sized> Drop for ImageLock<'_, H> {
    fn drop(&mut self) {
        if let Err(e) = self.host.release_lock() {
            log::warn!("PixelClip: failed to release image lock: {e}");
            self.host
                .log(&format!("PixelClip: failed to release image lock: {e}"));
        }
    }
}
