//! In-process image host
//!
//! [`MemoryHost`] keeps the "current image" in memory. Clones share the
//! same image, log, and lock, so several handles behave like several
//! clients of one host application: only one of them can hold the image
//! lock at a time. A clone starts disconnected and never inherits the
//! lock held by the handle it was cloned from. Failures can be injected per operation through
//! [`HostFaults`].

use std::sync::Arc;

use parking_lot::Mutex;
use pixclip_core::ImageBuffer;

use crate::host::{HostImage, ImageHost};
use crate::{HostError, HostResult};

/// Operations that should fail on a [`MemoryHost`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostFaults {
    /// `connect` fails
    pub connect: bool,
    /// `acquire_lock` fails
    pub lock: bool,
    /// `current_image` fails
    pub read: bool,
    /// `set_image_pixels` fails
    pub write: bool,
}

#[derive(Debug, Default)]
struct HostState {
    image: Option<ImageBuffer>,
    locked: bool,
    log: Vec<String>,
    writes: usize,
    faults: HostFaults,
}

/// Image host backed by shared in-memory state
#[derive(Debug, Default)]
pub struct MemoryHost {
    state: Arc<Mutex<HostState>>,
    connected: bool,
    holds_lock: bool,
}

impl MemoryHost {
    /// Host with no image loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with `image` as its current image
    pub fn with_image(image: ImageBuffer) -> Self {
        let host = Self::new();
        host.set_image(Some(image));
        host
    }

    /// Handle sharing this host's state, not yet connected
    pub fn client(&self) -> Self {
        MemoryHost {
            state: Arc::clone(&self.state),
            connected: false,
            holds_lock: false,
        }
    }

    /// Load or unload the current image
    pub fn set_image(&self, image: Option<ImageBuffer>) {
        self.state.lock().image = image;
    }

    /// Copy of the current image
    pub fn image(&self) -> Option<ImageBuffer> {
        self.state.lock().image.clone()
    }

    /// Lines written to the host log so far
    pub fn log_lines(&self) -> Vec<String> {
        self.state.lock().log.clone()
    }

    /// Whether any client holds the image lock
    pub fn is_locked(&self) -> bool {
        self.state.lock().locked
    }

    /// Number of successful pixel writes
    pub fn write_count(&self) -> usize {
        self.state.lock().writes
    }

    /// Replace the injected faults
    pub fn set_faults(&self, faults: HostFaults) {
        self.state.lock().faults = faults;
    }

    fn require_connected(&self) -> HostResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(HostError::Io("not connected to host".into()))
        }
    }
}

impl Clone for MemoryHost {
    fn clone(&self) -> Self {
        self.client()
    }
}

impl ImageHost for MemoryHost {
    fn connect(&mut self) -> HostResult<()> {
        if self.state.lock().faults.connect {
            return Err(HostError::Connection("host unreachable".into()));
        }
        self.connected = true;
        Ok(())
    }

    fn acquire_lock(&mut self) -> HostResult<()> {
        self.require_connected()?;
        let mut state = self.state.lock();
        if state.faults.lock {
            return Err(HostError::Io("failed to acquire image lock".into()));
        }
        if state.locked {
            return Err(HostError::Io("image is locked by another client".into()));
        }
        state.locked = true;
        self.holds_lock = true;
        Ok(())
    }

    fn release_lock(&mut self) -> HostResult<()> {
        if !self.holds_lock {
            return Err(HostError::Io("image lock not held".into()));
        }
        self.state.lock().locked = false;
        self.holds_lock = false;
        Ok(())
    }

    fn current_image(&mut self) -> HostResult<Option<HostImage>> {
        self.require_connected()?;
        let state = self.state.lock();
        if state.faults.read {
            return Err(HostError::Io("failed to read image".into()));
        }
        Ok(state.image.clone().map(HostImage::from_buffer))
    }

    fn set_image_pixels(&mut self, pixels: &ImageBuffer) -> HostResult<()> {
        self.require_connected()?;
        if !self.holds_lock {
            return Err(HostError::Io("image lock not held".into()));
        }

        let mut state = self.state.lock();
        if state.faults.write {
            return Err(HostError::Io("failed to write image".into()));
        }
        match &state.image {
            Some(current) if current.shape() == pixels.shape() => {}
            Some(current) => {
                return Err(HostError::Io(format!(
                    "pixel data shape {:?} doesn't match image shape {:?}",
                    pixels.shape(),
                    current.shape()
                )));
            }
            None => return Err(HostError::Io("no image to write to".into())),
        }

        state.image = Some(pixels.clone());
        state.writes += 1;
        Ok(())
    }

    fn log(&mut self, message: &str) {
        self.state.lock().log.push(message.to_string());
    }
}
