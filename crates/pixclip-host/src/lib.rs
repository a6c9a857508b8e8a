//! pixclip-host - Running PixelClip inside a host imaging application
//!
//! The filter crates are pure functions over buffers. This crate supplies
//! the workflow around them:
//!
//! - [`ImageHost`] - what a host application must provide (connection,
//!   image lock, pixel access, a log sink), with [`MemoryHost`] as an
//!   in-process implementation
//! - [`ThresholdSource`] - where the threshold comes from
//! - [`run_pixel_clip`] - connect, lock, read, filter, write back, release
//! - [`PixelClipConfig`] - defaults, optionally read from the environment
//! - [`setup_logging`] - stderr logging for binaries

pub mod config;
mod error;
pub mod host;
pub mod logging;
pub mod memory;
pub mod run;
pub mod threshold;

pub use error::{HostError, HostResult};

pub use config::{PARALLEL_ENV, PixelClipConfig, THRESHOLD_ENV};
pub use host::{HostImage, ImageHost, ImageLock};
pub use logging::setup_logging;
pub use memory::{HostFaults, MemoryHost};
pub use run::{RunOutcome, run_pixel_clip};
pub use threshold::{
    DefaultThreshold, FixedThreshold, PromptThreshold, ThresholdSource, obtain_threshold,
};
