//! One PixelClip invocation against a host application

use pixclip_filter::{ClipReport, PixelClipOptions, pixel_clip_with_options};

use crate::config::PixelClipConfig;
use crate::host::{ImageHost, ImageLock};
use crate::threshold::{ThresholdSource, obtain_threshold};
use crate::{HostError, HostResult};

/// How a run ended when no error occurred
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The current image was filtered and written back
    Completed {
        /// Threshold that was applied
        threshold: f32,
        /// Per-channel replacement counters
        report: ClipReport,
    },
    /// The host had no image loaded; nothing was changed
    NoImageLoaded,
}

/// Filter the host's current image in place.
///
/// Connects to `host`, asks `source` for a threshold (falling back to
/// `config.default_threshold`), then filters the current image under the
/// host's image lock and writes the result back in one call. The lock is
/// released on every path once taken.
///
/// Every step is reported to the host log and to the `log` facade. A
/// connection failure is only reported through `log`, since the host
/// cannot receive it.
///
/// # Arguments
///
/// * `host` - Host application holding the current image
/// * `source` - Where to ask for the threshold
/// * `config` - Default threshold and channel parallelism
///
/// # Returns
///
/// [`RunOutcome::Completed`] with the applied threshold and counters, or
/// [`RunOutcome::NoImageLoaded`] if the host had nothing to filter.
///
/// # Errors
///
/// Returns `HostError::Connection` if the host is unreachable (no lock is
/// taken), `HostError::Io` if locking, reading, or writing fails, and
/// `HostError::Filter` if the image has an unsupported shape. The host
/// image is left untouched in all of these cases.
///
/// # Examples
///
/// ```
/// use pixclip_core::ImageBuffer;
/// use pixclip_host::{FixedThreshold, MemoryHost, PixelClipConfig, RunOutcome, run_pixel_clip};
///
/// let image = ImageBuffer::new(vec![2, 2], vec![0.0, 0.5, 0.5, 0.5]).unwrap();
/// let mut host = MemoryHost::with_image(image);
/// let outcome =
///     run_pixel_clip(&mut host, &mut FixedThreshold(0.1), &PixelClipConfig::default()).unwrap();
///
/// assert!(matches!(outcome, RunOutcome::Completed { .. }));
/// assert_eq!(host.image().unwrap().data(), &[0.5; 4]);
/// ```
pub fn run_pixel_clip<H, S>(
    host: &mut H,
    source: &mut S,
    config: &PixelClipConfig,
) -> HostResult<RunOutcome>
where
    H: ImageHost + ?Sized,
    S: ThresholdSource + ?Sized,
{
    if let Err(e) = host.connect() {
        log::error!("PixelClip: connection to host failed: {e}");
        return Err(e);
    }

    let threshold = obtain_threshold(source, config.default_threshold);
    notify(host, &format!("PixelClip: threshold = {threshold}"));

    let options = PixelClipOptions {
        threshold,
        parallel: config.parallel,
    };
    match process(host, &options) {
        Ok(report) => Ok(RunOutcome::Completed { threshold, report }),
        Err(HostError::NoImageLoaded) => Ok(RunOutcome::NoImageLoaded),
        Err(e) => {
            let message = format!("PixelClip: error during processing: {e}");
            log::error!("{message}");
            host.log(&message);
            Err(e)
        }
    }
}

/// Lock, read, filter, and write back the current image.
fn process<H: ImageHost + ?Sized>(host: &mut H, options: &PixelClipOptions) -> HostResult<ClipReport> {
    let mut host = ImageLock::acquire(host)?;

    let Some(image) = host.current_image()? else {
        notify(
            &mut *host,
            "PixelClip: no image loaded. Open an image and try again.",
        );
        return Err(HostError::NoImageLoaded);
    };
    notify(
        &mut *host,
        &format!(
            "PixelClip: image {} x {}, channels={}",
            image.width, image.height, image.channels
        ),
    );

    let (filtered, report) = pixel_clip_with_options(&image.buffer, options)?;
    host.set_image_pixels(&filtered)?;

    let total = report.total();
    notify(
        &mut *host,
        &format!(
            "PixelClip: processing complete, {} pixel(s) replaced ({} by threshold fallback). \
             Save the image manually to keep the result.",
            total.replaced, total.fallback
        ),
    );
    Ok(report)
}

fn notify<H: ImageHost + ?Sized>(host: &mut H, message: &str) {
    log::info!("{message}");
    host.log(message);
}
