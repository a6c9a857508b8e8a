//! Threshold acquisition
//!
//! A [`ThresholdSource`] either supplies a threshold or declines. Declining
//! is never an error: [`obtain_threshold`] falls back to the configured
//! default, as it does for values that are not finite.

use std::io::{self, BufRead, Stderr, StdinLock, Write};

/// Something that can be asked for a threshold
pub trait ThresholdSource {
    /// Ask for a threshold. `default` is what will be used on `None`.
    fn request_threshold(&mut self, default: f32) -> Option<f32>;
}

/// Always declines, selecting the default threshold
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultThreshold;

impl ThresholdSource for DefaultThreshold {
    fn request_threshold(&mut self, _default: f32) -> Option<f32> {
        None
    }
}

/// Always supplies the same threshold
#[derive(Debug, Clone, Copy)]
pub struct FixedThreshold(pub f32);

impl ThresholdSource for FixedThreshold {
    fn request_threshold(&mut self, _default: f32) -> Option<f32> {
        Some(self.0)
    }
}

/// Interactive prompt on a text stream.
///
/// Writes a prompt to `output` and reads one line from `input`. An empty
/// line, end of input, an I/O error, an unparsable value, or a value that
/// is not finite declines.
pub struct PromptThreshold<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptThreshold<R, W> {
    /// Prompt on the given streams
    pub fn new(input: R, output: W) -> Self {
        PromptThreshold { input, output }
    }

    fn prompt(&mut self, default: f32) -> io::Result<Option<String>> {
        write!(
            self.output,
            "PixelClip threshold (e.g. 0.0001) [{default}]: "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl PromptThreshold<StdinLock<'static>, Stderr> {
    /// Prompt on the process's stdin, writing the prompt to stderr
    pub fn stdio() -> Self {
        PromptThreshold::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ThresholdSource for PromptThreshold<R, W> {
    fn request_threshold(&mut self, default: f32) -> Option<f32> {
        let line = match self.prompt(default) {
            Ok(line) => line?,
            Err(e) => {
                log::debug!("PixelClip: threshold prompt unavailable: {e}");
                return None;
            }
        };

        let text = line.trim();
        if text.is_empty() {
            return None;
        }
        match text.parse::<f32>() {
            Ok(value) if value.is_finite() => Some(value),
            Ok(value) => {
                log::warn!("PixelClip: ignoring threshold {value}: not finite");
                None
            }
            Err(e) => {
                log::warn!("PixelClip: ignoring threshold {text:?}: {e}");
                None
            }
        }
    }
}

/// Obtain a threshold from `source`, falling back to `default`.
///
/// # Arguments
///
/// * `source` - Asked once for a threshold
/// * `default` - Used when the source declines or answers with a value
///   that is not finite
///
/// # Returns
///
/// A finite threshold, unless `default` itself is not finite.
pub fn obtain_threshold<S: ThresholdSource + ?Sized>(source: &mut S, default: f32) -> f32 {
    match source.request_threshold(default) {
        Some(t) if t.is_finite() => t,
        Some(t) => {
            log::warn!("PixelClip: threshold {t} is not finite, using default {default}");
            default
        }
        None => default,
    }
}
