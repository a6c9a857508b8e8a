//! Orchestration configuration

use pixclip_filter::DEFAULT_THRESHOLD;

/// Environment variable overriding the default threshold
pub const THRESHOLD_ENV: &str = "PIXCLIP_THRESHOLD";

/// Environment variable disabling parallel channel filtering
pub const PARALLEL_ENV: &str = "PIXCLIP_PARALLEL";

/// Settings for [`run_pixel_clip`](crate::run_pixel_clip)
#[derive(Debug, Clone, PartialEq)]
pub struct PixelClipConfig {
    /// Threshold used when the threshold source declines
    pub default_threshold: f32,
    /// Filter channels concurrently
    pub parallel: bool,
}

impl Default for PixelClipConfig {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_THRESHOLD,
            parallel: true,
        }
    }
}

impl PixelClipConfig {
    /// Defaults overridden by `PIXCLIP_THRESHOLD` and `PIXCLIP_PARALLEL`.
    ///
    /// Malformed values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            match raw.trim().parse::<f32>() {
                Ok(t) if t.is_finite() => config.default_threshold = t,
                _ => log::warn!("ignoring {THRESHOLD_ENV}={raw:?}"),
            }
        }

        if let Some(raw) = lookup(PARALLEL_ENV) {
            match raw.trim().to_lowercase().as_str() {
                "0" | "false" | "off" | "no" => config.parallel = false,
                "1" | "true" | "on" | "yes" => config.parallel = true,
                _ => log::warn!("ignoring {PARALLEL_ENV}={raw:?}"),
            }
        }

        config
    }
}
