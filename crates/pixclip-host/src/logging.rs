//! Logger setup for programs embedding PixelClip
//!
//! The library crates only emit records through the `log` facade; a binary
//! that wants to see them installs a logger once at startup.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Install a stderr logger.
///
/// `spec` is a `flexi_logger` log specification such as `"info"` or
/// `"warn, pixclip_filter=debug"`; `RUST_LOG` takes precedence when set.
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(spec)?.log_to_stderr().start()
}
