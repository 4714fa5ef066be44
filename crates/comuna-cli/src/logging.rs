//! Logger bootstrap for the binary

use comuna_types::{Error, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Start logging to stderr
///
/// `RUST_LOG` wins over the level picked from `--verbose`. The returned
/// handle must stay alive for as long as logging is needed.
pub fn init_logging(verbose: bool) -> Result<LoggerHandle> {
    let level = if verbose { "debug" } else { "info" };

    Logger::try_with_env_or_str(level)
        .map_err(|e| Error::Logging(format!("invalid log spec `{}`: {}", level, e)))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| Error::Logging(format!("failed to start logger: {}", e)))
}
