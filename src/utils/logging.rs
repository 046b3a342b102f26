use crate::error::{FetchError, Result};
use crate::utils::constants::LOG_TARGET;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{}={}", LOG_TARGET, level)
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr; `RUST_LOG` takes precedence over `verbose`. When
/// `log_file` is given, the same events are also appended to that file.
/// An already-installed global subscriber is kept.
pub fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    FetchError::Logging(format!(
                        "cannot open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    match installed {
        Ok(()) => debug!("Logging initialized: {}", default_filter(verbose)),
        Err(e) => debug!("Keeping existing subscriber: {}", e),
    }
    Ok(())
}
