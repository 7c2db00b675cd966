use crate::utils::error::{LeapYearError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact `tracing` subscriber for the process.
///
/// `RUST_LOG` takes precedence over the built-in filter. Returns
/// [`LeapYearError::LoggerError`] if a global subscriber is already set.
pub fn init_logger(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("leap_year=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leap_year=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| LeapYearError::LoggerError {
            message: e.to_string(),
        })
}
