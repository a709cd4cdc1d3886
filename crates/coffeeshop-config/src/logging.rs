//! Logging initialization for Coffee Shop tooling
//!
//! Filter priority, highest first: `-v`/`-q` flags, then `RUST_LOG`, then
//! the caller's default filter.

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with the given verbosity flags and default filter
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let filter = if let Some(log_level) = verbosity.log_level() {
        EnvFilter::try_new(format!("{}", log_level))?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).compact())
        .init();

    Ok(())
}

/// Initialize logging for user-facing tools that stay quiet by default
///
/// Nothing is installed unless verbosity flags were passed or `RUST_LOG` is
/// set. Returns whether logging was initialized.
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<bool> {
    if verbosity.log_level().is_some() || std::env::var("RUST_LOG").is_ok() {
        init_logging(verbosity, default_filter)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
