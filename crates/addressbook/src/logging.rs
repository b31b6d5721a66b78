//! Logging configuration for addressbook.
//!
//! Initialization for the tracing-based logging used throughout the crate.
//! Logs go to stderr so they never interleave with shell feedback on stdout.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Warnings and errors; the default for interactive use.
    #[default]
    Normal,
    /// Informational output (info and above).
    Verbose,
    /// Everything, down to trace level.
    Trace,
}

impl Verbosity {
    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Initialize the logging system.
///
/// This should be called once at application startup. The logging level can be
/// controlled via:
/// 1. The `verbosity` parameter
/// 2. The `RUST_LOG` environment variable (takes precedence)
///
/// # Examples
///
/// ```no_run
/// use addressbook::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let default_filter = format!("addressbook={}", verbosity.to_level_filter());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    // Ignore the error if a subscriber is already installed
    let _ = subscriber.try_init();
}

/// Initialize logging for tests.
///
/// Only warnings and errors are shown, through the test writer.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
