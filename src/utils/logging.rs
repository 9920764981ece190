//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout stays free for
//! validation output.

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level accepted on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Initialize the global subscriber
///
/// `RUST_LOG` wins over `level` when it is set. Calling this twice is a no-op.
pub fn init_logging(level: LogLevel, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::from(level).as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    // Already installed by an embedding host or an earlier call
    let _ = result;
}
