//! Tracing subscriber setup for the command-line binary.

use std::io::IsTerminal;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::error::{EngineError, EngineResult};

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`; without either, only warnings
/// are shown so stdout stays reserved for results.
pub fn init_tracing(level: Option<&str>) -> EngineResult<()> {
    let default_level = level.unwrap_or("warn");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| EngineError::LoggingInit {
            message: err.to_string(),
        })?;

    Ok(())
}
