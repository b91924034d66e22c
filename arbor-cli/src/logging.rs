//! Diagnostic log for the shell.
//!
//! Every run appends its records to the configured file. The level string from the
//! configuration is parsed as an `EnvFilter` directive, so `info` and `arbor_babel=debug`
//! both work.

use arbor_config::LogConfig;
use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file '{path}': {source}")]
    Open { path: String, source: io::Error },

    #[error("invalid log level '{0}'")]
    Level(String),

    #[error("logger already initialized")]
    AlreadyInitialized,
}

/// Install the global subscriber writing to `config.path`.
pub fn init(config: &LogConfig) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|_| LogError::Level(config.level.clone()))?;
    let file = open_append(&config.path)?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| LogError::AlreadyInitialized)
}

fn open_append(path: &str) -> Result<File, LogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_string(),
            source,
        })
}
