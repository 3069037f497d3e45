//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so diagnostics go to a log file. The
//! filter comes from `RUST_LOG` when set, otherwise from the given level.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("logger already initialized: {0}")]
    Init(String),
}

/// Opens `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_err = |source| LoggingError::Open { path: path.display().to_string(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    OpenOptions::new().create(true).append(true).open(path).map_err(open_err)
}

pub fn init(path: &Path, level: &str) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| LoggingError::Filter(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
