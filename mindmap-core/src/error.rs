//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type
//!
//! Error enum shared by the registry and configuration layers. Command
//! execution itself has no error path: a command without a handler is inert
//! by design, and handler failures belong to the handler.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A command with this id is already registered.
    #[error("Command already registered: {0}")]
    DuplicateCommand(crate::model::catalog::CommandId),

    /// A string did not name any known command id.
    #[error("Unknown command id: {0:?}")]
    UnknownCommand(String),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a config I/O error with the offending path attached.
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
