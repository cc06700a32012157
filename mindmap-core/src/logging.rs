//! src/logging.rs
//! ============================================================================
//! # Logging: Tracing Subscriber Setup
//!
//! The library itself only emits `tracing` events (command execution at
//! DEBUG, registry construction at INFO, ignored config overrides at WARN).
//! The embedding application calls [`Logger::init`] once at startup to
//! install a subscriber writing to a rolling log file, or
//! [`Logger::init_console`] for development runs. `RUST_LOG` overrides the
//! configured level in both cases.

use std::path::PathBuf;

use anyhow::Result;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: CompactString,
    pub log_level: CompactString,
    pub rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LogRotation {
    Never,
    Daily,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_prefix: CompactString::const_new("mindmap"),
            log_level: CompactString::const_new("info"),
            rotation: LogRotation::Daily,
        }
    }
}

pub struct Logger;

impl Logger {
    /// Install the global subscriber with a non-blocking rolling file writer.
    ///
    /// The returned [`WorkerGuard`] must be kept alive for the lifetime of
    /// the application or buffered log lines are lost on exit.
    pub fn init(config: &LoggerConfig) -> Result<WorkerGuard> {
        let rotation: Rotation = match config.rotation {
            LogRotation::Never => Rotation::NEVER,
            LogRotation::Daily => Rotation::DAILY,
        };

        let appender: RollingFileAppender =
            RollingFileAppender::new(rotation, &config.log_dir, config.log_file_prefix.as_str());
        let (writer, guard): (NonBlocking, WorkerGuard) = tracing_appender::non_blocking(appender);

        let filter: EnvFilter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()?;

        Ok(guard)
    }

    /// Install a plain stderr subscriber. Intended for development runs and
    /// tests; repeated calls are not an error.
    pub fn init_console(level: &str) {
        let filter: EnvFilter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init();
    }
}
