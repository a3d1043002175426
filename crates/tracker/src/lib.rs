//! Rep Tracker
//!
//! Ties the per-frame pipeline together for one tracking session:
//! person lock, rep counter, and spoken coaching. Also hosts the
//! layered configuration, logging setup, and the JSON-lines replay driver.

pub mod config;
pub mod replay;
pub mod session;

pub use crate::config::{ThresholdOverrides, TrackerConfig};
pub use replay::{replay_file, run_replay, ReplayEvent, ReplayOutcome};
pub use session::{SessionTick, TrackingSession};

use exercise::ExerciseError;
use person_lock::LockError;
use thiserror::Error;
use tracing_subscriber::FmtSubscriber;

/// Tracker error types
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error(transparent)]
    Exercise(#[from] ExerciseError),

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed replay event on line {line}: {source}")]
    Replay {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global log subscriber, writing to stderr
pub fn init_logging(config: &TrackerConfig) -> Result<(), TrackerError> {
    let level = config.max_level()?;

    if config.log_json {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
