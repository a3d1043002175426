//! Tracker configuration
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML file,
//! then `REPTRACK_*` environment variables (`__` separates nested keys, e.g.
//! `REPTRACK_THRESHOLDS__SQUAT__DOWN`).

use std::path::Path;

use ::config::{Config, Environment, File};
use coaching::DEFAULT_COOLDOWN_MS;
use exercise::{ExerciseCatalog, ExerciseKind, ExerciseThresholds};
use person_lock::DEFAULT_LOCK_RADIUS;
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::TrackerError;

/// Per-exercise threshold replacements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub squat: Option<ExerciseThresholds>,
    pub pushup: Option<ExerciseThresholds>,
    pub lunge: Option<ExerciseThresholds>,
}

/// Tracking session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Exercise id as chosen in the UI; unknown ids count as squats
    pub exercise: String,

    /// Person lock accept radius (normalized frame units)
    pub lock_radius: f32,

    /// Window for suppressing repeated spoken warnings
    pub announce_cooldown_ms: u64,

    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,

    pub thresholds: ThresholdOverrides,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            exercise: ExerciseKind::Squat.id().to_string(),
            lock_radius: DEFAULT_LOCK_RADIUS,
            announce_cooldown_ms: DEFAULT_COOLDOWN_MS,
            log_level: "info".to_string(),
            log_json: false,
            thresholds: ThresholdOverrides::default(),
        }
    }
}

impl TrackerConfig {
    /// Load from the optional file and the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self, TrackerError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let config: TrackerConfig = builder
            .add_source(
                Environment::with_prefix("REPTRACK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot
    pub fn validate(&self) -> Result<(), TrackerError> {
        self.max_level()?;
        self.catalog()?;
        Ok(())
    }

    /// Exercise catalog with overrides applied
    pub fn catalog(&self) -> Result<ExerciseCatalog, TrackerError> {
        let mut catalog = ExerciseCatalog::default();
        let overrides = [
            (ExerciseKind::Squat, self.thresholds.squat),
            (ExerciseKind::Pushup, self.thresholds.pushup),
            (ExerciseKind::Lunge, self.thresholds.lunge),
        ];
        for (kind, thresholds) in overrides {
            if let Some(thresholds) = thresholds {
                catalog = catalog.with_thresholds(kind, thresholds)?;
            }
        }
        Ok(catalog)
    }

    pub fn max_level(&self) -> Result<Level, TrackerError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| TrackerError::InvalidLogLevel(self.log_level.clone()))
    }
}
