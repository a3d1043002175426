//! Exercise Catalog and Analyzer
//!
//! Per-exercise knowledge the rep counter needs:
//! - Supported exercises and tolerant id resolution
//! - Phase thresholds (down / up / deep) and alignment floors
//! - Effort and alignment angle extraction from one frame

pub mod analysis;
pub mod config;
pub mod kind;

pub use analysis::{analyze, JointAngles};
pub use config::{ExerciseCatalog, ExerciseProfile, ExerciseThresholds};
pub use kind::ExerciseKind;

use thiserror::Error;

/// Exercise error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExerciseError {
    #[error("Unknown exercise: {0}")]
    UnknownExercise(String),

    #[error("Invalid thresholds for {exercise}: expected deep < down < up, got deep={deep}, down={down}, up={up}")]
    InvalidThresholds {
        exercise: ExerciseKind,
        deep: f32,
        down: f32,
        up: f32,
    },
}
