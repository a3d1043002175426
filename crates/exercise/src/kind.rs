//! Supported exercises

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ExerciseError;

/// Exercise the tracker knows how to count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    #[default]
    Squat,
    Pushup,
    Lunge,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [ExerciseKind::Squat, ExerciseKind::Pushup, ExerciseKind::Lunge];

    /// Canonical identifier (`squat`, `pushup`, `lunge`)
    pub fn id(self) -> &'static str {
        match self {
            ExerciseKind::Squat => "squat",
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::Lunge => "lunge",
        }
    }

    /// Title-case label for summaries
    pub fn label(self) -> &'static str {
        match self {
            ExerciseKind::Squat => "Squat",
            ExerciseKind::Pushup => "Push-up",
            ExerciseKind::Lunge => "Lunge",
        }
    }

    /// Lower-case plural for coaching messages
    pub fn plural(self) -> &'static str {
        match self {
            ExerciseKind::Squat => "squats",
            ExerciseKind::Pushup => "push-ups",
            ExerciseKind::Lunge => "lunges",
        }
    }

    /// Look up a free-form id from the UI; `None` when unrecognized
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "squat" => Some(ExerciseKind::Squat),
            "pushup" | "push-up" | "push_up" => Some(ExerciseKind::Pushup),
            "lunge" => Some(ExerciseKind::Lunge),
            _ => None,
        }
    }

    /// Resolve an id, falling back to squat for anything unrecognized.
    ///
    /// The boolean is true when the fallback was taken so callers can
    /// surface it.
    pub fn resolve(id: &str) -> (Self, bool) {
        match Self::from_id(id) {
            Some(kind) => (kind, false),
            None => {
                debug!("Unknown exercise id {:?}, using squat", id);
                (ExerciseKind::Squat, true)
            }
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExerciseKind {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ExerciseError::UnknownExercise(s.to_string()))
    }
}
