//! End-of-session report

use chrono::{DateTime, Utc};
use exercise::ExerciseKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-line verdict for a finished session
pub fn summarize(kind: ExerciseKind, accuracy: u8, reps: u32) -> String {
    if accuracy >= 90 {
        format!("Excellent {} form! {} perfect reps.", kind.label(), reps)
    } else if accuracy >= 75 {
        format!("Good work! {} {} with solid form.", reps, kind.plural())
    } else {
        format!("{} {} completed. Keep practicing your form!", reps, kind.plural())
    }
}

/// `mm:ss` rendering of a duration in seconds
pub fn format_duration(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// What a tracking session hands to the session-submission collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub exercise: ExerciseKind,
    pub started_at: DateTime<Utc>,
    pub reps_completed: u32,
    /// Running accuracy at the end of the session (0-100)
    pub accuracy_score: u8,
    pub rep_accuracies: Vec<u8>,
    pub duration_secs: u64,
    pub summary: String,
}

impl SessionReport {
    pub fn new(
        session_id: Uuid,
        exercise: ExerciseKind,
        started_at: DateTime<Utc>,
        rep_accuracies: Vec<u8>,
        accuracy_score: u8,
        duration_secs: u64,
    ) -> Self {
        let reps_completed = rep_accuracies.len() as u32;
        Self {
            session_id,
            exercise,
            started_at,
            reps_completed,
            accuracy_score,
            summary: summarize(exercise, accuracy_score, reps_completed),
            rep_accuracies,
            duration_secs,
        }
    }

    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }
}
