//! Coaching cues shown to the athlete

use std::fmt;

use exercise::ExerciseKind;
use serde::{Deserialize, Serialize};

/// Latest coaching message emitted by the rep counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cue {
    /// Initial prompt before the athlete is standing tall
    #[default]
    GetIntoPosition,

    /// Start position reached for the first time
    Ready(ExerciseKind),

    /// Down phase entered with good alignment
    Lower,

    /// Close to, but not below, the down threshold
    GoLower,

    /// Between thresholds
    Moving,

    /// Repetition completed
    GoodRep,

    /// Squat back angle below its floor
    KeepBackStraight,

    /// Push-up body line below its floor
    KeepBodyLevel,
}

impl Cue {
    /// Alignment warning for an exercise, if it has an alignment check
    pub fn alignment_warning(kind: ExerciseKind) -> Option<Cue> {
        match kind {
            ExerciseKind::Squat => Some(Cue::KeepBackStraight),
            ExerciseKind::Pushup => Some(Cue::KeepBodyLevel),
            ExerciseKind::Lunge => None,
        }
    }

    /// Form warnings are spoken; status cues are only displayed
    pub fn is_warning(&self) -> bool {
        matches!(self, Cue::KeepBackStraight | Cue::KeepBodyLevel)
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cue::GetIntoPosition => f.write_str("Get into position..."),
            Cue::Ready(kind) => write!(f, "Ready! Start your {}", kind.plural()),
            Cue::Lower => f.write_str("Lower! Now push up"),
            Cue::GoLower => f.write_str("Go a bit lower"),
            Cue::Moving => f.write_str("Moving..."),
            Cue::GoodRep => f.write_str("Good rep! Keep going!"),
            Cue::KeepBackStraight => f.write_str("Keep your back straight!"),
            Cue::KeepBodyLevel => f.write_str("Keep your body level!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Cue::default().message(), "Get into position...");
        assert_eq!(Cue::Ready(ExerciseKind::Pushup).message(), "Ready! Start your push-ups");
        assert_eq!(Cue::GoodRep.message(), "Good rep! Keep going!");
    }

    #[test]
    fn test_only_alignment_cues_are_warnings() {
        assert!(Cue::KeepBackStraight.is_warning());
        assert!(Cue::KeepBodyLevel.is_warning());
        assert!(!Cue::GoLower.is_warning());
        assert!(!Cue::GoodRep.is_warning());
        assert_eq!(Cue::alignment_warning(ExerciseKind::Lunge), None);
    }
}
