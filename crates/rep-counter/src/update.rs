//! Per-frame result returned to the caller

use exercise::JointAngles;
use serde::{Deserialize, Serialize};

use crate::feedback::Cue;
use crate::state::{Phase, RepRecord, RepState};

/// Snapshot of the counter after one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameUpdate {
    /// Whether the frame carried landmarks and was analysed
    pub processed: bool,

    /// Phase after this frame
    pub phase: Phase,

    /// Completed repetitions so far
    pub rep_count: u32,

    /// Running accuracy (0-100)
    pub accuracy: u8,

    /// Latest coaching cue
    pub feedback: Cue,

    /// Angles measured in this frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angles: Option<JointAngles>,

    /// Repetition completed by this frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_rep: Option<RepRecord>,
}

impl FrameUpdate {
    pub(crate) fn from_state(
        state: &RepState,
        angles: Option<JointAngles>,
        completed_rep: Option<RepRecord>,
    ) -> Self {
        Self {
            processed: angles.is_some(),
            phase: state.phase,
            rep_count: state.rep_count,
            accuracy: state.accuracy(),
            feedback: state.feedback,
            angles,
            completed_rep,
        }
    }

    /// Check if this frame finished a repetition
    pub fn rep_completed(&self) -> bool {
        self.completed_rep.is_some()
    }
}
