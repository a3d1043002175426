//! Rep counter state (owned by one tracking session)

use serde::{Deserialize, Serialize};

use crate::feedback::Cue;

/// Position in the movement cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    #[default]
    Idle,
    Down,
    Up,
}

/// Score card for one completed repetition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepRecord {
    /// 1-based repetition number
    pub number: u32,
    /// Form score in [0, 100]
    pub accuracy: u8,
    /// Range-of-motion proxy read on the completing frame
    pub depth_percent: f32,
    /// Smallest effort angle reached during the down phase
    pub deepest_angle: f32,
    /// Alignment floor was violated during the down phase
    pub alignment_fault: bool,
}

/// What happened during the current down phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DownPhase {
    /// Smallest effort angle seen since entering the phase
    pub deepest: f32,
    /// Any frame of the phase violated the alignment floor
    pub misaligned: bool,
}

impl DownPhase {
    pub fn enter(angle: f32, misaligned: bool) -> Self {
        Self {
            deepest: angle,
            misaligned,
        }
    }

    pub fn observe(&mut self, angle: f32, misaligned: bool) {
        self.deepest = self.deepest.min(angle);
        self.misaligned |= misaligned;
    }
}

/// Counter state mutated once per processed frame
#[derive(Debug, Clone, Default)]
pub struct RepState {
    /// Current phase
    pub phase: Phase,

    /// Completed repetitions
    pub rep_count: u32,

    /// One score per completed repetition, in order
    pub rep_accuracies: Vec<u8>,

    /// Latest coaching cue
    pub feedback: Cue,

    pub(crate) down: Option<DownPhase>,
}

impl RepState {
    /// Running accuracy: rounded mean of per-rep scores, 100 before the first rep
    pub fn accuracy(&self) -> u8 {
        if self.rep_accuracies.is_empty() {
            return 100;
        }

        let total: u32 = self.rep_accuracies.iter().map(|&a| u32::from(a)).sum();
        (total as f32 / self.rep_accuracies.len() as f32).round() as u8
    }

    /// Reset state (new session)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
