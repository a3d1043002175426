//! Repetition Counter
//!
//! Turns a stream of per-frame landmark sets into discrete repetitions:
//! - Three-phase hysteresis machine (idle / down / up) on the effort angle
//! - Per-rep form score from alignment and depth checks
//! - Running accuracy and live coaching cues
//!
//! Absent frames ("no person") never change state.

pub mod feedback;
pub mod state;
pub mod update;

pub use feedback::Cue;
pub use state::{Phase, RepRecord, RepState};
pub use update::FrameUpdate;

use std::collections::HashSet;

use exercise::{analyze, ExerciseCatalog, ExerciseKind, ExerciseProfile, JointAngles};
use metrics::counter;
use pose_geometry::LandmarkSet;
use state::DownPhase;
use tracing::{debug, info, warn};

/// Points deducted when the alignment floor was violated during the down phase
pub const ALIGNMENT_PENALTY: u8 = 20;

/// Points deducted when the rep did not reach the minimum depth
pub const SHALLOW_PENALTY: u8 = 20;

/// Minimum depth (percent) for a rep to count as full range
pub const MIN_DEPTH_PERCENT: f32 = 30.0;

/// Window above the down threshold where the athlete is told to go lower
pub const GO_LOWER_MARGIN: f32 = 20.0;

/// Distinct unknown exercise ids remembered for warn-once reporting
pub const MAX_REPORTED_FALLBACKS: usize = 16;

/// Rep counter for one tracking session
pub struct RepCounter {
    catalog: ExerciseCatalog,
    state: RepState,
    /// Unknown ids already reported, so the fallback warns once per id
    reported_fallbacks: HashSet<String>,
}

impl RepCounter {
    /// Create a counter with the given exercise catalog
    pub fn new(catalog: ExerciseCatalog) -> Self {
        Self {
            catalog,
            state: RepState::default(),
            reported_fallbacks: HashSet::new(),
        }
    }

    /// Process one frame for a free-form exercise id.
    ///
    /// Unknown ids are counted as squats.
    pub fn process_frame(&mut self, frame: Option<&LandmarkSet>, exercise_id: &str) -> FrameUpdate {
        let (kind, fell_back) = ExerciseKind::resolve(exercise_id);
        if fell_back {
            counter!("rep_counter_exercise_fallback_total").increment(1);
            if !self.reported_fallbacks.contains(exercise_id) {
                if self.reported_fallbacks.len() < MAX_REPORTED_FALLBACKS {
                    self.reported_fallbacks.insert(exercise_id.to_string());
                    warn!("Unsupported exercise {:?}, counting as squat", exercise_id);
                } else {
                    debug!("Unsupported exercise {:?}, counting as squat", exercise_id);
                }
            }
        }
        self.process(frame, kind)
    }

    /// Process one frame for a known exercise
    pub fn process(&mut self, frame: Option<&LandmarkSet>, kind: ExerciseKind) -> FrameUpdate {
        let landmarks = match frame {
            Some(set) if !set.is_empty() => set,
            _ => {
                debug!("No landmarks, holding {:?}", self.state.phase);
                return FrameUpdate::from_state(&self.state, None, None);
            }
        };

        counter!("rep_counter_frames_total", "exercise" => kind.id()).increment(1);

        let profile = *self.catalog.profile(kind);
        let angles = analyze(kind, landmarks);
        let completed = self.step(kind, &profile, angles);

        FrameUpdate::from_state(&self.state, Some(angles), completed)
    }

    fn step(
        &mut self,
        kind: ExerciseKind,
        profile: &ExerciseProfile,
        angles: JointAngles,
    ) -> Option<RepRecord> {
        let t = profile.thresholds;
        let effort = angles.effort;
        let misaligned = profile.alignment_violated(angles.alignment);
        let warning = if misaligned {
            Cue::alignment_warning(kind)
        } else {
            None
        };

        match self.state.phase {
            // Stays idle until the start position is reached, but still coaches
            Phase::Idle => {
                if effort > t.up {
                    self.state.phase = Phase::Up;
                    self.state.feedback = warning.unwrap_or(Cue::Ready(kind));
                    debug!("Start position reached ({:.1} deg)", effort);
                } else {
                    self.state.feedback = warning.unwrap_or(status_cue(effort, t.down));
                }
                None
            }
            Phase::Up => {
                if effort < t.down {
                    self.state.phase = Phase::Down;
                    self.state.down = Some(DownPhase::enter(effort, misaligned));
                    self.state.feedback = warning.unwrap_or(Cue::Lower);
                    debug!("Down phase entered ({:.1} deg)", effort);
                } else if effort <= t.up {
                    self.state.feedback = warning.unwrap_or(status_cue(effort, t.down));
                } else if let Some(cue) = warning {
                    self.state.feedback = cue;
                }
                None
            }
            Phase::Down => {
                if effort > t.up {
                    return Some(self.complete_rep(kind, profile, effort));
                }

                let down = self
                    .state
                    .down
                    .get_or_insert_with(|| DownPhase::enter(effort, misaligned));
                down.observe(effort, misaligned);

                if let Some(cue) = warning {
                    self.state.feedback = cue;
                }
                None
            }
        }
    }

    /// Score the rep finished by the frame at `effort`.
    ///
    /// Depth is read from the completing frame, which is above `up`, so it
    /// is always 0% and the shallow penalty always applies.
    fn complete_rep(&mut self, kind: ExerciseKind, profile: &ExerciseProfile, effort: f32) -> RepRecord {
        let t = profile.thresholds;
        let down = self.state.down.take().unwrap_or(DownPhase::enter(t.down, false));

        let depth_percent = t.depth_percent(effort);
        let mut accuracy: u8 = 100;
        if down.misaligned {
            accuracy = accuracy.saturating_sub(ALIGNMENT_PENALTY);
        }
        if depth_percent < MIN_DEPTH_PERCENT {
            accuracy = accuracy.saturating_sub(SHALLOW_PENALTY);
        }

        self.state.phase = Phase::Up;
        self.state.rep_count += 1;
        self.state.rep_accuracies.push(accuracy);
        self.state.feedback = Cue::GoodRep;

        counter!("rep_counter_reps_total", "exercise" => kind.id()).increment(1);
        info!(
            "{} rep {} completed: accuracy {}%, depth {:.0}%, running {}%",
            kind,
            self.state.rep_count,
            accuracy,
            depth_percent,
            self.state.accuracy()
        );

        RepRecord {
            number: self.state.rep_count,
            accuracy,
            depth_percent,
            deepest_angle: down.deepest,
            alignment_fault: down.misaligned,
        }
    }

    /// Completed repetitions
    pub fn rep_count(&self) -> u32 {
        self.state.rep_count
    }

    /// Running accuracy (0-100)
    pub fn accuracy(&self) -> u8 {
        self.state.accuracy()
    }

    /// Per-rep scores in completion order
    pub fn rep_accuracies(&self) -> &[u8] {
        &self.state.rep_accuracies
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Latest coaching cue
    pub fn feedback(&self) -> Cue {
        self.state.feedback
    }

    /// Latest coaching message
    pub fn feedback_text(&self) -> String {
        self.state.feedback.message()
    }

    /// Full counter state
    pub fn state(&self) -> &RepState {
        &self.state
    }

    /// Catalog in use
    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    /// Back to idle with no reps (session start or "new session")
    pub fn reset(&mut self) {
        info!("Rep counter reset after {} reps", self.state.rep_count);
        self.state.reset();
        self.reported_fallbacks.clear();
    }
}

/// Status cue for a frame between the thresholds
fn status_cue(effort: f32, down: f32) -> Cue {
    if effort < down + GO_LOWER_MARGIN {
        Cue::GoLower
    } else {
        Cue::Moving
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new(ExerciseCatalog::default())
    }
}
