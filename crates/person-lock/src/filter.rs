//! Lock filter

use metrics::counter;
use pose_geometry::LandmarkSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{LockError, PoseDescriptor};

/// Accept radius around the locked centroid, in normalized frame units
pub const DEFAULT_LOCK_RADIUS: f32 = 0.35;

/// Verdict for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LockDecision {
    /// Unlocked mode: frame passes, descriptor offered for a future lock
    Open { descriptor: PoseDescriptor },

    /// Locked and within radius of the target
    Tracked { descriptor: PoseDescriptor, distance: f32 },

    /// Locked and too far from the target; frame is withheld
    PersonLost { descriptor: PoseDescriptor, distance: f32 },

    /// The estimator saw nobody
    NoPerson,
}

impl LockDecision {
    /// Whether the frame should reach the rep counter
    pub fn passes(&self) -> bool {
        matches!(self, LockDecision::Open { .. } | LockDecision::Tracked { .. })
    }

    /// Locked subject is not where it should be
    pub fn is_person_lost(&self) -> bool {
        matches!(self, LockDecision::PersonLost { .. })
    }

    /// Descriptor of the subject seen in this frame
    pub fn descriptor(&self) -> Option<PoseDescriptor> {
        match self {
            LockDecision::Open { descriptor }
            | LockDecision::Tracked { descriptor, .. }
            | LockDecision::PersonLost { descriptor, .. } => Some(*descriptor),
            LockDecision::NoPerson => None,
        }
    }
}

/// Spatial identity filter (owned by one tracking session)
#[derive(Debug, Clone)]
pub struct PersonLock {
    radius: f32,
    target: Option<PoseDescriptor>,
    /// Most recent unlocked-mode descriptor, the candidate for `lock_latest`
    latest: Option<PoseDescriptor>,
    rejected_frames: u64,
}

impl PersonLock {
    /// Create an unlocked filter with the default radius
    pub fn new() -> Self {
        Self {
            radius: DEFAULT_LOCK_RADIUS,
            target: None,
            latest: None,
            rejected_frames: 0,
        }
    }

    /// Create an unlocked filter with a custom radius
    pub fn with_radius(radius: f32) -> Result<Self, LockError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LockError::InvalidRadius(radius));
        }
        Ok(Self {
            radius,
            ..Self::new()
        })
    }

    /// Describe a landmark set without touching lock state
    pub fn capture_descriptor(&self, set: &LandmarkSet) -> Option<PoseDescriptor> {
        PoseDescriptor::from_landmarks(set)
    }

    /// Judge one frame
    pub fn filter(&mut self, frame: Option<&LandmarkSet>) -> LockDecision {
        let descriptor = match frame.and_then(PoseDescriptor::from_landmarks) {
            Some(d) => d,
            None => return LockDecision::NoPerson,
        };

        let target = match self.target {
            Some(t) => t,
            None => {
                self.latest = Some(descriptor);
                return LockDecision::Open { descriptor };
            }
        };

        let distance = descriptor.distance_to(&target);
        if distance < self.radius {
            LockDecision::Tracked { descriptor, distance }
        } else {
            self.rejected_frames += 1;
            counter!("person_lock_rejected_frames_total").increment(1);
            debug!(
                "Frame rejected: centroid ({:.2}, {:.2}) is {:.2} from target",
                descriptor.cx, descriptor.cy, distance
            );
            LockDecision::PersonLost { descriptor, distance }
        }
    }

    /// Judge one frame and return it only if it should be processed
    pub fn apply<'a>(&mut self, frame: Option<&'a LandmarkSet>) -> (LockDecision, Option<&'a LandmarkSet>) {
        let decision = self.filter(frame);
        let passed = if decision.passes() { frame } else { None };
        (decision, passed)
    }

    /// Lock onto a descriptor
    pub fn lock(&mut self, target: PoseDescriptor) {
        info!(
            "Person locked at ({:.2}, {:.2}), size {:.3}",
            target.cx, target.cy, target.size
        );
        self.target = Some(target);
        self.rejected_frames = 0;
    }

    /// Lock onto the most recent unlocked-mode descriptor
    pub fn lock_latest(&mut self) -> Result<PoseDescriptor, LockError> {
        let target = self.latest.ok_or(LockError::NothingToLock)?;
        self.lock(target);
        Ok(target)
    }

    /// Return to unfiltered tracking
    pub fn unlock(&mut self) {
        if self.target.take().is_some() {
            info!("Person unlocked after {} rejected frames", self.rejected_frames);
        }
        self.rejected_frames = 0;
    }

    /// Forget the target and the last seen descriptor (session end)
    pub fn clear(&mut self) {
        self.unlock();
        self.latest = None;
    }

    pub fn is_locked(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<PoseDescriptor> {
        self.target
    }

    pub fn latest_descriptor(&self) -> Option<PoseDescriptor> {
        self.latest
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Frames rejected since the current lock was taken
    pub fn rejected_frames(&self) -> u64 {
        self.rejected_frames
    }
}

impl Default for PersonLock {
    fn default() -> Self {
        Self::new()
    }
}
