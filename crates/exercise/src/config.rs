//! Exercise thresholds and alignment floors

use serde::{Deserialize, Serialize};

use crate::{ExerciseError, ExerciseKind};

/// Primary-angle thresholds driving the phase machine (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseThresholds {
    /// Below this the movement is in the "down" phase
    pub down: f32,
    /// Above this the movement is in the "up" phase
    pub up: f32,
    /// Angle treated as full depth
    pub deep: f32,
}

impl ExerciseThresholds {
    pub fn new(down: f32, up: f32, deep: f32) -> Self {
        Self { down, up, deep }
    }

    /// Check `deep < down < up`
    pub fn validate(&self, exercise: ExerciseKind) -> Result<(), ExerciseError> {
        if self.deep < self.down && self.down < self.up {
            Ok(())
        } else {
            Err(ExerciseError::InvalidThresholds {
                exercise,
                deep: self.deep,
                down: self.down,
                up: self.up,
            })
        }
    }

    /// Range-of-motion proxy: how far `angle` sits between `up` (0%) and
    /// `deep` (100%), clamped to [0, 100].
    ///
    /// Heuristic only, not a biomechanical measurement.
    pub fn depth_percent(&self, angle: f32) -> f32 {
        (((self.up - angle) / (self.up - self.deep)) * 100.0).clamp(0.0, 100.0)
    }
}

/// Everything the rep counter needs to know about one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    pub thresholds: ExerciseThresholds,
    /// Minimum acceptable alignment angle; `None` disables the check
    pub alignment_floor: Option<f32>,
}

impl ExerciseProfile {
    /// Default profile for an exercise
    pub fn for_kind(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::Squat => Self {
                thresholds: ExerciseThresholds::new(90.0, 160.0, 65.0),
                alignment_floor: Some(140.0),
            },
            ExerciseKind::Pushup => Self {
                thresholds: ExerciseThresholds::new(90.0, 150.0, 70.0),
                alignment_floor: Some(150.0),
            },
            ExerciseKind::Lunge => Self {
                thresholds: ExerciseThresholds::new(100.0, 160.0, 80.0),
                alignment_floor: None,
            },
        }
    }

    /// True when an alignment angle violates the floor
    pub fn alignment_violated(&self, alignment: Option<f32>) -> bool {
        match (self.alignment_floor, alignment) {
            (Some(floor), Some(angle)) => angle < floor,
            _ => false,
        }
    }
}

/// Profiles for every supported exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    pub squat: ExerciseProfile,
    pub pushup: ExerciseProfile,
    pub lunge: ExerciseProfile,
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self {
            squat: ExerciseProfile::for_kind(ExerciseKind::Squat),
            pushup: ExerciseProfile::for_kind(ExerciseKind::Pushup),
            lunge: ExerciseProfile::for_kind(ExerciseKind::Lunge),
        }
    }
}

impl ExerciseCatalog {
    /// Profile for an exercise
    pub fn profile(&self, kind: ExerciseKind) -> &ExerciseProfile {
        match kind {
            ExerciseKind::Squat => &self.squat,
            ExerciseKind::Pushup => &self.pushup,
            ExerciseKind::Lunge => &self.lunge,
        }
    }

    /// Profile for a free-form id; unknown ids get the squat profile
    pub fn profile_for_id(&self, id: &str) -> &ExerciseProfile {
        self.profile(ExerciseKind::resolve(id).0)
    }

    /// Replace the thresholds of one exercise after validating them
    pub fn with_thresholds(
        mut self,
        kind: ExerciseKind,
        thresholds: ExerciseThresholds,
    ) -> Result<Self, ExerciseError> {
        thresholds.validate(kind)?;
        match kind {
            ExerciseKind::Squat => self.squat.thresholds = thresholds,
            ExerciseKind::Pushup => self.pushup.thresholds = thresholds,
            ExerciseKind::Lunge => self.lunge.thresholds = thresholds,
        }
        Ok(self)
    }

    /// Validate every profile
    pub fn validate(&self) -> Result<(), ExerciseError> {
        for kind in ExerciseKind::ALL {
            self.profile(kind).thresholds.validate(kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_are_ordered() {
        assert!(ExerciseCatalog::default().validate().is_ok());
    }

    #[test]
    fn test_squat_defaults() {
        let catalog = ExerciseCatalog::default();
        let squat = catalog.profile(ExerciseKind::Squat);
        assert_eq!(squat.thresholds, ExerciseThresholds::new(90.0, 160.0, 65.0));
        assert_eq!(squat.alignment_floor, Some(140.0));
        assert_eq!(catalog.profile(ExerciseKind::Lunge).alignment_floor, None);
    }

    #[test]
    fn test_unknown_id_uses_squat_profile() {
        let catalog = ExerciseCatalog::default();
        assert_eq!(catalog.profile_for_id("burpee"), catalog.profile(ExerciseKind::Squat));
    }

    #[test]
    fn test_depth_percent() {
        let t = ExerciseThresholds::new(90.0, 160.0, 65.0);
        assert_eq!(t.depth_percent(170.0), 0.0);
        assert_eq!(t.depth_percent(160.0), 0.0);
        assert_eq!(t.depth_percent(65.0), 100.0);
        assert_eq!(t.depth_percent(40.0), 100.0);
        assert!((t.depth_percent(112.5) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ExerciseCatalog::default()
            .with_thresholds(ExerciseKind::Pushup, ExerciseThresholds::new(120.0, 110.0, 70.0));
        assert!(matches!(
            result,
            Err(ExerciseError::InvalidThresholds { exercise: ExerciseKind::Pushup, .. })
        ));
    }

    #[test]
    fn test_valid_override_applied() {
        let catalog = ExerciseCatalog::default()
            .with_thresholds(ExerciseKind::Lunge, ExerciseThresholds::new(95.0, 155.0, 75.0))
            .unwrap();
        assert_eq!(catalog.lunge.thresholds.up, 155.0);
        assert_eq!(catalog.lunge.alignment_floor, None);
    }

    #[test]
    fn test_alignment_violation() {
        let squat = ExerciseProfile::for_kind(ExerciseKind::Squat);
        assert!(squat.alignment_violated(Some(120.0)));
        assert!(!squat.alignment_violated(Some(160.0)));
        assert!(!squat.alignment_violated(None));

        let lunge = ExerciseProfile::for_kind(ExerciseKind::Lunge);
        assert!(!lunge.alignment_violated(Some(10.0)));
    }
}
