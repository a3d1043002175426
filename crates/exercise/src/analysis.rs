//! Per-frame joint angle extraction

use pose_geometry::{joint_angle, LandmarkSet};
use serde::{Deserialize, Serialize};

use crate::ExerciseKind;

use pose_geometry::PoseLandmark::*;

/// Angles extracted from one frame for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Angle that drives the phase machine (knee or elbow)
    pub effort: f32,
    /// Posture angle checked against the alignment floor, if the exercise has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<f32>,
}

/// Extract effort and alignment angles for an exercise
pub fn analyze(kind: ExerciseKind, landmarks: &LandmarkSet) -> JointAngles {
    match kind {
        ExerciseKind::Squat => JointAngles {
            effort: knee_angles(landmarks).mean(),
            alignment: Some(hip_angles(landmarks).mean()),
        },
        ExerciseKind::Pushup => JointAngles {
            effort: elbow_angles(landmarks).mean(),
            alignment: Some(hip_angles(landmarks).mean()),
        },
        // The more bent leg is the forward, working leg
        ExerciseKind::Lunge => JointAngles {
            effort: knee_angles(landmarks).min(),
            alignment: None,
        },
    }
}

/// Left/right pair of the same joint angle
#[derive(Debug, Clone, Copy)]
struct Bilateral {
    left: f32,
    right: f32,
}

impl Bilateral {
    /// Averaging both sides damps 2D projection noise
    fn mean(self) -> f32 {
        (self.left + self.right) / 2.0
    }

    fn min(self) -> f32 {
        self.left.min(self.right)
    }
}

fn knee_angles(set: &LandmarkSet) -> Bilateral {
    Bilateral {
        left: joint_angle(set, LeftHip, LeftKnee, LeftAnkle),
        right: joint_angle(set, RightHip, RightKnee, RightAnkle),
    }
}

fn hip_angles(set: &LandmarkSet) -> Bilateral {
    Bilateral {
        left: joint_angle(set, LeftShoulder, LeftHip, LeftKnee),
        right: joint_angle(set, RightShoulder, RightHip, RightKnee),
    }
}

fn elbow_angles(set: &LandmarkSet) -> Bilateral {
    Bilateral {
        left: joint_angle(set, LeftShoulder, LeftElbow, LeftWrist),
        right: joint_angle(set, RightShoulder, RightElbow, RightWrist),
    }
}
