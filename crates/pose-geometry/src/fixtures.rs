//! Synthetic poses with prescribed joint angles
//!
//! Builds full 33-point landmark sets whose knee, hip and elbow angles match
//! the requested values, so state machines can be driven without a camera.

use crate::landmark::{Landmark, LandmarkSet, PoseLandmark, POSE_LANDMARK_COUNT};

const THIGH: f32 = 0.2;
const SHIN: f32 = 0.2;
const TORSO: f32 = 0.25;
const UPPER_ARM: f32 = 0.12;
const FOREARM: f32 = 0.12;

/// Point `len` away from `vertex` such that the angle `toward`-`vertex`-point is `degrees`
fn point_at_angle(vertex: (f32, f32), toward: (f32, f32), degrees: f32, len: f32) -> (f32, f32) {
    let (dx, dy) = (toward.0 - vertex.0, toward.1 - vertex.1);
    let norm = (dx * dx + dy * dy).sqrt().max(f32::EPSILON);
    let (ux, uy) = (dx / norm, dy / norm);
    let (sin, cos) = degrees.to_radians().sin_cos();
    (
        vertex.0 + len * (ux * cos - uy * sin),
        vertex.1 + len * (ux * sin + uy * cos),
    )
}

/// Builder for a synthetic standing/bending pose
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    left_knee: f32,
    right_knee: f32,
    hip: f32,
    elbow: f32,
    offset: (f32, f32),
    visibility: f32,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self {
            left_knee: 175.0,
            right_knee: 175.0,
            hip: 175.0,
            elbow: 170.0,
            offset: (0.0, 0.0),
            visibility: 1.0,
        }
    }
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same hip-knee-ankle angle on both legs
    pub fn knee(mut self, degrees: f32) -> Self {
        self.left_knee = degrees;
        self.right_knee = degrees;
        self
    }

    pub fn left_knee(mut self, degrees: f32) -> Self {
        self.left_knee = degrees;
        self
    }

    pub fn right_knee(mut self, degrees: f32) -> Self {
        self.right_knee = degrees;
        self
    }

    /// Shoulder-hip-knee angle on both sides
    pub fn hip(mut self, degrees: f32) -> Self {
        self.hip = degrees;
        self
    }

    /// Shoulder-elbow-wrist angle on both arms
    pub fn elbow(mut self, degrees: f32) -> Self {
        self.elbow = degrees;
        self
    }

    /// Translate every landmark by `(dx, dy)`
    pub fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.offset = (dx, dy);
        self
    }

    pub fn visibility(mut self, visibility: f32) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn build(&self) -> LandmarkSet {
        let center = (0.5 + self.offset.0, 0.4 + self.offset.1);
        let mut points = vec![Landmark::new(center.0, center.1, self.visibility); POSE_LANDMARK_COUNT];

        let sides = [
            (
                -0.05,
                self.left_knee,
                [
                    PoseLandmark::LeftShoulder,
                    PoseLandmark::LeftElbow,
                    PoseLandmark::LeftWrist,
                    PoseLandmark::LeftHip,
                    PoseLandmark::LeftKnee,
                    PoseLandmark::LeftAnkle,
                ],
            ),
            (
                0.05,
                self.right_knee,
                [
                    PoseLandmark::RightShoulder,
                    PoseLandmark::RightElbow,
                    PoseLandmark::RightWrist,
                    PoseLandmark::RightHip,
                    PoseLandmark::RightKnee,
                    PoseLandmark::RightAnkle,
                ],
            ),
        ];

        let mut shoulder_y = center.1;
        for (dx, knee_angle, [shoulder, elbow, wrist, hip, knee, ankle]) in sides {
            let hip_pt = (center.0 + dx, center.1 + 0.1);
            let knee_pt = (hip_pt.0, hip_pt.1 + THIGH);
            let ankle_pt = point_at_angle(knee_pt, hip_pt, knee_angle, SHIN);
            let shoulder_pt = point_at_angle(hip_pt, knee_pt, self.hip, TORSO);
            let elbow_pt = (shoulder_pt.0, shoulder_pt.1 + UPPER_ARM);
            let wrist_pt = point_at_angle(elbow_pt, shoulder_pt, self.elbow, FOREARM);

            for (role, (x, y)) in [
                (shoulder, shoulder_pt),
                (elbow, elbow_pt),
                (wrist, wrist_pt),
                (hip, hip_pt),
                (knee, knee_pt),
                (ankle, ankle_pt),
            ] {
                points[role.index()] = Landmark::new(x, y, self.visibility);
            }
            shoulder_y = shoulder_y.min(shoulder_pt.1);
        }

        points[PoseLandmark::Nose.index()] = Landmark::new(center.0, shoulder_y - 0.08, self.visibility);

        LandmarkSet::new(points)
    }
}

/// Squat-style pose with both knees at `knee` and the torso at `back`
pub fn squat_pose(knee: f32, back: f32) -> LandmarkSet {
    PoseBuilder::new().knee(knee).hip(back).build()
}

/// Plank pose with both elbows at `elbow` and the body line at `body`
pub fn pushup_pose(elbow: f32, body: f32) -> LandmarkSet {
    PoseBuilder::new().elbow(elbow).hip(body).build()
}
