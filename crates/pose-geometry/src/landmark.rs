//! Landmark types and role-indexed access

use serde::{Deserialize, Serialize};

/// Number of keypoints in one pose estimate (MediaPipe Pose topology)
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Single body keypoint in normalized image coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position (0 = left edge, 1 = right edge)
    pub x: f32,
    /// Vertical position (0 = top edge, 1 = bottom edge)
    pub y: f32,
    /// Detection confidence (0-1)
    #[serde(default)]
    pub visibility: f32,
}

impl Landmark {
    /// Create a new landmark
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self { x, y, visibility }
    }

    /// Position as an `(x, y)` pair
    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Euclidean distance to another landmark
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Anatomical roles the tracker reads from a landmark set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoseLandmark {
    Nose = 0,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
}

impl PoseLandmark {
    /// Index into the landmark array
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ordered landmarks for one video frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Wrap the landmarks reported for one frame
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Landmark for a role, or the degenerate zero landmark if missing
    pub fn get(&self, role: PoseLandmark) -> Landmark {
        self.at(role.index())
    }

    /// Landmark at a raw index, or the degenerate zero landmark if out of range
    pub fn at(&self, index: usize) -> Landmark {
        self.landmarks.get(index).copied().unwrap_or_default()
    }

    /// Number of landmarks in the set
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// True when the estimator reported no keypoints
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Iterate over all landmarks in index order
    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    /// Borrow the raw landmark slice
    pub fn as_slice(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

/// Role accessor that tolerates an absent frame.
///
/// Returns a zero-valued, zero-visibility landmark when the set is absent or
/// the index is out of range.
pub fn landmark(set: Option<&LandmarkSet>, role: PoseLandmark) -> Landmark {
    set.map(|s| s.get(role)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_indices() {
        assert_eq!(PoseLandmark::Nose.index(), 0);
        assert_eq!(PoseLandmark::LeftShoulder.index(), 11);
        assert_eq!(PoseLandmark::RightAnkle.index(), 28);
    }

    #[test]
    fn test_missing_index_is_degenerate() {
        let set = LandmarkSet::new(vec![Landmark::new(0.4, 0.2, 0.9)]);

        assert_eq!(set.get(PoseLandmark::Nose), Landmark::new(0.4, 0.2, 0.9));
        assert_eq!(set.get(PoseLandmark::LeftKnee), Landmark::default());
        assert_eq!(set.get(PoseLandmark::LeftKnee).visibility, 0.0);
    }

    #[test]
    fn test_absent_frame_accessor() {
        let lm = landmark(None, PoseLandmark::RightHip);
        assert_eq!(lm, Landmark::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_deserialize_without_visibility() {
        let set: LandmarkSet =
            serde_json::from_str(r#"[{"x":0.1,"y":0.2},{"x":0.3,"y":0.4,"visibility":0.8}]"#)
                .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.at(0).visibility, 0.0);
        assert_eq!(set.at(1).visibility, 0.8);
    }
}
