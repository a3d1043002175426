//! Spatial descriptor of one subject

use pose_geometry::LandmarkSet;
use serde::{Deserialize, Serialize};

/// Where a subject sits in the frame and how much of it they cover
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseDescriptor {
    /// Mean x of all landmarks
    pub cx: f32,
    /// Mean y of all landmarks
    pub cy: f32,
    /// Normalized bounding-box area of all landmarks.
    ///
    /// Captured for reporting only; matching uses the centroid alone.
    pub size: f32,
}

impl PoseDescriptor {
    pub fn new(cx: f32, cy: f32, size: f32) -> Self {
        Self { cx, cy, size }
    }

    /// Describe a landmark set; `None` for an empty set
    pub fn from_landmarks(set: &LandmarkSet) -> Option<Self> {
        if set.is_empty() {
            return None;
        }

        let n = set.len() as f32;
        let (mut sum_x, mut sum_y) = (0.0f32, 0.0f32);
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);

        for lm in set.iter() {
            sum_x += lm.x;
            sum_y += lm.y;
            min_x = min_x.min(lm.x);
            max_x = max_x.max(lm.x);
            min_y = min_y.min(lm.y);
            max_y = max_y.max(lm.y);
        }

        Some(Self {
            cx: sum_x / n,
            cy: sum_y / n,
            size: (max_x - min_x) * (max_y - min_y),
        })
    }

    /// Euclidean distance between centroids
    pub fn distance_to(&self, other: &PoseDescriptor) -> f32 {
        let dx = self.cx - other.cx;
        let dy = self.cy - other.cy;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pose_geometry::Landmark;

    #[test]
    fn test_centroid_and_size() {
        let set = LandmarkSet::new(vec![
            Landmark::new(0.2, 0.2, 1.0),
            Landmark::new(0.6, 0.2, 1.0),
            Landmark::new(0.6, 0.8, 1.0),
            Landmark::new(0.2, 0.8, 1.0),
        ]);
        let desc = PoseDescriptor::from_landmarks(&set).unwrap();

        assert!((desc.cx - 0.4).abs() < 1e-6);
        assert!((desc.cy - 0.5).abs() < 1e-6);
        assert!((desc.size - 0.24).abs() < 1e-6);
    }

    #[test]
    fn test_single_point_has_zero_size() {
        let set = LandmarkSet::new(vec![Landmark::new(0.3, 0.7, 0.5)]);
        let desc = PoseDescriptor::from_landmarks(&set).unwrap();
        assert_eq!(desc, PoseDescriptor::new(0.3, 0.7, 0.0));
    }

    #[test]
    fn test_empty_set_has_no_descriptor() {
        assert!(PoseDescriptor::from_landmarks(&LandmarkSet::default()).is_none());
    }

    #[test]
    fn test_distance() {
        let a = PoseDescriptor::new(0.1, 0.1, 0.2);
        let b = PoseDescriptor::new(0.4, 0.5, 0.9);
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-6);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
