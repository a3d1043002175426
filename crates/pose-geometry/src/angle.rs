//! Joint angle geometry

use crate::landmark::{LandmarkSet, PoseLandmark};

/// Interior angle at vertex `b` between rays `b->a` and `b->c`, in degrees.
///
/// Always in [0, 180] regardless of winding order. Coincident points do not
/// fail; `atan2(0, 0)` is 0 so the result is simply whatever the remaining
/// ray direction gives.
pub fn angle_at(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    let radians = (c.1 - b.1).atan2(c.0 - b.0) - (a.1 - b.1).atan2(a.0 - b.0);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Angle at the `vertex` role between the `a` and `c` roles of a landmark set
pub fn joint_angle(
    set: &LandmarkSet,
    a: PoseLandmark,
    vertex: PoseLandmark,
    c: PoseLandmark,
) -> f32 {
    angle_at(set.get(a).xy(), set.get(vertex).xy(), set.get(c).xy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{Landmark, POSE_LANDMARK_COUNT};
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_right_angle() {
        let angle = angle_at((0.0, 1.0), (0.0, 0.0), (1.0, 0.0));
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn test_colinear_straight() {
        let angle = angle_at((0.0, 0.5), (0.5, 0.5), (1.0, 0.5));
        assert!((angle - 180.0).abs() < EPS);
    }

    #[test]
    fn test_same_ray_is_zero() {
        let angle = angle_at((0.6, 0.6), (0.5, 0.5), (0.8, 0.8));
        assert!(angle.abs() < EPS);
    }

    #[test]
    fn test_reflex_is_reflected() {
        // Raw atan2 difference is 270 degrees here
        let angle = angle_at((1.0, 0.0), (0.0, 0.0), (0.0, -1.0));
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn test_coincident_points_do_not_panic() {
        let angle = angle_at((0.5, 0.5), (0.5, 0.5), (0.5, 0.5));
        assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn test_joint_angle_from_set() {
        let mut points = vec![Landmark::default(); POSE_LANDMARK_COUNT];
        points[PoseLandmark::LeftHip.index()] = Landmark::new(0.5, 0.3, 1.0);
        points[PoseLandmark::LeftKnee.index()] = Landmark::new(0.5, 0.5, 1.0);
        points[PoseLandmark::LeftAnkle.index()] = Landmark::new(0.7, 0.5, 1.0);
        let set = LandmarkSet::new(points);

        let angle = joint_angle(
            &set,
            PoseLandmark::LeftHip,
            PoseLandmark::LeftKnee,
            PoseLandmark::LeftAnkle,
        );
        assert!((angle - 90.0).abs() < EPS);
    }

    fn point() -> impl Strategy<Value = (f32, f32)> {
        (0.0f32..=1.0, 0.0f32..=1.0)
    }

    proptest! {
        #[test]
        fn prop_angle_in_range(a in point(), b in point(), c in point()) {
            let angle = angle_at(a, b, c);
            prop_assert!((0.0..=180.0).contains(&angle));
        }

        #[test]
        fn prop_angle_symmetric(a in point(), b in point(), c in point()) {
            prop_assert_eq!(angle_at(a, b, c), angle_at(c, b, a));
        }

        #[test]
        fn prop_midpoint_is_straight(a in point(), c in point()) {
            prop_assume!(((a.0 - c.0).powi(2) + (a.1 - c.1).powi(2)).sqrt() > 0.05);
            let b = ((a.0 + c.0) / 2.0, (a.1 + c.1) / 2.0);
            prop_assert!((angle_at(a, b, c) - 180.0).abs() < 0.05);
        }
    }
}
