//! Pose Geometry
//!
//! Landmark types produced by an external pose estimator and the pure
//! geometry the rep tracker builds on:
//! - Normalized 2D landmarks with visibility
//! - Per-frame landmark sets indexed by anatomical role
//! - Interior joint angles from three points

pub mod angle;
pub mod landmark;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use angle::{angle_at, joint_angle};
pub use landmark::{landmark, Landmark, LandmarkSet, PoseLandmark, POSE_LANDMARK_COUNT};
