//! Person Lock
//!
//! Keeps the tracker attached to one subject:
//! - Per-frame descriptor (centroid + bounding-box area)
//! - Explicit lock / unlock on a captured descriptor
//! - Frames whose centroid drifts beyond the lock radius are reported as
//!   "person lost" and withheld from the rep counter

mod descriptor;
mod filter;

pub use descriptor::PoseDescriptor;
pub use filter::{LockDecision, PersonLock, DEFAULT_LOCK_RADIUS};

use thiserror::Error;

/// Person lock error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LockError {
    #[error("No person has been seen yet, nothing to lock onto")]
    NothingToLock,

    #[error("Lock radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
}
