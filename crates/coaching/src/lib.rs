//! Coaching
//!
//! Everything said to the athlete around the rep counter:
//! - Spoken announcements with duplicate suppression
//! - End-of-session report and summary line
//! - Improvement, streak, and daily plan helpers

mod announcer;
mod progress;
mod summary;

pub use announcer::{Announcement, Announcer, CueThrottle, DEFAULT_COOLDOWN_MS};
pub use progress::{improvement_percentage, next_streak, todays_plan};
pub use summary::{format_duration, summarize, SessionReport};
