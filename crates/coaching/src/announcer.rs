//! Spoken announcements

use exercise::ExerciseKind;
use rep_counter::Cue;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Window in which an identical non-priority announcement is suppressed
pub const DEFAULT_COOLDOWN_MS: u64 = 3000;

/// Text to hand to the speech synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub text: String,
    /// Interrupts whatever is currently being spoken
    pub priority: bool,
}

/// Duplicate suppression for spoken cues
#[derive(Debug, Clone)]
pub struct CueThrottle {
    cooldown_ms: u64,
    last_text: Option<String>,
    last_at_ms: u64,
}

impl CueThrottle {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_text: None,
            last_at_ms: 0,
        }
    }

    /// Check whether `text` may be spoken at `now_ms`, recording it if so.
    ///
    /// Priority announcements always pass.
    pub fn should_announce(&mut self, text: &str, priority: bool, now_ms: u64) -> bool {
        if !priority
            && self.last_text.as_deref() == Some(text)
            && now_ms.saturating_sub(self.last_at_ms) < self.cooldown_ms
        {
            debug!("Announcement suppressed: {:?} repeated within cooldown", text);
            return false;
        }

        self.last_text = Some(text.to_string());
        self.last_at_ms = now_ms;
        true
    }

    pub fn reset(&mut self) {
        self.last_text = None;
        self.last_at_ms = 0;
    }
}

impl Default for CueThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_MS)
    }
}

/// Maps tracking events to throttled announcements
#[derive(Debug, Clone, Default)]
pub struct Announcer {
    throttle: CueThrottle,
}

impl Announcer {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            throttle: CueThrottle::new(cooldown_ms),
        }
    }

    fn say(&mut self, text: String, priority: bool, now_ms: u64) -> Option<Announcement> {
        self.throttle
            .should_announce(&text, priority, now_ms)
            .then_some(Announcement { text, priority })
    }

    pub fn session_started(&mut self, kind: ExerciseKind, now_ms: u64) -> Option<Announcement> {
        self.say(
            format!("Starting {} session. Good luck!", kind.label().to_lowercase()),
            true,
            now_ms,
        )
    }

    /// Rep number, spoken as soon as the rep completes
    pub fn rep_completed(&mut self, rep_count: u32, now_ms: u64) -> Option<Announcement> {
        self.say(rep_count.to_string(), true, now_ms)
    }

    /// Only form warnings are spoken
    pub fn cue(&mut self, cue: &Cue, now_ms: u64) -> Option<Announcement> {
        if !cue.is_warning() {
            return None;
        }
        self.say(cue.message(), false, now_ms)
    }

    pub fn person_locked(&mut self, now_ms: u64) -> Option<Announcement> {
        self.say("Person locked. Tracking you only.".to_string(), true, now_ms)
    }

    pub fn person_unlocked(&mut self, now_ms: u64) -> Option<Announcement> {
        self.say("Tracking unlocked.".to_string(), true, now_ms)
    }

    pub fn session_finished(&mut self, now_ms: u64) -> Option<Announcement> {
        self.say("Session complete. Great work today!".to_string(), true, now_ms)
    }

    pub fn reset(&mut self) {
        self.throttle.reset();
    }
}
