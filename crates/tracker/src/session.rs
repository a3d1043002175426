//! One tracking session: person lock → rep counter → announcements

use chrono::{DateTime, Utc};
use coaching::{Announcement, Announcer, SessionReport};
use exercise::ExerciseKind;
use person_lock::{LockDecision, PersonLock, PoseDescriptor};
use pose_geometry::LandmarkSet;
use rep_counter::{FrameUpdate, RepCounter};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{TrackerConfig, TrackerError};

/// Result of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTick {
    /// Person lock verdict for the frame
    pub status: LockDecision,
    /// Counter snapshot after the frame
    pub update: FrameUpdate,
    /// Spoken output triggered by the frame
    pub announcements: Vec<Announcement>,
}

impl SessionTick {
    /// Short label for the tracking status indicator
    pub fn status_label(&self) -> &'static str {
        match self.status {
            LockDecision::Open { .. } => "Tracking",
            LockDecision::Tracked { .. } => "Locked",
            LockDecision::PersonLost { .. } => "PERSON LOST",
            LockDecision::NoPerson => "No person detected",
        }
    }
}

/// Tracking session
pub struct TrackingSession {
    id: Uuid,
    exercise_id: String,
    kind: ExerciseKind,
    started_at: DateTime<Utc>,
    counter: RepCounter,
    lock: PersonLock,
    announcer: Announcer,
    first_frame_ms: Option<u64>,
    last_frame_ms: u64,
}

impl TrackingSession {
    /// Start a session for the configured exercise
    pub fn new(config: &TrackerConfig) -> Result<Self, TrackerError> {
        let counter = RepCounter::new(config.catalog()?);
        let lock = PersonLock::with_radius(config.lock_radius)?;
        // Unknown ids are reported by the counter on the first frame
        let (kind, _) = ExerciseKind::resolve(&config.exercise);

        let id = Uuid::new_v4();
        info!("Session {} started: {}", id, kind.label());

        Ok(Self {
            id,
            exercise_id: config.exercise.clone(),
            kind,
            started_at: Utc::now(),
            counter,
            lock,
            announcer: Announcer::new(config.announce_cooldown_ms),
            first_frame_ms: None,
            last_frame_ms: 0,
        })
    }

    /// Run one frame through the pipeline
    pub fn handle_frame(&mut self, frame: Option<&LandmarkSet>, timestamp_ms: u64) -> SessionTick {
        let mut announcements = Vec::new();
        if self.first_frame_ms.is_none() {
            self.first_frame_ms = Some(timestamp_ms);
            announcements.extend(self.announcer.session_started(self.kind, timestamp_ms));
        }
        self.last_frame_ms = self.last_frame_ms.max(timestamp_ms);

        let (status, passed) = self.lock.apply(frame);
        let update = self.counter.process_frame(passed, &self.exercise_id);

        if let Some(rep) = &update.completed_rep {
            announcements.extend(self.announcer.rep_completed(rep.number, timestamp_ms));
        } else if update.processed {
            announcements.extend(self.announcer.cue(&update.feedback, timestamp_ms));
        }

        SessionTick {
            status,
            update,
            announcements,
        }
    }

    /// Lock onto the subject seen in the most recent unlocked frame
    pub fn lock_current(&mut self, now_ms: u64) -> Result<Option<Announcement>, TrackerError> {
        self.lock.lock_latest()?;
        Ok(self.announcer.person_locked(now_ms))
    }

    /// Lock onto an explicit descriptor
    pub fn lock(&mut self, target: PoseDescriptor, now_ms: u64) -> Option<Announcement> {
        self.lock.lock(target);
        self.announcer.person_locked(now_ms)
    }

    pub fn unlock(&mut self, now_ms: u64) -> Option<Announcement> {
        self.lock.unlock();
        self.announcer.person_unlocked(now_ms)
    }

    /// Restart counting and drop any lock; the session itself continues
    pub fn reset(&mut self) {
        info!("Session {} reset after {} reps", self.id, self.counter.rep_count());
        self.counter.reset();
        self.lock.clear();
        self.announcer.reset();
    }

    /// End the session and build its report
    pub fn finish(mut self) -> (SessionReport, Option<Announcement>) {
        let duration_secs = self
            .first_frame_ms
            .map(|first| self.last_frame_ms.saturating_sub(first) / 1000)
            .unwrap_or(0);

        let report = SessionReport::new(
            self.id,
            self.kind,
            self.started_at,
            self.counter.rep_accuracies().to_vec(),
            self.counter.accuracy(),
            duration_secs,
        );
        info!(
            "Session {} finished: {} reps, accuracy {}%, {}",
            self.id,
            report.reps_completed,
            report.accuracy_score,
            report.formatted_duration()
        );

        let closing = self.announcer.session_finished(self.last_frame_ms);
        (report, closing)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn counter(&self) -> &RepCounter {
        &self.counter
    }

    pub fn person_lock(&self) -> &PersonLock {
        &self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Timestamp of the latest frame seen
    pub fn last_timestamp_ms(&self) -> u64 {
        self.last_frame_ms
    }
}
