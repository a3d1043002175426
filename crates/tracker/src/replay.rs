//! JSON-lines replay of recorded landmark streams
//!
//! One event per line:
//!
//! ```text
//! {"frame": {"t_ms": 0, "landmarks": [{"x": 0.5, "y": 0.4, "visibility": 0.9}, ...]}}
//! {"frame": {"t_ms": 33, "landmarks": null}}
//! "lock"
//! {"lock_target": {"cx": 0.5, "cy": 0.5, "size": 0.2}}
//! "unlock"
//! "reset"
//! ```

use std::path::Path;

use coaching::{Announcement, SessionReport};
use metrics::counter;
use person_lock::PoseDescriptor;
use pose_geometry::LandmarkSet;
use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::{TrackerConfig, TrackerError, TrackingSession};

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub t_ms: u64,
    /// `null` when the estimator saw nobody
    #[serde(default)]
    pub landmarks: Option<LandmarkSet>,
}

/// Replay input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayEvent {
    Frame(RecordedFrame),
    Lock,
    LockTarget(PoseDescriptor),
    Unlock,
    Reset,
}

impl ReplayEvent {
    /// Parse one line; `None` for blank lines
    pub fn parse(line: &str, line_number: usize) -> Result<Option<Self>, TrackerError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(line)
            .map(Some)
            .map_err(|source| TrackerError::Replay {
                line: line_number,
                source,
            })
    }
}

/// What a replay produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    pub report: SessionReport,
    pub frames: u64,
    /// Frames withheld by the person lock
    pub person_lost_frames: u64,
    /// Everything that would have been spoken, in order
    pub announcements: Vec<Announcement>,
}

/// Drive a tracking session from a JSON-lines stream
pub async fn run_replay<R>(reader: R, config: &TrackerConfig) -> Result<ReplayOutcome, TrackerError>
where
    R: AsyncBufRead + Unpin,
{
    let mut session = TrackingSession::new(config)?;
    let mut announcements = Vec::new();
    let mut frames = 0u64;
    let mut person_lost_frames = 0u64;

    let mut lines = reader.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let event = match ReplayEvent::parse(&line, line_number)? {
            Some(event) => event,
            None => continue,
        };
        let now_ms = session.last_timestamp_ms();

        match event {
            ReplayEvent::Frame(frame) => {
                frames += 1;
                counter!("replay_frames_total").increment(1);
                let tick = session.handle_frame(frame.landmarks.as_ref(), frame.t_ms);
                if tick.status.is_person_lost() {
                    person_lost_frames += 1;
                }
                announcements.extend(tick.announcements);
            }
            ReplayEvent::Lock => match session.lock_current(now_ms) {
                Ok(spoken) => announcements.extend(spoken),
                Err(e) => warn!("Line {}: lock ignored: {}", line_number, e),
            },
            ReplayEvent::LockTarget(target) => {
                announcements.extend(session.lock(target, now_ms));
            }
            ReplayEvent::Unlock => {
                announcements.extend(session.unlock(now_ms));
            }
            ReplayEvent::Reset => session.reset(),
        }
        debug!("Line {} replayed", line_number);
    }

    let (report, closing) = session.finish();
    announcements.extend(closing);

    info!(
        "Replay finished: {} frames, {} person lost, {} reps",
        frames, person_lost_frames, report.reps_completed
    );

    Ok(ReplayOutcome {
        report,
        frames,
        person_lost_frames,
        announcements,
    })
}

/// Replay a JSON-lines file
pub async fn replay_file(path: &Path, config: &TrackerConfig) -> Result<ReplayOutcome, TrackerError> {
    let file = File::open(path).await?;
    info!("Replaying {}", path.display());
    run_replay(BufReader::new(file), config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pose_geometry::fixtures::squat_pose;

    fn frame_line(t_ms: u64, landmarks: Option<LandmarkSet>) -> String {
        serde_json::to_string(&ReplayEvent::Frame(RecordedFrame { t_ms, landmarks })).unwrap()
    }

    #[test]
    fn test_parse_events() {
        assert_eq!(ReplayEvent::parse("\"lock\"", 1).unwrap(), Some(ReplayEvent::Lock));
        assert_eq!(ReplayEvent::parse("  ", 2).unwrap(), None);
        assert_eq!(
            ReplayEvent::parse(r#"{"frame": {"t_ms": 5, "landmarks": null}}"#, 3).unwrap(),
            Some(ReplayEvent::Frame(RecordedFrame {
                t_ms: 5,
                landmarks: None
            }))
        );
        assert_eq!(
            ReplayEvent::parse(r#"{"lock_target": {"cx": 0.5, "cy": 0.4, "size": 0.1}}"#, 4).unwrap(),
            Some(ReplayEvent::LockTarget(PoseDescriptor::new(0.5, 0.4, 0.1)))
        );
    }

    #[test]
    fn test_malformed_line_names_line_number() {
        let err = ReplayEvent::parse("{not json", 7).unwrap_err();
        assert!(matches!(err, TrackerError::Replay { line: 7, .. }));
        assert!(err.to_string().contains("line 7"));
    }

    #[tokio::test]
    async fn test_replay_counts_reps() {
        let input = [
            frame_line(0, Some(squat_pose(170.0, 170.0))),
            String::new(),
            frame_line(500, Some(squat_pose(80.0, 170.0))),
            frame_line(600, None),
            frame_line(1000, Some(squat_pose(170.0, 170.0))),
        ]
        .join("\n");

        let outcome = run_replay(input.as_bytes(), &TrackerConfig::default()).await.unwrap();

        assert_eq!(outcome.frames, 4);
        assert_eq!(outcome.report.reps_completed, 1);
        assert_eq!(outcome.report.accuracy_score, 80);
        assert_eq!(outcome.report.duration_secs, 1);
        assert!(outcome.announcements.iter().any(|a| a.text == "1"));
    }

    #[tokio::test]
    async fn test_replay_stops_on_malformed_line() {
        let input = format!("{}\n\"jump\"\n", frame_line(0, Some(squat_pose(170.0, 170.0))));
        let result = run_replay(input.as_bytes(), &TrackerConfig::default()).await;
        assert!(matches!(result, Err(TrackerError::Replay { line: 2, .. })));
    }

    #[tokio::test]
    async fn test_early_lock_is_ignored() {
        let input = format!("\"lock\"\n{}\n", frame_line(0, Some(squat_pose(170.0, 170.0))));
        let outcome = run_replay(input.as_bytes(), &TrackerConfig::default()).await.unwrap();
        assert_eq!(outcome.frames, 1);
        assert_eq!(outcome.person_lost_frames, 0);
    }
}
