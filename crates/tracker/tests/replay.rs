use std::io::Write;

use exercise::ExerciseKind;
use pose_geometry::fixtures::{pushup_pose, squat_pose, PoseBuilder};
use pose_geometry::LandmarkSet;
use tracker::replay::RecordedFrame;
use tracker::{replay_file, run_replay, ReplayEvent, TrackerConfig};

fn frame(t_ms: u64, landmarks: LandmarkSet) -> String {
    serde_json::to_string(&ReplayEvent::Frame(RecordedFrame {
        t_ms,
        landmarks: Some(landmarks),
    }))
    .unwrap()
}

fn config(exercise: &str) -> TrackerConfig {
    TrackerConfig {
        exercise: exercise.to_string(),
        ..TrackerConfig::default()
    }
}

#[tokio::test]
async fn squat_session_with_bad_back() {
    let lines = [
        frame(0, squat_pose(170.0, 170.0)),
        frame(400, squat_pose(80.0, 120.0)),
        frame(900, squat_pose(170.0, 170.0)),
        frame(1400, squat_pose(80.0, 170.0)),
        frame(1900, squat_pose(170.0, 170.0)),
        frame(2400, squat_pose(80.0, 170.0)),
        frame(2900, squat_pose(170.0, 170.0)),
    ];

    let outcome = run_replay(lines.join("\n").as_bytes(), &config("squat")).await.unwrap();
    let report = outcome.report;

    assert_eq!(report.exercise, ExerciseKind::Squat);
    assert_eq!(report.rep_accuracies, vec![60, 80, 80]);
    assert_eq!(report.accuracy_score, 73);
    assert_eq!(report.summary, "3 squats completed. Keep practicing your form!");

    let spoken: Vec<&str> = outcome.announcements.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(
        spoken,
        vec![
            "Starting squat session. Good luck!",
            "Keep your back straight!",
            "1",
            "2",
            "3",
            "Session complete. Great work today!",
        ]
    );
}

#[tokio::test]
async fn locked_session_ignores_second_person() {
    let stranger = |knee: f32| PoseBuilder::new().knee(knee).offset(0.45, 0.0).build();
    let lines = [
        frame(0, squat_pose(170.0, 170.0)),
        "\"lock\"".to_string(),
        frame(100, stranger(80.0)),
        frame(200, stranger(170.0)),
        frame(300, squat_pose(80.0, 170.0)),
        frame(400, squat_pose(170.0, 170.0)),
        "\"unlock\"".to_string(),
        frame(500, stranger(80.0)),
        frame(600, stranger(170.0)),
    ];

    let outcome = run_replay(lines.join("\n").as_bytes(), &config("squat")).await.unwrap();

    assert_eq!(outcome.frames, 7);
    assert_eq!(outcome.person_lost_frames, 2);
    assert_eq!(outcome.report.reps_completed, 2);
    assert!(outcome
        .announcements
        .iter()
        .any(|a| a.text == "Person locked. Tracking you only."));
    assert!(outcome.announcements.iter().any(|a| a.text == "Tracking unlocked."));
}

#[tokio::test]
async fn reset_starts_counting_over() {
    let lines = [
        frame(0, pushup_pose(165.0, 170.0)),
        frame(300, pushup_pose(70.0, 170.0)),
        frame(600, pushup_pose(165.0, 170.0)),
        "\"reset\"".to_string(),
        frame(900, pushup_pose(70.0, 170.0)),
        frame(1200, pushup_pose(165.0, 170.0)),
        frame(1500, pushup_pose(70.0, 140.0)),
        frame(1800, pushup_pose(165.0, 170.0)),
    ];

    let outcome = run_replay(lines.join("\n").as_bytes(), &config("Push-Up")).await.unwrap();

    assert_eq!(outcome.report.exercise, ExerciseKind::Pushup);
    assert_eq!(outcome.report.rep_accuracies, vec![60]);
    assert_eq!(outcome.report.summary, "1 push-ups completed. Keep practicing your form!");
}

#[tokio::test]
async fn replay_from_file() {
    let path = std::env::temp_dir().join(format!("reptrack-replay-{}.jsonl", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        for line in [
            frame(0, squat_pose(170.0, 170.0)),
            frame(1000, squat_pose(80.0, 170.0)),
            frame(2000, squat_pose(170.0, 170.0)),
        ] {
            writeln!(file, "{}", line).unwrap();
        }
    }

    let outcome = replay_file(&path, &TrackerConfig::default()).await.unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(outcome.report.reps_completed, 1);
    assert_eq!(outcome.report.duration_secs, 2);
}
