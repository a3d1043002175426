//! Progress helpers shared with the session-submission collaborator

use chrono::{NaiveDate, Weekday};
use exercise::ExerciseKind;

use ExerciseKind::{Lunge, Pushup, Squat};

/// Accuracy change versus the previous session of the same exercise,
/// rounded to two decimals. Zero when there is no previous session.
pub fn improvement_percentage(current: f32, previous: Option<f32>) -> f32 {
    match previous {
        Some(prev) => ((current - prev) * 100.0).round() / 100.0,
        None => 0.0,
    }
}

/// Streak after training on `today`, given the last session day and its streak.
///
/// Same day keeps the streak, the next day extends it, a gap restarts at 1.
pub fn next_streak(last: Option<(NaiveDate, u32)>, today: NaiveDate) -> u32 {
    match last {
        Some((day, streak)) => match (today - day).num_days() {
            0 => streak.max(1),
            1 => streak + 1,
            _ => 1,
        },
        None => 1,
    }
}

/// Rotating workout plan so each weekday feels different
pub fn todays_plan(weekday: Weekday) -> &'static [ExerciseKind] {
    match weekday {
        Weekday::Sun => &[Squat, Pushup],
        Weekday::Mon => &[Lunge, Squat],
        Weekday::Tue => &[Pushup, Lunge],
        Weekday::Wed => &[Squat, Pushup, Lunge],
        Weekday::Thu => &[Lunge, Pushup],
        Weekday::Fri => &[Squat, Lunge],
        Weekday::Sat => &[Pushup, Squat],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_improvement() {
        assert_eq!(improvement_percentage(85.0, Some(80.0)), 5.0);
        assert_eq!(improvement_percentage(70.0, Some(80.0)), -10.0);
        assert_eq!(improvement_percentage(70.0, None), 0.0);
        assert!((improvement_percentage(80.126, Some(80.0)) - 0.13).abs() < 1e-4);
    }

    #[test]
    fn test_streak() {
        let last = day(2026, 3, 10);

        assert_eq!(next_streak(None, last), 1);
        assert_eq!(next_streak(Some((last, 4)), day(2026, 3, 10)), 4);
        assert_eq!(next_streak(Some((last, 4)), day(2026, 3, 11)), 5);
        assert_eq!(next_streak(Some((last, 4)), day(2026, 3, 13)), 1);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        assert_eq!(next_streak(Some((day(2026, 2, 28), 2)), day(2026, 3, 1)), 3);
    }

    #[test]
    fn test_plan() {
        assert_eq!(todays_plan(Weekday::Wed), &[Squat, Pushup, Lunge]);
        assert_eq!(todays_plan(Weekday::Sun), &[Squat, Pushup]);
        assert!(todays_plan(Weekday::Mon).contains(&Lunge));
    }
}
