//! Deadline pacing
//!
//! Given a deadline and the current stage, works out how much of the
//! remaining work has to be done per day and classifies the task.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tp_models::TaskState;

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Above this daily pace a task is critical
pub const CRITICAL_SPEED: f64 = 20.0;
/// Above this daily pace a task is behind
pub const BEHIND_SPEED: f64 = 14.0;
/// Above this daily pace a task is on track; at or below it, ahead
pub const ON_TRACK_SPEED: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PacingStatus {
    Ahead,
    OnTrack,
    Behind,
    Critical,
}

/// Pacing of a single task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PacingResult {
    pub days_left: i64,
    pub current_progress: i32,
    /// Percentage of the whole task to finish per day
    pub required_speed: f64,
    pub status: PacingStatus,
    pub message: String,
}

impl PacingResult {
    fn without_deadline() -> Self {
        Self {
            days_left: 0,
            current_progress: 0,
            required_speed: 0.0,
            status: PacingStatus::OnTrack,
            message: "No deadline set".to_string(),
        }
    }
}

/// Evaluate how a task is doing against its deadline
pub fn evaluate_pacing(
    deadline: Option<DateTime<Utc>>,
    state: TaskState,
    now: DateTime<Utc>,
) -> PacingResult {
    let Some(deadline) = deadline else {
        return PacingResult::without_deadline();
    };

    let remaining_ms = (deadline - now).num_milliseconds() as f64;
    let days_left = (remaining_ms / MS_PER_DAY).ceil() as i64;
    let current_progress = state.progress();
    let required_speed = if days_left > 0 {
        f64::from(100 - current_progress) / days_left as f64
    } else {
        100.0
    };

    let (status, message) = if days_left < 0 {
        let overdue = days_left.unsigned_abs();
        let unit = if overdue == 1 { "day" } else { "days" };
        (
            PacingStatus::Critical,
            format!("Overdue by {overdue} {unit}! Finish urgently."),
        )
    } else if days_left == 0 {
        (
            PacingStatus::Critical,
            "Due today! The task must be finished.".to_string(),
        )
    } else if current_progress >= 100 {
        (
            PacingStatus::Ahead,
            "Task completed ahead of schedule!".to_string(),
        )
    } else if required_speed > CRITICAL_SPEED {
        (
            PacingStatus::Critical,
            format!("Critically behind! Need to complete {required_speed:.1}% of the work per day."),
        )
    } else if required_speed > BEHIND_SPEED {
        (
            PacingStatus::Behind,
            format!("Behind schedule. {required_speed:.1}% of the work per day is required."),
        )
    } else if required_speed > ON_TRACK_SPEED {
        (
            PacingStatus::OnTrack,
            format!("On schedule. {required_speed:.1}% of the work per day is required."),
        )
    } else {
        (
            PacingStatus::Ahead,
            format!("Ahead of schedule! {required_speed:.1}% of the work per day is sufficient."),
        )
    };

    PacingResult {
        days_left,
        current_progress,
        required_speed,
        status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_no_deadline() {
        for state in TaskState::ALL {
            let pacing = evaluate_pacing(None, state, now());
            assert_eq!(pacing.days_left, 0);
            assert_eq!(pacing.current_progress, 0);
            assert_eq!(pacing.required_speed, 0.0);
            assert_eq!(pacing.status, PacingStatus::OnTrack);
        }
    }

    #[test]
    fn test_days_left_rounds_up() {
        let pacing = evaluate_pacing(Some(now() + Duration::hours(12)), TaskState::New, now());
        assert_eq!(pacing.days_left, 1);
        assert_eq!(pacing.current_progress, 0);
        assert_eq!(pacing.required_speed, 100.0);
        assert_eq!(pacing.status, PacingStatus::Critical);
    }

    #[test]
    fn test_three_days_in_progress_is_critical() {
        let pacing = evaluate_pacing(Some(now() + Duration::days(3)), TaskState::InProgress, now());
        assert_eq!(pacing.days_left, 3);
        assert_eq!(pacing.current_progress, 29);
        assert!((pacing.required_speed - 23.666).abs() < 0.01);
        assert_eq!(pacing.status, PacingStatus::Critical);
        assert_eq!(
            pacing.message,
            "Critically behind! Need to complete 23.7% of the work per day."
        );
    }

    #[test]
    fn test_overdue() {
        let pacing = evaluate_pacing(Some(now() - Duration::days(1)), TaskState::Testing, now());
        assert_eq!(pacing.days_left, -1);
        assert_eq!(pacing.required_speed, 100.0);
        assert_eq!(pacing.status, PacingStatus::Critical);
        assert_eq!(pacing.message, "Overdue by 1 day! Finish urgently.");

        let later = evaluate_pacing(Some(now() - Duration::days(4)), TaskState::Testing, now());
        assert_eq!(later.message, "Overdue by 4 days! Finish urgently.");
    }

    #[test]
    fn test_due_today_wins_over_speed() {
        let pacing = evaluate_pacing(Some(now()), TaskState::New, now());
        assert_eq!(pacing.days_left, 0);
        assert_eq!(pacing.status, PacingStatus::Critical);
        assert_eq!(pacing.message, "Due today! The task must be finished.");

        let completed = evaluate_pacing(Some(now() - Duration::hours(3)), TaskState::Completed, now());
        assert_eq!(completed.days_left, 0);
        assert_eq!(completed.status, PacingStatus::Critical);
    }

    #[test]
    fn test_completed_before_deadline() {
        let pacing = evaluate_pacing(Some(now() + Duration::days(2)), TaskState::Completed, now());
        assert_eq!(pacing.current_progress, 100);
        assert_eq!(pacing.status, PacingStatus::Ahead);
        assert_eq!(pacing.message, "Task completed ahead of schedule!");
    }

    #[test]
    fn test_thresholds() {
        // 100% over 6 days: 16.7 per day
        let behind = evaluate_pacing(Some(now() + Duration::days(6)), TaskState::New, now());
        assert_eq!(behind.status, PacingStatus::Behind);
        assert_eq!(behind.message, "Behind schedule. 16.7% of the work per day is required.");

        // 100% over 8 days: 12.5 per day
        let on_track = evaluate_pacing(Some(now() + Duration::days(8)), TaskState::New, now());
        assert_eq!(on_track.status, PacingStatus::OnTrack);

        // 100% over 10 days: exactly 10.0 per day is not above the threshold
        let ahead = evaluate_pacing(Some(now() + Duration::days(10)), TaskState::New, now());
        assert_eq!(ahead.status, PacingStatus::Ahead);
        assert_eq!(
            ahead.message,
            "Ahead of schedule! 10.0% of the work per day is sufficient."
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(PacingStatus::OnTrack).unwrap();
        assert_eq!(json, "on-track");

        let pacing = evaluate_pacing(None, TaskState::New, now());
        let json = serde_json::to_value(pacing).unwrap();
        assert_eq!(json["daysLeft"], 0);
        assert_eq!(json["status"], "on-track");
    }
}
