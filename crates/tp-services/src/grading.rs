//! Grade adjustment on task completion
//!
//! Finishing a task moves the assigned developer's grade: +5 when the task
//! is done on time (or has no deadline), -30 when it is overdue. Grades never
//! drop below zero.

use chrono::{DateTime, Utc};
use tp_models::{parse_grade, TaskState};

/// Bonus for finishing on time
pub const ON_TIME_BONUS: i64 = 5;

/// Penalty for finishing after the deadline
pub const OVERDUE_PENALTY: i64 = 30;

/// Whether moving from `old_state` to `new_state` completes the task
pub fn completes(old_state: TaskState, new_state: TaskState) -> bool {
    new_state.is_completed() && !old_state.is_completed()
}

/// New grade for the developer, or `None` when the transition does not
/// complete the task
pub fn adjust_grade_on_completion(
    old_state: TaskState,
    new_state: TaskState,
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    current_grade: i64,
) -> Option<i64> {
    if !completes(old_state, new_state) {
        return None;
    }

    let overdue = deadline.is_some_and(|deadline| deadline < now);
    let new_grade = if overdue {
        current_grade.saturating_sub(OVERDUE_PENALTY).max(0)
    } else {
        current_grade.saturating_add(ON_TIME_BONUS)
    };

    Some(new_grade)
}

/// Same as [`adjust_grade_on_completion`] for a grade stored as text
pub fn adjust_grade_text(
    old_state: TaskState,
    new_state: TaskState,
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    grade: &str,
) -> Option<String> {
    adjust_grade_on_completion(old_state, new_state, deadline, now, parse_grade(grade))
        .map(|grade| grade.to_string())
}
