//! Task lifecycle
//!
//! Tasks move through eight ordered stages. Any stage may follow any other;
//! the ordering only matters for progress and for detecting completion.

use serde::{Deserialize, Serialize};
use std::fmt;
use tp_core::error::TpError;

/// Lifecycle stage of a task, stored as an integer in `0..=7`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum TaskState {
    #[default]
    New = 0,
    Assigned = 1,
    InProgress = 2,
    CodeReview = 3,
    Testing = 4,
    Fixing = 5,
    Ready = 6,
    Completed = 7,
}

/// Display information for a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateInfo {
    pub value: i32,
    pub label: &'static str,
    pub color: &'static str,
}

impl TaskState {
    /// All stages in lifecycle order
    pub const ALL: [TaskState; 8] = [
        TaskState::New,
        TaskState::Assigned,
        TaskState::InProgress,
        TaskState::CodeReview,
        TaskState::Testing,
        TaskState::Fixing,
        TaskState::Ready,
        TaskState::Completed,
    ];

    /// Value of the final stage; denominator of the progress percentage
    pub const LAST_STAGE: i32 = 7;

    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskState::New => "New",
            TaskState::Assigned => "Assigned",
            TaskState::InProgress => "In progress",
            TaskState::CodeReview => "Code review",
            TaskState::Testing => "Testing",
            TaskState::Fixing => "Fixing",
            TaskState::Ready => "Ready",
            TaskState::Completed => "Completed",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            TaskState::New => "#94a3b8",
            TaskState::Assigned => "#60a5fa",
            TaskState::InProgress => "#fbbf24",
            TaskState::CodeReview => "#a78bfa",
            TaskState::Testing => "#fb923c",
            TaskState::Fixing => "#f87171",
            TaskState::Ready => "#4ade80",
            TaskState::Completed => "#22c55e",
        }
    }

    pub fn info(self) -> StateInfo {
        StateInfo {
            value: self.value(),
            label: self.label(),
            color: self.color(),
        }
    }

    /// Progress percentage, `round(state / 7 * 100)`
    pub fn progress(self) -> i32 {
        (f64::from(self.value()) / f64::from(Self::LAST_STAGE) * 100.0).round() as i32
    }

    pub fn is_completed(self) -> bool {
        self == TaskState::Completed
    }
}

impl TryFrom<i32> for TaskState {
    type Error = TpError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(TpError::InvalidState(value))
    }
}

impl From<TaskState> for i32 {
    fn from(state: TaskState) -> Self {
        state.value()
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
