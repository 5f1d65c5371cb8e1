//! Read models for the role views
//!
//! Tasks are shown together with their lifecycle label and pacing; the
//! customer overview adds a completion summary per project.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tp_models::{Project, StateInfo, Task, TaskState};

use crate::pacing::{evaluate_pacing, PacingResult};

/// A task as displayed: the record, its stage and its pacing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub state_info: StateInfo,
    pub progress: i32,
    pub pacing: PacingResult,
}

impl TaskView {
    pub fn new(task: Task, now: DateTime<Utc>) -> Self {
        let pacing = evaluate_pacing(task.deadline, task.state, now);
        Self {
            state_info: task.state.info(),
            progress: task.progress(),
            pacing,
            task,
        }
    }

    pub fn from_tasks(tasks: Vec<Task>, now: DateTime<Utc>) -> Vec<Self> {
        tasks.into_iter().map(|task| Self::new(task, now)).collect()
    }
}

/// Number of tasks in one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateCount {
    #[serde(flatten)]
    pub state: StateInfo,
    pub count: usize,
}

/// Completion figures for a set of tasks
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub total: usize,
    pub completed: usize,
    /// Mean progress over all tasks, 0 when there are none
    pub average_progress: f64,
    /// One entry per stage, in lifecycle order
    pub by_state: Vec<StateCount>,
}

impl CompletionSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let by_state = TaskState::ALL
            .iter()
            .map(|state| StateCount {
                state: state.info(),
                count: tasks.iter().filter(|t| t.state == *state).count(),
            })
            .collect();

        let average_progress = if tasks.is_empty() {
            0.0
        } else {
            let sum: i64 = tasks.iter().map(|t| i64::from(t.progress())).sum();
            sum as f64 / tasks.len() as f64
        };

        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.is_completed()).count(),
            average_progress,
            by_state,
        }
    }
}

/// Customer view of a project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub project: Project,
    pub summary: CompletionSummary,
    pub tasks: Vec<TaskView>,
}

impl ProjectOverview {
    pub fn new(project: Project, tasks: Vec<Task>, now: DateTime<Utc>) -> Self {
        Self {
            project,
            summary: CompletionSummary::from_tasks(&tasks),
            tasks: TaskView::from_tasks(tasks, now),
        }
    }
}
