//! Task model
//!
//! Table: tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tp_core::traits::{Entity, Id, Identifiable, ProjectScoped};
use validator::Validate;

use crate::serde_ext::nullable;
use crate::task_state::TaskState;

/// Unit of work owned by exactly one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,

    pub state: TaskState,

    /// Assigned developer; `None` while unassigned
    pub developer: Option<Id>,

    /// Owning project
    pub project: Id,

    pub description: String,

    pub name: String,

    /// Deadline
    #[serde(rename = "time")]
    pub deadline: Option<DateTime<Utc>>,
}

impl Identifiable for Task {
    fn id(&self) -> Id {
        self.id
    }
}

impl ProjectScoped for Task {
    fn project_id(&self) -> Option<Id> {
        Some(self.project)
    }
}

impl Entity for Task {
    const TABLE_NAME: &'static str = "tasks";
    const TYPE_NAME: &'static str = "Task";
}

impl Task {
    pub fn is_assigned(&self) -> bool {
        self.developer.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// Progress percentage derived from the lifecycle stage
    pub fn progress(&self) -> i32 {
        self.state.progress()
    }

    /// Deadline strictly before `now`
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| deadline < now)
    }
}

/// DTO for creating a task
///
/// New tasks start in [`TaskState::New`], unassigned and without a deadline
/// unless the request says otherwise.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub project: Id,

    #[serde(default)]
    pub state: TaskState,

    #[serde(default)]
    pub developer: Option<Id>,

    #[serde(default, rename = "time")]
    pub deadline: Option<DateTime<Utc>>,
}

impl CreateTaskDto {
    pub fn new(project: Id, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            project,
            state: TaskState::default(),
            developer: None,
            deadline: None,
        }
    }
}

/// DTO for a partial task update
///
/// Nullable columns use `Option<Option<_>>`: `None` leaves the column alone,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskDto {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub state: Option<TaskState>,

    /// Move the task to another project
    pub project: Option<Id>,

    #[serde(default, deserialize_with = "nullable")]
    pub developer: Option<Option<Id>>,

    #[serde(default, rename = "time", deserialize_with = "nullable")]
    pub deadline: Option<Option<DateTime<Utc>>>,
}

impl UpdateTaskDto {
    /// Update that only moves the task to another stage
    pub fn with_state(state: TaskState) -> Self {
        Self {
            state: Some(state),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.state.is_none()
            && self.project.is_none()
            && self.developer.is_none()
            && self.deadline.is_none()
    }

    /// Apply updates to a task
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(ref name) = self.name {
            task.name = name.clone();
        }
        if let Some(ref description) = self.description {
            task.description = description.clone();
        }
        if let Some(state) = self.state {
            task.state = state;
        }
        if let Some(project) = self.project {
            task.project = project;
        }
        if let Some(developer) = self.developer {
            task.developer = developer;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
    }
}
