//! Update Service for Tasks

use serde::Serialize;
use std::sync::Arc;
use tp_contracts::{Contract, UpdateTaskContract};
use tp_core::traits::Id;
use tp_db::{DeveloperStore, ProjectStore, TaskStore};
use tp_models::{Task, TaskState, UpdateTaskDto};

use super::resolve_references;
use crate::grading::{adjust_grade_on_completion, completes};
use crate::result::ServiceResult;
use crate::SharedClock;

/// Grade written back for the developer of a completed task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeChange {
    pub developer_id: Id,
    pub old_grade: i64,
    pub new_grade: i64,
}

/// Updated task plus the grade change it caused, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateOutcome {
    pub task: Task,
    pub grade_change: Option<GradeChange>,
}

/// Service for updating tasks
///
/// # Example
/// ```ignore
/// let service = UpdateTaskService::new(tasks, projects, developers, clock);
/// let outcome = service
///     .call(task_id, UpdateTaskDto::with_state(TaskState::Completed))
///     .await
///     .into_result()?;
/// ```
pub struct UpdateTaskService {
    tasks: Arc<dyn TaskStore>,
    projects: Arc<dyn ProjectStore>,
    developers: Arc<dyn DeveloperStore>,
    clock: SharedClock,
}

impl UpdateTaskService {
    pub fn new(
        tasks: Arc<dyn TaskStore>,
        projects: Arc<dyn ProjectStore>,
        developers: Arc<dyn DeveloperStore>,
        clock: SharedClock,
    ) -> Self {
        Self {
            tasks,
            projects,
            developers,
            clock,
        }
    }

    /// Execute the update operation
    ///
    /// The task is written first. The developer grade is only touched when
    /// that write succeeded, the request carried a state, and the task was
    /// assigned before the update. A failed grade write is logged and does
    /// not fail the call.
    pub async fn call(&self, id: Id, dto: UpdateTaskDto) -> ServiceResult<TaskUpdateOutcome> {
        let previous = match self.tasks.find_by_id(id).await {
            Ok(Some(task)) => task,
            Ok(None) => return ServiceResult::not_found::<Task>(id),
            Err(e) => {
                tracing::error!(task_id = id, error = %e, "Failed to load task for update");
                return ServiceResult::persistence(e);
            }
        };

        let references = match resolve_references(
            self.projects.as_ref(),
            self.developers.as_ref(),
            dto.project,
            dto.developer.flatten(),
        )
        .await
        {
            Ok(references) => references,
            Err(failure) => return failure,
        };

        if let Err(errors) = UpdateTaskContract::new(references).validate(&dto) {
            return ServiceResult::failure(errors);
        }

        let requested_state = dto.state;
        let task = match self.tasks.update(id, dto).await {
            Ok(task) => task,
            Err(e) if e.is_not_found() => return ServiceResult::not_found::<Task>(id),
            Err(e) => {
                tracing::error!(task_id = id, error = %e, "Failed to update task");
                return ServiceResult::persistence(e);
            }
        };

        let grade_change = match (requested_state, previous.developer) {
            (Some(new_state), Some(developer_id)) if completes(previous.state, new_state) => {
                self.adjust_grade(&previous, developer_id, new_state).await
            }
            _ => None,
        };

        ServiceResult::success(TaskUpdateOutcome { task, grade_change })
    }

    async fn adjust_grade(
        &self,
        previous: &Task,
        developer_id: Id,
        new_state: TaskState,
    ) -> Option<GradeChange> {
        let developer = match self.developers.find_by_id(developer_id).await {
            Ok(Some(developer)) => developer,
            Ok(None) => {
                tracing::warn!(developer_id, "Developer of completed task no longer exists");
                return None;
            }
            Err(e) => {
                tracing::warn!(developer_id, error = %e, "Could not load developer for grade update");
                return None;
            }
        };

        let old_grade = developer.grade_value();
        let new_grade = adjust_grade_on_completion(
            previous.state,
            new_state,
            previous.deadline,
            self.clock.utc(),
            old_grade,
        )?;

        if let Err(e) = self.developers.update_grade(developer_id, new_grade).await {
            tracing::warn!(developer_id, error = %e, "Grade update failed; task update kept");
            return None;
        }

        tracing::debug!(
            task_id = previous.id,
            developer_id,
            old_grade,
            new_grade,
            "Adjusted developer grade on task completion"
        );

        Some(GradeChange {
            developer_id,
            old_grade,
            new_grade,
        })
    }
}
