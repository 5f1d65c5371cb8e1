//! Create Service for Tasks

use std::sync::Arc;
use tp_contracts::{Contract, CreateTaskContract};
use tp_db::{DeveloperStore, ProjectStore, TaskStore};
use tp_models::{CreateTaskDto, Task};

use super::resolve_references;
use crate::result::ServiceResult;

/// Service for creating tasks
pub struct CreateTaskService {
    tasks: Arc<dyn TaskStore>,
    projects: Arc<dyn ProjectStore>,
    developers: Arc<dyn DeveloperStore>,
}

impl CreateTaskService {
    pub fn new(
        tasks: Arc<dyn TaskStore>,
        projects: Arc<dyn ProjectStore>,
        developers: Arc<dyn DeveloperStore>,
    ) -> Self {
        Self {
            tasks,
            projects,
            developers,
        }
    }

    /// Execute the create operation
    pub async fn call(&self, dto: CreateTaskDto) -> ServiceResult<Task> {
        let references = match resolve_references(
            self.projects.as_ref(),
            self.developers.as_ref(),
            Some(dto.project),
            dto.developer,
        )
        .await
        {
            Ok(references) => references,
            Err(failure) => return failure,
        };

        if let Err(errors) = CreateTaskContract::new(references).validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.tasks.create(dto).await {
            Ok(task) => {
                tracing::info!(task_id = task.id, project_id = task.project, "Task created");
                ServiceResult::success(task)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create task");
                ServiceResult::persistence(e)
            }
        }
    }
}
