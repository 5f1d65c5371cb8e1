//! Update Service for Projects

use std::sync::Arc;
use tp_contracts::{Contract, UpdateProjectContract};
use tp_core::traits::Id;
use tp_db::ProjectStore;
use tp_models::{Project, UpdateProjectDto};

use crate::result::ServiceResult;

/// Service for updating projects
pub struct UpdateProjectService {
    projects: Arc<dyn ProjectStore>,
}

impl UpdateProjectService {
    pub fn new(projects: Arc<dyn ProjectStore>) -> Self {
        Self { projects }
    }

    /// Execute the update operation
    pub async fn call(&self, id: Id, dto: UpdateProjectDto) -> ServiceResult<Project> {
        if let Err(errors) = UpdateProjectContract::new().validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.projects.update(id, dto).await {
            Ok(project) => ServiceResult::success(project),
            Err(e) if e.is_not_found() => ServiceResult::not_found::<Project>(id),
            Err(e) => {
                tracing::error!(project_id = id, error = %e, "Failed to update project");
                ServiceResult::persistence(e)
            }
        }
    }
}
