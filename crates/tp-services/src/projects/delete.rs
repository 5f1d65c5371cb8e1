//! Delete Service for Projects

use std::sync::Arc;
use tp_core::traits::Id;
use tp_db::ProjectStore;
use tp_models::Project;

use crate::result::ServiceResult;

/// Service for deleting projects
pub struct DeleteProjectService {
    projects: Arc<dyn ProjectStore>,
}

impl DeleteProjectService {
    pub fn new(projects: Arc<dyn ProjectStore>) -> Self {
        Self { projects }
    }

    /// Execute the delete operation
    pub async fn call(&self, id: Id) -> ServiceResult<()> {
        match self.projects.delete(id).await {
            Ok(()) => {
                tracing::info!(project_id = id, "Project deleted");
                ServiceResult::success(())
            }
            Err(e) if e.is_not_found() => ServiceResult::not_found::<Project>(id),
            Err(e) => {
                tracing::error!(project_id = id, error = %e, "Failed to delete project");
                ServiceResult::persistence(e)
            }
        }
    }
}
