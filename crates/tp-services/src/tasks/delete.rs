//! Delete Service for Tasks

use std::sync::Arc;
use tp_core::traits::Id;
use tp_db::TaskStore;
use tp_models::Task;

use crate::result::ServiceResult;

/// Service for deleting tasks
pub struct DeleteTaskService {
    tasks: Arc<dyn TaskStore>,
}

impl DeleteTaskService {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Execute the delete operation
    pub async fn call(&self, id: Id) -> ServiceResult<()> {
        match self.tasks.delete(id).await {
            Ok(()) => {
                tracing::info!(task_id = id, "Task deleted");
                ServiceResult::success(())
            }
            Err(e) if e.is_not_found() => ServiceResult::not_found::<Task>(id),
            Err(e) => {
                tracing::error!(task_id = id, error = %e, "Failed to delete task");
                ServiceResult::persistence(e)
            }
        }
    }
}
