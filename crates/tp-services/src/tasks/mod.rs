//! Task services
//!
//! Updating a task is the only write with a side effect: moving a task into
//! [`TaskState::Completed`](tp_models::TaskState::Completed) adjusts the grade
//! of the developer it was assigned to.

mod create;
mod delete;
mod update;

pub use create::CreateTaskService;
pub use delete::DeleteTaskService;
pub use update::{GradeChange, TaskUpdateOutcome, UpdateTaskService};

use tp_contracts::TaskReferences;
use tp_core::traits::Id;
use tp_db::{DeveloperStore, ProjectStore};

use crate::result::ServiceResult;

/// Resolve whether the project and developer a task points at exist
pub(crate) async fn resolve_references<T>(
    projects: &dyn ProjectStore,
    developers: &dyn DeveloperStore,
    project: Option<Id>,
    developer: Option<Id>,
) -> Result<TaskReferences, ServiceResult<T>> {
    let project_exists = match project {
        Some(id) => projects.exists(id).await.map_err(ServiceResult::persistence)?,
        None => true,
    };
    let developer_exists = match developer {
        Some(id) => developers.exists(id).await.map_err(ServiceResult::persistence)?,
        None => true,
    };

    Ok(TaskReferences {
        project_exists,
        developer_exists,
    })
}
