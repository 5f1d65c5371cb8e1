//! Developer services
//!
//! Developers are created and edited but never deleted.

mod create;
mod update;

pub use create::CreateDeveloperService;
pub use update::UpdateDeveloperService;

use tp_core::traits::Id;
use tp_db::ProjectStore;

use crate::result::ServiceResult;

/// Whether the project a developer should join exists; `true` for the bench
pub(crate) async fn project_exists<T>(
    projects: &dyn ProjectStore,
    project: Option<Id>,
) -> Result<bool, ServiceResult<T>> {
    match project {
        Some(id) => projects.exists(id).await.map_err(ServiceResult::persistence),
        None => Ok(true),
    }
}
