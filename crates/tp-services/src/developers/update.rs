//! Update Service for Developers

use std::sync::Arc;
use tp_contracts::{Contract, UpdateDeveloperContract};
use tp_core::traits::Id;
use tp_db::{DeveloperStore, ProjectStore};
use tp_models::{Developer, UpdateDeveloperDto};

use super::project_exists;
use crate::result::ServiceResult;

/// Service for updating developers
pub struct UpdateDeveloperService {
    developers: Arc<dyn DeveloperStore>,
    projects: Arc<dyn ProjectStore>,
}

impl UpdateDeveloperService {
    pub fn new(developers: Arc<dyn DeveloperStore>, projects: Arc<dyn ProjectStore>) -> Self {
        Self {
            developers,
            projects,
        }
    }

    /// Execute the update operation
    pub async fn call(&self, id: Id, dto: UpdateDeveloperDto) -> ServiceResult<Developer> {
        let exists = match project_exists(self.projects.as_ref(), dto.project.flatten()).await {
            Ok(exists) => exists,
            Err(failure) => return failure,
        };

        if let Err(errors) = UpdateDeveloperContract::new(exists).validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.developers.update(id, dto).await {
            Ok(developer) => ServiceResult::success(developer),
            Err(e) if e.is_not_found() => ServiceResult::not_found::<Developer>(id),
            Err(e) => {
                tracing::error!(developer_id = id, error = %e, "Failed to update developer");
                ServiceResult::persistence(e)
            }
        }
    }
}
