//! Team staffing
//!
//! A developer can be staffed on one project at a time. Only benched
//! developers can join a team.

use std::sync::Arc;
use tp_core::traits::Id;
use tp_db::{DeveloperStore, ProjectStore};
use tp_models::{Developer, Project, UpdateDeveloperDto};

use crate::result::ServiceResult;

/// Service for moving developers between the bench and a project
pub struct TeamService {
    projects: Arc<dyn ProjectStore>,
    developers: Arc<dyn DeveloperStore>,
}

impl TeamService {
    pub fn new(projects: Arc<dyn ProjectStore>, developers: Arc<dyn DeveloperStore>) -> Self {
        Self {
            projects,
            developers,
        }
    }

    async fn load(&self, project_id: Id, developer_id: Id) -> Result<Developer, ServiceResult<Developer>> {
        match self.projects.exists(project_id).await {
            Ok(true) => {}
            Ok(false) => return Err(ServiceResult::not_found::<Project>(project_id)),
            Err(e) => return Err(ServiceResult::persistence(e)),
        }

        match self.developers.find_by_id(developer_id).await {
            Ok(Some(developer)) => Ok(developer),
            Ok(None) => Err(ServiceResult::not_found::<Developer>(developer_id)),
            Err(e) => Err(ServiceResult::persistence(e)),
        }
    }

    async fn move_to(&self, developer_id: Id, project: Option<Id>) -> ServiceResult<Developer> {
        match self
            .developers
            .update(developer_id, UpdateDeveloperDto::with_project(project))
            .await
        {
            Ok(developer) => {
                tracing::info!(developer_id, project_id = ?project, "Developer staffing changed");
                ServiceResult::success(developer)
            }
            Err(e) if e.is_not_found() => ServiceResult::not_found::<Developer>(developer_id),
            Err(e) => {
                tracing::error!(developer_id, error = %e, "Failed to change staffing");
                ServiceResult::persistence(e)
            }
        }
    }

    /// Staff a benched developer on a project
    pub async fn attach(&self, project_id: Id, developer_id: Id) -> ServiceResult<Developer> {
        let developer = match self.load(project_id, developer_id).await {
            Ok(developer) => developer,
            Err(failure) => return failure,
        };

        if developer.is_staffed_on(project_id) {
            return ServiceResult::success(developer);
        }
        if !developer.is_benched() {
            return ServiceResult::failure_with_error(
                "project",
                "developer is already staffed on another project",
            );
        }

        self.move_to(developer_id, Some(project_id)).await
    }

    /// Return a developer of this project to the bench
    pub async fn detach(&self, project_id: Id, developer_id: Id) -> ServiceResult<Developer> {
        let developer = match self.load(project_id, developer_id).await {
            Ok(developer) => developer,
            Err(failure) => return failure,
        };

        if !developer.is_staffed_on(project_id) {
            return ServiceResult::failure_with_error(
                "project",
                "developer is not staffed on this project",
            );
        }

        self.move_to(developer_id, None).await
    }
}
