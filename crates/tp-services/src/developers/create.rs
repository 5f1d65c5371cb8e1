//! Create Service for Developers

use std::sync::Arc;
use tp_contracts::{Contract, CreateDeveloperContract};
use tp_db::{DeveloperStore, ProjectStore};
use tp_models::{CreateDeveloperDto, Developer};

use super::project_exists;
use crate::result::ServiceResult;

/// Service for creating developers
pub struct CreateDeveloperService {
    developers: Arc<dyn DeveloperStore>,
    projects: Arc<dyn ProjectStore>,
}

impl CreateDeveloperService {
    pub fn new(developers: Arc<dyn DeveloperStore>, projects: Arc<dyn ProjectStore>) -> Self {
        Self {
            developers,
            projects,
        }
    }

    /// Execute the create operation
    pub async fn call(&self, dto: CreateDeveloperDto) -> ServiceResult<Developer> {
        let exists = match project_exists(self.projects.as_ref(), dto.project).await {
            Ok(exists) => exists,
            Err(failure) => return failure,
        };

        if let Err(errors) = CreateDeveloperContract::new(exists).validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.developers.create(dto).await {
            Ok(developer) => {
                tracing::info!(developer_id = developer.id, "Developer created");
                ServiceResult::success(developer)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create developer");
                ServiceResult::persistence(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    fn dto(project: Option<i64>) -> CreateDeveloperDto {
        CreateDeveloperDto {
            last_name: "Hopper".into(),
            first_name: "Grace".into(),
            position: "Compiler engineer".into(),
            grade: "0".into(),
            project,
        }
    }

    #[tokio::test]
    async fn test_create_on_bench_and_on_project() {
        let fx = Fixture::new().await;
        let service = CreateDeveloperService::new(fx.developers(), fx.projects());

        let benched = service.call(dto(None)).await.into_result().unwrap();
        assert!(benched.is_benched());

        let staffed = service.call(dto(Some(fx.project.id))).await.into_result().unwrap();
        assert!(staffed.is_staffed_on(fx.project.id));
    }

    #[tokio::test]
    async fn test_unknown_project() {
        let fx = Fixture::new().await;
        let service = CreateDeveloperService::new(fx.developers(), fx.projects());

        let result = service.call(dto(Some(77))).await;
        assert_eq!(
            result.errors().get("project"),
            Some(&vec!["does not exist".to_string()])
        );
    }

    #[tokio::test]
    async fn test_blank_first_name() {
        let fx = Fixture::new().await;
        let service = CreateDeveloperService::new(fx.developers(), fx.projects());

        let mut dto = dto(None);
        dto.first_name = String::new();
        assert!(service.call(dto).await.errors().has_error("first_name"));
    }
}
