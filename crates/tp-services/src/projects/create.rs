//! Create Service for Projects

use std::sync::Arc;
use tp_contracts::{Contract, CreateProjectContract};
use tp_db::ProjectStore;
use tp_models::{CreateProjectDto, Project};

use crate::result::ServiceResult;

/// Service for creating projects
pub struct CreateProjectService {
    projects: Arc<dyn ProjectStore>,
}

impl CreateProjectService {
    pub fn new(projects: Arc<dyn ProjectStore>) -> Self {
        Self { projects }
    }

    /// Execute the create operation
    pub async fn call(&self, dto: CreateProjectDto) -> ServiceResult<Project> {
        if let Err(errors) = CreateProjectContract::new().validate(&dto) {
            return ServiceResult::failure(errors);
        }

        match self.projects.create(dto).await {
            Ok(project) => {
                tracing::info!(project_id = project.id, "Project created");
                ServiceResult::success(project)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create project");
                ServiceResult::persistence(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_db::{InMemoryStore, Repository};

    #[tokio::test]
    async fn test_create_project() {
        let store = InMemoryStore::new();
        let service = CreateProjectService::new(Arc::new(store.projects()));

        let project = service
            .call(CreateProjectDto {
                name: "Atlas".into(),
                description: "Internal tooling".into(),
            })
            .await
            .into_result()
            .unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(store.projects().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let store = InMemoryStore::new();
        let service = CreateProjectService::new(Arc::new(store.projects()));

        let result = service
            .call(CreateProjectDto {
                name: " ".into(),
                description: String::new(),
            })
            .await;
        assert!(result.errors().has_error("name"));
        assert_eq!(store.projects().count().await.unwrap(), 0);
    }
}
