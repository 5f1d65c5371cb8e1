//! Read access for the views
//!
//! Reads never fail: a store error is logged and the caller gets an empty
//! list or `None`, the same as if nothing matched.

use std::sync::Arc;
use tp_core::traits::Id;
use tp_db::{DeveloperStore, ProjectStore, RepositoryResult, TaskStore};
use tp_models::{Developer, Project, Task};

fn degrade<T: Default>(what: &'static str, result: RepositoryResult<T>) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load {}", what);
        T::default()
    })
}

/// Degrading read queries over the three stores
#[derive(Clone)]
pub struct Queries {
    projects: Arc<dyn ProjectStore>,
    developers: Arc<dyn DeveloperStore>,
    tasks: Arc<dyn TaskStore>,
}

impl Queries {
    pub fn new(
        projects: Arc<dyn ProjectStore>,
        developers: Arc<dyn DeveloperStore>,
        tasks: Arc<dyn TaskStore>,
    ) -> Self {
        Self {
            projects,
            developers,
            tasks,
        }
    }

    pub async fn project(&self, id: Id) -> Option<Project> {
        degrade("project", self.projects.find_by_id(id).await)
    }

    pub async fn projects(&self) -> Vec<Project> {
        degrade("projects", self.projects.find_all().await)
    }

    pub async fn developer(&self, id: Id) -> Option<Developer> {
        degrade("developer", self.developers.find_by_id(id).await)
    }

    pub async fn developers(&self) -> Vec<Developer> {
        degrade("developers", self.developers.find_all().await)
    }

    /// Developers staffed on a project
    pub async fn team(&self, project_id: Id) -> Vec<Developer> {
        degrade("team", self.developers.find_by_project(project_id).await)
    }

    /// Developers not staffed anywhere
    pub async fn bench(&self) -> Vec<Developer> {
        degrade("bench", self.developers.find_unassigned().await)
    }

    pub async fn task(&self, id: Id) -> Option<Task> {
        degrade("task", self.tasks.find_by_id(id).await)
    }

    pub async fn tasks(&self) -> Vec<Task> {
        degrade("tasks", self.tasks.find_all().await)
    }

    pub async fn project_tasks(&self, project_id: Id) -> Vec<Task> {
        degrade("project tasks", self.tasks.find_by_project(project_id).await)
    }

    pub async fn developer_tasks(&self, developer_id: Id) -> Vec<Task> {
        degrade("developer tasks", self.tasks.find_by_developer(developer_id).await)
    }
}
