//! In-memory store
//!
//! Keeps the three tables in process memory with the same referential rules
//! as the SQL schema: deleting a project deletes its tasks and benches its
//! developers, deleting a developer unassigns its tasks.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tp_core::traits::Id;
use tp_models::{
    CreateDeveloperDto, CreateProjectDto, CreateTaskDto, Developer, Project, Task,
    UpdateDeveloperDto, UpdateProjectDto, UpdateTaskDto,
};

use crate::developers::DeveloperStore;
use crate::projects::ProjectStore;
use crate::repository::{Repository, RepositoryError, RepositoryResult};
use crate::tasks::TaskStore;

#[derive(Debug, Default)]
struct Tables {
    projects: BTreeMap<Id, Project>,
    developers: BTreeMap<Id, Developer>,
    tasks: BTreeMap<Id, Task>,
    project_seq: Id,
    developer_seq: Id,
    task_seq: Id,
}

impl Tables {
    fn check_project(&self, id: Id) -> RepositoryResult<()> {
        if self.projects.contains_key(&id) {
            Ok(())
        } else {
            Err(RepositoryError::Conflict(format!("project {} does not exist", id)))
        }
    }

    fn check_developer(&self, id: Id) -> RepositoryResult<()> {
        if self.developers.contains_key(&id) {
            Ok(())
        } else {
            Err(RepositoryError::Conflict(format!("developer {} does not exist", id)))
        }
    }
}

fn next_id(seq: &mut Id) -> Id {
    *seq += 1;
    *seq
}

/// Shared handle to the in-memory tables
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> MemoryProjects {
        MemoryProjects {
            tables: Arc::clone(&self.tables),
        }
    }

    pub fn developers(&self) -> MemoryDevelopers {
        MemoryDevelopers {
            tables: Arc::clone(&self.tables),
        }
    }

    pub fn tasks(&self) -> MemoryTasks {
        MemoryTasks {
            tables: Arc::clone(&self.tables),
        }
    }
}

/// Project table view of an [`InMemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryProjects {
    tables: Arc<RwLock<Tables>>,
}

/// Developer table view of an [`InMemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryDevelopers {
    tables: Arc<RwLock<Tables>>,
}

/// Task table view of an [`InMemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryTasks {
    tables: Arc<RwLock<Tables>>,
}

impl ProjectStore for MemoryProjects {}

#[async_trait]
impl Repository<Project, CreateProjectDto, UpdateProjectDto> for MemoryProjects {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Project>> {
        Ok(self.tables.read().await.projects.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Project>> {
        Ok(self.tables.read().await.projects.values().cloned().collect())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.tables.read().await.projects.len() as i64)
    }

    async fn create(&self, dto: CreateProjectDto) -> RepositoryResult<Project> {
        let mut tables = self.tables.write().await;
        let project = Project {
            id: next_id(&mut tables.project_seq),
            description: dto.description,
            name: dto.name,
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update(&self, id: Id, dto: UpdateProjectDto) -> RepositoryResult<Project> {
        let mut tables = self.tables.write().await;
        let project = tables
            .projects
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found::<Project>(id))?;
        dto.apply_to(project);
        Ok(project.clone())
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(&id).is_none() {
            return Err(RepositoryError::not_found::<Project>(id));
        }

        tables.tasks.retain(|_, task| task.project != id);
        for developer in tables.developers.values_mut() {
            if developer.project == Some(id) {
                developer.project = None;
            }
        }
        Ok(())
    }

    async fn exists(&self, id: Id) -> RepositoryResult<bool> {
        Ok(self.tables.read().await.projects.contains_key(&id))
    }
}

#[async_trait]
impl DeveloperStore for MemoryDevelopers {
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Developer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .developers
            .values()
            .filter(|d| d.is_staffed_on(project_id))
            .cloned()
            .collect())
    }

    async fn find_unassigned(&self) -> RepositoryResult<Vec<Developer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .developers
            .values()
            .filter(|d| d.is_benched())
            .cloned()
            .collect())
    }

    async fn update_grade(&self, id: Id, grade: i64) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let developer = tables
            .developers
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found::<Developer>(id))?;
        developer.grade = grade.to_string();
        Ok(())
    }
}

#[async_trait]
impl Repository<Developer, CreateDeveloperDto, UpdateDeveloperDto> for MemoryDevelopers {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Developer>> {
        Ok(self.tables.read().await.developers.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Developer>> {
        Ok(self.tables.read().await.developers.values().cloned().collect())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.tables.read().await.developers.len() as i64)
    }

    async fn create(&self, dto: CreateDeveloperDto) -> RepositoryResult<Developer> {
        let mut tables = self.tables.write().await;
        if let Some(project) = dto.project {
            tables.check_project(project)?;
        }
        let developer = Developer {
            id: next_id(&mut tables.developer_seq),
            last_name: dto.last_name,
            first_name: dto.first_name,
            position: dto.position,
            grade: dto.grade,
            project: dto.project,
        };
        tables.developers.insert(developer.id, developer.clone());
        Ok(developer)
    }

    async fn update(&self, id: Id, dto: UpdateDeveloperDto) -> RepositoryResult<Developer> {
        let mut tables = self.tables.write().await;
        if let Some(Some(project)) = dto.project {
            tables.check_project(project)?;
        }
        let developer = tables
            .developers
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found::<Developer>(id))?;
        dto.apply_to(developer);
        Ok(developer.clone())
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if tables.developers.remove(&id).is_none() {
            return Err(RepositoryError::not_found::<Developer>(id));
        }
        for task in tables.tasks.values_mut() {
            if task.developer == Some(id) {
                task.developer = None;
            }
        }
        Ok(())
    }

    async fn exists(&self, id: Id) -> RepositoryResult<bool> {
        Ok(self.tables.read().await.developers.contains_key(&id))
    }
}

#[async_trait]
impl TaskStore for MemoryTasks {
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Task>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .values()
            .filter(|t| t.project == project_id)
            .cloned()
            .collect())
    }

    async fn find_by_developer(&self, developer_id: Id) -> RepositoryResult<Vec<Task>> {
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .values()
            .filter(|t| t.developer == Some(developer_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Repository<Task, CreateTaskDto, UpdateTaskDto> for MemoryTasks {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Task>> {
        Ok(self.tables.read().await.tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Task>> {
        Ok(self.tables.read().await.tasks.values().cloned().collect())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Ok(self.tables.read().await.tasks.len() as i64)
    }

    async fn create(&self, dto: CreateTaskDto) -> RepositoryResult<Task> {
        let mut tables = self.tables.write().await;
        tables.check_project(dto.project)?;
        if let Some(developer) = dto.developer {
            tables.check_developer(developer)?;
        }
        let task = Task {
            id: next_id(&mut tables.task_seq),
            state: dto.state,
            developer: dto.developer,
            project: dto.project,
            description: dto.description,
            name: dto.name,
            deadline: dto.deadline,
        };
        tables.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn update(&self, id: Id, dto: UpdateTaskDto) -> RepositoryResult<Task> {
        let mut tables = self.tables.write().await;
        if let Some(project) = dto.project {
            tables.check_project(project)?;
        }
        if let Some(Some(developer)) = dto.developer {
            tables.check_developer(developer)?;
        }
        let task = tables
            .tasks
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found::<Task>(id))?;
        dto.apply_to(task);
        Ok(task.clone())
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .tasks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found::<Task>(id))
    }

    async fn exists(&self, id: Id) -> RepositoryResult<bool> {
        Ok(self.tables.read().await.tasks.contains_key(&id))
    }
}
