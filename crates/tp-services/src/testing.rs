//! Shared test fixtures

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;
use tp_core::traits::Id;
use tp_db::memory::{MemoryDevelopers, MemoryTasks};
use tp_db::{
    DeveloperStore, InMemoryStore, ProjectStore, Repository, RepositoryError, RepositoryResult,
    TaskStore,
};
use tp_models::{
    CreateDeveloperDto, CreateProjectDto, CreateTaskDto, Developer, Project, Task, TaskState,
    UpdateDeveloperDto, UpdateTaskDto,
};

use crate::SharedClock;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 2024-03-10 09:00 UTC
pub fn fixed_clock() -> SharedClock {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()))
}

/// One project with one staffed developer (grade "40") and one task
/// assigned to that developer
pub struct Fixture {
    pub store: InMemoryStore,
    pub project: Project,
    pub developer: Developer,
    pub task: Task,
}

impl Fixture {
    pub async fn new() -> Self {
        Self::build(None, "40").await
    }

    pub async fn with_deadline(deadline: Option<DateTime<Utc>>) -> Self {
        Self::build(deadline, "40").await
    }

    pub async fn with_grade(grade: &str) -> Self {
        Self::build(None, grade).await
    }

    async fn build(deadline: Option<DateTime<Utc>>, grade: &str) -> Self {
        let store = InMemoryStore::new();
        let project = store
            .projects()
            .create(CreateProjectDto {
                name: "Atlas".into(),
                description: "Internal tooling".into(),
            })
            .await
            .unwrap();
        let developer = store
            .developers()
            .create(CreateDeveloperDto {
                last_name: "Lovelace".into(),
                first_name: "Ada".into(),
                position: "Backend".into(),
                grade: grade.into(),
                project: Some(project.id),
            })
            .await
            .unwrap();
        let mut dto = CreateTaskDto::new(project.id, "Login form");
        dto.developer = Some(developer.id);
        dto.deadline = deadline;
        let task = store.tasks().create(dto).await.unwrap();

        Self {
            store,
            project,
            developer,
            task,
        }
    }

    pub fn tasks(&self) -> Arc<dyn TaskStore> {
        Arc::new(self.store.tasks())
    }

    pub fn projects(&self) -> Arc<dyn ProjectStore> {
        Arc::new(self.store.projects())
    }

    pub fn developers(&self) -> Arc<dyn DeveloperStore> {
        Arc::new(self.store.developers())
    }

    /// Move the fixture task without going through the services
    pub async fn set_state(&self, state: TaskState) {
        self.store
            .tasks()
            .update(self.task.id, UpdateTaskDto::with_state(state))
            .await
            .unwrap();
    }

    /// Another developer; staffed on the fixture project
    pub async fn add_developer(&self, last_name: &str, grade: &str) -> Developer {
        self.store
            .developers()
            .create(CreateDeveloperDto {
                last_name: last_name.into(),
                first_name: "Test".into(),
                position: String::new(),
                grade: grade.into(),
                project: Some(self.project.id),
            })
            .await
            .unwrap()
    }

    /// A developer on the bench
    pub async fn add_benched_developer(&self, last_name: &str) -> Developer {
        self.store
            .developers()
            .create(CreateDeveloperDto {
                last_name: last_name.into(),
                first_name: "Test".into(),
                position: String::new(),
                grade: "0".into(),
                project: None,
            })
            .await
            .unwrap()
    }
}

fn refused() -> RepositoryError {
    RepositoryError::Conflict("write refused".into())
}

/// Task store whose updates always fail
struct FailingTaskUpdates(MemoryTasks);

pub fn failing_task_updates(fx: &Fixture) -> Arc<dyn TaskStore> {
    Arc::new(FailingTaskUpdates(fx.store.tasks()))
}

#[async_trait]
impl TaskStore for FailingTaskUpdates {
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Task>> {
        self.0.find_by_project(project_id).await
    }

    async fn find_by_developer(&self, developer_id: Id) -> RepositoryResult<Vec<Task>> {
        self.0.find_by_developer(developer_id).await
    }
}

#[async_trait]
impl Repository<Task, CreateTaskDto, UpdateTaskDto> for FailingTaskUpdates {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Task>> {
        self.0.find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Task>> {
        self.0.find_all().await
    }

    async fn count(&self) -> RepositoryResult<i64> {
        self.0.count().await
    }

    async fn create(&self, dto: CreateTaskDto) -> RepositoryResult<Task> {
        self.0.create(dto).await
    }

    async fn update(&self, _id: Id, _dto: UpdateTaskDto) -> RepositoryResult<Task> {
        Err(refused())
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        self.0.delete(id).await
    }

    async fn exists(&self, id: Id) -> RepositoryResult<bool> {
        self.0.exists(id).await
    }
}

/// Developer store whose grade writes always fail
struct FailingGrades(MemoryDevelopers);

pub fn failing_grades(fx: &Fixture) -> Arc<dyn DeveloperStore> {
    Arc::new(FailingGrades(fx.store.developers()))
}

#[async_trait]
impl DeveloperStore for FailingGrades {
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Developer>> {
        self.0.find_by_project(project_id).await
    }

    async fn find_unassigned(&self) -> RepositoryResult<Vec<Developer>> {
        self.0.find_unassigned().await
    }

    async fn update_grade(&self, _id: Id, _grade: i64) -> RepositoryResult<()> {
        Err(refused())
    }
}

#[async_trait]
impl Repository<Developer, CreateDeveloperDto, UpdateDeveloperDto> for FailingGrades {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Developer>> {
        self.0.find_by_id(id).await
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Developer>> {
        self.0.find_all().await
    }

    async fn count(&self) -> RepositoryResult<i64> {
        self.0.count().await
    }

    async fn create(&self, dto: CreateDeveloperDto) -> RepositoryResult<Developer> {
        self.0.create(dto).await
    }

    async fn update(&self, id: Id, dto: UpdateDeveloperDto) -> RepositoryResult<Developer> {
        self.0.update(id, dto).await
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        self.0.delete(id).await
    }

    async fn exists(&self, id: Id) -> RepositoryResult<bool> {
        self.0.exists(id).await
    }
}

/// Every read fails; used to check that reads degrade instead of erroring
pub struct BrokenTasks;

#[async_trait]
impl TaskStore for BrokenTasks {
    async fn find_by_project(&self, _project_id: Id) -> RepositoryResult<Vec<Task>> {
        Err(refused())
    }

    async fn find_by_developer(&self, _developer_id: Id) -> RepositoryResult<Vec<Task>> {
        Err(refused())
    }
}

#[async_trait]
impl Repository<Task, CreateTaskDto, UpdateTaskDto> for BrokenTasks {
    async fn find_by_id(&self, _id: Id) -> RepositoryResult<Option<Task>> {
        Err(refused())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Task>> {
        Err(refused())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        Err(refused())
    }

    async fn create(&self, _dto: CreateTaskDto) -> RepositoryResult<Task> {
        Err(refused())
    }

    async fn update(&self, _id: Id, _dto: UpdateTaskDto) -> RepositoryResult<Task> {
        Err(refused())
    }

    async fn delete(&self, _id: Id) -> RepositoryResult<()> {
        Err(refused())
    }

    async fn exists(&self, _id: Id) -> RepositoryResult<bool> {
        Err(refused())
    }
}
