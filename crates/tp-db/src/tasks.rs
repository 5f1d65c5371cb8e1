//! Task repository
//!
//! Database operations for tasks. The deadline lives in the `time` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tp_core::traits::Id;
use tp_models::{CreateTaskDto, Task, TaskState, UpdateTaskDto};

use crate::repository::{Repository, RepositoryError, RepositoryResult};

const COLUMNS: &str = r#"id, state, developer, project, description, name, "time""#;

/// Task database entity
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub state: i32,
    pub developer: Option<i64>,
    pub project: i64,
    pub description: String,
    pub name: String,
    pub time: Option<DateTime<Utc>>,
}

impl TryFrom<TaskRow> for Task {
    type Error = RepositoryError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let state = TaskState::try_from(row.state)
            .map_err(|e| RepositoryError::InvalidRow(format!("task {}: {}", row.id, e)))?;

        Ok(Task {
            id: row.id,
            state,
            developer: row.developer,
            project: row.project,
            description: row.description,
            name: row.name,
            deadline: row.time,
        })
    }
}

fn into_tasks(rows: Vec<TaskRow>) -> RepositoryResult<Vec<Task>> {
    rows.into_iter().map(Task::try_from).collect()
}

/// Storage seam for tasks
#[async_trait]
pub trait TaskStore: Repository<Task, CreateTaskDto, UpdateTaskDto> {
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Task>>;

    /// Tasks currently assigned to a developer
    async fn find_by_developer(&self, developer_id: Id) -> RepositoryResult<Vec<Task>>;
}

/// Task repository implementation
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by(&self, column: &str, value: Id) -> RepositoryResult<Vec<Task>> {
        let sql = format!("SELECT {COLUMNS} FROM tasks WHERE {column} = $1 ORDER BY id ASC");
        let rows = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(value)
            .fetch_all(&self.pool)
            .await?;

        into_tasks(rows)
    }
}

#[async_trait]
impl TaskStore for TaskRepository {
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Task>> {
        self.fetch_by("project", project_id).await
    }

    async fn find_by_developer(&self, developer_id: Id) -> RepositoryResult<Vec<Task>> {
        self.fetch_by("developer", developer_id).await
    }
}

#[async_trait]
impl Repository<Task, CreateTaskDto, UpdateTaskDto> for TaskRepository {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Task>> {
        let sql = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Task::try_from).transpose()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Task>> {
        let sql = format!("SELECT {COLUMNS} FROM tasks ORDER BY id ASC");
        let rows = sqlx::query_as::<_, TaskRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        into_tasks(rows)
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn create(&self, dto: CreateTaskDto) -> RepositoryResult<Task> {
        let sql = format!(
            r#"
            INSERT INTO tasks (state, developer, project, description, name, "time")
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(dto.state.value())
            .bind(dto.developer)
            .bind(dto.project)
            .bind(&dto.description)
            .bind(&dto.name)
            .bind(dto.deadline)
            .fetch_one(&self.pool)
            .await?;

        row.try_into()
    }

    async fn update(&self, id: Id, dto: UpdateTaskDto) -> RepositoryResult<Task> {
        let sql = format!(
            r#"
            UPDATE tasks SET
                name = COALESCE($1, name),
                description = COALESCE($2, description),
                state = COALESCE($3, state),
                project = COALESCE($4, project),
                developer = CASE WHEN $5 THEN $6 ELSE developer END,
                "time" = CASE WHEN $7 THEN $8 ELSE "time" END
            WHERE id = $9
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, TaskRow>(&sql)
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(dto.state.map(TaskState::value))
            .bind(dto.project)
            .bind(dto.developer.is_some())
            .bind(dto.developer.flatten())
            .bind(dto.deadline.is_some())
            .bind(dto.deadline.flatten())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found::<Task>(id))?;

        row.try_into()
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Task>(id));
        }

        Ok(())
    }

    async fn exists(&self, id: Id) -> RepositoryResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM tasks WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
