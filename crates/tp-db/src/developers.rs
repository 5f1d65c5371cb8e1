//! Developer repository
//!
//! Database operations for developers. Developers are never deleted through
//! the application, only moved back to the bench.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tp_core::traits::Id;
use tp_models::{CreateDeveloperDto, Developer, UpdateDeveloperDto};

use crate::repository::{Repository, RepositoryError, RepositoryResult};

const COLUMNS: &str = "id, last_name, first_name, position, grade, project";

/// Developer database entity
#[derive(Debug, Clone, FromRow)]
pub struct DeveloperRow {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub position: String,
    pub grade: String,
    pub project: Option<i64>,
}

impl From<DeveloperRow> for Developer {
    fn from(row: DeveloperRow) -> Self {
        Developer {
            id: row.id,
            last_name: row.last_name,
            first_name: row.first_name,
            position: row.position,
            grade: row.grade,
            project: row.project,
        }
    }
}

/// Storage seam for developers
#[async_trait]
pub trait DeveloperStore: Repository<Developer, CreateDeveloperDto, UpdateDeveloperDto> {
    /// Developers staffed on a project
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Developer>>;

    /// Developers on the bench
    async fn find_unassigned(&self) -> RepositoryResult<Vec<Developer>>;

    /// Overwrite the stored grade with the textual form of `grade`
    async fn update_grade(&self, id: Id, grade: i64) -> RepositoryResult<()>;
}

/// Developer repository implementation
pub struct DeveloperRepository {
    pool: PgPool,
}

impl DeveloperRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_where(&self, condition: &str, project: Option<Id>) -> RepositoryResult<Vec<Developer>> {
        let sql = format!("SELECT {COLUMNS} FROM developers WHERE {condition} ORDER BY id ASC");
        let mut query = sqlx::query_as::<_, DeveloperRow>(&sql);
        if let Some(project) = project {
            query = query.bind(project);
        }
        let rows = query.fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Developer::from).collect())
    }
}

#[async_trait]
impl DeveloperStore for DeveloperRepository {
    async fn find_by_project(&self, project_id: Id) -> RepositoryResult<Vec<Developer>> {
        self.fetch_where("project = $1", Some(project_id)).await
    }

    async fn find_unassigned(&self) -> RepositoryResult<Vec<Developer>> {
        self.fetch_where("project IS NULL", None).await
    }

    async fn update_grade(&self, id: Id, grade: i64) -> RepositoryResult<()> {
        let result = sqlx::query("UPDATE developers SET grade = $1 WHERE id = $2")
            .bind(grade.to_string())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Developer>(id));
        }

        Ok(())
    }
}

#[async_trait]
impl Repository<Developer, CreateDeveloperDto, UpdateDeveloperDto> for DeveloperRepository {
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<Developer>> {
        let sql = format!("SELECT {COLUMNS} FROM developers WHERE id = $1");
        let row = sqlx::query_as::<_, DeveloperRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Developer::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Developer>> {
        self.fetch_where("TRUE", None).await
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM developers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn create(&self, dto: CreateDeveloperDto) -> RepositoryResult<Developer> {
        let sql = format!(
            "INSERT INTO developers (last_name, first_name, position, grade, project) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, DeveloperRow>(&sql)
            .bind(&dto.last_name)
            .bind(&dto.first_name)
            .bind(&dto.position)
            .bind(&dto.grade)
            .bind(dto.project)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn update(&self, id: Id, dto: UpdateDeveloperDto) -> RepositoryResult<Developer> {
        let sql = format!(
            r#"
            UPDATE developers SET
                last_name = COALESCE($1, last_name),
                first_name = COALESCE($2, first_name),
                position = COALESCE($3, position),
                grade = COALESCE($4, grade),
                project = CASE WHEN $5 THEN $6 ELSE project END
            WHERE id = $7
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, DeveloperRow>(&sql)
            .bind(&dto.last_name)
            .bind(&dto.first_name)
            .bind(&dto.position)
            .bind(&dto.grade)
            .bind(dto.project.is_some())
            .bind(dto.project.flatten())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found::<Developer>(id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: Id) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM developers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Developer>(id));
        }

        Ok(())
    }

    async fn exists(&self, id: Id) -> RepositoryResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM developers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
