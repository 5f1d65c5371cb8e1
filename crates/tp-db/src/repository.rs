//! Repository traits and errors
//!
//! Provides generic CRUD operations for database entities.

use async_trait::async_trait;
use tp_core::error::TpError;
use tp_core::traits::{Entity, Id};

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: Id },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A stored row does not map onto the domain model
    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

impl RepositoryError {
    pub fn not_found<T: Entity>(id: Id) -> Self {
        RepositoryError::NotFound {
            entity: T::TYPE_NAME,
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

impl From<RepositoryError> for TpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => TpError::NotFound { entity, id },
            RepositoryError::Database(e) => TpError::Database(e.to_string()),
            RepositoryError::Conflict(message) => TpError::Database(message),
            RepositoryError::InvalidRow(message) => TpError::Internal(message),
        }
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Base repository trait for CRUD operations
///
/// Listings are ordered by id.
#[async_trait]
pub trait Repository<T, CreateDto, UpdateDto>: Send + Sync {
    /// Find an entity by ID
    async fn find_by_id(&self, id: Id) -> RepositoryResult<Option<T>>;

    /// Find all entities
    async fn find_all(&self) -> RepositoryResult<Vec<T>>;

    /// Count all entities
    async fn count(&self) -> RepositoryResult<i64>;

    /// Create a new entity
    async fn create(&self, dto: CreateDto) -> RepositoryResult<T>;

    /// Update an existing entity, writing only the fields the DTO carries
    async fn update(&self, id: Id, dto: UpdateDto) -> RepositoryResult<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: Id) -> RepositoryResult<()>;

    /// Check if an entity exists
    async fn exists(&self, id: Id) -> RepositoryResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_models::Task;

    #[test]
    fn test_not_found_uses_type_name() {
        let err = RepositoryError::not_found::<Task>(12);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Task with id 12 not found");

        let core: TpError = err.into();
        assert_eq!(core.status_code(), 404);
    }

    #[test]
    fn test_invalid_row_is_internal() {
        let core: TpError = RepositoryError::InvalidRow("state 9".into()).into();
        assert_eq!(core.status_code(), 500);
    }
}
