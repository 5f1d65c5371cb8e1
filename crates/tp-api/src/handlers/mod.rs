//! API request handlers

pub mod developers;
pub mod projects;
pub mod tasks;

use tp_core::traits::Id;
use tp_models::{Developer, Project};

use crate::error::{ApiError, ApiResult};
use crate::extractors::AppState;

pub(crate) async fn require_project(state: &AppState, id: Id) -> ApiResult<Project> {
    state
        .queries
        .project(id)
        .await
        .ok_or_else(|| ApiError::not_found::<Project>(id))
}

pub(crate) async fn require_developer(state: &AppState, id: Id) -> ApiResult<Developer> {
    state
        .queries
        .developer(id)
        .await
        .ok_or_else(|| ApiError::not_found::<Developer>(id))
}
