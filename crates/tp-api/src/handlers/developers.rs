//! Developer API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tp_core::traits::Id;
use tp_models::{CreateDeveloperDto, UpdateDeveloperDto};
use tp_services::{CreateDeveloperService, TaskView, UpdateDeveloperService};

use super::require_developer;
use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState};

/// GET /api/v1/developers
pub async fn list_developers(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.queries.developers().await)
}

/// POST /api/v1/developers
pub async fn create_developer(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateDeveloperDto>,
) -> ApiResult<impl IntoResponse> {
    let developer = CreateDeveloperService::new(state.developers.clone(), state.projects.clone())
        .call(dto)
        .await
        .into_result()?;
    Ok((StatusCode::CREATED, Json(developer)))
}

/// GET /api/v1/developers/:id
pub async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(require_developer(&state, id).await?))
}

/// PATCH /api/v1/developers/:id
pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    ApiJson(dto): ApiJson<UpdateDeveloperDto>,
) -> ApiResult<impl IntoResponse> {
    let developer = UpdateDeveloperService::new(state.developers.clone(), state.projects.clone())
        .call(id, dto)
        .await
        .into_result()?;
    Ok(Json(developer))
}

/// GET /api/v1/developers/:id/tasks
pub async fn developer_tasks(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    require_developer(&state, id).await?;
    let tasks = state.queries.developer_tasks(id).await;
    Ok(Json(TaskView::from_tasks(tasks, state.now())))
}
