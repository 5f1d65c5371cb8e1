//! Project API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tp_core::traits::Id;
use tp_models::{CreateProjectDto, Developer, UpdateProjectDto};
use tp_services::{
    CreateProjectService, DeleteProjectService, ProjectOverview, TaskView, TeamService,
    UpdateProjectService,
};

use super::require_project;
use crate::error::ApiResult;
use crate::extractors::{ApiJson, AppState};

/// GET /api/v1/projects
pub async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.queries.projects().await)
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateProjectDto>,
) -> ApiResult<impl IntoResponse> {
    let project = CreateProjectService::new(state.projects.clone())
        .call(dto)
        .await
        .into_result()?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(require_project(&state, id).await?))
}

/// PATCH /api/v1/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    ApiJson(dto): ApiJson<UpdateProjectDto>,
) -> ApiResult<impl IntoResponse> {
    let project = UpdateProjectService::new(state.projects.clone())
        .call(id, dto)
        .await
        .into_result()?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    DeleteProjectService::new(state.projects.clone())
        .call(id)
        .await
        .into_result()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/:id/tasks
pub async fn project_tasks(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    require_project(&state, id).await?;
    let tasks = state.queries.project_tasks(id).await;
    Ok(Json(TaskView::from_tasks(tasks, state.now())))
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: Vec<Developer>,
    /// Developers on the bench
    pub available: Vec<Developer>,
}

/// GET /api/v1/projects/:id/team
pub async fn project_team(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    require_project(&state, id).await?;
    Ok(Json(TeamResponse {
        team: state.queries.team(id).await,
        available: state.queries.bench().await,
    }))
}

/// POST /api/v1/projects/:id/team/:developer_id
pub async fn attach_developer(
    State(state): State<AppState>,
    Path((id, developer_id)): Path<(Id, Id)>,
) -> ApiResult<impl IntoResponse> {
    let developer = TeamService::new(state.projects.clone(), state.developers.clone())
        .attach(id, developer_id)
        .await
        .into_result()?;
    Ok(Json(developer))
}

/// DELETE /api/v1/projects/:id/team/:developer_id
pub async fn detach_developer(
    State(state): State<AppState>,
    Path((id, developer_id)): Path<(Id, Id)>,
) -> ApiResult<impl IntoResponse> {
    let developer = TeamService::new(state.projects.clone(), state.developers.clone())
        .detach(id, developer_id)
        .await
        .into_result()?;
    Ok(Json(developer))
}

/// GET /api/v1/projects/:id/report
pub async fn project_report(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    require_project(&state, id).await?;
    let tasks = state.queries.project_tasks(id).await;
    let team = state.queries.team(id).await;

    let report = state.advisor.report(&team, &tasks).await?;
    Ok(Json(report))
}

/// GET /api/v1/projects/:id/overview
pub async fn project_overview(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let project = require_project(&state, id).await?;
    let tasks = state.queries.project_tasks(id).await;
    Ok(Json(ProjectOverview::new(project, tasks, state.now())))
}
