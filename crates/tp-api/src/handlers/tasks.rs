//! Task API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tp_core::traits::Id;
use tp_models::{CreateTaskDto, Task, TaskState, UpdateTaskDto};
use tp_services::{CreateTaskService, DeleteTaskService, TaskView, UpdateTaskService};

use crate::error::{ApiError, ApiResult};
use crate::extractors::{ApiJson, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    pub project_id: Option<Id>,
    pub developer_id: Option<Id>,
}

/// GET /api/v1/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> impl IntoResponse {
    let tasks = match (filter.project_id, filter.developer_id) {
        (Some(project_id), developer_id) => {
            let mut tasks = state.queries.project_tasks(project_id).await;
            if let Some(developer_id) = developer_id {
                tasks.retain(|t| t.developer == Some(developer_id));
            }
            tasks
        }
        (None, Some(developer_id)) => state.queries.developer_tasks(developer_id).await,
        (None, None) => state.queries.tasks().await,
    };
    Json(TaskView::from_tasks(tasks, state.now()))
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateTaskDto>,
) -> ApiResult<impl IntoResponse> {
    let task = CreateTaskService::new(
        state.tasks.clone(),
        state.projects.clone(),
        state.developers.clone(),
    )
    .call(dto)
    .await
    .into_result()?;
    Ok((StatusCode::CREATED, Json(TaskView::new(task, state.now()))))
}

/// GET /api/v1/tasks/:id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let task = state
        .queries
        .task(id)
        .await
        .ok_or_else(|| ApiError::not_found::<Task>(id))?;
    Ok(Json(TaskView::new(task, state.now())))
}

/// PATCH /api/v1/tasks/:id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    ApiJson(dto): ApiJson<UpdateTaskDto>,
) -> ApiResult<impl IntoResponse> {
    let outcome = UpdateTaskService::new(
        state.tasks.clone(),
        state.projects.clone(),
        state.developers.clone(),
        state.clock.clone(),
    )
    .call(id, dto)
    .await
    .into_result()?;
    Ok(Json(outcome))
}

/// DELETE /api/v1/tasks/:id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    DeleteTaskService::new(state.tasks.clone())
        .call(id)
        .await
        .into_result()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/tasks/:id/recommendation
///
/// The advisor sees the tasks of the task's project and the developers
/// staffed on it. An unknown id yields the advisor's placeholder answer.
pub async fn task_recommendation(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<impl IntoResponse> {
    let (developers, tasks) = match state.queries.task(id).await {
        Some(task) => (
            state.queries.team(task.project).await,
            state.queries.project_tasks(task.project).await,
        ),
        None => (Vec::new(), Vec::new()),
    };

    let recommendation = state.advisor.recommend(&developers, &tasks, id).await?;
    Ok(Json(recommendation))
}

/// GET /api/v1/task-states
pub async fn task_states() -> impl IntoResponse {
    Json(TaskState::ALL.map(TaskState::info))
}
