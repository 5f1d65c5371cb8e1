//! API routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::extractors::AppState;
use crate::handlers::{developers, projects, tasks};

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_router())
}

fn api_v1_router() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects_router())
        .nest("/developers", developers_router())
        .nest("/tasks", tasks_router())
        .route("/task-states", get(tasks::task_states))
}

fn projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects).post(projects::create_project))
        .route(
            "/:id",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/:id/tasks", get(projects::project_tasks))
        .route("/:id/team", get(projects::project_team))
        .route(
            "/:id/team/:developer_id",
            post(projects::attach_developer).delete(projects::detach_developer),
        )
        .route("/:id/report", get(projects::project_report))
        .route("/:id/overview", get(projects::project_overview))
}

fn developers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(developers::list_developers).post(developers::create_developer))
        .route(
            "/:id",
            get(developers::get_developer).patch(developers::update_developer),
        )
        .route("/:id/tasks", get(developers::developer_tasks))
}

fn tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/:id",
            get(tasks::get_task)
                .patch(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/:id/recommendation", get(tasks::task_recommendation))
}

#[cfg(test)]
mod tests {
    use crate::testing::{StubAdvisor, TestApp};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_project_crud() {
        let app = TestApp::new();
        let id = app.project("Atlas").await;

        let (status, body) = app
            .patch(&format!("/api/v1/projects/{id}"), json!({"description": "Tooling"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Atlas");
        assert_eq!(body["description"], "Tooling");

        let (_, list) = app.get("/api/v1/projects").await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, _) = app.delete(&format!("/api/v1/projects/{id}")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = app.get(&format!("/api/v1/projects/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let app = TestApp::new();
        let (status, body) = app.post("/api/v1/projects", json!({"name": "  "})).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["errorIdentifier"],
            "urn:team-planner:api:v1:errors:PropertyConstraintViolation"
        );
        assert_eq!(body["errors"]["name"][0], "can't be blank");
    }

    #[tokio::test]
    async fn test_unknown_task_is_not_found() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/v1/tasks/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorIdentifier"], "urn:team-planner:api:v1:errors:NotFound");
        assert_eq!(body["message"], "Task with id 999 not found");

        let (status, _) = app.patch("/api/v1/tasks/999", json!({"state": 7})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_state_is_rejected() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;

        let (status, body) = app
            .post("/api/v1/tasks", json!({"name": "Login", "project": project, "state": 9}))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errorIdentifier"], "urn:team-planner:api:v1:errors:InvalidRequestBody");

        let task = app.task(project, None, None).await;
        let (status, _) = app
            .patch(&format!("/api/v1/tasks/{task}"), json!({"state": -1}))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_wrong_body_shape_is_rejected() {
        let app = TestApp::new();
        let (status, body) = app
            .send(
                axum::http::Method::POST,
                "/api/v1/projects",
                Some(json!("not an object")),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_new_task_defaults() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;
        let task = app.task(project, None, None).await;

        let (status, body) = app.get(&format!("/api/v1/tasks/{task}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], 0);
        assert_eq!(body["developer"], json!(null));
        assert_eq!(body["time"], json!(null));
        assert_eq!(body["progress"], 0);
        assert_eq!(body["pacing"]["message"], "No deadline set");
    }

    #[tokio::test]
    async fn test_completing_overdue_task_lowers_grade() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;
        let developer = app.developer("Lovelace", "40", Some(project)).await;
        let task = app
            .task(project, Some(developer), Some("2024-03-01T00:00:00Z"))
            .await;

        let (status, body) = app
            .patch(&format!("/api/v1/tasks/{task}"), json!({"state": 7}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"]["state"], 7);
        assert_eq!(
            body["gradeChange"],
            json!({"developerId": developer, "oldGrade": 40, "newGrade": 10})
        );

        let (_, dev) = app.get(&format!("/api/v1/developers/{developer}")).await;
        assert_eq!(dev["grade"], "10");

        let (_, body) = app
            .patch(&format!("/api/v1/tasks/{task}"), json!({"state": 7}))
            .await;
        assert_eq!(body["gradeChange"], json!(null));
    }

    #[tokio::test]
    async fn test_completing_task_without_deadline_raises_grade() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;
        let developer = app.developer("Lovelace", "55", Some(project)).await;
        let task = app.task(project, Some(developer), None).await;

        let (_, body) = app
            .patch(&format!("/api/v1/tasks/{task}"), json!({"state": 7}))
            .await;
        assert_eq!(body["gradeChange"]["newGrade"], 60);
    }

    #[tokio::test]
    async fn test_list_tasks_filters() {
        let app = TestApp::new();
        let atlas = app.project("Atlas").await;
        let borealis = app.project("Borealis").await;
        let developer = app.developer("Lovelace", "40", Some(atlas)).await;
        app.task(atlas, Some(developer), None).await;
        app.task(atlas, None, None).await;
        app.task(borealis, None, None).await;

        let (_, all) = app.get("/api/v1/tasks").await;
        assert_eq!(all.as_array().unwrap().len(), 3);

        let (_, atlas_tasks) = app.get(&format!("/api/v1/tasks?projectId={atlas}")).await;
        assert_eq!(atlas_tasks.as_array().unwrap().len(), 2);

        let (_, mine) = app
            .get(&format!("/api/v1/tasks?projectId={atlas}&developerId={developer}"))
            .await;
        assert_eq!(mine.as_array().unwrap().len(), 1);

        let (_, developer_view) = app.get(&format!("/api/v1/developers/{developer}/tasks")).await;
        assert_eq!(developer_view, mine);
    }

    #[tokio::test]
    async fn test_task_moves_between_projects() {
        let app = TestApp::new();
        let atlas = app.project("Atlas").await;
        let borealis = app.project("Borealis").await;
        let task = app.task(atlas, None, None).await;

        let (status, body) = app
            .patch(&format!("/api/v1/tasks/{task}"), json!({"project": borealis}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"]["project"], borealis);

        let (status, body) = app
            .patch(&format!("/api/v1/tasks/{task}"), json!({"project": 404}))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"]["project"][0], "does not exist");

        let (_, borealis_tasks) = app.get(&format!("/api/v1/tasks?projectId={borealis}")).await;
        assert_eq!(borealis_tasks.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_team_staffing() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;
        let developer = app.developer("Hopper", "0", None).await;

        let (_, team) = app.get(&format!("/api/v1/projects/{project}/team")).await;
        assert_eq!(team["team"], json!([]));
        assert_eq!(team["available"][0]["id"], developer);

        let (status, body) = app
            .send(
                axum::http::Method::POST,
                &format!("/api/v1/projects/{project}/team/{developer}"),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"], project);

        let (_, team) = app.get(&format!("/api/v1/projects/{project}/team")).await;
        assert_eq!(team["team"][0]["id"], developer);
        assert_eq!(team["available"], json!([]));

        let (status, body) = app
            .delete(&format!("/api/v1/projects/{project}/team/{developer}"))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"], json!(null));
    }

    #[tokio::test]
    async fn test_recommendation_uses_project_team() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;
        let developer = app.developer("Lovelace", "40", Some(project)).await;
        app.developer("Hopper", "0", None).await;
        let task = app.task(project, None, None).await;

        let (status, body) = app.get(&format!("/api/v1/tasks/{task}/recommendation")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["developerId"], developer);

        let calls = app.advisor.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(vec![developer], vec![task])]);
    }

    #[tokio::test]
    async fn test_recommendation_for_unknown_task() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/v1/tasks/41/recommendation").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["developerId"], json!(null));
        assert_eq!(body["developerName"], "Task not found");
        assert_eq!(body["reason"], "Invalid taskId supplied");
        assert!(app.advisor.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_when_advisor_is_down() {
        let app = TestApp::with_advisor(StubAdvisor {
            down: true,
            ..Default::default()
        });
        let project = app.project("Atlas").await;

        let (status, body) = app.get(&format!("/api/v1/projects/{project}/report")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], "advisor responded with 503: offline");

        let (status, _) = app.get("/api/v1/projects/77/report").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_report() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;

        let (status, body) = app.get(&format!("/api/v1/projects/{project}/report")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completion"], 50.0);
        assert_eq!(body["riskyTasks"], json!([]));
    }

    #[tokio::test]
    async fn test_overview() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;
        let done = app.task(project, None, None).await;
        app.task(project, None, None).await;
        app.patch(&format!("/api/v1/tasks/{done}"), json!({"state": 7}))
            .await;

        let (status, body) = app.get(&format!("/api/v1/projects/{project}/overview")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"]["name"], "Atlas");
        assert_eq!(body["summary"]["total"], 2);
        assert_eq!(body["summary"]["completed"], 1);
        assert_eq!(body["summary"]["averageProgress"], 50.0);
        assert_eq!(body["tasks"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_deleting_project_removes_tasks() {
        let app = TestApp::new();
        let project = app.project("Atlas").await;
        let task = app.task(project, None, None).await;

        app.delete(&format!("/api/v1/projects/{project}")).await;
        let (status, _) = app.get(&format!("/api/v1/tasks/{task}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_task_states() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/v1/task-states").await;

        assert_eq!(status, StatusCode::OK);
        let states = body.as_array().unwrap();
        assert_eq!(states.len(), 8);
        assert_eq!(states[7]["value"], 7);
    }
}
