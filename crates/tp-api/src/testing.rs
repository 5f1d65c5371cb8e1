//! Router test helpers

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tp_advisor::{Advisor, AdvisorError, Recommendation, Report};
use tp_db::InMemoryStore;
use tp_models::{Developer, Task};

use crate::{router, AppState};

struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }
}

/// Advisor that records what it was asked and answers with canned data,
/// or fails with a 503 when `down`
#[derive(Default)]
pub struct StubAdvisor {
    pub down: bool,
    /// (developer ids, task ids) per call
    pub calls: Mutex<Vec<(Vec<i64>, Vec<i64>)>>,
}

impl StubAdvisor {
    fn record(&self, developers: &[Developer], tasks: &[Task]) -> Result<(), AdvisorError> {
        self.calls.lock().unwrap().push((
            developers.iter().map(|d| d.id).collect(),
            tasks.iter().map(|t| t.id).collect(),
        ));
        if self.down {
            return Err(AdvisorError::ServiceUnavailable {
                status: 503,
                body: "offline".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Advisor for StubAdvisor {
    async fn recommend_for(
        &self,
        developers: &[Developer],
        tasks: &[Task],
        _current_task: &Task,
    ) -> Result<Recommendation, AdvisorError> {
        self.record(developers, tasks)?;
        Ok(Recommendation {
            developer_id: developers.first().map(|d| d.id),
            developer_name: "Ada Lovelace".into(),
            estimated_days: 2.0,
            confidence: 0.9,
            reason: "stub".into(),
        })
    }

    async fn report(&self, developers: &[Developer], tasks: &[Task]) -> Result<Report, AdvisorError> {
        self.record(developers, tasks)?;
        Ok(Report {
            completion: 50.0,
            risky_tasks: vec![],
            developer_efficiency: vec![],
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub advisor: Arc<StubAdvisor>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_advisor(StubAdvisor::default())
    }

    pub fn with_advisor(advisor: StubAdvisor) -> Self {
        let advisor = Arc::new(advisor);
        let state = AppState::in_memory(&InMemoryStore::new(), advisor.clone(), Arc::new(FixedClock));
        Self {
            router: router().with_state(state),
            advisor,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a project and return its id
    pub async fn project(&self, name: &str) -> i64 {
        let (status, body) = self
            .post("/api/v1/projects", serde_json::json!({"name": name}))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Create a developer and return its id
    pub async fn developer(&self, last_name: &str, grade: &str, project: Option<i64>) -> i64 {
        let (status, body) = self
            .post(
                "/api/v1/developers",
                serde_json::json!({
                    "lastName": last_name,
                    "firstName": "Test",
                    "grade": grade,
                    "project": project
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Create a task and return its id
    pub async fn task(&self, project: i64, developer: Option<i64>, time: Option<&str>) -> i64 {
        let (status, body) = self
            .post(
                "/api/v1/tasks",
                serde_json::json!({
                    "name": "Login form",
                    "project": project,
                    "developer": developer,
                    "time": time
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}
