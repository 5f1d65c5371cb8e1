//! Application state and extractors

use axum::extract::FromRequest;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tp_advisor::Advisor;
use tp_db::{DeveloperStore, InMemoryStore, ProjectStore, TaskStore};
use tp_services::{Queries, SharedClock};

use crate::error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectStore>,
    pub developers: Arc<dyn DeveloperStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub queries: Queries,
    pub advisor: Arc<dyn Advisor>,
    pub clock: SharedClock,
}

impl AppState {
    pub fn new(
        projects: Arc<dyn ProjectStore>,
        developers: Arc<dyn DeveloperStore>,
        tasks: Arc<dyn TaskStore>,
        advisor: Arc<dyn Advisor>,
        clock: SharedClock,
    ) -> Self {
        Self {
            queries: Queries::new(projects.clone(), developers.clone(), tasks.clone()),
            projects,
            developers,
            tasks,
            advisor,
            clock,
        }
    }

    /// State backed by an [`InMemoryStore`]
    pub fn in_memory(store: &InMemoryStore, advisor: Arc<dyn Advisor>, clock: SharedClock) -> Self {
        Self::new(
            Arc::new(store.projects()),
            Arc::new(store.developers()),
            Arc::new(store.tasks()),
            advisor,
            clock,
        )
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}

/// JSON body whose rejections render as [`ApiError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
