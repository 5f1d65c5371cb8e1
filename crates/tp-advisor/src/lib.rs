//! # tp-advisor
//!
//! HTTP client for the external advisor service, which recommends an
//! assignee for a task and reports on a project's health.

pub mod client;
pub mod error;
pub mod types;

pub use client::AdvisorClient;
pub use error::AdvisorError;
pub use types::{DeveloperEfficiency, Recommendation, Report, Risk, RiskyTask};

use async_trait::async_trait;
use tp_core::traits::Id;
use tp_models::{Developer, Task};

/// Recommendation and report source
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Suggest an assignee for `current_task`, one of `tasks`
    async fn recommend_for(
        &self,
        developers: &[Developer],
        tasks: &[Task],
        current_task: &Task,
    ) -> Result<Recommendation, AdvisorError>;

    /// Completion, risky tasks and per-developer efficiency
    async fn report(&self, developers: &[Developer], tasks: &[Task]) -> Result<Report, AdvisorError>;

    /// Suggest an assignee for the task `task_id` out of `tasks`.
    ///
    /// When `task_id` is not among `tasks` nothing is asked and the
    /// placeholder from [`Recommendation::task_not_found`] is returned.
    async fn recommend(
        &self,
        developers: &[Developer],
        tasks: &[Task],
        task_id: Id,
    ) -> Result<Recommendation, AdvisorError> {
        match tasks.iter().find(|t| t.id == task_id) {
            Some(current_task) => self.recommend_for(developers, tasks, current_task).await,
            None => {
                tracing::debug!(task_id, "Task not among the supplied tasks");
                Ok(Recommendation::task_not_found())
            }
        }
    }
}
