//! # tp-services
//!
//! Business logic services for Team Planner.
//!
//! Service objects validate through contracts, persist through the store
//! traits of `tp-db` and report through [`ServiceResult`]. The grade adjuster
//! and the pacing evaluator are pure functions with no storage access.

pub mod developers;
pub mod grading;
pub mod pacing;
pub mod projects;
pub mod queries;
pub mod result;
pub mod tasks;
pub mod views;

pub use developers::{CreateDeveloperService, UpdateDeveloperService};
pub use grading::{adjust_grade_on_completion, adjust_grade_text};
pub use pacing::{evaluate_pacing, PacingResult, PacingStatus};
pub use projects::{CreateProjectService, DeleteProjectService, TeamService, UpdateProjectService};
pub use queries::Queries;
pub use result::{Failure, ServiceResult};
pub use tasks::{
    CreateTaskService, DeleteTaskService, GradeChange, TaskUpdateOutcome, UpdateTaskService,
};
pub use views::{CompletionSummary, ProjectOverview, TaskView};

use mockable::Clock;
use std::sync::Arc;

/// Clock shared by the services
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

#[cfg(test)]
pub(crate) mod testing;
