//! # tp-models
//!
//! Domain models for Team Planner.
//!
//! Three tables back the whole application: projects, developers and tasks.
//! Each model implements the core traits from `tp-core`.

pub use tp_core::traits::{Entity, Id, Identifiable, ProjectScoped};

pub mod developer;
pub mod grade;
pub mod project;
pub mod serde_ext;
pub mod task;
pub mod task_state;

pub use developer::{CreateDeveloperDto, Developer, UpdateDeveloperDto};
pub use grade::parse_grade;
pub use project::{CreateProjectDto, Project, UpdateProjectDto};
pub use task::{CreateTaskDto, Task, UpdateTaskDto};
pub use task_state::{StateInfo, TaskState};
