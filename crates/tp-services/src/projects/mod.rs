//! Project services
//!
//! Deleting a project removes its tasks and returns its developers to the
//! bench. Staffing moves developers between the bench and a project.

mod create;
mod delete;
mod team;
mod update;

pub use create::CreateProjectService;
pub use delete::DeleteProjectService;
pub use team::TeamService;
pub use update::UpdateProjectService;
