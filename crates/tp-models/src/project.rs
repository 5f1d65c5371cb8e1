//! Project model
//!
//! Table: projects

use serde::{Deserialize, Serialize};
use tp_core::traits::{Entity, Id, Identifiable};
use validator::Validate;

/// Project entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub description: String,
    pub name: String,
}

impl Identifiable for Project {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Project {
    const TABLE_NAME: &'static str = "projects";
    const TYPE_NAME: &'static str = "Project";
}

/// DTO for creating a new project
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: String,

    #[serde(default)]
    pub description: String,
}

/// DTO for updating a project
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateProjectDto {
    /// Apply updates to a project
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(ref name) = self.name {
            project.name = name.clone();
        }
        if let Some(ref description) = self.description {
            project.description = description.clone();
        }
    }
}
