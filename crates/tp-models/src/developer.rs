//! Developer model
//!
//! Table: developers

use serde::{Deserialize, Serialize};
use tp_core::traits::{Entity, Id, Identifiable, ProjectScoped};
use validator::Validate;

use crate::grade::parse_grade;
use crate::serde_ext::nullable;

/// Team member who can be staffed on at most one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: Id,
    pub last_name: String,
    pub first_name: String,
    pub position: String,

    /// Numeric score kept in its textual form
    pub grade: String,

    /// Current project; `None` while on the bench
    pub project: Option<Id>,
}

impl Identifiable for Developer {
    fn id(&self) -> Id {
        self.id
    }
}

impl ProjectScoped for Developer {
    fn project_id(&self) -> Option<Id> {
        self.project
    }
}

impl Entity for Developer {
    const TABLE_NAME: &'static str = "developers";
    const TYPE_NAME: &'static str = "Developer";
}

impl Developer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Grade as an integer, see [`parse_grade`]
    pub fn grade_value(&self) -> i64 {
        parse_grade(&self.grade)
    }

    pub fn is_benched(&self) -> bool {
        self.project.is_none()
    }

    pub fn is_staffed_on(&self, project_id: Id) -> bool {
        self.project == Some(project_id)
    }
}

/// DTO for creating a developer
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeveloperDto {
    #[validate(length(max = 100, message = "is too long (maximum is 100 characters)"))]
    pub last_name: String,

    #[validate(length(max = 100, message = "is too long (maximum is 100 characters)"))]
    pub first_name: String,

    #[serde(default)]
    pub position: String,

    #[serde(default = "default_grade")]
    pub grade: String,

    #[serde(default)]
    pub project: Option<Id>,
}

fn default_grade() -> String {
    "0".to_string()
}

/// DTO for a partial developer update
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeveloperDto {
    #[validate(length(max = 100, message = "is too long (maximum is 100 characters)"))]
    pub last_name: Option<String>,

    #[validate(length(max = 100, message = "is too long (maximum is 100 characters)"))]
    pub first_name: Option<String>,

    pub position: Option<String>,

    pub grade: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub project: Option<Option<Id>>,
}

impl UpdateDeveloperDto {
    /// Update that moves a developer onto a project or back to the bench
    pub fn with_project(project: Option<Id>) -> Self {
        Self {
            project: Some(project),
            ..Default::default()
        }
    }

    /// Apply updates to a developer
    pub fn apply_to(&self, developer: &mut Developer) {
        if let Some(ref last_name) = self.last_name {
            developer.last_name = last_name.clone();
        }
        if let Some(ref first_name) = self.first_name {
            developer.first_name = first_name.clone();
        }
        if let Some(ref position) = self.position {
            developer.position = position.clone();
        }
        if let Some(ref grade) = self.grade {
            developer.grade = grade.clone();
        }
        if let Some(project) = self.project {
            developer.project = project;
        }
    }
}
