//! Developer contracts

use tp_core::error::ValidationErrors;
use tp_models::{CreateDeveloperDto, Id, UpdateDeveloperDto};

use crate::base::{attribute_errors, validate_presence, validate_presence_if_set};
use crate::base::{Contract, ValidationResult};

fn validate_project(project: Option<Id>, project_exists: bool, errors: &mut ValidationErrors) {
    if project.is_some() && !project_exists {
        errors.add("project", "does not exist");
    }
}

/// Contract for creating a developer
pub struct CreateDeveloperContract {
    project_exists: bool,
}

impl CreateDeveloperContract {
    /// `project_exists` tells whether the requested project (if any) is known
    pub fn new(project_exists: bool) -> Self {
        Self { project_exists }
    }
}

impl Contract<CreateDeveloperDto> for CreateDeveloperContract {
    fn validate(&self, dto: &CreateDeveloperDto) -> ValidationResult {
        let mut errors = attribute_errors(dto);
        validate_presence("first_name", &dto.first_name, &mut errors);
        validate_presence("last_name", &dto.last_name, &mut errors);
        validate_project(dto.project, self.project_exists, &mut errors);
        errors.into_result()
    }
}

/// Contract for updating a developer
pub struct UpdateDeveloperContract {
    project_exists: bool,
}

impl UpdateDeveloperContract {
    pub fn new(project_exists: bool) -> Self {
        Self { project_exists }
    }
}

impl Contract<UpdateDeveloperDto> for UpdateDeveloperContract {
    fn validate(&self, dto: &UpdateDeveloperDto) -> ValidationResult {
        let mut errors = attribute_errors(dto);
        validate_presence_if_set("first_name", dto.first_name.as_deref(), &mut errors);
        validate_presence_if_set("last_name", dto.last_name.as_deref(), &mut errors);
        validate_project(dto.project.flatten(), self.project_exists, &mut errors);
        errors.into_result()
    }
}
