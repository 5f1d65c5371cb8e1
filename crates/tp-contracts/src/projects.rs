//! Project contracts

use tp_models::{CreateProjectDto, UpdateProjectDto};

use crate::base::{attribute_errors, validate_presence, validate_presence_if_set};
use crate::base::{Contract, ValidationResult};

/// Contract for creating a new project
#[derive(Debug, Default)]
pub struct CreateProjectContract;

impl CreateProjectContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<CreateProjectDto> for CreateProjectContract {
    fn validate(&self, dto: &CreateProjectDto) -> ValidationResult {
        let mut errors = attribute_errors(dto);
        validate_presence("name", &dto.name, &mut errors);
        errors.into_result()
    }
}

/// Contract for updating an existing project
#[derive(Debug, Default)]
pub struct UpdateProjectContract;

impl UpdateProjectContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<UpdateProjectDto> for UpdateProjectContract {
    fn validate(&self, dto: &UpdateProjectDto) -> ValidationResult {
        let mut errors = attribute_errors(dto);
        validate_presence_if_set("name", dto.name.as_deref(), &mut errors);
        errors.into_result()
    }
}
