//! Task contracts
//!
//! State values are already range-checked when the DTO is deserialized, so
//! these contracts only cover names and references.

use tp_core::error::ValidationErrors;
use tp_models::{CreateTaskDto, UpdateTaskDto};

use crate::base::{attribute_errors, validate_presence, validate_presence_if_set};
use crate::base::{Contract, ValidationResult};

/// Facts about the references a task points at, looked up by the caller
#[derive(Debug, Clone, Copy)]
pub struct TaskReferences {
    pub project_exists: bool,
    /// `true` when no developer is requested
    pub developer_exists: bool,
}

impl Default for TaskReferences {
    fn default() -> Self {
        Self {
            project_exists: true,
            developer_exists: true,
        }
    }
}

fn validate_references(references: &TaskReferences, errors: &mut ValidationErrors) {
    if !references.project_exists {
        errors.add("project", "does not exist");
    }
    if !references.developer_exists {
        errors.add("developer", "does not exist");
    }
}

/// Contract for creating a task
pub struct CreateTaskContract {
    references: TaskReferences,
}

impl CreateTaskContract {
    pub fn new(references: TaskReferences) -> Self {
        Self { references }
    }
}

impl Contract<CreateTaskDto> for CreateTaskContract {
    fn validate(&self, dto: &CreateTaskDto) -> ValidationResult {
        let mut errors = attribute_errors(dto);
        validate_presence("name", &dto.name, &mut errors);
        validate_references(&self.references, &mut errors);

        errors.into_result()
    }
}

/// Contract for updating a task
pub struct UpdateTaskContract {
    references: TaskReferences,
}

impl UpdateTaskContract {
    pub fn new(references: TaskReferences) -> Self {
        Self { references }
    }
}

impl Contract<UpdateTaskDto> for UpdateTaskContract {
    fn validate(&self, dto: &UpdateTaskDto) -> ValidationResult {
        let mut errors = attribute_errors(dto);
        validate_presence_if_set("name", dto.name.as_deref(), &mut errors);
        validate_references(&self.references, &mut errors);

        if dto.is_empty() {
            errors.add_base("No attributes to update");
        }

        errors.into_result()
    }
}
