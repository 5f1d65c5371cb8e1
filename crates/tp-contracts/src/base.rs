//! Base contract system

use tp_core::error::ValidationErrors;
use validator::Validate;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the entity
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Attribute-level errors declared on the DTO itself
pub fn attribute_errors<T: Validate>(dto: &T) -> ValidationErrors {
    match dto.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors.into(),
    }
}

/// Validate a required text attribute is present
pub fn validate_presence(field: &str, value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(field, "can't be blank");
    }
}

/// Same as [`validate_presence`], for attributes a partial update may omit
pub fn validate_presence_if_set(field: &str, value: Option<&str>, errors: &mut ValidationErrors) {
    if let Some(value) = value {
        validate_presence(field, value, errors);
    }
}
