//! Core error types for Team Planner

use std::collections::BTreeMap;
use thiserror::Error;

use crate::traits::Id;

/// Standard Result type for Team Planner operations
pub type TpResult<T> = Result<T, TpError>;

/// Core error type shared by every crate in the workspace
#[derive(Error, Debug)]
pub enum TpError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: Id },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid task state: {0} (expected 0..=7)")]
    InvalidState(i32),

    #[error("Database error: {0}")]
    Database(String),

    #[error("{service} responded with {status}: {body}")]
    ServiceUnavailable {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("External service error: {service} - {message}")]
    ExternalService {
        service: &'static str,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TpError {
    pub fn not_found(entity: &'static str, id: Id) -> Self {
        TpError::NotFound { entity, id }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            TpError::NotFound { .. } => 404,
            TpError::Validation(_) | TpError::InvalidState(_) => 422,
            TpError::ServiceUnavailable { .. } | TpError::ExternalService { .. } => 502,
            TpError::Database(_) | TpError::Internal(_) | TpError::Config(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TpError::NotFound { .. } => "not_found",
            TpError::Validation(_) => "validation_failed",
            TpError::InvalidState(_) => "invalid_state",
            TpError::Database(_) => "database_error",
            TpError::ServiceUnavailable { .. } => "service_unavailable",
            TpError::ExternalService { .. } => "external_service_error",
            TpError::Internal(_) => "internal_error",
            TpError::Config(_) => "configuration_error",
        }
    }
}

/// Validation errors collection, keyed by attribute name
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("{}", self.full_messages().join(", "))]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, Vec<String>>,
    /// Errors not tied to a specific attribute
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, field_errors) in source.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("is invalid ({})", error.code),
                };
                errors.add(field, message);
            }
        }
        errors
    }
}
