//! Service Result type

use std::fmt;
use tp_core::error::{TpError, TpResult, ValidationErrors};
use tp_core::traits::{Entity, Id};

/// Why a service call failed
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Contract validation rejected the input; details are in `errors`
    Invalid,
    /// The record the call operates on does not exist
    NotFound { entity: &'static str, id: Id },
    /// The data store refused or failed the write
    Persistence(String),
}

/// Represents the result of a service call
#[derive(Debug)]
pub struct ServiceResult<T> {
    /// Whether the service call was successful
    success: bool,
    /// The result of the service call
    result: Option<T>,
    /// Errors from the service call
    errors: ValidationErrors,
    /// Message for display
    message: Option<String>,
    failure: Option<Failure>,
}

impl<T> ServiceResult<T> {
    /// Create a successful service result
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
            message: None,
            failure: None,
        }
    }

    /// Create a failed service result
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
            message: None,
            failure: Some(Failure::Invalid),
        }
    }

    /// Create a failed service result with a single error
    pub fn failure_with_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::failure(errors)
    }

    /// Create a failed service result with a base error
    pub fn failure_with_base_error(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    /// The entity addressed by the call does not exist
    pub fn not_found<E: Entity>(id: Id) -> Self {
        let mut result = Self::failure_with_base_error(format!("{} not found", E::TYPE_NAME));
        result.failure = Some(Failure::NotFound {
            entity: E::TYPE_NAME,
            id,
        });
        result
    }

    /// The data store failed; the cause is kept for the caller
    pub fn persistence(cause: impl fmt::Display) -> Self {
        let cause = cause.to_string();
        let mut result = Self::failure_with_base_error("Could not be saved");
        result.failure = Some(Failure::Persistence(cause));
        result
    }

    /// Check if the service call was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Check if the service call failed
    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Get the result (if successful)
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Get the errors
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Why the call failed, `None` on success
    pub fn failure_kind(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Get the message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Full error messages
    pub fn full_messages(&self) -> Vec<String> {
        self.errors.full_messages()
    }

    /// Map the result if successful
    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ServiceResult {
            success: self.success,
            result: self.result.map(f),
            errors: self.errors,
            message: self.message,
            failure: self.failure,
        }
    }

    /// Convert into the workspace-wide error type
    pub fn into_result(self) -> TpResult<T> {
        match (self.success, self.result) {
            (true, Some(value)) => Ok(value),
            (true, None) => Err(TpError::Internal(
                "Service succeeded but no result was returned".to_string(),
            )),
            (false, _) => Err(match self.failure {
                Some(Failure::NotFound { entity, id }) => TpError::NotFound { entity, id },
                Some(Failure::Persistence(cause)) => TpError::Database(cause),
                Some(Failure::Invalid) | None => TpError::Validation(self.errors),
            }),
        }
    }
}

impl<T> From<Result<T, ValidationErrors>> for ServiceResult<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(errors) => ServiceResult::failure(errors),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServiceResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            if let Some(ref result) = self.result {
                write!(f, "Success: {}", result)
            } else {
                write!(f, "Success")
            }
        } else {
            write!(f, "Failure: {}", self.errors.full_messages().join(", "))
        }
    }
}
