//! API error handling
//!
//! Every failure is rendered as `{"errorIdentifier", "message"}`; validation
//! failures also carry the per-attribute `errors`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tp_advisor::AdvisorError;
use tp_core::error::{TpError, ValidationErrors};
use tp_core::traits::{Entity, Id};

const URN_PREFIX: &str = "urn:team-planner:api:v1:errors:";

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound { resource: &'static str, id: Id },
    Validation(ValidationErrors),
    /// Well-formed JSON with values that cannot be accepted
    InvalidBody(String),
    BadRequest(String),
    BadGateway(String),
    Internal(String),
}

impl ApiError {
    pub fn not_found<E: Entity>(id: Id) -> Self {
        ApiError::NotFound {
            resource: E::TYPE_NAME,
            id,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn identifier(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NotFound",
            ApiError::Validation(_) => "PropertyConstraintViolation",
            ApiError::InvalidBody(_) => "InvalidRequestBody",
            ApiError::BadRequest(_) => "MalformedRequest",
            ApiError::BadGateway(_) => "AdvisorUnavailable",
            ApiError::Internal(_) => "InternalError",
        }
    }
}

impl From<TpError> for ApiError {
    fn from(err: TpError) -> Self {
        match err {
            TpError::NotFound { entity, id } => ApiError::NotFound {
                resource: entity,
                id,
            },
            TpError::Validation(errors) => ApiError::Validation(errors),
            TpError::InvalidState(_) => ApiError::InvalidBody(err.to_string()),
            TpError::ServiceUnavailable { .. } | TpError::ExternalService { .. } => {
                ApiError::BadGateway(err.to_string())
            }
            TpError::Database(_) | TpError::Internal(_) | TpError::Config(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        TpError::from(err).into()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::InvalidBody(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_identifier: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_identifier = format!("{}{}", URN_PREFIX, self.identifier());
        let body = match self {
            ApiError::NotFound { resource, id } => ErrorBody {
                error_identifier,
                message: format!("{} with id {} not found", resource, id),
                errors: None,
            },
            ApiError::Validation(errors) => ErrorBody {
                error_identifier,
                message: errors.full_messages().join(", "),
                errors: Some(errors.errors),
            },
            ApiError::InvalidBody(message)
            | ApiError::BadRequest(message)
            | ApiError::BadGateway(message)
            | ApiError::Internal(message) => ErrorBody {
                error_identifier,
                message,
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
