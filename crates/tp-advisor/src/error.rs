//! Advisor errors

use thiserror::Error;
use tp_core::error::TpError;

pub const SERVICE_NAME: &str = "advisor";

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The service answered with a non-2xx status
    #[error("advisor responded with {status}: {body}")]
    ServiceUnavailable { status: u16, body: String },

    #[error("advisor request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode advisor response: {0}")]
    Decode(String),

    #[error("invalid advisor url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<AdvisorError> for TpError {
    fn from(err: AdvisorError) -> Self {
        match err {
            AdvisorError::ServiceUnavailable { status, body } => TpError::ServiceUnavailable {
                service: SERVICE_NAME,
                status,
                body,
            },
            AdvisorError::InvalidUrl(e) => TpError::Config(e.to_string()),
            other => TpError::ExternalService {
                service: SERVICE_NAME,
                message: other.to_string(),
            },
        }
    }
}
