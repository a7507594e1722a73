use common::error::DiagnosticMessage;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppwriteClientError {
    #[error("resource not found: {context}")]
    NotFound { context: DiagnosticMessage },
    #[error("resource already exists: {context}")]
    Conflict { context: DiagnosticMessage },
    #[error("not authorized: {context}")]
    Unauthorized { context: DiagnosticMessage },
    #[error("invalid request: {context}")]
    InvalidRequest { context: DiagnosticMessage },
    #[error("connectivity error: {context}")]
    FailedToConnect { context: DiagnosticMessage },
    #[error("unexpected response: {context}")]
    Unexpected { context: DiagnosticMessage },
}

impl AppwriteClientError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn failed_to_connect(message: impl Into<String>) -> Self {
        Self::FailedToConnect {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            context: DiagnosticMessage::new(message.into()),
        }
    }

    /// True for the "resource does not exist" condition that the
    /// delete-before-create paths treat as a skip rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for the "resource already exists" condition that makes an
    /// unconditional create idempotent in effect.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl From<reqwest::Error> for AppwriteClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            AppwriteClientError::failed_to_connect(err.to_string())
        } else if let Some(status) = err.status() {
            match status {
                StatusCode::NOT_FOUND => AppwriteClientError::not_found(err.to_string()),
                StatusCode::CONFLICT => AppwriteClientError::conflict(err.to_string()),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppwriteClientError::unauthorized(err.to_string())
                }
                StatusCode::BAD_REQUEST => AppwriteClientError::invalid_request(err.to_string()),
                _ => AppwriteClientError::unexpected(format!(
                    "request failed with status {}: {}",
                    status, err
                )),
            }
        } else {
            AppwriteClientError::unexpected(format!(
                "unexpected error sending Appwrite request: {}",
                err
            ))
        }
    }
}
