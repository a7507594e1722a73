use crate::error::diagnostics::DiagnosticMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing variable: {context}")]
    MissingVar { context: DiagnosticMessage },
    #[error("invalid endpoint: {context}")]
    InvalidEndpoint { context: DiagnosticMessage },
}

impl ConfigError {
    #[track_caller]
    pub fn missing_var(name: impl Into<String>) -> Self {
        let message = format!(
            "Environment variable `{}` is not set or blank. Export it or add it to a .env file.",
            name.into()
        );
        Self::MissingVar {
            context: DiagnosticMessage::new(message),
        }
    }

    #[track_caller]
    pub fn invalid_endpoint(value: impl Into<String>) -> Self {
        let message = format!(
            "`{}` is not an http(s) URL. The endpoint should look like https://cloud.appwrite.io/v1",
            value.into()
        );
        Self::InvalidEndpoint {
            context: DiagnosticMessage::new(message),
        }
    }
}
