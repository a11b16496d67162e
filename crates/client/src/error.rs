//! Client error types.

use osctl_core::ServiceError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ServiceError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Service(inner) => inner,
            ClientError::ServerError { status, message } => ServiceError::Remote { status, message },
            ClientError::NotFound { resource } => ServiceError::Remote {
                status: 404,
                message: format!("Could not find {}", resource),
            },
            ClientError::Request(e) => ServiceError::Transport(e.to_string()),
            ClientError::Io(e) => ServiceError::Transport(e.to_string()),
            ClientError::InvalidResponse(message) => ServiceError::InvalidResponse(message),
            ClientError::Json(e) => ServiceError::InvalidResponse(e.to_string()),
            ClientError::Config(message) => ServiceError::Validation(message),
        }
    }
}
