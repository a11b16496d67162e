use thiserror::Error;

/// Errors surfaced by resolution and by the services behind the collection traits.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No {kind} with a name or ID of '{token}' exists.")]
    NotFound { kind: &'static str, token: String },
    #[error("More than one {kind} exists with the name '{token}': {}", .ids.join(", "))]
    Ambiguous {
        kind: &'static str,
        token: String,
        ids: Vec<String>,
    },
    #[error("{0}")]
    Validation(String),
    #[error("Service returned {status}: {message}")]
    Remote { status: u16, message: String },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
