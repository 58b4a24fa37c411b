//! Error types for the AWS client adapters

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to ECS or CloudWatch Logs
#[derive(Debug, Error)]
pub enum ClientError {
    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The remote API rejected the call or could not be reached
    #[error("{service} API error: {message}")]
    ApiError {
        /// Which API failed ("ecs" or "logs")
        service: &'static str,
        /// Error message including the SDK's error context
        message: String,
    },

    /// The API answered with a record missing a required field
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Create an API error for the given service
    pub fn api_error(service: &'static str, message: impl Into<String>) -> Self {
        Self::ApiError {
            service,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
