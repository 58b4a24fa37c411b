//! API Error Handling
//!
//! Unified error type for page handlers. Errors are never serialised
//! directly; the renderer turns them into an error page with the matching
//! status code.

use axum::http::StatusCode;
use ecsview_client::ClientError;

use crate::service::log_service::TaskLogError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// The ECS or CloudWatch API call failed
    UpstreamError(ClientError),
    /// The API answered, but not with the shape the page needs
    MalformedResource(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamError(_) | ApiError::MalformedResource(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown on the error page
    pub fn message(&self) -> String {
        match self {
            ApiError::NotFound(msg) | ApiError::MalformedResource(msg) => msg.clone(),
            ApiError::UpstreamError(err) => err.to_string(),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(what) => ApiError::NotFound(format!("{} not found", what)),
            other => ApiError::UpstreamError(other),
        }
    }
}

impl From<TaskLogError> for ApiError {
    fn from(err: TaskLogError) -> Self {
        match err {
            TaskLogError::TaskNotFound(id) => ApiError::NotFound(format!("Task {} not found", id)),
            TaskLogError::TaskDefinitionNotFound(id) => {
                ApiError::NotFound(format!("Task definition {} not found", id))
            }
            TaskLogError::LogStreamUnavailable {
                log_group,
                log_stream,
            } => ApiError::NotFound(format!(
                "Log stream {} is unavailable in log group {}",
                log_stream, log_group
            )),
            TaskLogError::IncompleteTask { task_id, field } => ApiError::MalformedResource(
                format!("Task {} has no {}", task_id, field),
            ),
            TaskLogError::IncompleteTaskDefinition {
                task_definition,
                field,
            } => ApiError::MalformedResource(format!(
                "Task definition {} has no {}",
                task_definition, field
            )),
            TaskLogError::MissingLogGroup { task_definition } => ApiError::MalformedResource(
                format!(
                    "Task definition {} does not configure an awslogs-group",
                    task_definition
                ),
            ),
            TaskLogError::MalformedIdentifier(err) => ApiError::MalformedResource(err.to_string()),
            TaskLogError::ClientError(err) => ApiError::from(err),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
