//! Health Check API Handler
//!
//! Liveness endpoint for load balancer target groups. It does not call AWS.

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
