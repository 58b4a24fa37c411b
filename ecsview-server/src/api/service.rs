//! Service API Handler

use axum::{extract::State, response::Response};

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::render::Page;
use crate::service::ecs_service;

/// GET /service
/// List every service in the cluster
pub async fn list_services(State(state): State<AppState>) -> Response {
    tracing::debug!("Listing services in cluster: {}", state.cluster);

    let result = ecs_service::list_services(state.ecs.as_ref(), &state.cluster)
        .await
        .map_err(ApiError::from);

    state.renderer.page(Page::Services, result)
}
