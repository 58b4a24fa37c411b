//! Cluster API Handler

use axum::{extract::State, response::Response};

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::render::Page;
use crate::service::cluster_service;

/// GET /cluster
/// Describe the configured cluster
pub async fn get_cluster(State(state): State<AppState>) -> Response {
    tracing::debug!("Describing cluster: {}", state.cluster);

    let result = cluster_service::get_cluster(state.ecs.as_ref(), &state.cluster)
        .await
        .map_err(ApiError::from);

    state.renderer.page(Page::Cluster, result)
}
