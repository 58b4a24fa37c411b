//! Task API Handlers
//!
//! Task list and per-task log pages.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::render::Page;
use crate::service::{log_service, task_service};

/// GET /task
/// List running, pending and stopped tasks
pub async fn list_tasks(State(state): State<AppState>) -> Response {
    tracing::debug!("Listing tasks in cluster: {}", state.cluster);

    let result = task_service::list_tasks(state.ecs.as_ref(), &state.cluster)
        .await
        .map_err(ApiError::from);

    state.renderer.page(Page::Tasks, result)
}

/// GET /task/{id}/log
/// Task status, image tag, task definition and the last hour of log events
pub async fn get_task_log(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    tracing::info!("Fetching logs for task: {}", id);

    let now = chrono::Utc::now().timestamp_millis();

    let result = log_service::get_task_log(
        state.ecs.as_ref(),
        state.logs.as_ref(),
        &state.cluster,
        &id,
        now,
    )
    .await
    .map_err(|e| {
        tracing::warn!("Log lookup failed for task {}: {:?}", id, e);
        ApiError::from(e)
    });

    state.renderer.page(Page::TaskLog, result)
}
