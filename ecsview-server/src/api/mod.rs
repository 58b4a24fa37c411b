//! API Module
//!
//! HTTP layer for the dashboard.
//! Each submodule handles the pages for one kind of ECS resource.

pub mod cluster;
pub mod error;
pub mod health;
pub mod index;
pub mod service;
pub mod task;

use axum::{Router, routing::get};
use ecsview_client::{EcsRepository, LogRepository};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::render::Renderer;

/// Dependencies shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Cluster every page reads from
    pub cluster: String,
    pub ecs: Arc<dyn EcsRepository>,
    pub logs: Arc<dyn LogRepository>,
    pub renderer: Arc<Renderer>,
}

/// Create the main router with all pages
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pages
        .route("/", get(index::index))
        .route("/cluster", get(cluster::get_cluster))
        .route("/service", get(service::list_services))
        .route("/task", get(task::list_tasks))
        .route("/task/{id}/log", get(task::get_task_log))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
