//! ECSView Server
//!
//! Read-only web dashboard for a single ECS cluster: cluster summary,
//! services, tasks, and the last hour of CloudWatch logs for a task.
//!
//! Architecture:
//! - Configuration: cluster and bind address from the environment
//! - Repositories: ECS and CloudWatch Logs adapters (`ecsview-client`)
//! - Services: assemble one view model per page
//! - Render: Handlebars templates compiled into the binary
//! - API: axum routes tying the above together
//!
//! Every request is a stateless read-through to AWS.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecsview_client::{AwsEcsRepository, CloudWatchLogRepository, EcsRepository, LogRepository};

use crate::api::AppState;
use crate::config::Config;
use crate::render::Renderer;

pub mod api;
pub mod config;
pub mod render;
pub mod service;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ecsview_server=debug,ecsview_client=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ECSView...");

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Inspecting cluster: {}", config.cluster);

    // Region and credentials come from the ambient AWS provider chain
    let sdk_config = ecsview_client::load_sdk_config().await;
    let ecs: Arc<dyn EcsRepository> = Arc::new(AwsEcsRepository::new(&sdk_config));
    let logs: Arc<dyn LogRepository> = Arc::new(CloudWatchLogRepository::new(&sdk_config));

    let renderer = Renderer::new().context("Failed to compile page templates")?;

    let app = api::create_router(AppState {
        cluster: config.cluster.clone(),
        ecs,
        logs,
        renderer: Arc::new(renderer),
    });

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
