//! Task Service
//!
//! Builds the task list page: running, pending and stopped tasks.

use ecsview_client::{ClientError, EcsRepository};
use ecsview_core::dto::task::{TaskListView, TaskSummary};

/// List every task in the cluster with its derived display fields
pub async fn list_tasks(
    ecs: &dyn EcsRepository,
    cluster: &str,
) -> Result<TaskListView, ClientError> {
    let tasks = ecs.list_tasks(cluster).await?;

    tracing::debug!("Described {} tasks in {}", tasks.len(), cluster);

    Ok(TaskListView {
        cluster: cluster.to_string(),
        tasks: tasks.iter().map(TaskSummary::from).collect(),
    })
}
