//! Cluster Service
//!
//! Describes the configured cluster.

use ecsview_client::{ClientError, EcsRepository};
use ecsview_core::dto::cluster::ClusterView;

/// Describe the configured cluster
pub async fn get_cluster(
    ecs: &dyn EcsRepository,
    cluster: &str,
) -> Result<ClusterView, ClientError> {
    let cluster = ecs.describe_cluster(cluster).await?;

    Ok(ClusterView { cluster })
}
