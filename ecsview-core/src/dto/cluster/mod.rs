//! Cluster page DTOs

use serde::{Deserialize, Serialize};

use crate::domain::cluster::Cluster;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterView {
    pub cluster: Cluster,
}
