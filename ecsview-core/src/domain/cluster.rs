//! Cluster domain types

use serde::{Deserialize, Serialize};

/// The configured ECS cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub registered_container_instances: i32,
    pub running_tasks: i32,
    pub pending_tasks: i32,
    pub active_services: i32,
}
