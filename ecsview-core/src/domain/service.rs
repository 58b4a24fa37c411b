//! Service domain types

use serde::{Deserialize, Serialize};

/// An ECS service
///
/// Named `EcsService` to keep it apart from the dashboard's own service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcsService {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub desired_count: i32,
    pub running_count: i32,
    pub pending_count: i32,
    pub task_definition: Option<String>,
    pub launch_type: Option<String>,
}
