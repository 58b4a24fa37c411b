//! Task domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A running or terminated ECS task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub arn: String,
    pub task_definition_arn: Option<String>,
    pub last_status: Option<String>,
    pub desired_status: Option<String>,
    pub launch_type: Option<String>,
    /// Epoch milliseconds
    pub created_at: Option<i64>,
    pub containers: Vec<Container>,
}

impl Task {
    /// The first container, which the dashboard treats as the task's primary one
    pub fn primary_container(&self) -> Option<&Container> {
        self.containers.first()
    }
}

/// A container inside a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: Option<String>,
    pub last_status: Option<String>,
    pub image: Option<String>,
}

/// Desired status filter for listing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesiredStatus {
    Running,
    Pending,
    Stopped,
}

impl DesiredStatus {
    /// Query order used when listing every task in a cluster
    pub const ALL: [DesiredStatus; 3] = [
        DesiredStatus::Running,
        DesiredStatus::Pending,
        DesiredStatus::Stopped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DesiredStatus::Running => "RUNNING",
            DesiredStatus::Pending => "PENDING",
            DesiredStatus::Stopped => "STOPPED",
        }
    }
}

impl fmt::Display for DesiredStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
