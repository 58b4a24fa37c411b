//! Service Module
//!
//! View assembly layer for the dashboard.
//! Services call the ECS and CloudWatch repositories and shape the records
//! into the view model of one page. They hold no state between requests.

pub mod cluster;
pub mod ecs_service;
pub mod log;
pub mod task;

// Re-export for convenience
pub use cluster as cluster_service;
pub use log as log_service;
pub use task as task_service;
