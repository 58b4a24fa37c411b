//! Core domain types
//!
//! These structures are projections of records returned by the ECS and
//! CloudWatch Logs APIs. They are fetched fresh on every request and never
//! persisted or mutated by the dashboard.

pub mod cluster;
pub mod log;
pub mod service;
pub mod task;
pub mod task_definition;
