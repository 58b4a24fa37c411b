//! View models handed to the page templates
//!
//! Each page of the dashboard renders exactly one of these. They are plain
//! serialisable snapshots; comparing two of them tells whether the underlying
//! ECS state changed between requests.

pub mod cluster;
pub mod service;
pub mod task;
