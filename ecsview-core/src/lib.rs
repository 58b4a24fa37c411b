//! ECSView Core
//!
//! Core types and abstractions for the ECS dashboard.
//!
//! This crate contains:
//! - Domain types: read-only projections of ECS and CloudWatch Logs records
//! - Parsing: helpers that pull short identifiers out of ARNs and image references
//! - DTOs: view models assembled by the server and handed to the templates

pub mod domain;
pub mod dto;
pub mod parse;
