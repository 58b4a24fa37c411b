//! Service list DTOs

use serde::{Deserialize, Serialize};

use crate::domain::service::EcsService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListView {
    pub cluster: String,
    pub services: Vec<EcsService>,
}
