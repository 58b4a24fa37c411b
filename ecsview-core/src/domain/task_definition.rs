//! Task definition domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option key holding the CloudWatch log group for the `awslogs` driver
pub const AWSLOGS_GROUP_OPTION: &str = "awslogs-group";

/// A versioned task template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub arn: Option<String>,
    pub family: Option<String>,
    pub revision: i32,
    pub container_definitions: Vec<ContainerDefinition>,
}

impl TaskDefinition {
    /// The first container definition, matching the task's primary container
    pub fn primary_container(&self) -> Option<&ContainerDefinition> {
        self.container_definitions.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDefinition {
    pub name: Option<String>,
    pub image: Option<String>,
    pub log_configuration: Option<LogConfiguration>,
}

impl ContainerDefinition {
    /// Log group configured for this container, if any
    pub fn log_group(&self) -> Option<&str> {
        self.log_configuration
            .as_ref()
            .and_then(LogConfiguration::log_group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfiguration {
    pub log_driver: String,
    pub options: BTreeMap<String, String>,
}

impl LogConfiguration {
    pub fn log_group(&self) -> Option<&str> {
        self.options.get(AWSLOGS_GROUP_OPTION).map(String::as_str)
    }
}
