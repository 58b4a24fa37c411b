//! Dashboard configuration
//!
//! Read once at startup and handed to the components that need it.
//! AWS region and credentials are not part of it: they come from the
//! ambient AWS provider chain.

use std::net::SocketAddr;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name or ARN of the ECS cluster to inspect
    pub cluster: String,

    /// Address the HTTP server listens on
    pub bind_addr: String,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(cluster: String) -> Self {
        Self {
            cluster,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - ECS_CLUSTER (required)
    /// - ECSVIEW_BIND_ADDR (optional, default: 0.0.0.0:5000)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let cluster = var("ECS_CLUSTER")
            .ok_or_else(|| anyhow::anyhow!("ECS_CLUSTER environment variable not set"))?;

        let mut config = Self::new(cluster);
        if let Some(bind_addr) = var("ECSVIEW_BIND_ADDR") {
            config.bind_addr = bind_addr;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.cluster.trim().is_empty() {
            anyhow::bail!("cluster cannot be empty");
        }

        if self.bind_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("bind_addr '{}' is not a valid socket address", self.bind_addr);
        }

        Ok(())
    }
}
