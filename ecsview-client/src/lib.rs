//! ECSView AWS Client
//!
//! Read-only adapters over the ECS and CloudWatch Logs APIs.
//!
//! Both adapters are trait-based so the server can be exercised against
//! in-memory doubles. The AWS implementations convert SDK records into the
//! domain types from `ecsview-core` and add no retry or pagination on top of
//! what the SDK does by itself.
//!
//! # Example
//!
//! ```no_run
//! use ecsview_client::{AwsEcsRepository, EcsRepository};
//!
//! # async fn example() -> ecsview_client::Result<()> {
//! let config = ecsview_client::load_sdk_config().await;
//! let ecs = AwsEcsRepository::new(&config);
//!
//! let tasks = ecs.list_tasks("prod").await?;
//! println!("{} tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

pub mod ecs;
pub mod error;
pub mod logs;

// Re-export commonly used types
pub use ecs::{AwsEcsRepository, EcsRepository};
pub use error::{ClientError, Result};
pub use logs::{CloudWatchLogRepository, LogRepository};

use aws_config::{BehaviorVersion, SdkConfig};

/// Loads region and credentials from the ambient AWS provider chain
/// (environment, shared profile, instance or task role)
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}
