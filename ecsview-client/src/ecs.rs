//! ECS repository
//!
//! Thin pass-through to the ECS API. The primitive calls map one-to-one onto
//! SDK operations; the provided methods compose them into the listings the
//! dashboard pages need.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ecs::Client;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types as sdk;
use ecsview_core::domain::cluster::Cluster;
use ecsview_core::domain::service::EcsService;
use ecsview_core::domain::task::{Container, DesiredStatus, Task};
use ecsview_core::domain::task_definition::{
    ContainerDefinition, LogConfiguration, TaskDefinition,
};

use crate::error::{ClientError, Result};

const SERVICE: &str = "ecs";

/// Repository trait for read-only ECS operations
#[async_trait]
pub trait EcsRepository: Send + Sync {
    /// Lists task ARNs in a cluster with the given desired status (first API page only)
    async fn list_task_arns(&self, cluster: &str, status: DesiredStatus) -> Result<Vec<String>>;

    /// Describes tasks by ARN or id in a single call
    ///
    /// Identifiers the API cannot find are left out of the result.
    async fn describe_tasks(&self, cluster: &str, tasks: &[String]) -> Result<Vec<Task>>;

    /// Describes the cluster itself
    async fn describe_cluster(&self, cluster: &str) -> Result<Cluster>;

    /// Lists service ARNs in a cluster (first API page only)
    async fn list_service_arns(&self, cluster: &str) -> Result<Vec<String>>;

    /// Describes services by ARN in a single call
    async fn describe_services(
        &self,
        cluster: &str,
        services: &[String],
    ) -> Result<Vec<EcsService>>;

    /// Describes a task definition by `family:revision` or full ARN
    async fn describe_task_definition(&self, task_definition: &str) -> Result<TaskDefinition>;

    /// Every task in the cluster: running, then pending, then stopped
    ///
    /// The three listings are concatenated as-is (no de-duplication) and
    /// described with one batched call.
    async fn list_tasks(&self, cluster: &str) -> Result<Vec<Task>> {
        let mut arns = Vec::new();
        for status in DesiredStatus::ALL {
            let listed = self.list_task_arns(cluster, status).await?;
            tracing::debug!("Listed {} {} tasks in {}", listed.len(), status, cluster);
            arns.extend(listed);
        }

        if arns.is_empty() {
            return Ok(Vec::new());
        }

        self.describe_tasks(cluster, &arns).await
    }

    /// Every service in the cluster
    async fn list_services(&self, cluster: &str) -> Result<Vec<EcsService>> {
        let arns = self.list_service_arns(cluster).await?;
        tracing::debug!("Listed {} services in {}", arns.len(), cluster);

        if arns.is_empty() {
            return Ok(Vec::new());
        }

        self.describe_services(cluster, &arns).await
    }
}

/// AWS SDK implementation of EcsRepository
#[derive(Debug, Clone)]
pub struct AwsEcsRepository {
    client: Client,
}

impl AwsEcsRepository {
    /// Creates a repository from a loaded AWS configuration
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }

    /// Creates a repository around an already configured SDK client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EcsRepository for AwsEcsRepository {
    async fn list_task_arns(&self, cluster: &str, status: DesiredStatus) -> Result<Vec<String>> {
        let output = self
            .client
            .list_tasks()
            .cluster(cluster)
            .desired_status(sdk_desired_status(status))
            .send()
            .await
            .map_err(api_error)?;

        Ok(output.task_arns().to_vec())
    }

    async fn describe_tasks(&self, cluster: &str, tasks: &[String]) -> Result<Vec<Task>> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let output = self
            .client
            .describe_tasks()
            .cluster(cluster)
            .set_tasks(Some(tasks.to_vec()))
            .send()
            .await
            .map_err(api_error)?;

        for failure in output.failures() {
            tracing::debug!(
                "describe_tasks failure for {}: {}",
                failure.arn().unwrap_or("<unknown>"),
                failure.reason().unwrap_or("<no reason>")
            );
        }

        output.tasks().iter().map(task_from_sdk).collect()
    }

    async fn describe_cluster(&self, cluster: &str) -> Result<Cluster> {
        let output = self
            .client
            .describe_clusters()
            .clusters(cluster)
            .send()
            .await
            .map_err(api_error)?;

        output
            .clusters()
            .first()
            .map(cluster_from_sdk)
            .ok_or_else(|| ClientError::NotFound(format!("cluster {}", cluster)))
    }

    async fn list_service_arns(&self, cluster: &str) -> Result<Vec<String>> {
        let output = self
            .client
            .list_services()
            .cluster(cluster)
            .send()
            .await
            .map_err(api_error)?;

        Ok(output.service_arns().to_vec())
    }

    async fn describe_services(
        &self,
        cluster: &str,
        services: &[String],
    ) -> Result<Vec<EcsService>> {
        if services.is_empty() {
            return Ok(Vec::new());
        }

        let output = self
            .client
            .describe_services()
            .cluster(cluster)
            .set_services(Some(services.to_vec()))
            .send()
            .await
            .map_err(api_error)?;

        Ok(output.services().iter().map(service_from_sdk).collect())
    }

    async fn describe_task_definition(&self, task_definition: &str) -> Result<TaskDefinition> {
        let output = self
            .client
            .describe_task_definition()
            .task_definition(task_definition)
            .send()
            .await
            .map_err(|err| {
                let err = err.into_service_error();
                // ECS reports unknown task definitions as a ClientException
                if err.is_client_exception() {
                    ClientError::NotFound(format!("task definition {}", task_definition))
                } else {
                    ClientError::api_error(SERVICE, DisplayErrorContext(err).to_string())
                }
            })?;

        output
            .task_definition()
            .map(task_definition_from_sdk)
            .ok_or_else(|| ClientError::NotFound(format!("task definition {}", task_definition)))
    }
}

// =============================================================================
// SDK Conversions
// =============================================================================

fn api_error<E: std::error::Error>(err: E) -> ClientError {
    ClientError::api_error(SERVICE, DisplayErrorContext(err).to_string())
}

fn sdk_desired_status(status: DesiredStatus) -> sdk::DesiredStatus {
    match status {
        DesiredStatus::Running => sdk::DesiredStatus::Running,
        DesiredStatus::Pending => sdk::DesiredStatus::Pending,
        DesiredStatus::Stopped => sdk::DesiredStatus::Stopped,
    }
}

fn task_from_sdk(task: &sdk::Task) -> Result<Task> {
    let arn = task
        .task_arn()
        .ok_or_else(|| ClientError::InvalidResponse("task without ARN".to_string()))?;

    Ok(Task {
        arn: arn.to_string(),
        task_definition_arn: task.task_definition_arn().map(str::to_string),
        last_status: task.last_status().map(str::to_string),
        desired_status: task.desired_status().map(str::to_string),
        launch_type: task.launch_type().map(|lt| lt.as_str().to_string()),
        created_at: task.created_at().and_then(|t| t.to_millis().ok()),
        containers: task
            .containers()
            .iter()
            .map(|c| Container {
                name: c.name().map(str::to_string),
                last_status: c.last_status().map(str::to_string),
                image: c.image().map(str::to_string),
            })
            .collect(),
    })
}

fn cluster_from_sdk(cluster: &sdk::Cluster) -> Cluster {
    Cluster {
        arn: cluster.cluster_arn().map(str::to_string),
        name: cluster.cluster_name().map(str::to_string),
        status: cluster.status().map(str::to_string),
        registered_container_instances: cluster.registered_container_instances_count(),
        running_tasks: cluster.running_tasks_count(),
        pending_tasks: cluster.pending_tasks_count(),
        active_services: cluster.active_services_count(),
    }
}

fn service_from_sdk(service: &sdk::Service) -> EcsService {
    EcsService {
        arn: service.service_arn().map(str::to_string),
        name: service.service_name().map(str::to_string),
        status: service.status().map(str::to_string),
        desired_count: service.desired_count(),
        running_count: service.running_count(),
        pending_count: service.pending_count(),
        task_definition: service.task_definition().map(str::to_string),
        launch_type: service.launch_type().map(|lt| lt.as_str().to_string()),
    }
}

fn task_definition_from_sdk(def: &sdk::TaskDefinition) -> TaskDefinition {
    TaskDefinition {
        arn: def.task_definition_arn().map(str::to_string),
        family: def.family().map(str::to_string),
        revision: def.revision(),
        container_definitions: def
            .container_definitions()
            .iter()
            .map(|c| ContainerDefinition {
                name: c.name().map(str::to_string),
                image: c.image().map(str::to_string),
                log_configuration: c.log_configuration().map(|lc| LogConfiguration {
                    log_driver: lc.log_driver().as_str().to_string(),
                    options: lc
                        .options()
                        .map(|opts| {
                            opts.iter()
                                .map(|(k, v)| (k.clone(), v.clone()))
                                .collect()
                        })
                        .unwrap_or_default(),
                }),
            })
            .collect(),
    }
}
