//! In-memory repositories and fixtures for tests

use async_trait::async_trait;
use ecsview_client::{ClientError, EcsRepository, LogRepository, Result};
use ecsview_core::domain::cluster::Cluster;
use ecsview_core::domain::log::{LogEvent, LogWindow};
use ecsview_core::domain::service::EcsService;
use ecsview_core::domain::task::{Container, DesiredStatus, Task};
use ecsview_core::domain::task_definition::{
    ContainerDefinition, LogConfiguration, TaskDefinition,
};
use ecsview_core::parse;
use std::collections::HashMap;
use std::sync::Mutex;

pub const TASK_ID: &str = "abc123";
pub const TASK_ARN: &str = "arn:aws:ecs:us-east-1:123456789012:task/prod/abc123";
pub const TASK_DEFINITION_ARN: &str =
    "arn:aws:ecs:us-east-1:123456789012:task-definition/myapp:7";
pub const LOG_GROUP: &str = "/ecs/myapp";

pub fn sample_task() -> Task {
    Task {
        arn: TASK_ARN.to_string(),
        task_definition_arn: Some(TASK_DEFINITION_ARN.to_string()),
        last_status: Some("RUNNING".to_string()),
        desired_status: Some("RUNNING".to_string()),
        launch_type: Some("FARGATE".to_string()),
        created_at: Some(1_700_000_000_000),
        containers: vec![Container {
            name: Some("web".to_string()),
            last_status: Some("RUNNING".to_string()),
            image: Some("123456789.dkr.ecr.us-east-1.amazonaws.com/myapp:v1.2.3".to_string()),
        }],
    }
}

pub fn sample_task_definition() -> TaskDefinition {
    TaskDefinition {
        arn: Some(TASK_DEFINITION_ARN.to_string()),
        family: Some("myapp".to_string()),
        revision: 7,
        container_definitions: vec![ContainerDefinition {
            name: Some("web".to_string()),
            image: None,
            log_configuration: Some(LogConfiguration {
                log_driver: "awslogs".to_string(),
                options: [("awslogs-group".to_string(), LOG_GROUP.to_string())]
                    .into_iter()
                    .collect(),
            }),
        }],
    }
}

pub fn sample_cluster() -> Cluster {
    Cluster {
        arn: Some("arn:aws:ecs:us-east-1:123456789012:cluster/prod".to_string()),
        name: Some("prod".to_string()),
        status: Some("ACTIVE".to_string()),
        registered_container_instances: 0,
        running_tasks: 1,
        pending_tasks: 0,
        active_services: 1,
    }
}

pub fn sample_service() -> EcsService {
    EcsService {
        arn: Some("arn:aws:ecs:us-east-1:123456789012:service/prod/web".to_string()),
        name: Some("web".to_string()),
        status: Some("ACTIVE".to_string()),
        desired_count: 1,
        running_count: 1,
        pending_count: 0,
        task_definition: Some(TASK_DEFINITION_ARN.to_string()),
        launch_type: Some("FARGATE".to_string()),
    }
}

pub fn sample_events() -> Vec<LogEvent> {
    vec![
        LogEvent {
            timestamp: 1_700_000_000_000,
            message: "server listening on :8080".to_string(),
            ingestion_time: Some(1_700_000_000_100),
        },
        LogEvent {
            timestamp: 1_700_000_001_000,
            message: "<b>GET /health</b> 200".to_string(),
            ingestion_time: Some(1_700_000_001_100),
        },
    ]
}

/// ECS double backed by plain collections
#[derive(Default)]
pub struct FakeEcs {
    pub cluster: Option<Cluster>,
    pub tasks: Vec<Task>,
    pub services: Vec<EcsService>,
    pub task_definitions: HashMap<String, TaskDefinition>,
    /// When set, every call fails with an API error carrying this message
    pub failure: Option<String>,
    pub describe_task_calls: Mutex<Vec<Vec<String>>>,
}

impl FakeEcs {
    /// One task, its task definition, one service and the cluster
    pub fn populated() -> Self {
        Self {
            cluster: Some(sample_cluster()),
            tasks: vec![sample_task()],
            services: vec![sample_service()],
            task_definitions: [("myapp:7".to_string(), sample_task_definition())]
                .into_iter()
                .collect(),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(ClientError::api_error("ecs", message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EcsRepository for FakeEcs {
    async fn list_task_arns(&self, _: &str, status: DesiredStatus) -> Result<Vec<String>> {
        self.check()?;
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.desired_status.as_deref() == Some(status.as_str()))
            .map(|t| t.arn.clone())
            .collect())
    }

    async fn describe_tasks(&self, _: &str, tasks: &[String]) -> Result<Vec<Task>> {
        self.check()?;
        self.describe_task_calls.lock().unwrap().push(tasks.to_vec());
        Ok(tasks
            .iter()
            .filter_map(|id| {
                self.tasks
                    .iter()
                    .find(|t| &t.arn == id || parse::task_id(&t.arn) == Ok(id.as_str()))
                    .cloned()
            })
            .collect())
    }

    async fn describe_cluster(&self, cluster: &str) -> Result<Cluster> {
        self.check()?;
        self.cluster
            .clone()
            .ok_or_else(|| ClientError::NotFound(format!("cluster {}", cluster)))
    }

    async fn list_service_arns(&self, _: &str) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.services.iter().filter_map(|s| s.arn.clone()).collect())
    }

    async fn describe_services(&self, _: &str, services: &[String]) -> Result<Vec<EcsService>> {
        self.check()?;
        Ok(self
            .services
            .iter()
            .filter(|s| s.arn.as_ref().is_some_and(|arn| services.contains(arn)))
            .cloned()
            .collect())
    }

    async fn describe_task_definition(&self, task_definition: &str) -> Result<TaskDefinition> {
        self.check()?;
        self.task_definitions
            .get(task_definition)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("task definition {}", task_definition)))
    }
}

/// Log double that records every query it receives
#[derive(Default)]
pub struct FakeLogs {
    pub streams: HashMap<(String, String), Vec<LogEvent>>,
    pub queries: Mutex<Vec<(String, String, LogWindow)>>,
}

impl FakeLogs {
    pub fn with_stream(log_group: &str, log_stream: &str, events: Vec<LogEvent>) -> Self {
        let mut logs = Self::default();
        logs.streams
            .insert((log_group.to_string(), log_stream.to_string()), events);
        logs
    }
}

#[async_trait]
impl LogRepository for FakeLogs {
    async fn get_log_events(
        &self,
        log_group: &str,
        log_stream: &str,
        window: LogWindow,
    ) -> Result<Vec<LogEvent>> {
        self.queries.lock().unwrap().push((
            log_group.to_string(),
            log_stream.to_string(),
            window,
        ));

        let events = self
            .streams
            .get(&(log_group.to_string(), log_stream.to_string()))
            .ok_or_else(|| {
                ClientError::NotFound(format!("log stream {}/{}", log_group, log_stream))
            })?;

        Ok(events
            .iter()
            .filter(|e| e.timestamp >= window.start && e.timestamp <= window.end)
            .cloned()
            .collect())
    }
}
