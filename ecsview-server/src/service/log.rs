//! Log Service
//!
//! Resolves a task to its CloudWatch log stream and fetches the last hour of
//! events:
//! task -> task definition -> `family/container/task_id` stream -> events.
//!
//! Every step that can fail returns a [`TaskLogError`]; nothing is rendered
//! from a partially resolved task.

use ecsview_client::{ClientError, EcsRepository, LogRepository};
use ecsview_core::domain::log::LogWindow;
use ecsview_core::dto::task::TaskLogView;
use ecsview_core::parse::{self, ParseError};

/// Service error type
#[derive(Debug)]
pub enum TaskLogError {
    TaskNotFound(String),
    /// The task record lacks a field the lookup depends on
    IncompleteTask {
        task_id: String,
        field: &'static str,
    },
    TaskDefinitionNotFound(String),
    IncompleteTaskDefinition {
        task_definition: String,
        field: &'static str,
    },
    MissingLogGroup {
        task_definition: String,
    },
    MalformedIdentifier(ParseError),
    LogStreamUnavailable {
        log_group: String,
        log_stream: String,
    },
    ClientError(ClientError),
}

impl From<ClientError> for TaskLogError {
    fn from(err: ClientError) -> Self {
        TaskLogError::ClientError(err)
    }
}

impl From<ParseError> for TaskLogError {
    fn from(err: ParseError) -> Self {
        TaskLogError::MalformedIdentifier(err)
    }
}

pub type Result<T> = std::result::Result<T, TaskLogError>;

/// Get the last hour of log events for a task, ending at `now` (epoch ms)
pub async fn get_task_log(
    ecs: &dyn EcsRepository,
    logs: &dyn LogRepository,
    cluster: &str,
    task_id: &str,
    now: i64,
) -> Result<TaskLogView> {
    let task = ecs
        .describe_tasks(cluster, &[task_id.to_string()])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| TaskLogError::TaskNotFound(task_id.to_string()))?;

    let incomplete_task = |field| TaskLogError::IncompleteTask {
        task_id: task_id.to_string(),
        field,
    };

    let container = task
        .primary_container()
        .ok_or_else(|| incomplete_task("containers"))?;
    let status = container.last_status.clone();

    let task_definition_arn = task
        .task_definition_arn
        .as_deref()
        .ok_or_else(|| incomplete_task("taskDefinitionArn"))?;
    let task_definition = parse::task_definition_id(task_definition_arn)?.to_string();

    let image = container
        .image
        .as_deref()
        .ok_or_else(|| incomplete_task("containers[0].image"))?;
    let image_tag = parse::image_tag(image)?.to_string();

    let definition = ecs
        .describe_task_definition(&task_definition)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                TaskLogError::TaskDefinitionNotFound(task_definition.clone())
            } else {
                TaskLogError::ClientError(e)
            }
        })?;

    let incomplete_definition = |field| TaskLogError::IncompleteTaskDefinition {
        task_definition: task_definition.clone(),
        field,
    };

    let container_definition = definition
        .primary_container()
        .ok_or_else(|| incomplete_definition("containerDefinitions"))?;
    let container_name = container_definition
        .name
        .as_deref()
        .ok_or_else(|| incomplete_definition("containerDefinitions[0].name"))?;
    let family = definition
        .family
        .as_deref()
        .ok_or_else(|| incomplete_definition("family"))?;
    let log_group = container_definition
        .log_group()
        .ok_or_else(|| TaskLogError::MissingLogGroup {
            task_definition: task_definition.clone(),
        })?
        .to_string();

    let log_stream = parse::log_stream_name(family, container_name, parse::task_id(&task.arn)?);
    let window = LogWindow::last_hour(now);

    tracing::debug!(
        "Fetching {}/{} from {} to {}",
        log_group,
        log_stream,
        window.start,
        window.end
    );

    let events = logs
        .get_log_events(&log_group, &log_stream, window)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                TaskLogError::LogStreamUnavailable {
                    log_group: log_group.clone(),
                    log_stream: log_stream.clone(),
                }
            } else {
                TaskLogError::ClientError(e)
            }
        })?;

    Ok(TaskLogView {
        task_id: task_id.to_string(),
        status,
        task_definition,
        image_tag,
        log_group,
        log_stream,
        window,
        events,
    })
}
