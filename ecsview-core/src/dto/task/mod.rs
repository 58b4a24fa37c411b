//! Task DTOs for the task list and task log pages

use serde::{Deserialize, Serialize};

use crate::domain::log::{LogEvent, LogWindow};
use crate::domain::task::Task;
use crate::parse;

/// Task list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListView {
    pub cluster: String,
    pub tasks: Vec<TaskSummary>,
}

/// One row of the task list
///
/// Derived fields are best effort here: a task with an odd image reference
/// still gets a row, just without a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: String,
    pub arn: String,
    pub status: Option<String>,
    pub desired_status: Option<String>,
    pub task_definition: Option<String>,
    pub image_tag: Option<String>,
    pub launch_type: Option<String>,
    pub created_at: Option<i64>,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        let container = task.primary_container();

        Self {
            id: parse::task_id(&task.arn)
                .unwrap_or(task.arn.as_str())
                .to_string(),
            arn: task.arn.clone(),
            status: container.and_then(|c| c.last_status.clone()),
            desired_status: task.desired_status.clone(),
            task_definition: task
                .task_definition_arn
                .as_deref()
                .and_then(|arn| parse::task_definition_id(arn).ok())
                .map(str::to_string),
            image_tag: container
                .and_then(|c| c.image.as_deref())
                .and_then(|image| parse::image_tag(image).ok())
                .map(str::to_string),
            launch_type: task.launch_type.clone(),
            created_at: task.created_at,
        }
    }
}

/// Task log page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLogView {
    pub task_id: String,
    pub status: Option<String>,
    pub task_definition: String,
    pub image_tag: String,
    pub log_group: String,
    pub log_stream: String,
    pub window: LogWindow,
    pub events: Vec<LogEvent>,
}
