//! CloudWatch Logs repository
//!
//! Fetches a time-windowed slice of a single log stream.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudwatchlogs::Client;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::types::OutputLogEvent;
use ecsview_core::domain::log::{LogEvent, LogWindow};

use crate::error::{ClientError, Result};

const SERVICE: &str = "logs";

/// Repository trait for log event retrieval
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Returns the events of one stream inside `window`, oldest first
    ///
    /// Only the first page the API returns is read.
    ///
    /// # Arguments
    /// * `log_group` - CloudWatch log group name
    /// * `log_stream` - Log stream name inside the group
    /// * `window` - Inclusive epoch-millisecond bounds
    async fn get_log_events(
        &self,
        log_group: &str,
        log_stream: &str,
        window: LogWindow,
    ) -> Result<Vec<LogEvent>>;
}

/// AWS SDK implementation of LogRepository
#[derive(Debug, Clone)]
pub struct CloudWatchLogRepository {
    client: Client,
}

impl CloudWatchLogRepository {
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
impl LogRepository for CloudWatchLogRepository {
    async fn get_log_events(
        &self,
        log_group: &str,
        log_stream: &str,
        window: LogWindow,
    ) -> Result<Vec<LogEvent>> {
        let output = self
            .client
            .get_log_events()
            .log_group_name(log_group)
            .log_stream_name(log_stream)
            .start_time(window.start)
            .end_time(window.end)
            .start_from_head(true)
            .send()
            .await
            .map_err(|err| {
                let err = err.into_service_error();
                if err.is_resource_not_found_exception() {
                    ClientError::NotFound(format!("log stream {}/{}", log_group, log_stream))
                } else {
                    ClientError::api_error(SERVICE, DisplayErrorContext(err).to_string())
                }
            })?;

        Ok(output.events().iter().map(event_from_sdk).collect())
    }
}

fn event_from_sdk(event: &OutputLogEvent) -> LogEvent {
    LogEvent {
        timestamp: event.timestamp().unwrap_or_default(),
        message: event.message().unwrap_or_default().to_string(),
        ingestion_time: event.ingestion_time(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cloudwatchlogs::operation::get_log_events::{GetLogEventsError, GetLogEventsOutput};
    use aws_sdk_cloudwatchlogs::types::error::{
        ResourceNotFoundException, ServiceUnavailableException,
    };
    use aws_smithy_mocks::{mock, mock_client};

    const WINDOW: LogWindow = LogWindow {
        start: 1_699_996_900_000,
        end: 1_700_000_500_000,
    };

    #[tokio::test]
    async fn test_get_log_events_request() {
        let rule = mock!(Client::get_log_events)
            .match_requests(|req| {
                req.log_group_name() == Some("/ecs/myapp")
                    && req.log_stream_name() == Some("myapp/web/abc123")
                    && req.start_time() == Some(WINDOW.start)
                    && req.end_time() == Some(WINDOW.end)
                    && req.start_from_head() == Some(true)
            })
            .then_output(|| {
                GetLogEventsOutput::builder()
                    .events(
                        OutputLogEvent::builder()
                            .timestamp(1_700_000_000_000)
                            .message("first")
                            .build(),
                    )
                    .events(
                        OutputLogEvent::builder()
                            .timestamp(1_700_000_001_000)
                            .message("second")
                            .build(),
                    )
                    .build()
            });
        let repo =
            CloudWatchLogRepository::with_client(mock_client!(aws_sdk_cloudwatchlogs, [&rule]));

        let events = repo
            .get_log_events("/ecs/myapp", "myapp/web/abc123", WINDOW)
            .await
            .unwrap();

        let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_get_log_events_missing_stream_is_not_found() {
        let rule = mock!(Client::get_log_events).then_error(|| {
            GetLogEventsError::ResourceNotFoundException(
                ResourceNotFoundException::builder()
                    .message("The specified log stream does not exist.")
                    .build(),
            )
        });
        let repo =
            CloudWatchLogRepository::with_client(mock_client!(aws_sdk_cloudwatchlogs, [&rule]));

        let err = repo
            .get_log_events("/ecs/myapp", "myapp/web/abc123", WINDOW)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Resource not found: log stream /ecs/myapp/myapp/web/abc123"
        );
    }

    #[tokio::test]
    async fn test_get_log_events_other_failures_are_api_errors() {
        let rule = mock!(Client::get_log_events).then_error(|| {
            GetLogEventsError::ServiceUnavailableException(
                ServiceUnavailableException::builder().build(),
            )
        });
        let repo =
            CloudWatchLogRepository::with_client(mock_client!(aws_sdk_cloudwatchlogs, [&rule]));

        let err = repo
            .get_log_events("/ecs/myapp", "myapp/web/abc123", WINDOW)
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ApiError { service: "logs", .. }));
    }

    #[test]
    fn test_event_from_sdk() {
        let event = OutputLogEvent::builder()
            .timestamp(1_700_000_000_000)
            .message("GET /health 200")
            .ingestion_time(1_700_000_000_250)
            .build();

        let converted = event_from_sdk(&event);

        assert_eq!(converted.timestamp, 1_700_000_000_000);
        assert_eq!(converted.message, "GET /health 200");
        assert_eq!(converted.ingestion_time, Some(1_700_000_000_250));
    }

    #[test]
    fn test_event_from_sdk_missing_fields() {
        let converted = event_from_sdk(&OutputLogEvent::builder().build());

        assert_eq!(converted.timestamp, 0);
        assert_eq!(converted.message, "");
        assert_eq!(converted.ingestion_time, None);
    }
}
