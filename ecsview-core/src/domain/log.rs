//! Log domain types

use serde::{Deserialize, Serialize};

/// Width of the log window shown on the task log page (one hour)
pub const LOG_WINDOW_MS: i64 = 3_600_000;

/// A single CloudWatch log event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub message: String,
    pub ingestion_time: Option<i64>,
}

/// Inclusive time range for a log query, in epoch milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogWindow {
    pub start: i64,
    pub end: i64,
}

impl LogWindow {
    /// The hour ending at `now`
    pub fn last_hour(now: i64) -> Self {
        Self {
            start: now - LOG_WINDOW_MS,
            end: now,
        }
    }
}
