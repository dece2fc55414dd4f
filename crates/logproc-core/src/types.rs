//! Log batch model.
//!
//! A [`LogBatch`] is what a CloudWatch Logs subscription delivers once the
//! transport envelope is removed. Fields the pipeline does not interpret are
//! kept so that the persisted raw copy matches what was received.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single log line within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Event identifier assigned by the log service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    /// Raw message text.
    pub message: String,
    /// Any other per-event fields (e.g. `extractedFields`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogRecord {
    /// Creates a record with only a timestamp and message.
    #[must_use]
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            id: None,
            timestamp,
            message: message.into(),
            extra: Map::new(),
        }
    }

    /// Sets the event identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A decoded batch of log records from one log stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogBatch {
    /// `DATA_MESSAGE` or `CONTROL_MESSAGE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    /// Account that owns the log group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Source log group name.
    pub log_group: String,
    /// Source log stream name.
    pub log_stream: String,
    /// Names of the subscription filters that matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_filters: Option<Vec<String>>,
    /// Records in delivery order.
    pub log_events: Vec<LogRecord>,
    /// Any other top-level fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogBatch {
    /// Creates a batch with the three fields the pipeline reads.
    #[must_use]
    pub fn new(
        log_group: impl Into<String>,
        log_stream: impl Into<String>,
        log_events: Vec<LogRecord>,
    ) -> Self {
        Self {
            message_type: None,
            owner: None,
            log_group: log_group.into(),
            log_stream: log_stream.into(),
            subscription_filters: None,
            log_events,
            extra: Map::new(),
        }
    }

    /// Returns the log group name.
    #[must_use]
    pub fn log_group(&self) -> &str {
        &self.log_group
    }

    /// Returns the log stream name.
    #[must_use]
    pub fn log_stream(&self) -> &str {
        &self.log_stream
    }

    /// Returns the records in delivery order.
    #[must_use]
    pub fn records(&self) -> &[LogRecord] {
        &self.log_events
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log_events.len()
    }

    /// Returns true if the batch has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log_events.is_empty()
    }
}
