//! Invocation handler.
//!
//! [`Handler::invoke`] is the single error boundary: every failure becomes a
//! 500 [`Response`] carrying the error text, and success is a fixed 200.

use chrono::{DateTime, Utc};
use logproc_core::{envelope, LogBatch};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::Result;
use crate::sink::SinkAdapter;

/// Body text returned on success.
pub const SUCCESS_MESSAGE: &str = "Log processing completed successfully";

/// Prefix of the body text returned on failure.
pub const FAILURE_PREFIX: &str = "Error processing logs";

/// The value returned to the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// 200 or 500.
    pub status_code: u16,
    /// A JSON-encoded string.
    pub body: String,
}

impl Response {
    /// The success response.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            body: json_string(SUCCESS_MESSAGE),
        }
    }

    /// A failure response embedding `err`'s text.
    #[must_use]
    pub fn failure(err: &dyn std::error::Error) -> Self {
        Self {
            status_code: 500,
            body: json_string(&format!("{FAILURE_PREFIX}: {err}")),
        }
    }

    /// Returns true for a 200 response.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// Decodes `body` back into plain text.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        serde_json::from_str(&self.body).ok()
    }
}

// Serializing a `str` cannot fail.
fn json_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}

/// Runs the decode → extract → sink pipeline for one trigger event.
#[derive(Debug, Clone)]
pub struct Handler {
    sinks: SinkAdapter,
}

impl Handler {
    /// Creates a handler that writes through `sinks`.
    #[must_use]
    pub const fn new(sinks: SinkAdapter) -> Self {
        Self { sinks }
    }

    /// Handles a trigger event using the current time.
    pub fn invoke(&self, event: &serde_json::Value) -> Response {
        self.invoke_at(event, Utc::now())
    }

    /// Handles a trigger event as if it were `now`.
    pub fn invoke_at(&self, event: &serde_json::Value, now: DateTime<Utc>) -> Response {
        match self.process_at(event, now) {
            Ok(batch) => {
                info!(
                    log_group = %batch.log_group(),
                    log_stream = %batch.log_stream(),
                    records = batch.len(),
                    "log batch processed"
                );
                Response::ok()
            }
            Err(err) => {
                error!(error = %err, "{FAILURE_PREFIX}: {err}");
                Response::failure(&err)
            }
        }
    }

    /// Runs the pipeline and returns the decoded batch.
    ///
    /// # Errors
    ///
    /// Returns the first decode or sink failure. Side effects performed before
    /// the failure are kept.
    pub fn process_at(&self, event: &serde_json::Value, now: DateTime<Utc>) -> Result<LogBatch> {
        let batch = envelope::decode_value(event)?;

        if let Some(result) = logproc_core::extract(&batch) {
            self.sinks.dispatch_at(&result, now)?;
        }

        self.sinks.store_raw_batch_at(&batch, now)?;
        Ok(batch)
    }
}
