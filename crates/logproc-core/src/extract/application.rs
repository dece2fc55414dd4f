//! Application log extraction: error counting and response times.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ItemError;
use crate::types::LogRecord;

/// Substring that marks an error line.
pub const ERROR_MARKER: &str = "ERROR";

/// Substring that marks a request-completion line carrying a duration.
pub const COMPLETION_MARKER: &str = "Request completed";

static DURATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)ms").unwrap_or_else(|_| unreachable!()));

/// One request-completion observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    /// Record timestamp (epoch millis).
    pub timestamp: i64,
    /// Extracted duration; zero when the line carried none.
    pub duration_ms: u64,
    /// The originating message.
    pub message: String,
}

/// Output of the application extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResult {
    /// Number of records containing [`ERROR_MARKER`].
    pub error_count: u64,
    /// Completion samples in record order.
    pub performance_samples: Vec<PerformanceSample>,
    /// Completion lines whose duration could not be read.
    pub skipped: usize,
}

impl ApplicationResult {
    /// Unweighted mean of all sample durations, zero-duration samples included.
    ///
    /// Returns `None` when there are no samples.
    #[must_use]
    pub fn average_duration_ms(&self) -> Option<f64> {
        if self.performance_samples.is_empty() {
            return None;
        }
        let total: f64 = self
            .performance_samples
            .iter()
            .map(|s| s.duration_ms as f64)
            .sum();
        Some(total / self.performance_samples.len() as f64)
    }
}

/// Extracts the first `<digits>ms` duration from a message.
///
/// Only ASCII digits are recognised. A message without such a pattern
/// yields `Ok(0)`.
///
/// # Errors
///
/// Returns [`ItemError::Duration`] if the matched digits overflow a `u64`.
pub fn extract_duration(message: &str) -> Result<u64, ItemError> {
    let Some(digits) = DURATION_REGEX
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return Ok(0);
    };

    digits.parse::<u64>().map_err(|_| ItemError::Duration {
        digits: digits.to_string(),
    })
}

/// Runs the application extractor over a record sequence.
#[must_use]
pub fn extract(records: &[LogRecord]) -> ApplicationResult {
    let mut result = ApplicationResult::default();

    for record in records {
        let message = record.message.as_str();

        if message.contains(ERROR_MARKER) {
            result.error_count += 1;
        }

        if message.contains(COMPLETION_MARKER) {
            match extract_duration(message) {
                Ok(duration_ms) => result.performance_samples.push(PerformanceSample {
                    timestamp: record.timestamp,
                    duration_ms,
                    message: message.to_string(),
                }),
                Err(err) => {
                    tracing::debug!(timestamp = record.timestamp, error = %err, "skipping completion record");
                    result.skipped += 1;
                }
            }
        }
    }

    result
}
