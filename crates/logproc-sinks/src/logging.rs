//! Backends that emit through `tracing`.
//!
//! Useful for local runs: metrics and alerts show up in the structured log
//! stream instead of being sent anywhere.

use tracing::{info, warn};

use crate::error::Result;
use crate::traits::{AlertPublisher, MetricsEmitter};
use crate::types::MetricDatum;

/// Metrics emitter that logs each observation at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMetricsEmitter;

impl TracingMetricsEmitter {
    /// Creates a new tracing-based emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MetricsEmitter for TracingMetricsEmitter {
    fn put_metric(&self, datum: &MetricDatum) -> Result<()> {
        info!(
            target: "logproc_metrics",
            namespace = %datum.namespace,
            metric = %datum.name,
            value = datum.value,
            unit = %datum.unit,
            timestamp = %datum.timestamp.to_rfc3339(),
            "METRIC"
        );
        Ok(())
    }
}

/// Alert publisher that logs each message at `warn`.
#[derive(Debug, Clone, Default)]
pub struct TracingAlertPublisher {
    prefix: Option<String>,
}

impl TracingAlertPublisher {
    /// Creates a new tracing-based publisher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher whose log lines carry `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl AlertPublisher for TracingAlertPublisher {
    fn publish(&self, destination: &str, message: &str, subject: &str) -> Result<()> {
        let prefix = self.prefix.as_deref().unwrap_or("ALERT");
        warn!(
            target: "logproc_alerts",
            destination = %destination,
            subject = %subject,
            message = %message,
            "[{prefix}] {subject}"
        );
        Ok(())
    }
}
