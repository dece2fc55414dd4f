//! Sink adapter.
//!
//! Turns extraction results into collaborator calls. Calls are made in a
//! fixed order and the first failure is returned as-is; nothing is retried
//! and earlier calls are not undone.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use logproc_core::{ApplicationResult, AuditResult, ExtractionResult, LogBatch, SecurityResult};
use logproc_sinks::{AlertPublisher, MetricDatum, MetricsEmitter, ObjectStore};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::keys::{audit_summary_key, raw_batch_key};
use crate::payloads::{AuditSummary, SecurityAlert, SECURITY_ALERT_SUBJECT};

/// Namespace for application error counts.
pub const APPLICATION_NAMESPACE: &str = "FHIRBridge/Application";
/// Namespace for response-time metrics.
pub const PERFORMANCE_NAMESPACE: &str = "FHIRBridge/Performance";
/// Namespace for security metrics.
pub const SECURITY_NAMESPACE: &str = "FHIRBridge/Security";

/// Metric name for application errors.
pub const APPLICATION_ERRORS: &str = "ApplicationErrors";
/// Metric name for mean response time.
pub const AVERAGE_RESPONSE_TIME: &str = "AverageResponseTime";
/// Metric name for failed authentications.
pub const FAILED_AUTHENTICATIONS: &str = "FailedAuthentications";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Forwards pipeline output to the injected collaborators.
#[derive(Clone)]
pub struct SinkAdapter {
    store: Arc<dyn ObjectStore>,
    metrics: Arc<dyn MetricsEmitter>,
    alerts: Arc<dyn AlertPublisher>,
    config: ProcessorConfig,
}

impl std::fmt::Debug for SinkAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SinkAdapter {
    /// Creates an adapter over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn ObjectStore>,
        metrics: Arc<dyn MetricsEmitter>,
        alerts: Arc<dyn AlertPublisher>,
        config: ProcessorConfig,
    ) -> Self {
        Self {
            store,
            metrics,
            alerts,
            config,
        }
    }

    /// Emits a count observation stamped `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the metrics backend fails.
    pub fn emit_count(&self, namespace: &str, name: &str, value: f64, now: DateTime<Utc>) -> Result<()> {
        self.metrics
            .put_metric(&MetricDatum::count(namespace, name, value, now))?;
        debug!(namespace, metric = name, value, "emitted metric");
        Ok(())
    }

    /// Publishes a security alert for `result`'s suspicious activities.
    ///
    /// # Errors
    ///
    /// Returns an error if the alert topic is not configured or publishing fails.
    pub fn publish_security_alert(&self, result: &SecurityResult, now: DateTime<Utc>) -> Result<()> {
        let topic = self.config.alert_topic()?;
        let alert = SecurityAlert::new(result.suspicious_activities.clone(), now);
        let message = serde_json::to_string(&alert)?;

        self.alerts.publish(topic, &message, SECURITY_ALERT_SUBJECT)?;
        info!(
            activities = alert.activities.len(),
            destination = %topic,
            "published security alert"
        );
        Ok(())
    }

    /// Stores `document` as JSON at `key` in the configured bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket is not configured, serialization fails,
    /// or the store rejects the write.
    pub fn store_document<T: Serialize + ?Sized>(&self, key: &str, document: &T) -> Result<()> {
        let bucket = self.config.bucket()?;
        let body = serde_json::to_vec(document)?;

        self.store.put(bucket, key, &body, JSON_CONTENT_TYPE)?;
        debug!(bucket = %bucket, key = %key, bytes = body.len(), "stored document");
        Ok(())
    }

    /// Persists the decoded batch under its daily `processed/` key.
    ///
    /// # Errors
    ///
    /// See [`Self::store_document`].
    pub fn store_raw_batch_at(&self, batch: &LogBatch, now: DateTime<Utc>) -> Result<()> {
        self.store_document(&raw_batch_key(now, batch.log_stream()), batch)
    }

    /// Stores the daily audit summary, replacing any earlier summary for the
    /// same UTC day.
    ///
    /// # Errors
    ///
    /// See [`Self::store_document`].
    pub fn store_audit_summary_at(&self, result: &AuditResult, now: DateTime<Utc>) -> Result<()> {
        let summary = AuditSummary::new(result.audit_events.clone(), now);
        self.store_document(&audit_summary_key(now), &summary)?;
        info!(events = summary.total_events, "stored audit summary");
        Ok(())
    }

    /// Performs every side effect `result` calls for.
    ///
    /// # Errors
    ///
    /// Returns the first collaborator failure.
    pub fn dispatch_at(&self, result: &ExtractionResult, now: DateTime<Utc>) -> Result<()> {
        match result {
            ExtractionResult::Application(r) => self.dispatch_application(r, now),
            ExtractionResult::Security(r) => self.dispatch_security(r, now),
            ExtractionResult::Audit(r) => self.dispatch_audit(r, now),
        }
    }

    fn dispatch_application(&self, result: &ApplicationResult, now: DateTime<Utc>) -> Result<()> {
        if result.error_count > 0 {
            self.emit_count(
                APPLICATION_NAMESPACE,
                APPLICATION_ERRORS,
                result.error_count as f64,
                now,
            )?;
        }

        if let Some(average) = result.average_duration_ms() {
            self.emit_count(PERFORMANCE_NAMESPACE, AVERAGE_RESPONSE_TIME, average, now)?;
        }
        Ok(())
    }

    fn dispatch_security(&self, result: &SecurityResult, now: DateTime<Utc>) -> Result<()> {
        if result.failed_auth_count > 0 {
            self.emit_count(
                SECURITY_NAMESPACE,
                FAILED_AUTHENTICATIONS,
                result.failed_auth_count as f64,
                now,
            )?;
        }

        if !result.suspicious_activities.is_empty() {
            self.publish_security_alert(result, now)?;
        }
        Ok(())
    }

    fn dispatch_audit(&self, result: &AuditResult, now: DateTime<Utc>) -> Result<()> {
        if !result.audit_events.is_empty() {
            self.store_audit_summary_at(result, now)?;
        }
        Ok(())
    }
}
