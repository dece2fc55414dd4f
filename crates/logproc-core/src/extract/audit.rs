//! Audit log extraction.
//!
//! Audit records carry a JSON object in their message. The known fields are
//! projected verbatim; whatever JSON type the producer used is kept.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ItemError;
use crate::types::LogRecord;

/// A projected audit event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEventRecord {
    /// Record timestamp (epoch millis).
    pub timestamp: i64,
    /// Acting user.
    pub user_id: Option<Value>,
    /// Action performed.
    pub action: Option<Value>,
    /// FHIR resource type touched.
    pub resource_type: Option<Value>,
    /// Resource identifier.
    pub resource_id: Option<Value>,
    /// Outcome reported by the producer.
    pub outcome: Option<Value>,
}

impl AuditEventRecord {
    /// Parses one audit record.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NotJson`] or [`ItemError::NotObject`] if the message
    /// is not a JSON object.
    pub fn parse(record: &LogRecord) -> Result<Self, ItemError> {
        let value: Value = serde_json::from_str(&record.message)
            .map_err(|e| ItemError::NotJson(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(ItemError::NotObject);
        };

        Ok(Self {
            timestamp: record.timestamp,
            user_id: field(&fields, "userId"),
            action: field(&fields, "action"),
            resource_type: field(&fields, "resourceType"),
            resource_id: field(&fields, "resourceId"),
            outcome: field(&fields, "outcome"),
        })
    }
}

// An explicit `null` is treated the same as a missing key.
fn field(fields: &Map<String, Value>, name: &str) -> Option<Value> {
    fields.get(name).filter(|v| !v.is_null()).cloned()
}

/// Output of the audit extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Events in record order.
    pub audit_events: Vec<AuditEventRecord>,
    /// Records dropped because they were not JSON objects.
    pub skipped: usize,
}

/// Runs the audit extractor over a record sequence.
#[must_use]
pub fn extract(records: &[LogRecord]) -> AuditResult {
    let mut result = AuditResult::default();

    for record in records {
        match AuditEventRecord::parse(record) {
            Ok(event) => result.audit_events.push(event),
            Err(err) => {
                tracing::debug!(timestamp = record.timestamp, error = %err, "skipping audit record");
                result.skipped += 1;
            }
        }
    }

    result
}
