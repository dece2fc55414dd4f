//! Documents sent to the sinks.

use chrono::{DateTime, Utc};
use logproc_core::{AuditEventRecord, SuspiciousActivity};
use serde::{Deserialize, Serialize};

/// Subject line for security alerts.
pub const SECURITY_ALERT_SUBJECT: &str = "FHIR Bridge Security Alert";

/// Alert type tag for security alerts.
pub const SECURITY_ALERT_TYPE: &str = "security";

/// Formats a generation timestamp as naive UTC ISO-8601, e.g.
/// `2024-05-06T07:08:09.123456`.
///
/// The fractional part is omitted when the microsecond is zero.
#[must_use]
pub fn generation_timestamp(now: DateTime<Utc>) -> String {
    if now.timestamp_subsec_micros() == 0 {
        now.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Message body published for suspicious activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAlert {
    /// Always [`SECURITY_ALERT_TYPE`].
    pub alert_type: String,
    /// Flagged records.
    pub activities: Vec<SuspiciousActivity>,
    /// When the alert was generated.
    pub timestamp: String,
}

impl SecurityAlert {
    /// Builds an alert for `activities` generated at `now`.
    #[must_use]
    pub fn new(activities: Vec<SuspiciousActivity>, now: DateTime<Utc>) -> Self {
        Self {
            alert_type: SECURITY_ALERT_TYPE.to_string(),
            activities,
            timestamp: generation_timestamp(now),
        }
    }
}

/// Daily audit summary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// When the summary was generated.
    pub date: String,
    /// Number of events in this summary.
    pub total_events: usize,
    /// The events.
    pub events: Vec<AuditEventRecord>,
}

impl AuditSummary {
    /// Builds a summary of `events` generated at `now`.
    #[must_use]
    pub fn new(events: Vec<AuditEventRecord>, now: DateTime<Utc>) -> Self {
        Self {
            date: generation_timestamp(now),
            total_events: events.len(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
    }

    #[test]
    fn timestamp_omits_zero_microseconds() {
        assert_eq!(generation_timestamp(at()), "2024-05-06T07:08:09");
    }

    #[test]
    fn timestamp_keeps_microseconds() {
        let now = at() + chrono::Duration::microseconds(120);
        assert_eq!(generation_timestamp(now), "2024-05-06T07:08:09.000120");
    }

    #[test]
    fn timestamp_truncates_nanoseconds() {
        let now = at() + chrono::Duration::nanoseconds(999);
        assert_eq!(generation_timestamp(now), "2024-05-06T07:08:09");
    }

    #[test]
    fn security_alert_shape() {
        let alert = SecurityAlert::new(
            vec![SuspiciousActivity {
                timestamp: 5,
                message: "Forbidden".to_string(),
            }],
            at(),
        );

        assert_eq!(
            serde_json::to_value(&alert).unwrap(),
            json!({
                "alert_type": "security",
                "activities": [{"timestamp": 5, "message": "Forbidden"}],
                "timestamp": "2024-05-06T07:08:09"
            })
        );
    }

    #[test]
    fn audit_summary_counts_events() {
        let event = AuditEventRecord {
            timestamp: 1,
            user_id: Some(json!("u")),
            action: None,
            resource_type: None,
            resource_id: None,
            outcome: None,
        };
        let summary = AuditSummary::new(vec![event.clone(), event], at());

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_events"], 2);
        assert_eq!(value["date"], "2024-05-06T07:08:09");
        assert_eq!(value["events"][0]["userId"], "u");
        assert_eq!(value["events"][0]["outcome"], serde_json::Value::Null);
    }
}
