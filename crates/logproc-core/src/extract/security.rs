//! Security log extraction: failed logins and suspicious activity.

use serde::{Deserialize, Serialize};

use crate::types::LogRecord;

/// Phrase counted as a failed authentication (matched case-insensitively).
pub const FAILED_AUTH_PHRASE: &str = "authentication failed";

/// Keywords that flag a record as suspicious (matched case-insensitively).
pub const SUSPICIOUS_KEYWORDS: [&str; 3] = ["unauthorized", "forbidden", "blocked"];

/// A record flagged by one of [`SUSPICIOUS_KEYWORDS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousActivity {
    /// Record timestamp (epoch millis).
    pub timestamp: i64,
    /// The originating message.
    pub message: String,
}

/// Output of the security extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityResult {
    /// Records containing [`FAILED_AUTH_PHRASE`].
    pub failed_auth_count: u64,
    /// Flagged records in record order.
    pub suspicious_activities: Vec<SuspiciousActivity>,
}

/// Runs the security extractor over a record sequence.
///
/// The two checks are independent; one record may count toward both.
#[must_use]
pub fn extract(records: &[LogRecord]) -> SecurityResult {
    let mut result = SecurityResult::default();

    for record in records {
        let lowered = record.message.to_lowercase();

        if lowered.contains(FAILED_AUTH_PHRASE) {
            result.failed_auth_count += 1;
        }

        if SUSPICIOUS_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            result.suspicious_activities.push(SuspiciousActivity {
                timestamp: record.timestamp,
                message: record.message.clone(),
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Authentication Failed: bad password" ; "title case")]
    #[test_case("AUTHENTICATION FAILED for user 7" ; "upper case")]
    #[test_case("authentication failed" ; "lower case")]
    fn failed_auth_any_case(message: &str) {
        let result = extract(&[LogRecord::new(1, message)]);
        assert_eq!(result.failed_auth_count, 1);
        assert!(result.suspicious_activities.is_empty());
    }

    #[test_case("Unauthorized access to /Patient/1" ; "unauthorized")]
    #[test_case("403 FORBIDDEN" ; "forbidden")]
    #[test_case("ip 10.0.0.1 Blocked by WAF" ; "blocked")]
    fn suspicious_keywords(message: &str) {
        let result = extract(&[LogRecord::new(9, message)]);
        assert_eq!(result.failed_auth_count, 0);
        assert_eq!(
            result.suspicious_activities,
            vec![SuspiciousActivity {
                timestamp: 9,
                message: message.to_string(),
            }]
        );
    }

    #[test]
    fn one_record_counts_toward_both() {
        let result = extract(&[LogRecord::new(
            3,
            "unauthorized: authentication failed for admin",
        )]);
        assert_eq!(result.failed_auth_count, 1);
        assert_eq!(result.suspicious_activities.len(), 1);
    }

    #[test]
    fn multiple_keywords_flag_once() {
        let result = extract(&[LogRecord::new(1, "unauthorized and forbidden and blocked")]);
        assert_eq!(result.suspicious_activities.len(), 1);
    }

    #[test]
    fn message_keeps_original_case() {
        let result = extract(&[LogRecord::new(1, "Request BLOCKED")]);
        assert_eq!(result.suspicious_activities[0].message, "Request BLOCKED");
    }

    #[test]
    fn benign_records_ignored() {
        let result = extract(&[
            LogRecord::new(1, "Authentication succeeded"),
            LogRecord::new(2, "authorized"),
        ]);
        assert_eq!(result, SecurityResult::default());
    }
}
