//! Object key layout.

use chrono::{DateTime, Utc};

/// Key prefix for raw batches.
pub const PROCESSED_PREFIX: &str = "processed";

/// Key prefix for daily audit summaries.
pub const AUDIT_SUMMARY_PREFIX: &str = "audit-summary";

fn date_path(now: DateTime<Utc>) -> String {
    now.format("%Y/%m/%d").to_string()
}

/// Key for a raw batch: `processed/YYYY/MM/DD/<logStream>.json`.
#[must_use]
pub fn raw_batch_key(now: DateTime<Utc>, log_stream: &str) -> String {
    format!("{PROCESSED_PREFIX}/{}/{log_stream}.json", date_path(now))
}

/// Key for the audit summary: `audit-summary/YYYY/MM/DD/summary.json`.
///
/// Every audit batch processed on the same UTC day maps to this one key.
#[must_use]
pub fn audit_summary_key(now: DateTime<Utc>) -> String {
    format!("{AUDIT_SUMMARY_PREFIX}/{}/summary.json", date_path(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn raw_key_uses_utc_date_and_stream() {
        let now = Utc.with_ymd_and_hms(2024, 2, 9, 23, 59, 59).unwrap();
        assert_eq!(
            raw_batch_key(now, "i-0abc123"),
            "processed/2024/02/09/i-0abc123.json"
        );
    }

    #[test]
    fn audit_key_is_daily() {
        let morning = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 12, 1, 23, 0, 0).unwrap();
        let next_day = Utc.with_ymd_and_hms(2024, 12, 2, 0, 0, 0).unwrap();

        assert_eq!(audit_summary_key(morning), "audit-summary/2024/12/01/summary.json");
        assert_eq!(audit_summary_key(morning), audit_summary_key(evening));
        assert_ne!(audit_summary_key(morning), audit_summary_key(next_day));
    }
}
