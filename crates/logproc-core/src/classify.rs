//! Log-group classification.
//!
//! Routing is an ordered table: the first [`Route`] whose needle occurs in
//! the log-group name wins. Table order is the precedence
//! (application, then security, then audit).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extract::{application, audit, security, ExtractionResult};
use crate::types::{LogBatch, LogRecord};

/// Source category of a log batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Application logs.
    Application,
    /// Security logs.
    Security,
    /// Audit logs.
    Audit,
    /// No route matched; only the raw batch is persisted.
    Unknown,
}

impl Category {
    /// Returns the string representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Security => "security",
            Self::Audit => "audit",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classification rule paired with its extractor.
#[derive(Clone, Copy)]
pub struct Route {
    /// Category this route produces.
    pub category: Category,
    /// Case-sensitive substring tested against the log group.
    pub needle: &'static str,
    /// Extractor run for matching batches.
    pub extract: fn(&[LogRecord]) -> ExtractionResult,
}

impl Route {
    /// Returns true if this route claims the log group.
    #[must_use]
    pub fn matches(&self, log_group: &str) -> bool {
        log_group.contains(self.needle)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("category", &self.category)
            .field("needle", &self.needle)
            .finish_non_exhaustive()
    }
}

/// Routes in precedence order.
pub static ROUTES: [Route; 3] = [
    Route {
        category: Category::Application,
        needle: "application",
        extract: extract_application,
    },
    Route {
        category: Category::Security,
        needle: "security",
        extract: extract_security,
    },
    Route {
        category: Category::Audit,
        needle: "audit",
        extract: extract_audit,
    },
];

fn extract_application(records: &[LogRecord]) -> ExtractionResult {
    ExtractionResult::Application(application::extract(records))
}

fn extract_security(records: &[LogRecord]) -> ExtractionResult {
    ExtractionResult::Security(security::extract(records))
}

fn extract_audit(records: &[LogRecord]) -> ExtractionResult {
    ExtractionResult::Audit(audit::extract(records))
}

fn route_for(log_group: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.matches(log_group))
}

/// Classifies a log group.
#[must_use]
pub fn classify(log_group: &str) -> Category {
    route_for(log_group).map_or(Category::Unknown, |route| route.category)
}

/// Runs the single extractor that claims the batch, if any.
#[must_use]
pub fn extract(batch: &LogBatch) -> Option<ExtractionResult> {
    let Some(route) = route_for(batch.log_group()) else {
        tracing::debug!(log_group = %batch.log_group(), "no extractor for log group");
        return None;
    };

    let result = (route.extract)(batch.records());
    tracing::debug!(
        log_group = %batch.log_group(),
        category = %route.category,
        records = batch.len(),
        skipped = result.skipped(),
        "extracted batch"
    );
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("my-app-application-logs", Category::Application ; "application")]
    #[test_case("/fhir-bridge/security", Category::Security ; "security")]
    #[test_case("fhir-audit-trail", Category::Audit ; "audit")]
    #[test_case("/aws/lambda/other", Category::Unknown ; "unknown")]
    #[test_case("", Category::Unknown ; "empty")]
    #[test_case("Application-Logs", Category::Unknown ; "case sensitive")]
    #[test_case("security-application", Category::Application ; "application beats security")]
    #[test_case("audit-security", Category::Security ; "security beats audit")]
    #[test_case("application-audit", Category::Application ; "application beats audit")]
    #[test_case("audit-security-application", Category::Application ; "all three")]
    fn classification(log_group: &str, expected: Category) {
        assert_eq!(classify(log_group), expected);
    }

    #[test]
    fn routes_declare_precedence_order() {
        let order: Vec<Category> = ROUTES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![Category::Application, Category::Security, Category::Audit]
        );
    }

    #[test]
    fn extract_runs_matching_extractor_only() {
        let batch = LogBatch::new(
            "prod-application",
            "s",
            vec![LogRecord::new(1, "ERROR authentication failed")],
        );

        let result = extract(&batch);
        assert!(matches!(result, Some(ExtractionResult::Application(ref r)) if r.error_count == 1));
    }

    #[test]
    fn extract_unknown_is_none() {
        let batch = LogBatch::new("misc", "s", vec![LogRecord::new(1, "ERROR")]);
        assert!(extract(&batch).is_none());
    }

    #[test]
    fn extract_does_not_mutate_batch() {
        let batch = LogBatch::new(
            "security",
            "s",
            vec![LogRecord::new(1, "Unauthorized")],
        );
        let before = batch.clone();

        let first = extract(&batch);
        let second = extract(&batch);

        assert_eq!(batch, before);
        assert_eq!(first, second);
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Application.to_string(), "application");
        assert_eq!(Category::Unknown.to_string(), "unknown");
    }
}
