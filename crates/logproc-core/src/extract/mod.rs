//! Per-category extractors.
//!
//! Each extractor is a pure function over a slice of [`LogRecord`]s. A record
//! that cannot be interpreted is skipped and counted; it never aborts the batch.
//!
//! [`LogRecord`]: crate::types::LogRecord

pub mod application;
pub mod audit;
pub mod security;

use serde::{Deserialize, Serialize};

use crate::classify::Category;

pub use application::{ApplicationResult, PerformanceSample};
pub use audit::{AuditEventRecord, AuditResult};
pub use security::{SecurityResult, SuspiciousActivity};

/// The output of whichever extractor ran for a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum ExtractionResult {
    /// Error counts and response times.
    Application(ApplicationResult),
    /// Failed logins and suspicious activity.
    Security(SecurityResult),
    /// Structured audit events.
    Audit(AuditResult),
}

impl ExtractionResult {
    /// Returns the category that produced this result.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Application(_) => Category::Application,
            Self::Security(_) => Category::Security,
            Self::Audit(_) => Category::Audit,
        }
    }

    /// Returns how many records the extractor could not interpret.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        match self {
            Self::Application(r) => r.skipped,
            Self::Security(_) => 0,
            Self::Audit(r) => r.skipped,
        }
    }
}

impl From<ApplicationResult> for ExtractionResult {
    fn from(result: ApplicationResult) -> Self {
        Self::Application(result)
    }
}

impl From<SecurityResult> for ExtractionResult {
    fn from(result: SecurityResult) -> Self {
        Self::Security(result)
    }
}

impl From<AuditResult> for ExtractionResult {
    fn from(result: AuditResult) -> Self {
        Self::Audit(result)
    }
}
