//! # logproc-core
//!
//! Log batch model and extraction pipeline for the FHIR Bridge log processor.
//!
//! This crate provides:
//!
//! - [`LogBatch`] / [`LogRecord`]: A decoded CloudWatch Logs subscription batch
//! - [`envelope`]: Base64 + gzip + JSON transport codec ([`decode`], [`encode`])
//! - [`Category`] / [`ROUTES`]: Ordered log-group classification
//! - [`ExtractionResult`]: Application, security and audit extraction outputs
//!
//! Everything here is pure: no I/O beyond decoding the payload handed in, and
//! extractors never mutate the batch they read.
//!
//! ## Example
//!
//! ```rust
//! use logproc_core::{classify, extract, Category, ExtractionResult, LogBatch, LogRecord};
//!
//! let batch = LogBatch::new(
//!     "my-app-application-logs",
//!     "stream-1",
//!     vec![
//!         LogRecord::new(1, "ERROR boom"),
//!         LogRecord::new(2, "Request completed in 100ms"),
//!     ],
//! );
//!
//! assert_eq!(classify(batch.log_group()), Category::Application);
//!
//! if let Some(ExtractionResult::Application(result)) = extract(&batch) {
//!     assert_eq!(result.error_count, 1);
//!     assert_eq!(result.average_duration_ms(), Some(100.0));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod types;

// Re-export main types
pub use classify::{classify, extract, Category, Route, ROUTES};
pub use envelope::{decode, decode_event, decode_value, encode, AwsLogs, TriggerEvent};
pub use error::{DecodeError, ItemError, Result};
pub use extract::{
    ApplicationResult, AuditEventRecord, AuditResult, ExtractionResult, PerformanceSample,
    SecurityResult, SuspiciousActivity,
};
pub use types::{LogBatch, LogRecord};
