//! # logproc-lambda
//!
//! Invocation handler for the FHIR Bridge log processor.
//!
//! A CloudWatch Logs subscription invokes the processor with a compressed
//! batch. The [`Handler`] decodes it, runs the extractor for the batch's
//! category, forwards the findings through the [`SinkAdapter`], persists the
//! raw batch, and answers with a [`Response`].
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use logproc_core::{LogBatch, LogRecord, TriggerEvent};
//! use logproc_lambda::{Handler, ProcessorConfig, SinkAdapter};
//! use logproc_sinks::{MemoryAlertPublisher, MemoryMetricsEmitter, MemoryObjectStore};
//!
//! let store = Arc::new(MemoryObjectStore::new());
//! let sinks = SinkAdapter::new(
//!     store.clone(),
//!     Arc::new(MemoryMetricsEmitter::new()),
//!     Arc::new(MemoryAlertPublisher::new()),
//!     ProcessorConfig::new().with_bucket("log-analysis"),
//! );
//! let handler = Handler::new(sinks);
//!
//! let batch = LogBatch::new("svc-application", "s1", vec![LogRecord::new(1, "INFO ok")]);
//! let event = serde_json::to_value(TriggerEvent::from_batch(&batch)?)?;
//!
//! let response = handler.invoke(&event);
//! assert_eq!(response.status_code, 200);
//! assert_eq!(store.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod keys;
pub mod payloads;
pub mod sink;

// Re-export main types
pub use config::ProcessorConfig;
pub use error::{HandlerError, Result};
pub use handler::{Handler, Response};
pub use sink::SinkAdapter;
