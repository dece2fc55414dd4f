//! # logproc-sinks
//!
//! Collaborator interfaces for the FHIR Bridge log processor.
//!
//! The processor talks to three external services, each behind a narrow,
//! synchronous trait so the pipeline can be handed real backends or test
//! doubles:
//!
//! - [`ObjectStore`]: durable document storage (`put` only)
//! - [`MetricsEmitter`]: named numeric observations
//! - [`AlertPublisher`]: notification channel
//!
//! Backends shipped here:
//!
//! - [`MemoryObjectStore`], [`MemoryMetricsEmitter`], [`MemoryAlertPublisher`]: recording doubles
//! - [`FileObjectStore`]: stores objects under a local directory
//! - [`TracingMetricsEmitter`], [`TracingAlertPublisher`]: emit through `tracing`
//!
//! ## Example
//!
//! ```rust
//! use logproc_sinks::{MemoryObjectStore, ObjectStore};
//!
//! let store = MemoryObjectStore::new();
//! store.put("bucket", "processed/2024/01/01/s.json", b"{}", "application/json")?;
//! assert_eq!(store.len(), 1);
//! # Ok::<(), logproc_sinks::SinkError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod file_store;
pub mod logging;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{Result, SinkError};
pub use file_store::FileObjectStore;
pub use logging::{TracingAlertPublisher, TracingMetricsEmitter};
pub use memory::{
    MemoryAlertPublisher, MemoryMetricsEmitter, MemoryObjectStore, PublishedAlert, StoredObject,
};
pub use traits::{AlertPublisher, MetricsEmitter, ObjectStore};
pub use types::{MetricDatum, MetricUnit};
