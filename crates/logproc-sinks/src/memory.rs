//! In-memory backends.
//!
//! These record every call so tests can assert on exactly what the pipeline
//! sent. The object store keeps last-write-wins semantics per key, the same
//! as a real bucket.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::Result;
use crate::traits::{AlertPublisher, MetricsEmitter, ObjectStore};
use crate::types::MetricDatum;

/// An object held by [`MemoryObjectStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Object body.
    pub body: Vec<u8>,
    /// Declared content type.
    pub content_type: String,
}

impl StoredObject {
    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON.
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Default)]
struct StoreState {
    objects: BTreeMap<(String, String), StoredObject>,
    puts: usize,
}

/// In-memory object store.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    state: RwLock<StoreState>,
}

impl MemoryObjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the object at `bucket`/`key`.
    #[must_use]
    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.state
            .read()
            .objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Returns all keys in `bucket`, sorted.
    #[must_use]
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.state
            .read()
            .objects
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect()
    }

    /// Returns the number of distinct objects held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().objects.len()
    }

    /// Returns true if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many `put` calls succeeded, overwrites included.
    #[must_use]
    pub fn put_count(&self) -> usize {
        self.state.read().puts
    }
}

impl ObjectStore for MemoryObjectStore {
    fn put(&self, bucket: &str, key: &str, body: &[u8], content_type: &str) -> Result<()> {
        let mut state = self.state.write();
        state.objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        state.puts += 1;
        Ok(())
    }
}

/// In-memory metrics emitter.
#[derive(Debug, Default)]
pub struct MemoryMetricsEmitter {
    data: RwLock<Vec<MetricDatum>>,
}

impl MemoryMetricsEmitter {
    /// Creates an empty emitter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every observation in emission order.
    #[must_use]
    pub fn data(&self) -> Vec<MetricDatum> {
        self.data.read().clone()
    }

    /// Returns observations with the given name.
    #[must_use]
    pub fn named(&self, name: &str) -> Vec<MetricDatum> {
        self.data
            .read()
            .iter()
            .filter(|d| d.name == name)
            .cloned()
            .collect()
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns true if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MetricsEmitter for MemoryMetricsEmitter {
    fn put_metric(&self, datum: &MetricDatum) -> Result<()> {
        self.data.write().push(datum.clone());
        Ok(())
    }
}

/// A message captured by [`MemoryAlertPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedAlert {
    /// Destination identifier.
    pub destination: String,
    /// Message body.
    pub message: String,
    /// Subject line.
    pub subject: String,
}

/// In-memory alert publisher.
#[derive(Debug, Default)]
pub struct MemoryAlertPublisher {
    published: RwLock<Vec<PublishedAlert>>,
}

impl MemoryAlertPublisher {
    /// Creates an empty publisher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every published message in order.
    #[must_use]
    pub fn published(&self) -> Vec<PublishedAlert> {
        self.published.read().clone()
    }

    /// Returns the number of published messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.published.read().len()
    }

    /// Returns true if nothing was published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AlertPublisher for MemoryAlertPublisher {
    fn publish(&self, destination: &str, message: &str, subject: &str) -> Result<()> {
        self.published.write().push(PublishedAlert {
            destination: destination.to_string(),
            message: message.to_string(),
            subject: subject.to_string(),
        });
        Ok(())
    }
}
