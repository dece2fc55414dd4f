//! Collaborator traits.
//!
//! Each call is one-way: the caller only learns whether it succeeded.

use std::sync::Arc;

use crate::error::Result;
use crate::types::MetricDatum;

/// Durable object storage.
pub trait ObjectStore: Send + Sync {
    /// Stores `body` under `bucket`/`key`, replacing any existing object.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot store the object.
    fn put(&self, bucket: &str, key: &str, body: &[u8], content_type: &str) -> Result<()>;
}

/// Metrics service.
pub trait MetricsEmitter: Send + Sync {
    /// Records one observation.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the observation.
    fn put_metric(&self, datum: &MetricDatum) -> Result<()>;
}

/// Notification service.
pub trait AlertPublisher: Send + Sync {
    /// Publishes `message` to `destination` with a human-readable `subject`.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be delivered.
    fn publish(&self, destination: &str, message: &str, subject: &str) -> Result<()>;
}

impl<T: ObjectStore + ?Sized> ObjectStore for Arc<T> {
    fn put(&self, bucket: &str, key: &str, body: &[u8], content_type: &str) -> Result<()> {
        (**self).put(bucket, key, body, content_type)
    }
}

impl<T: MetricsEmitter + ?Sized> MetricsEmitter for Arc<T> {
    fn put_metric(&self, datum: &MetricDatum) -> Result<()> {
        (**self).put_metric(datum)
    }
}

impl<T: AlertPublisher + ?Sized> AlertPublisher for Arc<T> {
    fn publish(&self, destination: &str, message: &str, subject: &str) -> Result<()> {
        (**self).publish(destination, message, subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A store that counts calls and fails on demand.
    #[derive(Debug, Default)]
    struct CountingStore {
        calls: AtomicUsize,
        fail: bool,
    }

    impl ObjectStore for CountingStore {
        fn put(&self, _bucket: &str, _key: &str, _body: &[u8], _content_type: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SinkError::rejected("counting", "configured to fail"));
            }
            Ok(())
        }
    }

    #[test]
    fn arc_forwards_to_inner() {
        let inner = Arc::new(CountingStore::default());
        let shared: Arc<dyn ObjectStore> = inner.clone();

        shared.put("b", "k", b"x", "text/plain").unwrap();
        Arc::clone(&shared).put("b", "k", b"y", "text/plain").unwrap();

        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn errors_propagate_through_arc() {
        let shared: Arc<dyn ObjectStore> = Arc::new(CountingStore {
            calls: AtomicUsize::new(0),
            fail: true,
        });

        let err = shared.put("b", "k", b"", "text/plain").unwrap_err();
        assert!(err.to_string().contains("configured to fail"));
    }

    #[test]
    fn traits_are_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ObjectStore>();
        assert_send_sync::<dyn MetricsEmitter>();
        assert_send_sync::<dyn AlertPublisher>();
    }
}
