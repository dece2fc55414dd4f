//! Error types for sink backends.

use thiserror::Error;

/// Errors returned by a collaborator call.
#[derive(Debug, Error)]
pub enum SinkError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The bucket or key cannot be stored by this backend.
    #[error("invalid object key {key:?}: {reason}")]
    InvalidKey {
        /// The offending key or bucket.
        key: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The backend refused the call.
    #[error("{sink} rejected request: {reason}")]
    Rejected {
        /// Backend name.
        sink: String,
        /// Reason reported by the backend.
        reason: String,
    },
}

impl SinkError {
    /// Creates a [`SinkError::Rejected`].
    #[must_use]
    pub fn rejected(sink: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            sink: sink.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = SinkError::rejected("object-store", "AccessDenied");
        assert_eq!(err.to_string(), "object-store rejected request: AccessDenied");

        let err = SinkError::InvalidKey {
            key: "../etc".to_string(),
            reason: "parent directory component",
        };
        assert_eq!(
            err.to_string(),
            "invalid object key \"../etc\": parent directory component"
        );
    }

    #[test]
    fn error_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: SinkError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SinkError>();
    }
}
