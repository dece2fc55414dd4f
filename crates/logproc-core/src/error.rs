//! Error types for decoding and extraction.

use thiserror::Error;

/// Errors raised while turning a trigger payload into a [`crate::LogBatch`].
///
/// Any of these is fatal for the whole invocation; no partial batch is salvaged.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The trigger event did not have the `awslogs.data` shape.
    #[error("invalid trigger event: {0}")]
    Envelope(String),

    /// The payload was not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The payload could not be gunzipped (or gzipped, when encoding).
    #[error("decompression failed: {0}")]
    Decompress(#[from] std::io::Error),

    /// The decompressed payload was not a valid log batch document.
    #[error("invalid log batch JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors for a single record during extraction.
///
/// These never escape an extractor: the record is skipped and counted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// A duration match whose digits do not fit a `u64`.
    #[error("unparseable duration {digits:?}")]
    Duration {
        /// The matched digit run.
        digits: String,
    },

    /// The message was not JSON.
    #[error("message is not JSON: {0}")]
    NotJson(String),

    /// The message was JSON but not an object.
    #[error("message is not a JSON object")]
    NotObject,
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = DecodeError::Envelope("missing field `awslogs`".to_string());
        assert_eq!(err.to_string(), "invalid trigger event: missing field `awslogs`");

        let err = ItemError::NotObject;
        assert_eq!(err.to_string(), "message is not a JSON object");

        let err = ItemError::Duration {
            digits: "99999999999999999999999".to_string(),
        };
        assert!(err.to_string().contains("99999999999999999999999"));
    }

    #[test]
    fn io_error_converts_to_decompress() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad gzip header");
        let err: DecodeError = io_err.into();
        assert!(matches!(err, DecodeError::Decompress(_)));
        assert!(err.to_string().contains("bad gzip header"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecodeError>();
        assert_send_sync::<ItemError>();
    }
}
