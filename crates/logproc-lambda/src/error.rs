//! Handler error types.

use logproc_core::DecodeError;
use logproc_sinks::SinkError;
use thiserror::Error;

/// Any failure that ends an invocation with a 500 response.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The trigger payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A collaborator call failed.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// A sink needed a setting that was not provided.
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// A sink payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;
