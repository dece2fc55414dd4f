//! Transport envelope codec.
//!
//! CloudWatch Logs delivers subscription batches as
//! `{"awslogs": {"data": "<base64(gzip(json))>"}}`. This module strips (and,
//! for local replay, rebuilds) that envelope.

use std::io::{Read, Write};

use base64::Engine;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Result};
use crate::types::LogBatch;

/// The trigger event handed to the processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// The log subscription payload.
    pub awslogs: AwsLogs,
}

/// The `awslogs` member of a trigger event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsLogs {
    /// Base64-encoded, gzip-compressed JSON batch.
    pub data: String,
}

impl TriggerEvent {
    /// Wraps an already encoded payload.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            awslogs: AwsLogs { data: data.into() },
        }
    }

    /// Encodes a batch into a trigger event.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot be serialized or compressed.
    pub fn from_batch(batch: &LogBatch) -> Result<Self> {
        Ok(Self::new(encode(batch)?))
    }
}

/// Decodes an `awslogs.data` payload into a [`LogBatch`].
///
/// ASCII whitespace anywhere in `data` is ignored, so line-wrapped payloads
/// decode. Every gzip member is read; the batch JSON may span members.
///
/// # Errors
///
/// Returns the first failing stage: base64, gzip, or JSON.
pub fn decode(data: &str) -> Result<LogBatch> {
    let packed: Vec<u8> = data
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let compressed = base64::engine::general_purpose::STANDARD.decode(packed)?;

    let mut json = Vec::new();
    MultiGzDecoder::new(compressed.as_slice()).read_to_end(&mut json)?;

    let batch: LogBatch = serde_json::from_slice(&json)?;
    tracing::debug!(
        log_group = %batch.log_group,
        log_stream = %batch.log_stream,
        records = batch.len(),
        "decoded log batch"
    );
    Ok(batch)
}

/// Decodes a typed trigger event.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_event(event: &TriggerEvent) -> Result<LogBatch> {
    decode(&event.awslogs.data)
}

/// Decodes an untyped trigger event.
///
/// # Errors
///
/// Returns [`DecodeError::Envelope`] if the value has no `awslogs.data` string,
/// otherwise see [`decode`].
pub fn decode_value(event: &serde_json::Value) -> Result<LogBatch> {
    let data = event
        .get("awslogs")
        .and_then(|awslogs| awslogs.get("data"))
        .ok_or_else(|| DecodeError::Envelope("missing awslogs.data".to_string()))?
        .as_str()
        .ok_or_else(|| DecodeError::Envelope("awslogs.data is not a string".to_string()))?;
    decode(data)
}

/// Encodes a batch as base64(gzip(json)).
///
/// # Errors
///
/// Returns an error if serialization or compression fails.
pub fn encode(batch: &LogBatch) -> Result<String> {
    let json = serde_json::to_vec(batch)?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(base64::engine::general_purpose::STANDARD.encode(compressed))
}
