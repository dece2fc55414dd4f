//! Processor configuration.
//!
//! Settings are read once and never validated up front. A missing value only
//! fails the invocation when a sink call actually needs it.

use crate::error::{HandlerError, Result};

/// Environment variable naming the object-storage bucket.
pub const BUCKET_ENV: &str = "LOG_ANALYSIS_BUCKET";

/// Environment variable naming the security alert topic.
pub const ALERT_TOPIC_ENV: &str = "SECURITY_ALERT_TOPIC_ARN";

/// Destinations used by the sink adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorConfig {
    bucket: Option<String>,
    alert_topic: Option<String>,
}

impl ProcessorConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            bucket: read(BUCKET_ENV),
            alert_topic: read(ALERT_TOPIC_ENV),
        }
    }

    /// Sets the bucket.
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    /// Sets the alert topic.
    #[must_use]
    pub fn with_alert_topic(mut self, topic: impl Into<String>) -> Self {
        self.alert_topic = Some(topic.into());
        self
    }

    /// Returns the bucket.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::MissingConfig`] if no bucket is configured.
    pub fn bucket(&self) -> Result<&str> {
        self.bucket
            .as_deref()
            .ok_or(HandlerError::MissingConfig(BUCKET_ENV))
    }

    /// Returns the alert topic.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError::MissingConfig`] if no topic is configured.
    pub fn alert_topic(&self) -> Result<&str> {
        self.alert_topic
            .as_deref()
            .ok_or(HandlerError::MissingConfig(ALERT_TOPIC_ENV))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn reads_both_variables() {
        let config = ProcessorConfig::from_lookup(lookup(&[
            (BUCKET_ENV, "fhir-log-analysis"),
            (ALERT_TOPIC_ENV, "arn:aws:sns:eu-west-1:123:security"),
        ]));

        assert_eq!(config.bucket().unwrap(), "fhir-log-analysis");
        assert_eq!(
            config.alert_topic().unwrap(),
            "arn:aws:sns:eu-west-1:123:security"
        );
    }

    #[test]
    fn missing_values_fail_lazily() {
        let config = ProcessorConfig::from_lookup(lookup(&[]));

        let err = config.bucket().unwrap_err();
        assert!(matches!(err, HandlerError::MissingConfig(BUCKET_ENV)));

        let err = config.alert_topic().unwrap_err();
        assert!(err.to_string().contains(ALERT_TOPIC_ENV));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = ProcessorConfig::from_lookup(lookup(&[(BUCKET_ENV, "")]));
        assert!(config.bucket().is_err());
    }

    #[test]
    fn builder_sets_values() {
        let config = ProcessorConfig::new()
            .with_bucket("b")
            .with_alert_topic("t");

        assert_eq!(config.bucket().unwrap(), "b");
        assert_eq!(config.alert_topic().unwrap(), "t");
    }
}
