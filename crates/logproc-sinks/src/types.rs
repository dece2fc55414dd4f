//! Payload types shared by metric backends.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit attached to a metric observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricUnit {
    /// A plain count.
    Count,
}

impl MetricUnit {
    /// Returns the wire name of this unit.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "Count",
        }
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDatum {
    /// Metric namespace, e.g. `FHIRBridge/Application`.
    pub namespace: String,
    /// Metric name, e.g. `ApplicationErrors`.
    #[serde(rename = "metricName")]
    pub name: String,
    /// Observed value.
    pub value: f64,
    /// Unit of the value.
    pub unit: MetricUnit,
    /// Observation time.
    pub timestamp: DateTime<Utc>,
}

impl MetricDatum {
    /// Creates a count observation at `timestamp`.
    #[must_use]
    pub fn count(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            value,
            unit: MetricUnit::Count,
            timestamp,
        }
    }
}
