//! Time-series values and attribute metadata payloads.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WalkError};

/// A single timestamped reading of an attribute's stream.
///
/// Terminal object: carries no links and nothing further to traverse. The
/// `Value` field stays a raw JSON value because only the server knows the
/// attribute's point type (a write of `"25.0"` may read back as `25.0`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StreamValue {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Value")]
    pub value: serde_json::Value,
    #[serde(rename = "UnitsAbbreviation", default)]
    pub units_abbreviation: String,
    #[serde(rename = "Good", default)]
    pub good: bool,
    #[serde(rename = "Questionable", default)]
    pub questionable: bool,
    #[serde(rename = "Substituted", default)]
    pub substituted: bool,
}

impl StreamValue {
    /// Parse the ISO-8601 timestamp the server returned.
    pub fn parsed_timestamp(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).map_err(|e| {
            WalkError::Protocol(format!("Bad timestamp '{}': {}", self.timestamp, e))
        })
    }
}

/// Body for posting a new value to an attribute's `Value` link.
#[derive(Debug, Clone, Serialize)]
pub struct NewValue {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Value")]
    pub value: serde_json::Value,
}

impl NewValue {
    pub fn new(timestamp: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            timestamp: timestamp.into(),
            value: value.into(),
        }
    }
}

/// Partial attribute metadata for a PATCH against the `Self` link.
/// Fields left `None` are omitted from the body and untouched on the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttributeUpdate {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AttributeUpdate {
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Optional query parameters for a stream value read.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValueQuery {
    /// `time=<ISO8601>` selects a historical value; absent means current.
    #[serde(rename = "time", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl ValueQuery {
    pub fn current() -> Self {
        Self::default()
    }

    pub fn at(time: impl Into<String>) -> Self {
        Self {
            time: Some(time.into()),
        }
    }
}
