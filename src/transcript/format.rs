//! Transcript data structures for serialized call logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged call in a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    /// Sequence number (assigned automatically by the writer).
    pub seq: u64,
    /// Name of the double the call was recorded on (e.g. "analytics").
    pub double: String,
    /// Operation invoked on the double.
    pub operation: String,
    /// Arguments carried by the call.
    pub args: serde_json::Value,
}

/// An ordered transcript of calls recorded during one test case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    /// Human-readable name for this transcript.
    pub name: String,
    /// When this transcript was written.
    pub recorded_at: DateTime<Utc>,
    /// Logged calls in invocation order.
    pub entries: Vec<Entry>,
}

impl Entry {
    /// Builds an entry from a serialized call record.
    ///
    /// Externally tagged enum values split into operation and arguments: a
    /// bare string is a unit variant with no arguments, a single-key object
    /// is a variant carrying its fields. Any other shape keeps the whole
    /// value as the arguments under a generic operation name.
    #[must_use]
    pub fn from_value(seq: u64, double: &str, value: serde_json::Value) -> Self {
        let (operation, args) = match value {
            serde_json::Value::String(tag) => (tag, serde_json::Value::Null),
            serde_json::Value::Object(map) if map.len() == 1 => {
                map.into_iter().next().expect("single-key object")
            }
            other => ("call".to_string(), other),
        };
        Self { seq, double: double.to_string(), operation, args }
    }
}
