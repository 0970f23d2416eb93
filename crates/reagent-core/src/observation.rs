//! Per-turn observations keyed by tool-call id

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Result of executing one tool call: either the tool's output value or
/// an error marker describing the failure. Failures are information for
/// the next model turn, never loop aborts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Observation {
    Error { error: String },
    Value(Value),
}

impl Observation {
    pub fn value(value: Value) -> Self {
        Observation::Value(value)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Observation::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Observation::Error { .. })
    }
}

/// Observations for one turn, keyed by call id.
///
/// Lives for a single turn: serialized into the next history entry and
/// then discarded. Duplicate ids within a turn resolve last-write-wins
/// through map insertion.
pub type ObservationMap = BTreeMap<u64, Observation>;

/// Serialize a turn's observations into the content of the single
/// user-role history entry fed back to the model.
pub fn render_observations(observations: &ObservationMap) -> String {
    // Keys ordered by the BTreeMap; serialization cannot fail for
    // these value types.
    let body = serde_json::to_string(observations).unwrap_or_else(|_| "{}".to_string());
    format!("<observation>{body}</observation>")
}
