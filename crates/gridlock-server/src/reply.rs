//! Request and response bodies for the API.

use gridlock_core::Digit;
use gridlock_solver::Conflicts;
use serde::{Deserialize, Serialize};

/// Body of a solve request.
///
/// The field is optional so that an absent key reaches the handler and
/// produces the contract's "Required field missing" response instead of an
/// extractor rejection.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SolveRequest {
    pub(crate) puzzle: Option<String>,
}

/// Body of a check request.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CheckRequest {
    pub(crate) puzzle: Option<String>,
    pub(crate) coordinate: Option<String>,
    /// Kept as raw JSON so that both `3` and `"3"` are accepted.
    pub(crate) value: Option<serde_json::Value>,
}

/// Successful solve response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SolveReply {
    pub(crate) solution: String,
}

/// Check response.
///
/// The `conflict` key is omitted entirely when the placement is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CheckReply {
    pub(crate) valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) conflict: Option<Vec<&'static str>>,
}

impl CheckReply {
    /// A placement with no conflicts.
    pub(crate) fn valid() -> Self {
        Self {
            valid: true,
            conflict: None,
        }
    }

    /// Maps a conflict set to the wire shape, listing violated axes in the
    /// fixed order row, column, region.
    pub(crate) fn from_conflicts(conflicts: Conflicts) -> Self {
        if conflicts.is_empty() {
            return Self::valid();
        }
        let mut axes = Vec::with_capacity(3);
        if conflicts.contains(Conflicts::ROW) {
            axes.push("row");
        }
        if conflicts.contains(Conflicts::COLUMN) {
            axes.push("column");
        }
        if conflicts.contains(Conflicts::REGION) {
            axes.push("region");
        }
        Self {
            valid: false,
            conflict: Some(axes),
        }
    }
}

/// Interprets a request `value` as a digit 1-9.
///
/// JSON integers and integer strings are accepted; fractional numbers,
/// non-numeric strings, and any other JSON type are not.
pub(crate) fn parse_value(value: &serde_json::Value) -> Option<Digit> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_i64()?,
        serde_json::Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    u8::try_from(number).ok().and_then(Digit::new)
}
