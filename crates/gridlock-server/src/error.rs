//! Operation-level error responses.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use gridlock_core::ParseGridError;
use serde::Serialize;

use crate::coordinate::ParseCoordinateError;

/// Failures reported to clients as `{ "error": <message> }`.
///
/// The `Display` strings are the wire contract, so every variant either
/// fixes its message here or surfaces a lower layer's message verbatim
/// (the puzzle codec's, for [`ApiError::BadPuzzle`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum ApiError {
    /// Solve request without its `puzzle` field.
    #[display("Required field missing")]
    MissingField,
    /// Check request with one or more of its three fields absent.
    #[display("Required field(s) missing")]
    MissingFields,
    /// Puzzle text failed to decode.
    #[display("{_0}")]
    BadPuzzle(ParseGridError),
    /// Coordinate not matching `[A-I][1-9]`.
    #[display("Invalid coordinate")]
    InvalidCoordinate,
    /// Value not an integer in 1-9.
    #[display("Invalid value")]
    InvalidValue,
    /// The puzzle's clues conflict, or no completion exists.
    #[display("Puzzle cannot be solved")]
    Unsolvable,
}

impl From<ParseGridError> for ApiError {
    fn from(err: ParseGridError) -> Self {
        Self::BadPuzzle(err)
    }
}

impl From<ParseCoordinateError> for ApiError {
    fn from(_: ParseCoordinateError) -> Self {
        Self::InvalidCoordinate
    }
}

#[derive(Debug, Serialize)]
struct ErrorReply {
    error: String,
}

impl IntoResponse for ApiError {
    /// Renders with HTTP 200: the status line reflects transport problems
    /// only, per the service contract.
    fn into_response(self) -> Response {
        Json(ErrorReply {
            error: self.to_string(),
        })
        .into_response()
    }
}
