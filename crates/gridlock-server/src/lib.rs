//! HTTP API for the gridlock sudoku engine.
//!
//! Two JSON operations are exposed, both via POST:
//!
//! - `/api/solve` takes `{ "puzzle": <81-char text> }` and answers either
//!   `{ "solution": <81-char text> }` or `{ "error": <message> }`.
//! - `/api/check` takes `{ "puzzle", "coordinate", "value" }` and answers
//!   `{ "valid": true }` or `{ "valid": false, "conflict": [...] }`, where
//!   the conflict list names the violated axes in the fixed order `"row"`,
//!   `"column"`, `"region"`.
//!
//! Operation-level failures (malformed puzzle text, bad coordinates or
//! values, unsolvable puzzles) are reported as `{ "error": <message> }` with
//! HTTP 200. The transport status only reflects transport problems, and the
//! distinction between "bad input" and "no solution" is carried in the
//! message text alone.
//!
//! Each request decodes its own [`Grid`](gridlock_core::Grid); nothing is
//! shared or retained between requests, so the router can serve any number
//! of concurrent calls.

pub use self::routes::router;

mod coordinate;
mod error;
mod reply;
mod routes;
