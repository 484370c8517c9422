//! Solver error types.

/// Reasons a puzzle cannot be completed.
///
/// The HTTP layer reports both variants to clients with the same message;
/// the split exists so logs and tests can tell a rejected input from an
/// exhausted search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// Two clues in the input already conflict; no search was attempted.
    #[display("puzzle clues conflict with each other")]
    Inconsistent,
    /// The search exhausted every candidate assignment without completing
    /// the grid.
    #[display("no completion exists for this puzzle")]
    NoSolution,
}
