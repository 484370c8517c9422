//! Route table and request handlers.

use axum::{Json, Router, routing::post};
use gridlock_core::Grid;

use crate::{
    coordinate::Coordinate,
    error::ApiError,
    reply::{self, CheckReply, CheckRequest, SolveReply, SolveRequest},
};

/// Builds the service's route table: POST `/api/solve` and POST `/api/check`.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/check", post(check))
}

/// POST `/api/solve`: fill in a puzzle, or report why it cannot be filled.
async fn solve(Json(request): Json<SolveRequest>) -> Result<Json<SolveReply>, ApiError> {
    let text = request.puzzle.ok_or(ApiError::MissingField)?;
    let puzzle: Grid = text.parse()?;

    let (solution, stats) = gridlock_solver::solve_with_stats(&puzzle).map_err(|err| {
        log::debug!("puzzle rejected: {err}");
        ApiError::Unsolvable
    })?;
    log::debug!(
        "solved puzzle with {} clues in {} placements ({} undone)",
        puzzle.filled_count(),
        stats.placements,
        stats.backtracks
    );

    Ok(Json(SolveReply {
        solution: solution.to_string(),
    }))
}

/// POST `/api/check`: test a single candidate placement against the grid.
async fn check(Json(request): Json<CheckRequest>) -> Result<Json<CheckReply>, ApiError> {
    let CheckRequest {
        puzzle: Some(puzzle),
        coordinate: Some(coordinate),
        value: Some(value),
    } = request
    else {
        return Err(ApiError::MissingFields);
    };

    let grid: Grid = puzzle.parse()?;
    let target = coordinate.parse::<Coordinate>()?.position();
    let digit = reply::parse_value(&value).ok_or(ApiError::InvalidValue)?;

    // A cell that already holds exactly this value is valid regardless of
    // the rest of the grid.
    if grid[target] == Some(digit) {
        return Ok(Json(CheckReply::valid()));
    }

    // The target cell is not cleared before checking: the predicates test
    // the candidate against every filled cell, and the short-circuit above
    // already handled the one case where the target itself could match.
    let conflicts = gridlock_solver::conflicts_at(&grid, target, digit);
    Ok(Json(CheckReply::from_conflicts(conflicts)))
}
