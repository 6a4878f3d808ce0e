//! HTTP routes: request parsing, core calls, JSON serialization.
//!
//! Handlers are stateless; every request parses its own grid and the first
//! failure returns immediately as an error response.

use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sudoku_core::{Conflict, Grid, Position, Solver};

use crate::error::ApiError;

/// Build the API router.
pub fn router() -> Router {
    Router::new()
        .route("/api/check", post(check))
        .route("/api/solve", post(solve))
}

/// Body of `POST /api/check`. Fields are optional so an absent field maps to
/// the missing-field error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
struct CheckRequest {
    puzzle: Option<String>,
    coordinate: Option<String>,
    value: Option<String>,
}

/// Body of `POST /api/solve`.
#[derive(Debug, Deserialize)]
struct SolveRequest {
    puzzle: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflict: Option<Vec<Conflict>>,
}

#[derive(Debug, Serialize)]
struct SolveResponse {
    solution: String,
}

/// Check one candidate digit at one coordinate against the puzzle.
async fn check(Json(req): Json<CheckRequest>) -> Result<Json<CheckResponse>, ApiError> {
    let puzzle = required(req.puzzle)?;
    let coordinate = required(req.coordinate)?;
    let value = required(req.value)?;

    let grid = Grid::from_string(&puzzle)?;
    let pos = parse_coordinate(&coordinate).ok_or(ApiError::InvalidCoordinate)?;
    let digit = parse_value(&value).ok_or(ApiError::InvalidValue)?;

    let placement = grid.check_placement(pos, digit);
    let response = if placement.is_valid() {
        CheckResponse {
            valid: true,
            conflict: None,
        }
    } else {
        CheckResponse {
            valid: false,
            conflict: Some(placement.conflicts()),
        }
    };
    Ok(Json(response))
}

/// Solve the submitted puzzle.
async fn solve(Json(req): Json<SolveRequest>) -> Result<Json<SolveResponse>, ApiError> {
    let puzzle = required(req.puzzle)?;
    let grid = Grid::from_string(&puzzle)?;

    let solution = Solver::new().solve(&grid).map_err(|err| {
        log::debug!("solve failed: {err}");
        ApiError::from(err)
    })?;

    Ok(Json(SolveResponse {
        solution: solution.to_string_compact(),
    }))
}

/// Absent and empty fields are treated the same way.
fn required(field: Option<String>) -> Result<String, ApiError> {
    field
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingField)
}

/// Parse an `A1`-style coordinate: row letter `A`-`I` (either case), column
/// digit `1`-`9`, nothing else.
fn parse_coordinate(coordinate: &str) -> Option<Position> {
    let mut chars = coordinate.chars();
    let row = chars.next()?.to_ascii_uppercase();
    let col = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('A'..='I').contains(&row) || !('1'..='9').contains(&col) {
        return None;
    }
    Some(Position::new(row as u8 - b'A', col as u8 - b'1'))
}

/// Parse a candidate value: exactly one digit `1`-`9`.
fn parse_value(value: &str) -> Option<u8> {
    let mut chars = value.chars();
    let digit = chars.next()?;
    if chars.next().is_some() || !('1'..='9').contains(&digit) {
        return None;
    }
    Some(digit as u8 - b'0')
}
