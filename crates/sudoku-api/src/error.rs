//! Public error surface of the API.
//!
//! Every failure is terminal for its request and is serialized as
//! `{"error": <message>}` with the exact message strings clients already
//! depend on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sudoku_core::{ParseError, SolveError};

/// JSON body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Request failures, each carrying its public message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required body field is absent or empty.
    #[error("Required field(s) missing")]
    MissingField,
    /// The puzzle string contains a character other than `.` or `1`-`9`.
    #[error("Invalid characters in puzzle")]
    PuzzleCharacters,
    /// The puzzle string is not exactly 81 characters long.
    #[error("Expected puzzle to be 81 characters long")]
    PuzzleLength,
    /// The coordinate is not a row letter `A`-`I` followed by a column `1`-`9`.
    #[error("Invalid coordinate")]
    InvalidCoordinate,
    /// The value is not a single digit `1`-`9`.
    #[error("Invalid value")]
    InvalidValue,
    /// The puzzle admits no solution.
    #[error("Puzzle cannot be solved")]
    Unsolvable,
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::InvalidLength(_) => ApiError::PuzzleLength,
            ParseError::InvalidCharacter { .. } => ApiError::PuzzleCharacters,
        }
    }
}

impl From<SolveError> for ApiError {
    fn from(_: SolveError) -> Self {
        // The public surface has a single failure message, for the exhausted
        // search as well as the step guard.
        ApiError::Unsolvable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Existing clients key off the body, not the status code.
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_messages() {
        assert_eq!(ApiError::MissingField.to_string(), "Required field(s) missing");
        assert_eq!(
            ApiError::PuzzleCharacters.to_string(),
            "Invalid characters in puzzle"
        );
        assert_eq!(
            ApiError::PuzzleLength.to_string(),
            "Expected puzzle to be 81 characters long"
        );
        assert_eq!(ApiError::InvalidCoordinate.to_string(), "Invalid coordinate");
        assert_eq!(ApiError::InvalidValue.to_string(), "Invalid value");
        assert_eq!(ApiError::Unsolvable.to_string(), "Puzzle cannot be solved");
    }

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(
            ApiError::from(ParseError::InvalidLength(80)),
            ApiError::PuzzleLength
        );
        assert_eq!(
            ApiError::from(ParseError::InvalidCharacter { cell: 0, ch: 'x' }),
            ApiError::PuzzleCharacters
        );
        assert_eq!(ApiError::from(SolveError::Unsolvable), ApiError::Unsolvable);
        assert_eq!(
            ApiError::from(SolveError::StepLimitExceeded(11)),
            ApiError::Unsolvable
        );
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = ApiError::Unsolvable.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Puzzle cannot be solved"}));
    }
}
