//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// No beer with the given id or name is registered
    #[error("Beer not found: {0}")]
    BeerNotFound(String),

    /// A beer with the same name is already registered
    #[error("Beer already registered: {0}")]
    BeerAlreadyRegistered(String),

    /// Increment would push the stock above the max capacity
    #[error("Increment of {quantity} for beer {id} exceeds the max stock capacity")]
    StockExceededOnIncrement {
        /// Id of the beer whose stock was to be incremented
        id: i64,
        /// Rejected increment amount
        quantity: i64,
    },

    /// Decrement would push the stock below zero
    #[error("Decrement of {quantity} for beer {id} exceeds the minimum stock capacity")]
    StockExceededOnDecrement {
        /// Id of the beer whose stock was to be decremented
        id: i64,
        /// Rejected decrement amount
        quantity: i64,
    },

    /// Request fields failed validation
    #[error("Invalid beer: {0}")]
    InvalidBeer(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BeerNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BeerAlreadyRegistered(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::StockExceededOnIncrement { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::StockExceededOnDecrement { .. } => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::InvalidBeer(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
