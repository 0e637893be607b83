//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every ledger failure listed here except `Database` and `TokenIssue` is a
/// validation failure raised before any balance is touched.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error, constraint violation).
    ///
    /// The enclosing transaction is always rolled back before this reaches the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Signing a new token failed.
    #[error("Token issue error: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),

    /// Bearer token is missing, malformed, expired, badly signed, or names an unknown user.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid credentials")]
    Unauthenticated,

    /// Transfer amount is zero or negative.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Transfer amount must be positive")]
    InvalidAmount,

    /// Balance does not cover the transfer amount or item price.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// No user exists with the requested recipient username.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Recipient not found")]
    RecipientNotFound,

    /// Requested item is not in the merch catalog.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Item not found")]
    ItemNotFound,
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Unauthenticated => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            AppError::InvalidAmount => (StatusCode::BAD_REQUEST, "invalid_amount"),
            AppError::InsufficientFunds => (StatusCode::BAD_REQUEST, "insufficient_funds"),
            AppError::RecipientNotFound => (StatusCode::NOT_FOUND, "recipient_not_found"),
            AppError::ItemNotFound => (StatusCode::NOT_FOUND, "item_not_found"),
            AppError::Database(_) | AppError::TokenIssue(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// Internal errors are logged and their details hidden from the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed with internal error");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                axum::http::header::WWW_AUTHENTICATE,
                axum::http::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}
