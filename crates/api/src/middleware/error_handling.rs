//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the CourtBook
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Bodies are always `{ "error": "<message>" }`. `Conflict` maps to 400:
//! that status with "Slot already booked" is the contract booking clients
//! consume, and it is an expected outcome of concurrent use, not a server
//! fault.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use courtbook_core::errors::CourtError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `CourtError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads, so handlers can use the `?` operator on
/// anything convertible into `CourtError`.
///
/// # Example
///
/// ```ignore
/// async fn handler(id: i32) -> Result<Json<BookingResponse>, AppError> {
///     let row = repositories::booking::get_booking_detail(&pool, id)
///         .await
///         .map_err(CourtError::Database)?
///         .ok_or_else(|| CourtError::NotFound("Booking not found".to_string()))?;
///     Ok(Json(row.into()))
/// }
/// ```
#[derive(Debug)]
pub struct AppError(pub CourtError);

/// Converts application errors to HTTP responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            CourtError::NotFound(_) => StatusCode::NOT_FOUND,
            CourtError::Validation(_) => StatusCode::BAD_REQUEST,
            CourtError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CourtError::Authorization(_) => StatusCode::FORBIDDEN,
            CourtError::Conflict(_) => StatusCode::BAD_REQUEST,
            CourtError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CourtError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using the `?` operator with functions that return
/// `Result<T, CourtError>` in handlers returning `Result<T, AppError>`.
impl From<CourtError> for AppError {
    fn from(err: CourtError) -> Self {
        AppError(err)
    }
}

/// Wraps raw store failures in `CourtError::Database`, surfacing them
/// verbatim as server errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(CourtError::Database(err))
    }
}

/// Maps a CourtError to an HTTP response.
pub fn map_error(err: CourtError) -> Response {
    AppError(err).into_response()
}
