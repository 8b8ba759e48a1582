//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and the single place where
//! error kinds are translated into HTTP status codes. Validation and the data layer raise
//! typed errors, the service layer passes them through untouched, and `AppError`'s
//! `IntoResponse` implementation turns them into responses at the controller boundary.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Classification of an `AppError`, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client input broke a validation rule.
    InvalidInput,
    /// No entity matched the lookup.
    NotFound,
    /// The store failed or was unreachable.
    Storage,
    /// Path or body could not be decoded into the expected shape.
    Decode,
    /// Startup and other infrastructure failures.
    Internal,
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Classification is by variant through
/// [`AppError::kind`], never by message text.
#[derive(Error, Debug)]
pub enum AppError {
    /// A validation rule was violated.
    ///
    /// Results in 400 Bad Request carrying the rule's message.
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    /// Aborted queries from cancelled requests surface here as well.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Malformed path parameter or request body.
    ///
    /// Results in 400 Bad Request. Raised by controllers before the service is called.
    #[error("{0}")]
    DecodeErr(String),

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Socket or other I/O error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Classifies the error into its kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DbErr(_) => ErrorKind::Storage,
            Self::DecodeErr(_) => ErrorKind::Decode,
            Self::ConfigErr(_) | Self::IoErr(_) => ErrorKind::Internal,
        }
    }

    /// Maps the error kind to the HTTP status reported to the caller.
    ///
    /// Not-found is checked first, then client input errors; anything else is a 500.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput | ErrorKind::Decode => StatusCode::BAD_REQUEST,
            ErrorKind::Storage | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidInput` and `DecodeErr`, with the message as body
/// - 404 Not Found - For `NotFound`, with the message as body
/// - 500 Internal Server Error - For every other variant; details are logged, the
///   client sees a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return InternalServerError(self).into_response();
        }

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
