use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The request carried no API key header, or an empty one.
    #[error("missing api key")]
    MissingApiKey,

    /// The request carried an API key that does not match the configured one.
    #[error("forbidden")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingApiKey` → 401 Unauthorized with `{"error": "missing api key"}`
/// - `InvalidApiKey` → 403 Forbidden with `{"error": "forbidden"}`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingApiKey => StatusCode::UNAUTHORIZED,
            Self::InvalidApiKey => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
