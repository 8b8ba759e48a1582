use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Message reported when a path id is not an integer.
pub const INVALID_ID: &str = "invalid id";

/// Parses a user id from a path segment.
///
/// Only checks that the text is a 64-bit integer; the range rule is validation's job.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i64)` - Successfully parsed id
/// - `Err(AppError::DecodeErr)` - Text is not an integer
pub fn parse_id(value: &str) -> Result<i64, AppError> {
    value
        .parse::<i64>()
        .map_err(|_| AppError::DecodeErr(INVALID_ID.to_string()))
}

/// Decodes a JSON request body.
///
/// # Returns
/// - `Ok(T)` - Decoded body
/// - `Err(AppError::DecodeErr)` - Body is not valid JSON for `T`, carrying the decoder's message
pub fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::DecodeErr(e.to_string()))
}
