use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{error::auth::AuthError, state::AppState};

/// Header carrying the shared API key. Header names are matched case-insensitively.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects requests that do not carry the configured API key.
///
/// Runs before any other interceptor so that rejected requests never reach a handler.
///
/// # Returns
/// - `Ok(Response)` - Key matched; the inner service's response
/// - `Err(AuthError::MissingApiKey)` - Header absent or empty (401)
/// - `Err(AuthError::InvalidApiKey)` - Header present but wrong (403)
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let Some(provided) = request.headers().get(API_KEY_HEADER) else {
        return Err(AuthError::MissingApiKey);
    };

    if provided.is_empty() {
        return Err(AuthError::MissingApiKey);
    }

    if provided.as_bytes() != state.api_key.as_bytes() {
        return Err(AuthError::InvalidApiKey);
    }

    Ok(next.run(request).await)
}
