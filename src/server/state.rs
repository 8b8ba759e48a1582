//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Both fields are cheap to clone.

use crate::server::service::user::UserService;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Service for all user operations; wraps the repository and its connection pool.
    pub user_service: UserService,

    /// Key every API request must present in the `X-API-Key` header.
    pub api_key: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `user_service` - Service handling user operations
    /// - `api_key` - Expected API key
    pub fn new(user_service: UserService, api_key: String) -> Self {
        Self {
            user_service,
            api_key,
        }
    }
}
