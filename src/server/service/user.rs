//! User service for business logic.
//!
//! This module provides the `UserService`, the policy layer between controllers and the
//! user repository. It decides which validations apply to which operation and runs them
//! before any storage access, so a rejected request never touches the store. Errors from
//! the repository are returned exactly as raised.

use std::sync::Arc;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::User,
    validation::{validate_id, validate_user, validate_username},
};

/// Service providing business logic for user management.
///
/// Holds the repository behind a trait object, so tests and alternative stores can be
/// swapped in without touching this type or the controllers. Cloning is cheap.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `repo` - Repository used for every storage operation
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Retrieves all users. Nothing to validate.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        self.repo.get_all().await
    }

    /// Retrieves a user by username.
    ///
    /// # Returns
    /// - `Ok(User)` - The matching user
    /// - `Err(AppError::InvalidInput)` - Username has the wrong length; storage not queried
    /// - `Err(AppError::NotFound)` - No user has that username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        validate_username(username)?;
        self.repo.get_by_username(username).await
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The matching user
    /// - `Err(AppError::InvalidInput)` - Id below 1; storage not queried
    /// - `Err(AppError::NotFound)` - No user has that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        validate_id(id)?;
        self.repo.get_by_id(id).await
    }

    /// Creates a user after validating every field.
    ///
    /// # Returns
    /// - `Ok(i64)` - Id assigned by the store
    /// - `Err(AppError::InvalidInput)` - First rule the user breaks; nothing stored
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn post(&self, user: &User) -> Result<i64, AppError> {
        validate_user(user)?;
        self.repo.post(user).await
    }

    /// Overwrites a user after validating the id and then every field.
    ///
    /// The whole user is written, not just the fields a caller changed, so the whole
    /// user must be valid. Existence is checked by the caller through `get_by_id`
    /// beforehand; the repository update itself ignores missing rows.
    ///
    /// # Returns
    /// - `Ok(())` - User overwritten
    /// - `Err(AppError::InvalidInput)` - First rule broken; nothing written
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn patch(&self, user: &User) -> Result<(), AppError> {
        validate_id(user.id)?;
        validate_user(user)?;
        self.repo.patch(user).await
    }

    /// Deletes a user by id. Deleting an id with no row succeeds.
    ///
    /// # Returns
    /// - `Ok(())` - Delete executed
    /// - `Err(AppError::InvalidInput)` - Id below 1; storage not touched
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        validate_id(id)?;
        self.repo.delete(id).await
    }
}
