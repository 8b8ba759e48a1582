//! User data repository for database operations.
//!
//! This module defines the `UserRepository` port the service layer depends on, and
//! `SeaOrmUserRepository`, its SeaORM-backed implementation. Each method is a single
//! round trip to the store. The only translation performed here is turning "no row"
//! into `AppError::NotFound`; every other storage failure surfaces as `AppError::DbErr`.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{error::AppError, model::user::User};

/// Message carried by `AppError::NotFound` when no user matches.
pub const USER_NOT_FOUND: &str = "user not found";

/// Persistence boundary for users.
///
/// Any implementation honouring this contract can back `UserService` without changes
/// to the service or controllers:
/// - lookups of a single user fail with `AppError::NotFound` when no row matches
/// - `patch` and `delete` succeed whether or not a row matched
/// - all other failures are storage errors
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every user; an empty table yields an empty vector.
    async fn get_all(&self) -> Result<Vec<User>, AppError>;

    /// Returns the user with the given username.
    async fn get_by_username(&self, username: &str) -> Result<User, AppError>;

    /// Returns the user with the given id.
    async fn get_by_id(&self, id: i64) -> Result<User, AppError>;

    /// Inserts the user, ignoring its id, and returns the id the store assigned.
    async fn post(&self, user: &User) -> Result<i64, AppError>;

    /// Overwrites username, email and full name of the row with `user.id`.
    async fn patch(&self, user: &User) -> Result<(), AppError>;

    /// Deletes the row with the given id.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// Repository providing database operations for user management.
///
/// Holds a handle to the connection pool; clones share the pool.
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    /// Creates a new SeaOrmUserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    /// Gets all users ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user (empty if the table is empty)
    /// - `Err(AppError::DbErr)` - Database error during query
    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by username.
    ///
    /// # Returns
    /// - `Ok(User)` - First user (by id) with that username
    /// - `Err(AppError::NotFound)` - No user has that username
    /// - `Err(AppError::DbErr)` - Database error during query
    async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .order_by_asc(entity::user::Column::Id)
            .one(&self.db)
            .await?;

        entity
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - The matching user
    /// - `Err(AppError::NotFound)` - No user has that id
    /// - `Err(AppError::DbErr)` - Database error during query
    async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(&self.db).await?;

        entity
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Inserts a user without reading the row back.
    ///
    /// # Returns
    /// - `Ok(i64)` - Id assigned by the store
    /// - `Err(AppError::DbErr)` - Database error during insert
    async fn post(&self, user: &User) -> Result<i64, AppError> {
        let result = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(user.username.clone()),
            email: ActiveValue::Set(user.email.clone()),
            full_name: ActiveValue::Set(user.full_name.clone()),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(result.last_insert_id)
    }

    /// Overwrites a user's mutable fields.
    ///
    /// # Returns
    /// - `Ok(())` - Update executed (or no matching user found)
    /// - `Err(AppError::DbErr)` - Database error during update
    async fn patch(&self, user: &User) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Username,
                Expr::value(user.username.clone()),
            )
            .col_expr(entity::user::Column::Email, Expr::value(user.email.clone()))
            .col_expr(
                entity::user::Column::FullName,
                Expr::value(user.full_name.clone()),
            )
            .filter(entity::user::Column::Id.eq(user.id))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(())` - Delete executed (or no matching user found)
    /// - `Err(AppError::DbErr)` - Database error during delete
    async fn delete(&self, id: i64) -> Result<(), AppError> {
        entity::prelude::User::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }
}
