//! User domain model.
//!
//! The service layer works with [`User`]; it is converted from entity rows at the
//! repository boundary and to and from DTOs at the controller boundary.

use crate::model::user::{PatchUserDto, UserDto};

/// The one entity this API manages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    /// Store-assigned identifier; `0` until persisted.
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl User {
    /// Converts an entity row to the domain model.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            full_name: entity.full_name,
        }
    }

    /// Builds a user from a request body.
    ///
    /// Any id in the body is dropped; creates get theirs from the store.
    pub fn from_dto(dto: UserDto) -> Self {
        Self {
            id: 0,
            username: dto.username,
            email: dto.email,
            full_name: dto.full_name,
        }
    }

    /// Converts the user to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            full_name: self.full_name,
        }
    }

    /// Overlays the fields present in an update body onto this user.
    ///
    /// The result is a full replacement candidate and still has to pass
    /// `validate_user` as a whole.
    pub fn apply(&mut self, changes: PatchUserDto) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(full_name) = changes.full_name {
            self.full_name = full_name;
        }
    }
}
