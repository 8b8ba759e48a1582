use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as it travels over the wire.
///
/// Missing fields decode to their empty defaults so that validation, not the
/// decoder, reports which rule a request body breaks.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct UserDto {
    /// Ignored on create and update; the store and the request path own it.
    pub id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
}

/// Response body of a successful create.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub struct CreatedUserDto {
    pub id: i64,
}

/// Request body of an update.
///
/// Fields left out keep their stored value; the merged user is then validated
/// and written back as a whole.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
pub struct PatchUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}
