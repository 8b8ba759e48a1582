use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreatedUserDto, PatchUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::User,
        state::AppState,
        util::parse::{decode_body, parse_id},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Returns
/// - `200 OK` - All users ordered by id, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing API key", body = ErrorDto),
        (status = 403, description = "Wrong API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = state.user_service.get_all().await?;
    let users: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by username.
///
/// The username must satisfy the username length rule before the store is queried.
///
/// # Arguments
/// - `state` - Application state containing the user service
/// - `username` - Username to look up
///
/// # Returns
/// - `200 OK` - The matching user
/// - `400 Bad Request` - Username shorter than 3 or longer than 50 characters
/// - `404 Not Found` - No user has that username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users/username/{username}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    responses(
        (status = 200, description = "Matching user", body = UserDto),
        (status = 400, description = "Invalid username", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_service.get_by_username(&username).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user by id.
///
/// # Returns
/// - `200 OK` - The matching user
/// - `400 Bad Request` - Id is not an integer or is below 1
/// - `404 Not Found` - No user has that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users/id/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Matching user", body = UserDto),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let user = state.user_service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create a user.
///
/// Any `id` in the body is ignored; the store assigns one and it is returned.
///
/// # Arguments
/// - `state` - Application state containing the user service
/// - `body` - JSON encoded `UserDto`
///
/// # Returns
/// - `200 OK` - The new user's id
/// - `400 Bad Request` - Malformed body or a field breaks a validation rule
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/users/",
    tag = USER_TAG,
    request_body = UserDto,
    responses(
        (status = 200, description = "User created", body = CreatedUserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn post_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let dto: UserDto = decode_body(&body)?;
    let id = state.user_service.post(&User::from_dto(dto)).await?;

    Ok((StatusCode::OK, Json(CreatedUserDto { id })))
}

/// Update a user.
///
/// The stored user is loaded first, so a missing id is reported as 404 before the body
/// is looked at. Fields present in the body replace the stored ones and the merged user
/// is validated and written back as a whole.
///
/// # Arguments
/// - `state` - Application state containing the user service
/// - `id` - Id of the user to update; any id in the body is ignored
/// - `body` - JSON encoded `PatchUserDto`
///
/// # Returns
/// - `204 No Content` - User updated
/// - `400 Bad Request` - Invalid id, malformed body, or the merged user breaks a rule
/// - `404 Not Found` - No user has that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = PatchUserDto,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Invalid id or user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let mut user = state.user_service.get_by_id(id).await?;

    let changes: PatchUserDto = decode_body(&body)?;
    user.apply(changes);
    user.id = id;

    state.user_service.patch(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user.
///
/// Deleting an id that does not exist still succeeds.
///
/// # Returns
/// - `204 No Content` - Delete executed
/// - `400 Bad Request` - Id is not an integer or is below 1
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    state.user_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
