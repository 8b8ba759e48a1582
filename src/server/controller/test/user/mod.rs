use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreatedUserDto, UserDto},
    },
    server::{
        data::user::SeaOrmUserRepository, model::user::User, router, service::user::UserService,
        state::AppState,
    },
};

mod get_by_id;

/// Builds state over a fresh in-memory database with the users table.
async fn state() -> AppState {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    state_over(test.connection().await.unwrap())
}

/// Builds state over a database with no tables, so every query fails.
async fn broken_state() -> AppState {
    let mut test = TestBuilder::new().build().await.unwrap();

    state_over(test.connection().await.unwrap())
}

fn state_over(db: sea_orm::DatabaseConnection) -> AppState {
    let repo = SeaOrmUserRepository::new(db);
    AppState::new(UserService::new(Arc::new(repo)), "test-key".to_string())
}

/// Routes without interceptors; handlers are reached directly.
fn app(state: AppState) -> Router {
    router::router().with_state(state)
}

/// Sends one request and returns the status and raw body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

fn json<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

fn error_message(body: &[u8]) -> String {
    json::<ErrorDto>(body).error
}

/// Stores a user through the service and returns its id.
async fn seed(state: &AppState, username: &str, email: &str, full_name: &str) -> i64 {
    state
        .user_service
        .post(&User {
            id: 0,
            username: username.to_string(),
            email: email.to_string(),
            full_name: full_name.to_string(),
        })
        .await
        .unwrap()
}

const JDOE: &str = r#"{"username":"jdoe","email":"jdoe@example.com","full_name":"John Doe"}"#;
