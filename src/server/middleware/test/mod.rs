use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::{
    model::api::ErrorDto,
    server::{
        data::user::SeaOrmUserRepository, router, service::user::UserService, state::AppState,
    },
};


const API_KEY: &str = "s3cret";

/// Full application over an in-memory database, interceptors attached.
async fn app() -> Router {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    app_over(test.connection().await.unwrap())
}

/// Full application over a database with no tables, so any query would fail.
async fn broken_app() -> Router {
    let mut test = TestBuilder::new().build().await.unwrap();

    app_over(test.connection().await.unwrap())
}

fn app_over(db: sea_orm::DatabaseConnection) -> Router {
    let service = UserService::new(Arc::new(SeaOrmUserRepository::new(db)));
    router::app(AppState::new(service, API_KEY.to_string()))
}

async fn get(app: &Router, uri: &str, key: Option<(&str, &str)>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().uri(uri);
    if let Some((name, value)) = key {
        request = request.header(name, value);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorDto>(body).unwrap().error
}
