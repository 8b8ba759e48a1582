use super::*;

/// Tests a non-integer id.
///
/// Expected: 400 with "invalid id"
#[tokio::test]
async fn rejects_non_integer_id() {
    let app = app(state().await);

    let (status, body) = send(&app, Method::GET, "/api/v1/users/id/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "invalid id");
}

/// Tests ids below 1.
///
/// Expected: 400 with the id rule message
#[tokio::test]
async fn rejects_ids_below_one() {
    let app = app(state().await);

    for uri in ["/api/v1/users/id/0", "/api/v1/users/id/-5"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&body), "id cannot be less than 1");
    }
}

/// Tests an id with no row.
///
/// Expected: 404
#[tokio::test]
async fn returns_not_found_for_unknown_id() {
    let app = app(state().await);

    let (status, _) = send(&app, Method::GET, "/api/v1/users/id/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
