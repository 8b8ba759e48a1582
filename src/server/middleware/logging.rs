use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

/// Logs one event per request once the inner service has answered.
///
/// Field names follow the OpenTelemetry HTTP conventions. Routes with an `{id}` or
/// `{username}` parameter also log the value taken from the request path.
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    let user_id = path_param(&route, &path, "id");
    let username = path_param(&route, &path, "username");

    tracing::info!(
        http.request.method = %method,
        http.route = %route,
        http.response.status_code = response.status().as_u16(),
        http.server.request.duration = duration_ms,
        url.path = %path,
        user_id,
        username,
        "request handled"
    );

    response
}

/// Finds the value of a named parameter by lining up a route template with a path.
///
/// Returns `None` when the template has no `{name}` segment or the path is shorter.
pub fn path_param<'a>(template: &str, path: &'a str, name: &str) -> Option<&'a str> {
    let placeholder = format!("{{{}}}", name);

    template
        .split('/')
        .zip(path.split('/'))
        .find(|(segment, _)| *segment == placeholder)
        .map(|(_, value)| value)
}
