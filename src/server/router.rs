use axum::{
    middleware,
    routing::{get, patch},
    Router,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreatedUserDto, PatchUserDto, UserDto},
    },
    server::{
        controller::user::{
            self, delete_user, get_all_users, get_user_by_id, get_user_by_username, patch_user,
            post_user,
        },
        middleware::{
            api_key::{require_api_key, API_KEY_HEADER},
            logging::log_request,
        },
        state::AppState,
    },
};

/// Registers the API key header as the document's security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                API_KEY_HEADER,
                "Static shared secret configured through API_KEY.",
            ))),
        );
    }
}

/// OpenAPI document for the user API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "cruder",
        description = "CRUD API over a single user resource."
    ),
    paths(
        user::get_all_users,
        user::get_user_by_username,
        user::get_user_by_id,
        user::post_user,
        user::patch_user,
        user::delete_user,
    ),
    components(schemas(UserDto, CreatedUserDto, PatchUserDto, ErrorDto)),
    tags(
        (name = "user", description = "Create, read, update and delete users")
    )
)]
pub struct ApiDoc;

/// Builds the user routes without interceptors or state.
///
/// The collection routes answer with and without a trailing slash.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/users/", get(get_all_users).post(post_user))
        .route("/api/v1/users", get(get_all_users).post(post_user))
        .route(
            "/api/v1/users/username/{username}",
            get(get_user_by_username),
        )
        .route("/api/v1/users/id/{id}", get(get_user_by_id))
        .route("/api/v1/users/{id}", patch(patch_user).delete(delete_user))
}

/// Builds the complete application.
///
/// Every API route is wrapped by the API key check and then request logging. The
/// OpenAPI document and Swagger UI are merged afterwards and are not guarded.
pub fn app(state: AppState) -> Router {
    router()
        .route_layer(middleware::from_fn(log_request))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}
