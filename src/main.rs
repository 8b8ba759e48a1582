mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    config::Config,
    data::user::SeaOrmUserRepository,
    error::AppError,
    router,
    service::user::UserService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    let user_service = UserService::new(Arc::new(SeaOrmUserRepository::new(db)));
    let state = AppState::new(user_service, config.api_key.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router::app(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
