use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `users` table exists before the first
/// request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::ConfigErr)` - Database settings cannot form a connection URL
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(config.database_url()?);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs the global JSON log subscriber.
///
/// The filter comes from the configured level. Source file and line are added to each
/// event at `debug` and below.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::new(config.log_level.as_str().to_lowercase());
    let with_location = config.log_level >= Level::DEBUG;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_file(with_location)
        .with_line_number(with_location)
        .init();
}

/// Resolves once Ctrl-C is received.
///
/// Used to drive graceful shutdown; in-flight requests finish before the server exits.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
