//! Environment-based application configuration.

use std::net::SocketAddr;

use tracing::Level;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Connection settings for a PostgreSQL store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db: String,
    /// libpq `sslmode` value, passed through untouched.
    pub ssl_mode: String,
}

impl PostgresConfig {
    /// Builds the `postgres://` URL, percent-encoding every component.
    ///
    /// # Returns
    /// - `Ok(Url)` - URL carrying the credentials, database and `sslmode`
    /// - `Err(ConfigError::InvalidEnvVar)` - A component cannot be placed in a URL
    pub fn to_url(&self) -> Result<Url, ConfigError> {
        let invalid = |name: &str, value: &str, reason: String| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason,
        };

        let mut url = Url::parse("postgres://localhost")
            .map_err(|e| invalid("POSTGRES_HOST", &self.host, e.to_string()))?;

        url.set_host(Some(&self.host))
            .map_err(|e| invalid("POSTGRES_HOST", &self.host, e.to_string()))?;
        url.set_port(Some(self.port)).map_err(|_| {
            invalid("POSTGRES_PORT", &self.port.to_string(), "port not allowed".to_string())
        })?;
        url.set_username(&self.user).map_err(|_| {
            invalid("POSTGRES_USER", &self.user, "user not allowed".to_string())
        })?;
        url.set_password(Some(&self.password)).map_err(|_| {
            invalid("POSTGRES_PASSWORD", "<redacted>", "password not allowed".to_string())
        })?;
        url.path_segments_mut()
            .map_err(|_| invalid("POSTGRES_DB", &self.db, "database not allowed".to_string()))?
            .push(&self.db);
        url.query_pairs_mut().append_pair("sslmode", &self.ssl_mode);

        Ok(url)
    }
}

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseSource {
    /// Explicit `DATABASE_URL`, used as is.
    Url(String),
    /// DSN assembled from the `POSTGRES_*` variables.
    Postgres(PostgresConfig),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub database: DatabaseSource,
    pub log_level: Level,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// `.env` files must already have been loaded by the caller.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset. When `DATABASE_URL` is set the `POSTGRES_*`
    /// variables are not read at all.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A port, level or address does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let require = |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let api_key = require("API_KEY")?;

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseSource::Url(url),
            None => {
                let port = require("POSTGRES_PORT")?;
                DatabaseSource::Postgres(PostgresConfig {
                    host: require("POSTGRES_HOST")?,
                    port: parse_var("POSTGRES_PORT", port)?,
                    user: require("POSTGRES_USER")?,
                    password: require("POSTGRES_PASSWORD")?,
                    db: require("POSTGRES_DB")?,
                    ssl_mode: require("POSTGRES_SSL_MODE")?,
                })
            }
        };

        let log_level = match get("LOG_LEVEL") {
            Some(value) => parse_var("LOG_LEVEL", value)?,
            None => DEFAULT_LOG_LEVEL,
        };

        let bind_address = parse_var(
            "BIND_ADDRESS",
            get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        )?;

        Ok(Self {
            api_key,
            database,
            log_level,
            bind_address,
        })
    }

    /// Connection string for the store.
    ///
    /// `DATABASE_URL` is returned untouched; otherwise the URL is assembled from the
    /// `POSTGRES_*` parts with user, password and database percent-encoded.
    pub fn database_url(&self) -> Result<String, AppError> {
        match &self.database {
            DatabaseSource::Url(url) => Ok(url.clone()),
            DatabaseSource::Postgres(pg) => Ok(pg.to_url()?.into()),
        }
    }
}

fn parse_var<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        })
}
