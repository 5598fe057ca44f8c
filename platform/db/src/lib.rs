//! Connection settings and pool construction shared by the server and tests.

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use thiserror::Error;
use tracing::info;

/// Shared connection pool alias.
pub type DbPool = DatabaseConnection;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database url missing (set {0})")]
    MissingUrl(String),
    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: String, value: String },
    #[error("failed to connect to database")]
    Connect(#[source] DbErr),
}

pub type DbResult<T> = Result<T, DbError>;

const DEFAULT_URL_KEY: &str = "DATABASE_URL";
const MAX_CONNECTIONS_KEY: &str = "DATABASE_MAX_CONNECTIONS";

#[derive(Clone, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub connect_timeout: Duration,
}

impl DatabaseSettings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: None,
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Reads `DATABASE_URL` and the optional `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> DbResult<Self> {
        let url = std::env::var(DEFAULT_URL_KEY)
            .map_err(|_| DbError::MissingUrl(DEFAULT_URL_KEY.to_string()))?;
        let mut settings = Self::new(url);
        if let Ok(raw) = std::env::var(MAX_CONNECTIONS_KEY) {
            let parsed = raw.trim().parse::<u32>().map_err(|_| DbError::InvalidSetting {
                key: MAX_CONNECTIONS_KEY.to_string(),
                value: raw.clone(),
            })?;
            settings.max_connections = Some(parsed);
        }
        Ok(settings)
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(false);
        if let Some(max) = self.max_connections {
            options.max_connections(max);
        }
        options
    }
}

pub async fn connect(settings: &DatabaseSettings) -> DbResult<DbPool> {
    let pool = Database::connect(settings.connect_options())
        .await
        .map_err(DbError::Connect)?;
    info!(backend = ?pool.get_database_backend(), "database connected");
    Ok(pool)
}

/// Round-trips a trivial query; used by the health probe.
pub async fn ping(pool: &DbPool) -> bool {
    let backend = pool.get_database_backend();
    pool.execute(Statement::from_string(backend, "SELECT 1".to_string()))
        .await
        .is_ok()
}
