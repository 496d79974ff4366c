use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseSettings;
use crate::utils::error::Result;

pub struct Database;

impl Database {
    /// Opens the Postgres pool with the configured limits and verifies
    /// connectivity once. Any failure here is returned to the caller, which
    /// treats it as fatal; the server never starts on a dead database.
    pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_open_conns)
            .min_connections(settings.max_idle_conns)
            .max_lifetime(Duration::from_secs(settings.conn_max_lifetime_secs))
            .connect(&Self::connection_url(settings))
            .await?;

        // Liveness check; sqlx prepares and caches statements per connection.
        sqlx::query("SELECT 1").execute(&pool).await?;

        info!(
            host = %settings.host,
            port = settings.port,
            database = %settings.name,
            "Database connected successfully"
        );
        Ok(pool)
    }

    pub fn connection_url(settings: &DatabaseSettings) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            settings.user, settings.password, settings.host, settings.port, settings.name, settings.ssl_mode
        )
    }

    pub async fn close(pool: &PgPool) {
        pool.close().await;
    }
}
