use anyhow::{Context, Result};
use tracing::{error, info};

use pos_backend::{
    config::AppConfig,
    handlers::{ApiServer, ApiServerTrait},
    providers::{Database, StructuredLogger},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    StructuredLogger::init(&config.logger).context("Failed to initialize logger")?;

    info!(
        app = %config.app.name,
        version = %config.app.version,
        environment = %config.app.environment,
        port = config.app.port,
        "Starting POS backend"
    );

    // Startup failures are fatal; the listener never opens on a half-started
    // process.
    let pool = match Database::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            return Err(e.into());
        }
    };

    let server = ApiServer::new(config.clone(), pool.clone());

    // Blocks until SIGINT/SIGTERM, letting in-flight requests finish.
    let result = server.start().await;
    if let Err(e) = &result {
        error!(error = %e, "Server error");
    }

    server.shutdown().await?;
    Database::close(&pool).await;
    info!("Server exited");

    result.map_err(Into::into)
}
