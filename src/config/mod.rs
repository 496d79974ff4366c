use serde::{Deserialize, Serialize};

use crate::utils::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logger: LoggerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub port: u16,
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
    pub prefork: bool,
    pub body_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: String,
    pub max_open_conns: u32,
    pub max_idle_conns: u32,
    pub conn_max_lifetime_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerSettings {
    pub level: String,
    pub output_path: String,
    pub error_path: String,
}

impl AppConfig {
    /// Loads configuration from an optional `config.yaml` plus `APP`-prefixed
    /// environment variables (e.g. `APP_DATABASE__HOST`), on top of the
    /// built-in defaults. Values are only coerced, never validated.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("app.name", "POS System")?
            .set_default("app.version", "1.0.0")?
            .set_default("app.environment", "development")?
            .set_default("app.port", 8080)?
            .set_default("app.debug", true)?
            .set_default("server.read_timeout_secs", 10)?
            .set_default("server.write_timeout_secs", 10)?
            .set_default("server.prefork", false)?
            .set_default("server.body_limit", 4_194_304)?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.user", "postgres")?
            .set_default("database.password", "")?
            .set_default("database.name", "pos")?
            .set_default("database.ssl_mode", "disable")?
            .set_default("database.max_open_conns", 25)?
            .set_default("database.max_idle_conns", 5)?
            .set_default("database.conn_max_lifetime_secs", 3600)?
            .set_default("logger.level", "info")?
            .set_default("logger.output_path", "storage/logs/app.log")?
            .set_default("logger.error_path", "storage/logs/error.log")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
