use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use pos_backend::config::{
    AppConfig, AppSettings, DatabaseSettings, LoggerSettings, ServerSettings,
};
use pos_backend::handlers::api_server::AppState;
use pos_backend::handlers::welcome::welcome_handler;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;

fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "Test POS".to_string(),
            version: "2.3.4".to_string(),
            environment: "test".to_string(),
            port: 8080,
            debug: true,
        },
        server: ServerSettings {
            read_timeout_secs: 10,
            write_timeout_secs: 10,
            prefork: false,
            body_limit: 4_194_304,
        },
        database: DatabaseSettings {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "".to_string(),
            name: "pos_test".to_string(),
            ssl_mode: "disable".to_string(),
            max_open_conns: 5,
            max_idle_conns: 1,
            conn_max_lifetime_secs: 60,
        },
        logger: LoggerSettings {
            level: "info".to_string(),
            output_path: "storage/logs/app.log".to_string(),
            error_path: "storage/logs/error.log".to_string(),
        },
    }
}

fn test_state() -> AppState {
    // Lazy pool: no connection is made until a query runs, which these
    // tests never do.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost:5432/pos_test")
        .expect("lazy pool should build without connecting");

    AppState {
        config: test_config(),
        pool,
    }
}

#[tokio::test]
async fn test_welcome_returns_configured_identity() {
    let response = welcome_handler(State(test_state())).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("success"));
    assert_eq!(body["data"]["app_name"], json!("Test POS"));
    assert_eq!(body["data"]["app_versions"], json!("2.3.4"));
    assert!(body.get("error").is_none());
}
