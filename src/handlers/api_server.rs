use std::any::Any;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    CompressionLevel,
};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::handlers::welcome::welcome_handler;
use crate::utils::error::{AppError, Result};
use crate::utils::response::ApiResponse;

#[async_trait]
pub trait ApiServerTrait {
    async fn start(&self) -> Result<()>;
    async fn shutdown(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct ApiServer {
    config: AppConfig,
    pool: PgPool,
}

impl ApiServer {
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        Self { config, pool }
    }

    /// Route table plus the baseline middleware stack: panic recovery,
    /// request-id tagging, permissive CORS, fastest-level compression,
    /// request timeout and body size limit from config.
    pub fn router(&self) -> Router {
        self.layered(
            Router::new()
                .route("/", get(welcome_handler))
                .fallback(route_not_found),
        )
    }

    /// Applies the full middleware stack to a route table. Split from
    /// `router` so tests can send extra routes through the identical
    /// layering.
    pub fn layered(&self, routes: Router<AppState>) -> Router {
        let server = &self.config.server;
        let timeout_secs = server.read_timeout_secs.max(server.write_timeout_secs);

        let cors = CorsLayer::new()
            .allow_origin(AnyOrigin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::PATCH,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::ORIGIN,
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::AUTHORIZATION,
            ]);

        let app_state = AppState {
            config: self.config.clone(),
            pool: self.pool.clone(),
        };

        // ServiceBuilder applies top-down: request ids are assigned before
        // anything else sees the request, envelope normalization sits
        // inside compression so rewritten bodies still get encoded, panics
        // are caught around the routed handler.
        routes
            .layer(
                ServiceBuilder::new()
                    .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)))
                    .layer(CatchPanicLayer::custom(handle_panic))
                    .layer(DefaultBodyLimit::max(server.body_limit)),
            )
            .layer(map_response(normalize_error_response))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(cors)
                    .layer(CompressionLayer::new().quality(CompressionLevel::Fastest)),
            )
            .with_state(app_state)
    }
}

/// Rewraps error responses the framework raised itself (405 on a method
/// mismatch, 413 from the body limit, 408 from the timeout) so every error
/// leaves as the envelope. Handler errors already carry it and pass through
/// untouched; the original status code is preserved either way.
async fn normalize_error_response(response: Response) -> Response {
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let already_enveloped = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    if already_enveloped {
        return response;
    }

    let reason = status.canonical_reason().unwrap_or("request failed");
    let body = match status {
        StatusCode::BAD_REQUEST => ApiResponse::bad_request(reason),
        StatusCode::UNAUTHORIZED => ApiResponse::unauthorized(reason),
        StatusCode::FORBIDDEN => ApiResponse::forbidden(reason),
        StatusCode::NOT_FOUND => ApiResponse::not_found("route"),
        _ => ApiResponse::internal_server_error(reason),
    };

    (status, Json(body)).into_response()
}

/// Fallback for unmatched paths; goes through the centralized error
/// translation like every other handler error.
async fn route_not_found() -> AppError {
    AppError::not_found("route")
}

/// Request-level panics become a 500 envelope instead of tearing down the
/// worker.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "request handler panicked".to_string()
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::internal_server_error(&detail)),
    )
        .into_response()
}

#[async_trait]
impl ApiServerTrait for ApiServer {
    async fn start(&self) -> Result<()> {
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.app.port)
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid server address: {}", e)))?;

        if self.config.server.prefork {
            // Fiber-style prefork has no equivalent here; the multi-threaded
            // runtime already spreads requests across cores.
            debug!("prefork flag set, ignored");
        }

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(address = %addr, "API server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        info!("API server shutting down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, starting graceful shutdown");
}
