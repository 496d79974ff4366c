use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::utils::response::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("validation error")]
    Validation { details: serde_json::Value },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging initialization error: {message}")]
    LoggingInit { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn validation(details: serde_json::Value) -> Self {
        Self::Validation { details }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Centralized error translation: every handler error, whatever its origin,
/// leaves the process as one of the fixed envelope shapes. Infra variants
/// (config, database, io, ...) all take the 500 path with the cause in
/// `error.details`, never in the message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::BadRequest { message } => ApiResponse::bad_request(message.clone()),
            Self::Unauthorized { message } => ApiResponse::unauthorized(message.clone()),
            Self::Forbidden { message } => ApiResponse::forbidden(message.clone()),
            Self::NotFound { resource } => ApiResponse::not_found(resource),
            Self::Validation { details } => ApiResponse::validation_error(details.clone()),
            other => ApiResponse::internal_server_error(&other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

/// Named domain errors, declared ahead of the handlers that will raise
/// them; nothing maps these onto responses yet.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("user not found")]
    UserNotFound,

    #[error("data not found")]
    RecordNotFound,

    #[error("password did not match")]
    PasswordMismatch,

    #[error("route not found")]
    RouteNotFound,

    #[error("invalid query parameters")]
    InvalidQueryParameters,

    #[error("invalid request body")]
    InvalidRequestBody,

    #[error("validation error")]
    Validation,

    #[error("no file attached")]
    NoFileAttached,

    #[error("token is missing or malformed")]
    TokenMissingOrMalformed,

    #[error("token is expired")]
    TokenExpired,

    #[error("token cannot be claim")]
    ClaimToken,

    #[error("invalid subject format")]
    InvalidSubjectFormat,

    #[error("default unit conversion rate must be 1")]
    UnitConversionRate,

    #[error("unit must have exactly one default unit")]
    UnitDefault,

    #[error("is default must have boolean value")]
    UnitDefaultValue,

    #[error("cannot delete. this unit is default")]
    DeleteDefaultUnit,
}

pub type Result<T> = std::result::Result<T, AppError>;
