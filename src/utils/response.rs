use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic envelope used for every JSON response, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<Value> {
    pub fn error(message: impl Into<String>, cause: &str) -> Self {
        Self::failure(
            "Request failed",
            ApiError {
                code: None,
                message: message.into(),
                details: Some(Value::String(cause.to_string())),
            },
        )
    }

    pub fn error_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<Value>,
    ) -> Self {
        Self::failure(
            "Request failed",
            ApiError {
                code: Some(code.into()),
                message: message.into(),
                details,
            },
        )
    }

    pub fn validation_error(details: Value) -> Self {
        Self::failure(
            "Validation failed",
            ApiError {
                code: Some("VALIDATION_ERROR".to_string()),
                message: "Invalid input data".to_string(),
                details: Some(details),
            },
        )
    }

    pub fn not_found(resource: &str) -> Self {
        Self::failure(
            "Resource not found",
            ApiError {
                code: Some("NOT_FOUND".to_string()),
                message: format!("{} not found", resource),
                details: None,
            },
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::failure(
            "Bad Request",
            ApiError {
                code: Some("BAD_REQUEST".to_string()),
                message: message.into(),
                details: None,
            },
        )
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::failure(
            "Unauthorized",
            ApiError {
                code: Some("UNAUTHORIZED".to_string()),
                message: message.into(),
                details: None,
            },
        )
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::failure(
            "Forbidden",
            ApiError {
                code: Some("FORBIDDEN_ACCESS".to_string()),
                message: message.into(),
                details: None,
            },
        )
    }

    /// The underlying cause goes into `details` only, so implementation
    /// detail never becomes the primary message.
    pub fn internal_server_error(cause: &str) -> Self {
        Self::failure(
            "Internal server error",
            ApiError {
                code: Some("INTERNAL_ERROR".to_string()),
                message: "An unexpected error occurred".to_string(),
                details: Some(Value::String(cause.to_string())),
            },
        )
    }

    fn failure(message: &str, error: ApiError) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }
}
