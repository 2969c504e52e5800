use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::validation::ValidationError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// Rejected input, attributed to a field
    Validation { field: String, message: String },
    /// The generative provider is disabled in configuration
    ProviderDisabled(String),
    /// Upstream API error
    UpstreamError { status: StatusCode, message: String },
    /// The model's response did not match the expected schema
    SchemaError(String),
    /// Internal server error
    InternalError(String),
    /// HTTP request error (preserves reqwest::Error)
    HttpRequest(reqwest::Error),
}

impl AppError {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config_error",
            Self::Validation { .. } => "validation_error",
            Self::ProviderDisabled(_) => "provider_disabled",
            Self::UpstreamError { .. } => "upstream_error",
            Self::SchemaError(_) => "schema_error",
            Self::InternalError(_) => "internal_error",
            Self::HttpRequest(_) => "http_request_error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::Validation { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            Self::ProviderDisabled(msg) => write!(f, "Provider disabled: {}", msg),
            Self::UpstreamError { status, message } => {
                write!(f, "Upstream error ({}): {}", status, message)
            }
            Self::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
            Self::HttpRequest(err) => write!(f, "HTTP request error: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            Self::ProviderDisabled(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            Self::UpstreamError { status, message } => (*status, message.clone()),
            Self::SchemaError(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::HttpRequest(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
        };

        let field = match &self {
            Self::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": self.type_name(),
                "field": field,
            }
        }));

        (status, body).into_response()
    }
}

// Implement conversions from common error types
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field.to_string(),
            message: err.message.to_string(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpRequest(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::SchemaError(format!("JSON error: {}", err))
    }
}
