//! Typed errors, HTTP mapping and GraphQL error extensions.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Layer with ID {id} not found")]
    LayerNotFound { id: String },
    #[error("duplicate layer id: {0}")]
    DuplicateLayer(String),
    #[error("bad input: {0}")]
    BadInput(String),
    #[error("state lock poisoned")]
    StateLock,
}

impl AppError {
    /// Machine-readable code shared by the GraphQL extensions and the HTTP envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::LayerNotFound { .. } => "NOT_FOUND",
            AppError::BadInput(_) => "BAD_USER_INPUT",
            AppError::Config(_) | AppError::DuplicateLayer(_) | AppError::StateLock => {
                "INTERNAL_SERVER_ERROR"
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::LayerNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadInput(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::DuplicateLayer(_) | AppError::StateLock => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| {
            ext.set("code", self.code());
            if let AppError::LayerNotFound { id } = self {
                ext.set("id", id.as_str());
            }
        })
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
                details: None,
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
