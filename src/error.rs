//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::booking::QuoteError;
use crate::catalog::{CatalogError, UnknownVariant};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Listing not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Quote rejected: {0}")]
    Quote(#[from] QuoteError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<UnknownVariant> for AppError {
    fn from(err: UnknownVariant) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error_type: "not_found".to_string(),
                    message: "Listing not found".to_string(),
                    details: None,
                },
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error_type: "bad_request".to_string(),
                    message: msg.clone(),
                    details: None,
                },
            ),
            AppError::Quote(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error_type: e.code().to_string(),
                    message: e.message_pt(),
                    details: quote_error_details(e),
                },
            ),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "catalog".to_string(),
                        message: "Catalog error".to_string(),
                        details: None,
                    },
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "internal".to_string(),
                        message: "Internal error".to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

fn quote_error_details(err: &QuoteError) -> Option<serde_json::Value> {
    match err {
        QuoteError::InvalidDate { field, kind } => Some(serde_json::json!({
            "field": field,
            "kind": kind,
        })),
        QuoteError::Range(reason) => serde_json::to_value(reason).ok(),
        QuoteError::AmountOutOfRange => None,
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
