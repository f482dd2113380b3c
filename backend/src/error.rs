//! Application error handling
//!
//! Converts handler errors into HTML error fragments with the matching
//! status code, so the page can swap them in where a result would go.

use crate::templates;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use macro_calc_shared::{ErrorDetail, ValidationError};
use thiserror::Error;
use tracing::warn;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: err.to_string(),
                    field: Some(err.field().to_string()),
                },
            ),
            ApiError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorDetail {
                        code: "BAD_REQUEST".to_string(),
                        message: msg.clone(),
                        field: None,
                    },
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Html(templates::error_fragment(&detail))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
