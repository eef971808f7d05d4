//! Error types for the Blog API
//!
//! Two tiers of failure exist. Validation failures on mutations surface as
//! HTTP 400 with the rejection message as the error detail. Faults from the
//! Supabase backend (transport errors, non-success statuses, unparseable
//! bodies) surface as HTTP 500; they are never folded into a failure
//! envelope.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for blog-api operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Mutation rejected before it reached the backend
    #[error("{0}")]
    Validation(String),

    /// Supabase request failed or returned a non-success status
    #[error("Persistence gateway error: {0}")]
    Gateway(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}
