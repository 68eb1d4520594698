// src/shared/api/response.rs
//
// Failure bodies always carry the shape {"error": {"code", "message",
// "details"?}}. Success bodies are the per-endpoint wrappers built in the
// route handlers; this module only owns the error side.
//
// Taxonomy:
//   VALIDATION_ERROR        400   field-level details attached
//   DUPLICATE_RESOURCE      409   StorageError::Conflict
//   RESOURCE_NOT_FOUND      404   absent row / StorageError::NotFound
//   REQUEST_TIMEOUT         408   StorageError::Timeout
//   DATABASE_ERROR          500   StorageError::Unknown
//   RATE_LIMIT_EXCEEDED     429   reserved for upstream throttling
//   INTERNAL_SERVER_ERROR   500   anything unclassified

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::storage::StorageError;
use crate::shared::validation::FieldError;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: message.to_string(),
                details: None,
            },
        })
    }

    pub fn validation_failed(details: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorBody {
            error: ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: "Invalid request data".to_string(),
                details: Some(details),
            },
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, "RESOURCE_NOT_FOUND", message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, "DUPLICATE_RESOURCE", message)
    }

    pub fn request_timeout() -> HttpResponse {
        Self::error(StatusCode::REQUEST_TIMEOUT, "REQUEST_TIMEOUT", "Request timeout")
    }

    pub fn too_many_requests() -> HttpResponse {
        Self::error(
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMIT_EXCEEDED",
            "Too many requests",
        )
    }

    pub fn database_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_ERROR",
            "Database operation failed",
        )
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "An unexpected error occurred",
        )
    }

    /// One place for the StorageError -> HTTP mapping. Detail was already
    /// logged where the error was classified.
    pub fn from_storage(err: &StorageError) -> HttpResponse {
        match err {
            StorageError::NotFound => Self::not_found("Resource not found"),
            StorageError::Conflict => Self::conflict("Resource already exists"),
            StorageError::Timeout => Self::request_timeout(),
            StorageError::Unknown(_) => Self::database_error(),
        }
    }
}
