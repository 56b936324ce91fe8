//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::shared::request_context;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("End date {end} is before start date {start}")]
    InvalidRentalPeriod { start: NaiveDate, end: NaiveDate },

    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),

    #[error("{0} must not exceed {}", crate::domain::models::money::MAX_AMOUNT)]
    AmountTooLarge(&'static str),

    #[error("{0} must have at most two decimal places")]
    TooManyDecimalPlaces(&'static str),

    #[error("Invalid page request: {0}")]
    InvalidPage(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidArgument(_) | Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidArgument(_) | Self::Domain(DomainError::InvalidPage(_)) => "INVALID_ARGUMENT",
            Self::Domain(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Split a `"field: message"` string produced by the validator conversion
    fn from_message(raw: &str) -> Self {
        match raw.split_once(": ") {
            Some((field, message)) => Self {
                field: field.to_string(),
                message: message.to_string(),
            },
            None => Self {
                field: String::new(),
                message: raw.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(UseCaseError::Repository(err)) => {
                tracing::error!(error = %err, "Repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
            ApiError::UseCase(uc_error) => {
                let details = if let UseCaseError::Validation(errors) = uc_error {
                    Some(errors.iter().map(|e| FieldError::from_message(e)).collect())
                } else {
                    None
                };
                (uc_error.status_code(), uc_error.error_code().to_string(), uc_error.to_string(), details)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None),
            ApiError::NotAcceptable(msg) => {
                (StatusCode::NOT_ACCEPTABLE, "NOT_ACCEPTABLE".to_string(), msg.clone(), None)
            }
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND".to_string(), self.to_string(), None),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            request_id: request_context::current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
