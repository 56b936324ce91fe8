//! HTTP Handlers
//!
//! Route handlers for the REST API, one module per resource.

pub mod health;
pub mod rentals;
pub mod vehicles;

use axum::http::StatusCode;
use axum::Json;

use crate::infrastructure::driven_adapters::config::ApiConfig;
use crate::shared::errors::ApiError;

/// Render a single-resource read.
///
/// A missing resource is `200 null` unless the deployment opted into 404s.
fn found_or_null<T>(
    config: &ApiConfig,
    found: Option<T>,
    resource: &'static str,
    id: i64,
) -> Result<Json<Option<T>>, ApiError> {
    match found {
        None if config.not_found_on_missing_read => Err(ApiError::NotFound { resource, id }),
        found => Ok(Json(found)),
    }
}

/// Status returned by a successful DELETE
fn delete_status(config: &ApiConfig) -> StatusCode {
    if config.delete_returns_no_content {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::OK
    }
}
