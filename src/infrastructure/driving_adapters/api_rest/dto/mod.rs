//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API. JSON field names follow the
//! published Portuguese contract (`marca`, `dataInicio`, ...).

pub mod rental;
pub mod vehicle;

use serde::Deserialize;

use crate::shared::errors::{ApiError, UseCaseError};

pub use rental::{CreateRentalDto, RentalResponseDto, UpdateRentalDto};
pub use vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleResponseDto};

/// `?page=&size=` query parameters; both are required integers
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    pub page: i64,
    pub size: i64,
}

/// Unwrap a field that validation already required
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| UseCaseError::Validation(vec![format!("{field}: {field} is required")]).into())
}
