//! Vehicle DTOs
//!
//! Data transfer objects for vehicle API endpoints.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::money;
use crate::domain::models::vehicle::{Vehicle, VehicleData};
use crate::shared::errors::ApiError;

use super::required;

lazy_static! {
    /// Brazilian plates: old format (ABC-1234 / ABC1234) or Mercosul (ABC1D23)
    static ref PLATE_REGEX: Regex = Regex::new(r"^[A-Z]{3}(-?[0-9]{4}|[0-9][A-Z][0-9]{2})$").expect("valid regex");
}

/// Validates a Brazilian license plate
fn validate_plate(plate: &str) -> Result<(), validator::ValidationError> {
    if PLATE_REGEX.is_match(&plate.to_ascii_uppercase()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("placa");
        error.message = Some("placa must be a valid plate (ABC-1234 or ABC1D23)".into());
        Err(error)
    }
}

/// Validates fields `validator` cannot express on `Option<Decimal>`
///
/// The daily rate must fit `NUMERIC(10, 2)`: non-negative, whole cents and
/// at most [`money::MAX_AMOUNT`].
fn validate_amounts(dto: &CreateVehicleDto) -> Result<(), validator::ValidationError> {
    if let Some(Err(err)) = dto.valor_diaria.map(|rate| money::to_cents("valorDiaria", rate)) {
        let mut error = validator::ValidationError::new("valor_diaria");
        error.message = Some(err.to_string().into());
        return Err(error);
    }
    Ok(())
}

/// DTO for creating a new vehicle
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_amounts"))]
pub struct CreateVehicleDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "marca must be between 1 and 50 characters"))]
    pub marca: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "modelo must be between 1 and 50 characters"))]
    pub modelo: String,

    #[serde(default)]
    #[validate(custom(function = "validate_plate"))]
    pub placa: String,

    #[validate(required(message = "ano is required"))]
    #[validate(range(min = 1900, max = 2100, message = "ano must be between 1900 and 2100"))]
    pub ano: Option<i32>,

    #[serde(default)]
    #[validate(length(min = 1, max = 30, message = "cor must be between 1 and 30 characters"))]
    pub cor: String,

    #[validate(required(message = "valorDiaria is required"))]
    pub valor_diaria: Option<Decimal>,
}

impl TryFrom<CreateVehicleDto> for VehicleData {
    type Error = ApiError;

    fn try_from(dto: CreateVehicleDto) -> Result<Self, Self::Error> {
        Ok(Self {
            brand: dto.marca,
            model: dto.modelo,
            plate: dto.placa.to_ascii_uppercase(),
            year: required(dto.ano, "ano")?,
            color: dto.cor,
            daily_rate: required(dto.valor_diaria, "valorDiaria")?,
        })
    }
}

/// DTO for full vehicle replacement (PUT)
///
/// Not validated before dispatch; any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleDto {
    pub marca: String,
    pub modelo: String,
    pub placa: String,
    pub ano: i32,
    pub cor: String,
    pub valor_diaria: Decimal,
}

impl From<UpdateVehicleDto> for VehicleData {
    fn from(dto: UpdateVehicleDto) -> Self {
        Self {
            brand: dto.marca,
            model: dto.modelo,
            plate: dto.placa,
            year: dto.ano,
            color: dto.cor,
            daily_rate: dto.valor_diaria,
        }
    }
}

/// Vehicle response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponseDto {
    pub id: i64,
    pub marca: String,
    pub modelo: String,
    pub placa: String,
    pub ano: i32,
    pub cor: String,
    pub valor_diaria: Decimal,
}

impl From<Vehicle> for VehicleResponseDto {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id().value(),
            marca: vehicle.brand().to_string(),
            modelo: vehicle.model().to_string(),
            placa: vehicle.plate().to_string(),
            ano: vehicle.year(),
            cor: vehicle.color().to_string(),
            valor_diaria: vehicle.daily_rate(),
        }
    }
}
