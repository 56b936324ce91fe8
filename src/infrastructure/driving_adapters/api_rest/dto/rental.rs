//! Rental DTOs
//!
//! Data transfer objects for rental API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::rental::{CreateRentalData, Rental, ReplaceRentalData};
use crate::domain::models::vehicle::VehicleId;
use crate::shared::errors::ApiError;

use super::required;

/// Validates that the rental does not end before it starts
fn validate_period(dto: &CreateRentalDto) -> Result<(), validator::ValidationError> {
    if let (Some(start), Some(end)) = (dto.data_inicio, dto.data_fim) {
        if end < start {
            let mut error = validator::ValidationError::new("data_fim");
            error.message = Some("dataFim must not be before dataInicio".into());
            return Err(error);
        }
    }
    Ok(())
}

/// DTO for creating a new rental; the price is computed server-side
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period"))]
pub struct CreateRentalDto {
    #[validate(required(message = "pessoaId is required"))]
    #[validate(range(min = 1, message = "pessoaId must be at least 1"))]
    pub pessoa_id: Option<i64>,

    #[validate(required(message = "veiculoId is required"))]
    #[validate(range(min = 1, message = "veiculoId must be at least 1"))]
    pub veiculo_id: Option<i64>,

    #[validate(required(message = "dataInicio is required"))]
    pub data_inicio: Option<NaiveDate>,

    #[validate(required(message = "dataFim is required"))]
    pub data_fim: Option<NaiveDate>,
}

impl TryFrom<CreateRentalDto> for CreateRentalData {
    type Error = ApiError;

    fn try_from(dto: CreateRentalDto) -> Result<Self, Self::Error> {
        Ok(Self {
            renter_id: required(dto.pessoa_id, "pessoaId")?,
            vehicle_id: VehicleId::new(required(dto.veiculo_id, "veiculoId")?),
            start_date: required(dto.data_inicio, "dataInicio")?,
            end_date: required(dto.data_fim, "dataFim")?,
        })
    }
}

/// DTO for full rental replacement (PUT)
///
/// Not validated before dispatch; `id` and the joined display fields are
/// ignored when present. The service checks the domain invariants once the
/// rental is known to exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentalDto {
    pub pessoa_id: i64,
    pub veiculo_id: i64,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub valor_total: Decimal,
}

impl From<UpdateRentalDto> for ReplaceRentalData {
    fn from(dto: UpdateRentalDto) -> Self {
        Self {
            renter_id: dto.pessoa_id,
            vehicle_id: VehicleId::new(dto.veiculo_id),
            start_date: dto.data_inicio,
            end_date: dto.data_fim,
            total_price: dto.valor_total,
        }
    }
}

/// Rental response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponseDto {
    pub id: i64,
    pub pessoa_id: i64,
    pub pessoa_cpf: Option<String>,
    pub pessoa_nome: Option<String>,
    pub veiculo_id: i64,
    pub veiculo_modelo: Option<String>,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub valor_total: Decimal,
}

impl From<Rental> for RentalResponseDto {
    fn from(rental: Rental) -> Self {
        let period = rental.period();
        Self {
            id: rental.id().value(),
            pessoa_id: rental.renter_id(),
            pessoa_cpf: rental.renter_document().map(str::to_string),
            pessoa_nome: rental.renter_name().map(str::to_string),
            veiculo_id: rental.vehicle_id().value(),
            veiculo_modelo: rental.vehicle_model().map(str::to_string),
            data_inicio: period.start(),
            data_fim: period.end(),
            valor_total: rental.total_price(),
        }
    }
}
