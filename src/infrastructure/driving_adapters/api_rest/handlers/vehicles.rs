//! Vehicle Handlers
//!
//! HTTP handlers for the vehicle fleet CRUD endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::vehicle::{VehicleData, VehicleId};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateVehicleDto, PageParams, UpdateVehicleDto, VehicleResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::{ApiJson, ApiPath, ApiQuery};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

use super::{delete_status, found_or_null};

/// Create the router for vehicle endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", get(get_vehicle).put(update_vehicle).delete(delete_vehicle))
}

/// GET /veiculos?page=&size= - One page of vehicles
///
/// # Responses
///
/// * 200 OK - Vehicles ordered by id
/// * 400 Bad Request - Missing, non-numeric or negative paging parameters
#[axum::debug_handler]
async fn list_vehicles(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<Vec<VehicleResponseDto>>, ApiError> {
    let vehicles = state.vehicle_service.list(params.page, params.size).await?;
    Ok(Json(vehicles.into_iter().map(VehicleResponseDto::from).collect()))
}

/// GET /veiculos/:id - A single vehicle
///
/// # Responses
///
/// * 200 OK - The vehicle, or `null` when it does not exist
/// * 404 Not Found - Only when `api.not_found_on_missing_read` is set
#[axum::debug_handler]
async fn get_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Option<VehicleResponseDto>>, ApiError> {
    let vehicle = state.vehicle_service.get_by_id(VehicleId::new(id)).await?;
    found_or_null(&state.config.api, vehicle.map(VehicleResponseDto::from), "Vehicle", id)
}

/// POST /veiculos - Register a vehicle
///
/// # Responses
///
/// * 201 Created - Empty body; `Location` points at the new vehicle
/// * 400 Bad Request - Validation error
#[axum::debug_handler]
async fn create_vehicle(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CreateVehicleDto>,
) -> Result<impl IntoResponse, ApiError> {
    dto.validate()?;

    let vehicle = state.vehicle_service.create(VehicleData::try_from(dto)?).await?;

    let location = format!("/veiculos/{}", vehicle.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// PUT /veiculos/:id - Replace a vehicle
///
/// # Responses
///
/// * 204 No Content - Vehicle replaced
/// * 400 Bad Request - Malformed body or negative daily rate
/// * 404 Not Found - Vehicle does not exist
#[axum::debug_handler]
async fn update_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<UpdateVehicleDto>,
) -> Result<StatusCode, ApiError> {
    state.vehicle_service.update(dto.into(), VehicleId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /veiculos/:id - Remove a vehicle
///
/// # Responses
///
/// * 200 OK (204 when `api.delete_returns_no_content` is set)
/// * 404 Not Found - Vehicle does not exist
#[axum::debug_handler]
async fn delete_vehicle(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.vehicle_service.delete(VehicleId::new(id)).await?;
    Ok(delete_status(&state.config.api))
}
