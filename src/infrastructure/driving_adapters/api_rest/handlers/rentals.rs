//! Rental Handlers
//!
//! HTTP handlers for rental CRUD endpoints. The same router is mounted once
//! per [`ApiVersion`]; creation additionally honours vendor media types.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use validator::Validate;

use crate::domain::models::rental::{CreateRentalData, RentalId, ReplaceRentalData};
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateRentalDto, PageParams, RentalResponseDto, UpdateRentalDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::{ApiJson, ApiPath, ApiQuery};
use crate::infrastructure::driving_adapters::api_rest::versioning::{ApiVersion, MountedVersion, NegotiatedVersion};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

use super::{delete_status, found_or_null};

/// Create the router for rental endpoints mounted under `version`
pub fn router(version: ApiVersion) -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        .route("/:id", get(get_rental).put(update_rental).delete(delete_rental))
        .layer(Extension(MountedVersion(version)))
}

/// GET /alugueis?page=&size= - One page of rentals
#[axum::debug_handler]
async fn list_rentals(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<Vec<RentalResponseDto>>, ApiError> {
    let rentals = state.rental_service.list(params.page, params.size).await?;
    Ok(Json(rentals.into_iter().map(RentalResponseDto::from).collect()))
}

/// GET /alugueis/:id - A single rental, or `null`
#[axum::debug_handler]
async fn get_rental(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Option<RentalResponseDto>>, ApiError> {
    let rental = state.rental_service.get_by_id(RentalId::new(id)).await?;
    found_or_null(&state.config.api, rental.map(RentalResponseDto::from), "Rental", id)
}

/// POST /alugueis - Book a rental
///
/// The total price is computed from the vehicle's daily rate; any client
/// supplied `valorTotal` is ignored.
///
/// # Responses
///
/// * 201 Created - Empty body; `Location` follows the negotiated version
/// * 400 Bad Request - Validation error or unknown vehicle
/// * 406 Not Acceptable - Unsupported vendor media type
#[axum::debug_handler]
async fn create_rental(
    State(state): State<AppState>,
    NegotiatedVersion(version): NegotiatedVersion,
    ApiJson(dto): ApiJson<CreateRentalDto>,
) -> Result<impl IntoResponse, ApiError> {
    dto.validate()?;

    let rental = state.rental_service.create(CreateRentalData::try_from(dto)?).await?;
    tracing::debug!(rental_id = %rental.id(), %version, "Rental created");

    Ok((
        StatusCode::CREATED,
        [
            (header::LOCATION, version.rental_location(rental.id())),
            (header::VARY, header::ACCEPT.to_string()),
        ],
    ))
}

/// PUT /alugueis/:id - Replace a rental
///
/// # Responses
///
/// * 204 No Content - Rental replaced
/// * 400 Bad Request - Malformed body, end before start or total out of range
/// * 404 Not Found - Rental does not exist
#[axum::debug_handler]
async fn update_rental(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<UpdateRentalDto>,
) -> Result<StatusCode, ApiError> {
    state
        .rental_service
        .update(ReplaceRentalData::from(dto), RentalId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /alugueis/:id - Cancel a rental
#[axum::debug_handler]
async fn delete_rental(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    state.rental_service.delete(RentalId::new(id)).await?;
    Ok(delete_status(&state.config.api))
}
