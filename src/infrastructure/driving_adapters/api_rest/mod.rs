//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod versioning;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::services::{RentalService, VehicleService};
use crate::infrastructure::driven_adapters::config::AppConfig;

use self::handlers::{health, rentals, vehicles};
use self::versioning::ApiVersion;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub vehicle_service: Arc<VehicleService>,
    pub rental_service: Arc<RentalService>,
}

/// Build the full HTTP surface
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/veiculos", vehicles::router())
        .nest(ApiVersion::V1.rentals_path(), rentals::router(ApiVersion::V1))
        .nest(ApiVersion::V2.rentals_path(), rentals::router(ApiVersion::V2))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
