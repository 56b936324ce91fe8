//! Resource Services
//!
//! One service per resource. Each service owns the business rules for its
//! resource and depends on gateway traits, not concrete repositories.

mod rental_service;
mod vehicle_service;

pub use rental_service::RentalService;
pub use vehicle_service::VehicleService;
