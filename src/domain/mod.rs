//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{RentalRepository, VehicleRepository};
pub use models::{
    CreateRentalData, PageRequest, Rental, RentalData, RentalDetails, RentalId, RentalPeriod, Vehicle,
    VehicleData, VehicleId,
};
