//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod rental_repository;
pub mod vehicle_repository;

pub use rental_repository::RentalRepository;
pub use vehicle_repository::VehicleRepository;
