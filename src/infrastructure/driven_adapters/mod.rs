//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod rental_repository;
pub mod vehicle_repository;

pub use config::AppConfig;
pub use rental_repository::PostgresRentalRepository;
pub use vehicle_repository::PostgresVehicleRepository;
