//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod money;
pub mod page;
pub mod rental;
pub mod vehicle;

pub use page::PageRequest;
pub use rental::{CreateRentalData, ReplaceRentalData, Rental, RentalData, RentalDetails, RentalId, RentalPeriod};
pub use vehicle::{Vehicle, VehicleData, VehicleId};
