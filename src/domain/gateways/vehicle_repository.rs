//! Vehicle Repository Gateway
//!
//! Abstract trait defining the contract for vehicle persistence operations.

use async_trait::async_trait;

use crate::domain::models::page::PageRequest;
use crate::domain::models::vehicle::{Vehicle, VehicleData, VehicleId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Vehicle persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Find a vehicle by its ID
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError>;

    /// Find one page of vehicles, ordered by ID ascending
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Vehicle>, RepositoryError>;

    /// Insert a new vehicle; the store assigns the ID
    async fn insert(&self, data: &VehicleData) -> Result<Vehicle, RepositoryError>;

    /// Replace a vehicle's attributes, returning `None` if the row vanished
    async fn update(&self, vehicle: &Vehicle) -> Result<Option<Vehicle>, RepositoryError>;

    /// Hard delete a vehicle, returning whether a row was removed
    async fn delete(&self, id: VehicleId) -> Result<bool, RepositoryError>;
}
