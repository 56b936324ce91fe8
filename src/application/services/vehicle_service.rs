//! Vehicle Service
//!
//! Business rules for managing the vehicle fleet.

use std::sync::Arc;

use crate::domain::gateways::VehicleRepository;
use crate::domain::models::page::PageRequest;
use crate::domain::models::vehicle::{Vehicle, VehicleData, VehicleId};
use crate::shared::errors::UseCaseError;

const RESOURCE: &str = "Vehicle";

/// Service for vehicle CRUD operations
pub struct VehicleService {
    vehicle_repository: Arc<dyn VehicleRepository>,
    max_page_size: i64,
}

impl VehicleService {
    /// Create a new VehicleService
    #[must_use]
    pub fn new(vehicle_repository: Arc<dyn VehicleRepository>, max_page_size: i64) -> Self {
        Self {
            vehicle_repository,
            max_page_size,
        }
    }

    /// List one page of vehicles
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::InvalidArgument` if `page` or `size` is negative.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn list(&self, page: i64, size: i64) -> Result<Vec<Vehicle>, UseCaseError> {
        tracing::debug!(page, size, "Listing vehicles");

        let request = PageRequest::new(page, size, self.max_page_size)
            .map_err(|e| UseCaseError::InvalidArgument(e.to_string()))?;
        let vehicles = self.vehicle_repository.find_page(request).await?;

        tracing::debug!(count = vehicles.len(), "Found vehicles");
        Ok(vehicles)
    }

    /// Get a vehicle by ID; absence is not an error
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn get_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, UseCaseError> {
        tracing::debug!(vehicle_id = %id, "Getting vehicle by ID");

        let vehicle = self.vehicle_repository.find_by_id(id).await?;

        if vehicle.is_none() {
            tracing::debug!(vehicle_id = %id, "Vehicle not found");
        }
        Ok(vehicle)
    }

    /// Create a new vehicle
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the data violates vehicle invariants.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn create(&self, data: VehicleData) -> Result<Vehicle, UseCaseError> {
        tracing::info!(plate = %data.plate, model = %data.model, "Creating new vehicle");

        let data = data.validated()?;
        let created = self.vehicle_repository.insert(&data).await?;

        tracing::info!(vehicle_id = %created.id(), "Vehicle created successfully");
        Ok(created)
    }

    /// Replace every mutable attribute of a vehicle
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the vehicle doesn't exist.
    /// Returns `UseCaseError::Domain` if the data violates vehicle invariants.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn update(&self, data: VehicleData, id: VehicleId) -> Result<(), UseCaseError> {
        tracing::info!(vehicle_id = %id, "Updating vehicle");

        let existing = self.vehicle_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(vehicle_id = %id, "Vehicle not found for update");
            UseCaseError::not_found(RESOURCE, id.value())
        })?;
        let data = data.validated()?;

        self.vehicle_repository
            .update(&existing.replace(data))
            .await?
            .ok_or_else(|| UseCaseError::not_found(RESOURCE, id.value()))?;

        tracing::info!(vehicle_id = %id, "Vehicle updated successfully");
        Ok(())
    }

    /// Permanently delete a vehicle
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the vehicle doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn delete(&self, id: VehicleId) -> Result<(), UseCaseError> {
        tracing::info!(vehicle_id = %id, "Deleting vehicle");

        if !self.vehicle_repository.delete(id).await? {
            tracing::warn!(vehicle_id = %id, "Vehicle not found for deletion");
            return Err(UseCaseError::not_found(RESOURCE, id.value()));
        }

        tracing::info!(vehicle_id = %id, "Vehicle deleted successfully");
        Ok(())
    }
}
