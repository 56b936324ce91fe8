//! Rental Service
//!
//! Business rules for bookings: period checks, price derivation and
//! existence checks before mutation.

use std::sync::Arc;

use crate::domain::gateways::{RentalRepository, VehicleRepository};
use crate::domain::models::page::PageRequest;
use crate::domain::models::rental::{
    CreateRentalData, Rental, RentalData, RentalId, RentalPeriod, ReplaceRentalData,
};
use crate::shared::errors::UseCaseError;

const RESOURCE: &str = "Rental";

/// Service for rental CRUD operations
pub struct RentalService {
    rental_repository: Arc<dyn RentalRepository>,
    vehicle_repository: Arc<dyn VehicleRepository>,
    max_page_size: i64,
}

impl RentalService {
    /// Create a new RentalService
    #[must_use]
    pub fn new(
        rental_repository: Arc<dyn RentalRepository>,
        vehicle_repository: Arc<dyn VehicleRepository>,
        max_page_size: i64,
    ) -> Self {
        Self {
            rental_repository,
            vehicle_repository,
            max_page_size,
        }
    }

    /// List one page of rentals
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::InvalidArgument` if `page` or `size` is negative.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn list(&self, page: i64, size: i64) -> Result<Vec<Rental>, UseCaseError> {
        tracing::debug!(page, size, "Listing rentals");

        let request = PageRequest::new(page, size, self.max_page_size)
            .map_err(|e| UseCaseError::InvalidArgument(e.to_string()))?;
        let rentals = self.rental_repository.find_page(request).await?;

        tracing::debug!(count = rentals.len(), "Found rentals");
        Ok(rentals)
    }

    /// Get a rental by ID; absence is not an error
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn get_by_id(&self, id: RentalId) -> Result<Option<Rental>, UseCaseError> {
        tracing::debug!(rental_id = %id, "Getting rental by ID");
        Ok(self.rental_repository.find_by_id(id).await?)
    }

    /// Create a new rental, pricing it from the vehicle's daily rate
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Domain` if the end date is before the start date.
    /// Returns `UseCaseError::Validation` if the vehicle doesn't exist or the
    /// total price does not fit the stored amount range.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn create(&self, data: CreateRentalData) -> Result<Rental, UseCaseError> {
        tracing::info!(
            renter_id = data.renter_id,
            vehicle_id = %data.vehicle_id,
            start = %data.start_date,
            end = %data.end_date,
            "Creating new rental"
        );

        let period = RentalPeriod::new(data.start_date, data.end_date)?;

        let vehicle = self
            .vehicle_repository
            .find_by_id(data.vehicle_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(vehicle_id = %data.vehicle_id, "Rental references unknown vehicle");
                UseCaseError::Validation(vec![format!("veiculoId: vehicle {} does not exist", data.vehicle_id)])
            })?;

        let total_price = period.price_at(vehicle.daily_rate()).map_err(|err| {
            tracing::warn!(vehicle_id = %data.vehicle_id, days = period.days(), "Rental total out of range");
            UseCaseError::Validation(vec![format!("valorTotal: {err}")])
        })?;
        let rental_data = RentalData::new(data.renter_id, vehicle.id(), period, total_price)?;
        let created = self.rental_repository.insert(&rental_data).await?;

        tracing::info!(
            rental_id = %created.id(),
            days = period.days(),
            total_price = %created.total_price(),
            "Rental created successfully"
        );
        Ok(created)
    }

    /// Replace the stored attributes of a rental; the ID never changes
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the rental doesn't exist.
    /// Returns `UseCaseError::Domain` if the period or total price is invalid.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn update(&self, data: ReplaceRentalData, id: RentalId) -> Result<(), UseCaseError> {
        tracing::info!(rental_id = %id, "Updating rental");

        let existing = self.rental_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(rental_id = %id, "Rental not found for update");
            UseCaseError::not_found(RESOURCE, id.value())
        })?;
        let data = data.validated()?;

        self.rental_repository
            .update(&existing.replace(data))
            .await?
            .ok_or_else(|| UseCaseError::not_found(RESOURCE, id.value()))?;

        tracing::info!(rental_id = %id, "Rental updated successfully");
        Ok(())
    }

    /// Permanently delete a rental
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the rental doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn delete(&self, id: RentalId) -> Result<(), UseCaseError> {
        tracing::info!(rental_id = %id, "Deleting rental");

        if !self.rental_repository.delete(id).await? {
            tracing::warn!(rental_id = %id, "Rental not found for deletion");
            return Err(UseCaseError::not_found(RESOURCE, id.value()));
        }

        tracing::info!(rental_id = %id, "Rental deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::rental_repository::MockRentalRepository;
    use crate::domain::gateways::vehicle_repository::MockVehicleRepository;
    use crate::domain::models::rental::RentalDetails;
    use crate::domain::models::vehicle::{Vehicle, VehicleData, VehicleId};
    use crate::shared::errors::DomainError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_vehicle(id: i64) -> Vehicle {
        create_test_vehicle_with_rate(id, dec!(100.00))
    }

    fn create_test_vehicle_with_rate(id: i64, daily_rate: Decimal) -> Vehicle {
        Vehicle::restore(
            VehicleId::new(id),
            VehicleData {
                brand: "Volkswagen".to_string(),
                model: "Gol".to_string(),
                plate: "XYZ-9876".to_string(),
                year: 2020,
                color: "Branco".to_string(),
                daily_rate,
            },
        )
    }

    fn create_test_request() -> CreateRentalData {
        CreateRentalData {
            renter_id: 1,
            vehicle_id: VehicleId::new(2),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 10),
        }
    }

    fn create_test_rental(id: i64) -> Rental {
        let period = RentalPeriod::new(date(2024, 1, 1), date(2024, 1, 10)).unwrap();
        Rental::restore(
            RentalId::new(id),
            RentalData::new(1, VehicleId::new(2), period, dec!(900.00)).unwrap(),
            RentalDetails::default(),
        )
    }

    fn create_test_replacement() -> ReplaceRentalData {
        ReplaceRentalData {
            renter_id: 1,
            vehicle_id: VehicleId::new(2),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 2),
            total_price: dec!(50.00),
        }
    }

    fn service(rentals: MockRentalRepository, vehicles: MockVehicleRepository) -> RentalService {
        RentalService::new(Arc::new(rentals), Arc::new(vehicles), 100)
    }

    #[tokio::test]
    async fn should_price_rental_from_daily_rate_and_days() {
        let mut vehicles = MockVehicleRepository::new();
        vehicles
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_vehicle(id.value()))));

        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_insert()
            .withf(|data| data.total_price == dec!(900.00) && data.period.days() == 9)
            .returning(|data| Ok(Rental::restore(RentalId::new(10), data.clone(), RentalDetails::default())));

        let created = service(rentals, vehicles).create(create_test_request()).await.unwrap();

        assert_eq!(created.id().value(), 10);
        assert_eq!(created.total_price(), dec!(900.00));
        assert_eq!(created.renter_id(), 1);
        assert_eq!(created.vehicle_id().value(), 2);
    }

    #[tokio::test]
    async fn should_reject_end_before_start() {
        let mut vehicles = MockVehicleRepository::new();
        vehicles.expect_find_by_id().never();
        let mut rentals = MockRentalRepository::new();
        rentals.expect_insert().never();

        let request = CreateRentalData {
            start_date: date(2024, 1, 10),
            end_date: date(2024, 1, 1),
            ..create_test_request()
        };
        let result = service(rentals, vehicles).create(request).await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Domain(DomainError::InvalidRentalPeriod { .. })
        ));
    }

    #[tokio::test]
    async fn should_reject_unknown_vehicle() {
        let mut vehicles = MockVehicleRepository::new();
        vehicles.expect_find_by_id().returning(|_| Ok(None));
        let mut rentals = MockRentalRepository::new();
        rentals.expect_insert().never();

        let result = service(rentals, vehicles).create(create_test_request()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_reject_total_that_overflows() {
        let mut vehicles = MockVehicleRepository::new();
        vehicles
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_vehicle_with_rate(id.value(), Decimal::MAX))));
        let mut rentals = MockRentalRepository::new();
        rentals.expect_insert().never();

        let result = service(rentals, vehicles).create(create_test_request()).await;

        match result.unwrap_err() {
            UseCaseError::Validation(errors) => assert!(errors[0].starts_with("valorTotal: ")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_reject_total_above_stored_range() {
        let mut vehicles = MockVehicleRepository::new();
        vehicles
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_vehicle_with_rate(id.value(), dec!(99999999.99)))));
        let mut rentals = MockRentalRepository::new();
        rentals.expect_insert().never();

        let request = CreateRentalData {
            start_date: date(1, 1, 1),
            end_date: date(9999, 12, 31),
            ..create_test_request()
        };
        let result = service(rentals, vehicles).create(request).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_reject_negative_page_size() {
        let result = service(MockRentalRepository::new(), MockVehicleRepository::new())
            .list(0, -3)
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn should_return_none_when_rental_is_missing() {
        let mut rentals = MockRentalRepository::new();
        rentals.expect_find_by_id().returning(|_| Ok(None));

        let result = service(rentals, MockVehicleRepository::new())
            .get_by_id(RentalId::new(42))
            .await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_update_rental_keeping_id() {
        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_rental(id.value()))));
        rentals
            .expect_update()
            .withf(|rental| rental.id().value() == 3 && rental.total_price() == dec!(1.00))
            .returning(|rental| Ok(Some(rental.clone())));

        let data = ReplaceRentalData {
            total_price: dec!(1.00),
            ..create_test_replacement()
        };
        let result = service(rentals, MockVehicleRepository::new())
            .update(data, RentalId::new(3))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_rental() {
        let mut rentals = MockRentalRepository::new();
        rentals.expect_find_by_id().returning(|_| Ok(None));
        rentals.expect_update().never();

        let result = service(rentals, MockVehicleRepository::new())
            .update(create_test_replacement(), RentalId::new(3))
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_report_missing_rental_before_invalid_period() {
        let mut rentals = MockRentalRepository::new();
        rentals.expect_find_by_id().returning(|_| Ok(None));
        rentals.expect_update().never();

        let data = ReplaceRentalData {
            start_date: date(2024, 2, 10),
            end_date: date(2024, 2, 1),
            ..create_test_replacement()
        };
        let result = service(rentals, MockVehicleRepository::new())
            .update(data, RentalId::new(999))
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { id: 999, .. }));
    }

    #[tokio::test]
    async fn should_reject_invalid_period_when_updating_existing_rental() {
        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_find_by_id()
            .returning(|id| Ok(Some(create_test_rental(id.value()))));
        rentals.expect_update().never();

        let data = ReplaceRentalData {
            start_date: date(2024, 2, 10),
            end_date: date(2024, 2, 1),
            ..create_test_replacement()
        };
        let result = service(rentals, MockVehicleRepository::new())
            .update(data, RentalId::new(3))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Domain(DomainError::InvalidRentalPeriod { .. })
        ));
    }

    #[tokio::test]
    async fn should_delete_existing_rental() {
        let mut rentals = MockRentalRepository::new();
        rentals.expect_delete().returning(|_| Ok(true));

        let result = service(rentals, MockVehicleRepository::new())
            .delete(RentalId::new(3))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_rental() {
        let mut rentals = MockRentalRepository::new();
        rentals.expect_delete().returning(|_| Ok(false));

        let result = service(rentals, MockVehicleRepository::new())
            .delete(RentalId::new(3))
            .await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
