//! Rental Repository Gateway
//!
//! Abstract trait defining the contract for rental persistence operations.

use async_trait::async_trait;

use crate::domain::models::page::PageRequest;
use crate::domain::models::rental::{Rental, RentalData, RentalId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Rental persistence operations
///
/// Returned rentals carry the renter and vehicle display fields when the
/// referenced rows exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Find a rental by its ID
    async fn find_by_id(&self, id: RentalId) -> Result<Option<Rental>, RepositoryError>;

    /// Find one page of rentals, ordered by ID ascending
    async fn find_page(&self, page: PageRequest) -> Result<Vec<Rental>, RepositoryError>;

    /// Insert a new rental; the store assigns the ID
    async fn insert(&self, data: &RentalData) -> Result<Rental, RepositoryError>;

    /// Replace a rental's attributes, returning `None` if the row vanished
    async fn update(&self, rental: &Rental) -> Result<Option<Rental>, RepositoryError>;

    /// Hard delete a rental, returning whether a row was removed
    async fn delete(&self, id: RentalId) -> Result<bool, RepositoryError>;
}
