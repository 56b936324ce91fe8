//! Rental Domain Model
//!
//! A booking that links a renter and a vehicle over a date range.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::models::money;
use crate::domain::models::vehicle::VehicleId;
use crate::shared::errors::DomainError;

/// Newtype wrapper for Rental ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RentalId(i64);

impl RentalId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RentalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RentalId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Inclusive-start, exclusive-end date range of a rental.
///
/// Construction guarantees `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl RentalPeriod {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRentalPeriod` when `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidRentalPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of billable days (a same-day rental has zero)
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Total price for this period at the given daily rate, rounded to cents
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AmountTooLarge` when the total does not fit the
    /// stored amount range.
    pub fn price_at(&self, daily_rate: Decimal) -> Result<Decimal, DomainError> {
        let total = daily_rate
            .checked_mul(Decimal::from(self.days()))
            .ok_or(DomainError::AmountTooLarge("valorTotal"))?
            .round_dp_with_strategy(money::SCALE, RoundingStrategy::MidpointAwayFromZero);
        money::to_cents("valorTotal", total)
    }
}

/// Data required to create a new Rental; the price is derived, never supplied
#[derive(Debug, Clone)]
pub struct CreateRentalData {
    pub renter_id: i64,
    pub vehicle_id: VehicleId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Replacement attributes of a rental as received; checked once the rental
/// is known to exist
#[derive(Debug, Clone)]
pub struct ReplaceRentalData {
    pub renter_id: i64,
    pub vehicle_id: VehicleId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
}

impl ReplaceRentalData {
    /// # Errors
    ///
    /// Returns the `DomainError` of the period or the total price.
    pub fn validated(self) -> Result<RentalData, DomainError> {
        let period = RentalPeriod::new(self.start_date, self.end_date)?;
        RentalData::new(self.renter_id, self.vehicle_id, period, self.total_price)
    }
}

/// Stored attributes of a rental, used for insertion and full replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalData {
    pub renter_id: i64,
    pub vehicle_id: VehicleId,
    pub period: RentalPeriod,
    pub total_price: Decimal,
}

impl RentalData {
    /// # Errors
    ///
    /// Returns a `DomainError` amount variant if the total price is negative,
    /// finer than cents or above the stored range.
    pub fn new(
        renter_id: i64,
        vehicle_id: VehicleId,
        period: RentalPeriod,
        total_price: Decimal,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            renter_id,
            vehicle_id,
            period,
            total_price: money::to_cents("valorTotal", total_price)?,
        })
    }
}

/// Display fields joined in from the renter and vehicle tables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalDetails {
    pub renter_document: Option<String>,
    pub renter_name: Option<String>,
    pub vehicle_model: Option<String>,
}

/// Rental domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    id: RentalId,
    data: RentalData,
    details: RentalDetails,
}

impl Rental {
    /// Restore a Rental from persisted data
    #[must_use]
    pub fn restore(id: RentalId, data: RentalData, details: RentalDetails) -> Self {
        Self { id, data, details }
    }

    /// Replace the stored attributes, keeping the identifier.
    ///
    /// Joined details are dropped since they may no longer match.
    #[must_use]
    pub fn replace(self, data: RentalData) -> Self {
        Self {
            id: self.id,
            data,
            details: RentalDetails::default(),
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> RentalId {
        self.id
    }

    #[must_use]
    pub fn renter_id(&self) -> i64 {
        self.data.renter_id
    }

    #[must_use]
    pub fn renter_document(&self) -> Option<&str> {
        self.details.renter_document.as_deref()
    }

    #[must_use]
    pub fn renter_name(&self) -> Option<&str> {
        self.details.renter_name.as_deref()
    }

    #[must_use]
    pub fn vehicle_id(&self) -> VehicleId {
        self.data.vehicle_id
    }

    #[must_use]
    pub fn vehicle_model(&self) -> Option<&str> {
        self.details.vehicle_model.as_deref()
    }

    #[must_use]
    pub fn period(&self) -> RentalPeriod {
        self.data.period
    }

    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.data.total_price
    }

    #[must_use]
    pub fn data(&self) -> &RentalData {
        &self.data
    }
}
