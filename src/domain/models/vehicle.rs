//! Vehicle Domain Model
//!
//! Represents a vehicle in the rental fleet.

use rust_decimal::Decimal;

use crate::domain::models::money;
use crate::shared::errors::DomainError;

/// Newtype wrapper for Vehicle ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(i64);

impl VehicleId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VehicleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Mutable attributes of a vehicle, used for both creation and full replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleData {
    pub brand: String,
    pub model: String,
    pub plate: String,
    pub year: i32,
    pub color: String,
    pub daily_rate: Decimal,
}

impl VehicleData {
    /// Check the invariants the store relies on, with the daily rate
    /// normalized to cents
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` amount variant if the daily rate is negative,
    /// finer than cents or above the stored range.
    pub fn validated(self) -> Result<Self, DomainError> {
        let daily_rate = money::to_cents("valorDiaria", self.daily_rate)?;
        Ok(Self { daily_rate, ..self })
    }
}

/// Vehicle domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    data: VehicleData,
}

impl Vehicle {
    /// Restore a Vehicle from persisted data
    #[must_use]
    pub fn restore(id: VehicleId, data: VehicleData) -> Self {
        Self { id, data }
    }

    /// Replace every mutable attribute, keeping the identifier
    #[must_use]
    pub fn replace(self, data: VehicleData) -> Self {
        Self { id: self.id, data }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.data.brand
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.data.model
    }

    #[must_use]
    pub fn plate(&self) -> &str {
        &self.data.plate
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.data.year
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.data.color
    }

    #[must_use]
    pub fn daily_rate(&self) -> Decimal {
        self.data.daily_rate
    }

    #[must_use]
    pub fn data(&self) -> &VehicleData {
        &self.data
    }
}
