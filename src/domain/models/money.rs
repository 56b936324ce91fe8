//! Monetary amounts
//!
//! Every amount is stored as `NUMERIC(10, 2)`: two decimal places and at
//! most eight integer digits.

use rust_decimal::Decimal;

use crate::shared::errors::DomainError;

/// Decimal places kept for every amount
pub const SCALE: u32 = 2;

/// Largest amount the store can hold (99,999,999.99)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0x540B_E3FF, 0x2, 0, false, SCALE);

/// Check an amount against the storage limits and normalize it to cents
///
/// `100` becomes `100.00`; `100.000` is accepted as `100.00`.
///
/// # Errors
///
/// Returns `DomainError::NegativeAmount` below zero,
/// `DomainError::TooManyDecimalPlaces` when cents would be lost and
/// `DomainError::AmountTooLarge` above [`MAX_AMOUNT`].
pub fn to_cents(field: &'static str, amount: Decimal) -> Result<Decimal, DomainError> {
    if amount < Decimal::ZERO {
        return Err(DomainError::NegativeAmount(field));
    }
    if amount.normalize().scale() > SCALE {
        return Err(DomainError::TooManyDecimalPlaces(field));
    }
    if amount > MAX_AMOUNT {
        return Err(DomainError::AmountTooLarge(field));
    }

    let mut cents = amount;
    cents.rescale(SCALE);
    Ok(cents)
}
