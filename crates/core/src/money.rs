//! Money as an integer amount of minor currency units.

use serde::{Deserialize, Serialize};

use crate::error::{BillingError, BillingResult};
use crate::value_object::ValueObject;

/// An amount of money in minor currency units (cents).
///
/// Computation never touches floating point; amounts stay integral until a
/// formatter turns them into text at the presentation boundary.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checked addition; overflow is a domain error, never a silent wrap.
    pub fn checked_add(self, other: Money) -> BillingResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(BillingError::AmountOverflow)
    }

    /// Checked multiplication by a unitless factor (e.g. seats over a threshold).
    pub fn checked_mul(self, factor: u64) -> BillingResult<Money> {
        self.0
            .checked_mul(factor)
            .map(Money)
            .ok_or(BillingError::AmountOverflow)
    }
}

impl ValueObject for Money {}
