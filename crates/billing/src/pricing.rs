//! Per-performance pricing and volume-credit formulas.

use serde::{Deserialize, Serialize};

use boxoffice_core::{BillingError, BillingResult, Money};
use boxoffice_plays::{Play, PlayKind};

use crate::invoice::Performance;

/// Formula constants for pricing and credit accrual.
///
/// An explicit immutable configuration value rather than scattered module
/// constants, so the engine stays pure and a non-default tariff can be
/// supplied wholesale. `Default` is the production tariff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Flat amount every tragedy bills.
    pub tragedy_base: Money,
    /// Audience size a tragedy covers before overage pricing starts.
    pub tragedy_threshold: u32,
    /// Per-seat overage rate for tragedies.
    pub tragedy_over_rate: Money,
    /// Flat amount every comedy bills.
    pub comedy_base: Money,
    /// Audience size a comedy covers before overage pricing starts.
    pub comedy_threshold: u32,
    /// Flat surcharge once a comedy exceeds its threshold.
    pub comedy_over_flat: Money,
    /// Per-seat overage rate for comedies.
    pub comedy_over_rate: Money,
    /// Per-seat amount every comedy bills regardless of threshold.
    pub comedy_per_head: Money,
    /// Seats a performance must exceed before it starts earning credits.
    pub credit_threshold: u32,
    /// One bonus credit per this many comedy seats.
    pub comedy_credit_divisor: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tragedy_base: Money::from_cents(40_000),
            tragedy_threshold: 30,
            tragedy_over_rate: Money::from_cents(1_000),
            comedy_base: Money::from_cents(30_000),
            comedy_threshold: 20,
            comedy_over_flat: Money::from_cents(10_000),
            comedy_over_rate: Money::from_cents(500),
            comedy_per_head: Money::from_cents(300),
            credit_threshold: 30,
            comedy_credit_divisor: 5,
        }
    }
}

impl PricingPolicy {
    /// Price one performance of the given play.
    ///
    /// Dispatch on the play kind is exhaustive; a kind without a formula
    /// fails the whole statement rather than defaulting to anything.
    pub fn price(&self, performance: &Performance, play: &Play) -> BillingResult<Money> {
        let audience = performance.audience;
        match &play.kind {
            PlayKind::Tragedy => {
                let mut amount = self.tragedy_base;
                if audience > self.tragedy_threshold {
                    let overage = u64::from(audience - self.tragedy_threshold);
                    amount = amount.checked_add(self.tragedy_over_rate.checked_mul(overage)?)?;
                }
                Ok(amount)
            }
            PlayKind::Comedy => {
                let mut amount = self.comedy_base;
                if audience > self.comedy_threshold {
                    let overage = u64::from(audience - self.comedy_threshold);
                    amount = amount.checked_add(self.comedy_over_flat)?;
                    amount = amount.checked_add(self.comedy_over_rate.checked_mul(overage)?)?;
                }
                amount.checked_add(self.comedy_per_head.checked_mul(u64::from(audience))?)
            }
            PlayKind::Other(tag) => Err(BillingError::unknown_play_type(tag.clone())),
        }
    }

    /// Volume credits one performance earns.
    ///
    /// Unknown kinds are rejected here too, so credit totals fail under
    /// exactly the same conditions as amount totals.
    pub fn volume_credits(&self, performance: &Performance, play: &Play) -> BillingResult<u64> {
        if let PlayKind::Other(tag) = &play.kind {
            return Err(BillingError::unknown_play_type(tag.clone()));
        }

        let audience = performance.audience;
        let mut credits = u64::from(audience.saturating_sub(self.credit_threshold));
        if play.kind == PlayKind::Comedy && self.comedy_credit_divisor > 0 {
            credits += u64::from(audience / self.comedy_credit_divisor);
        }
        Ok(credits)
    }
}
