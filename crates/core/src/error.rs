//! Domain error model.

use thiserror::Error;

/// Result type used across the billing domain.
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-domain error.
///
/// Keep this focused on deterministic data-integrity failures. Every
/// variant is fatal for the statement being generated: no partial
/// statement is ever emitted, and none of these is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A performance references a play id absent from the catalog.
    #[error("unresolved play id: {0}")]
    UnresolvedPlayId(String),

    /// A play carries a kind no pricing formula exists for.
    #[error("unknown play type: {0}")]
    UnknownPlayType(String),

    /// Checked money arithmetic overflowed.
    #[error("amount overflow")]
    AmountOverflow,
}

impl BillingError {
    pub fn unresolved_play_id(id: impl Into<String>) -> Self {
        Self::UnresolvedPlayId(id.into())
    }

    pub fn unknown_play_type(kind: impl Into<String>) -> Self {
        Self::UnknownPlayType(kind.into())
    }
}
