use serde::{Deserialize, Serialize};

use boxoffice_plays::PlayId;

/// One booked performance: a play reference plus the seats sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub play_id: PlayId,
    /// Seats sold. Zero is legal: a performance nobody attended still
    /// bills its base amount.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's invoice: an ordered sequence of performances.
///
/// Order is meaningful — it fixes statement line order — and is preserved
/// end to end, never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}
