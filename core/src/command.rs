//! Player-facing command inputs and results.
//!
//! Decision fields are explicit optional overrides: an omitted field
//! means "keep last quarter's value", and the merge happens inside the
//! engine in one place, never through hidden mutable defaults at the
//! call site.

use crate::events::RandomEvent;
use crate::types::{Money, Quarter, Units};
use serde::{Deserialize, Serialize};

/// The decision bundle for one quarter. Every field optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct QuarterDecisions {
    /// Unit price in USD. Must be strictly positive when set.
    pub price: Option<Money>,
    /// Planned production in units.
    pub production: Option<Units>,
    /// Marketing spend for the quarter. Must be non-negative when set.
    pub marketing: Option<Money>,
    /// R&D spend for the quarter. Must be non-negative when set.
    pub rd: Option<Money>,
}

/// What one quarter produced. Returned by `advance_quarter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterReport {
    pub quarter: Quarter,
    pub units_sold: Units,
    pub revenue: Money,
    pub net_income: Money,
    pub cash: Money,
    pub market_share: f64,
    pub tech_level: f64,
    pub unit_cost: Money,
    /// The event that fired this quarter, if any.
    pub event: Option<RandomEvent>,
}

/// Result of a funding attempt. A decline is a normal business
/// outcome, not an error: `success` is false and `message` says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingOutcome {
    pub success: bool,
    pub amount: Money,
    pub dilution: f64,
    pub message: String,
}

impl FundingOutcome {
    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            amount: 0.0,
            dilution: 0.0,
            message: message.into(),
        }
    }
}

/// Result of a hire/fire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HireOutcome {
    pub success: bool,
    pub message: String,
    pub new_headcount: u32,
}
