//! The company's financial and operational metrics.
//!
//! Exactly one live `Metrics` value exists per company. Every quarter
//! advance appends an immutable copy to the history before returning,
//! so the history is the canonical record of the playthrough.

use crate::tech::TechnologyTrack;
use crate::types::{Money, Quarter, Units};
use serde::{Deserialize, Serialize};

/// Cash on hand at founding.
pub const STARTING_CASH: Money = 3_000_000.0;

/// The founding seed round. Already on the opening balance sheet and
/// counted in `total_funding_raised` from quarter 0.
pub const SEED_FUNDING: Money = 3_000_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub quarter: Quarter,
    pub cash: Money,
    pub revenue: Money,
    pub cogs: Money,
    pub gross_profit: Money,
    pub operating_expenses: Money,
    pub net_income: Money,
    pub cumulative_production: Units,
    pub units_sold: Units,
    /// Fraction of estimated total market sales. Not strictly clamped.
    pub market_share: f64,
    /// Unitless sophistication multiplier. Starts at 1.0, unbounded upward.
    pub tech_level: f64,
    pub unit_cost: Money,
    pub valuation: Money,
    pub total_funding_raised: Money,
    /// Cumulative equity fraction given away across all rounds.
    pub equity_given: f64,
}

impl Metrics {
    /// Opening metrics for a company founded on the given track.
    pub fn starting(track: TechnologyTrack) -> Self {
        Self {
            quarter: 0,
            cash: STARTING_CASH,
            revenue: 0.0,
            cogs: 0.0,
            gross_profit: 0.0,
            operating_expenses: 0.0,
            net_income: 0.0,
            cumulative_production: 0,
            units_sold: 0,
            market_share: 0.0,
            tech_level: 1.0,
            unit_cost: track.params().base_unit_cost,
            valuation: 3_000_000.0,
            total_funding_raised: SEED_FUNDING,
            equity_given: 0.0,
        }
    }
}
