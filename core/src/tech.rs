//! Technology tracks and their fixed parameter tables.
//!
//! The track is chosen once at company creation and never changes.
//! It fixes the starting unit cost, the size of the addressable market,
//! how price-sensitive that market is, and how far a dollar of R&D goes.

use crate::types::Money;
use serde::{Deserialize, Serialize};

/// The product technology a company is founded on.
/// Variants are fixed — the parameter tables below key off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnologyTrack {
    Battery,
    Solar,
    Hydrogen,
    CarbonCapture,
}

/// Per-track market and cost constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackParams {
    /// Manufacturing cost per unit before any learning or tech gains.
    pub base_unit_cost: Money,
    /// Addressable market in units at quarter 0.
    pub initial_market_size: f64,
    /// Demand exponent on relative price. Always negative.
    pub price_elasticity: f64,
    /// Multiplier on the R&D contribution to tech level.
    pub rd_effectiveness: f64,
}

impl TechnologyTrack {
    pub const ALL: [TechnologyTrack; 4] = [
        TechnologyTrack::Battery,
        TechnologyTrack::Solar,
        TechnologyTrack::Hydrogen,
        TechnologyTrack::CarbonCapture,
    ];

    /// Human-readable product name, shown by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Battery => "Advanced Battery Storage",
            Self::Solar => "Next-Gen Solar Panels",
            Self::Hydrogen => "Green Hydrogen Production",
            Self::CarbonCapture => "Carbon Capture Technology",
        }
    }

    pub fn params(&self) -> TrackParams {
        match self {
            Self::Battery => TrackParams {
                base_unit_cost: 350.0,
                initial_market_size: 8_000.0,
                price_elasticity: -1.8,
                rd_effectiveness: 1.2,
            },
            Self::Solar => TrackParams {
                base_unit_cost: 280.0,
                initial_market_size: 12_000.0,
                price_elasticity: -2.0,
                rd_effectiveness: 1.0,
            },
            Self::Hydrogen => TrackParams {
                base_unit_cost: 420.0,
                initial_market_size: 5_000.0,
                price_elasticity: -1.5,
                rd_effectiveness: 1.3,
            },
            Self::CarbonCapture => TrackParams {
                base_unit_cost: 380.0,
                initial_market_size: 6_000.0,
                price_elasticity: -1.6,
                rd_effectiveness: 1.1,
            },
        }
    }
}
