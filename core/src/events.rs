//! The random-event catalog.
//!
//! At most one event fires per quarter (probability 0.20, uniform pick
//! over the catalog). An event's impact is an ordered list of
//! (effect key, magnitude) pairs. Only a subset of keys mutates engine
//! state — see `Company::apply_event`. The rest are advisory: the
//! presentation layer shows them, the engine applies nothing. That
//! asymmetry is deliberate; do not wire the advisory keys into the
//! pipeline without updating the tests that pin them as inert.

use crate::types::Quarter;
use serde::{Deserialize, Serialize};

/// Chance that any event fires in a given quarter.
pub const EVENT_PROBABILITY: f64 = 0.20;

/// Display category. Advisory only — the engine never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Positive,
    Negative,
    Neutral,
}

/// The closed set of effect keys appearing in the catalog.
///
/// Applied by the engine: `Cash`, `TechBoost`, `TechLevelMult`,
/// `UnitCostMult`, `EngineerLoss`, `OperatingCost`, `ValuationMult`.
/// Inert (surfaced but never applied): `DemandBoost`, `ProductionLimit`,
/// `MarketShareMult`, `MarketingEfficiency`, `TechLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKey {
    Cash,
    DemandBoost,
    UnitCostMult,
    ProductionLimit,
    TechBoost,
    TechLevelMult,
    EngineerLoss,
    OperatingCost,
    MarketShareMult,
    MarketingEfficiency,
    TechLevel,
    ValuationMult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub impact: Vec<(EffectKey, f64)>,
}

impl RandomEvent {
    fn new(
        title: &str,
        description: &str,
        category: EventCategory,
        impact: &[(EffectKey, f64)],
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category,
            impact: impact.to_vec(),
        }
    }

    /// Magnitude for a key, if this event carries it.
    pub fn effect(&self, key: EffectKey) -> Option<f64> {
        self.impact
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// One fired event, as recorded in the company's event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub quarter: Quarter,
    pub event: RandomEvent,
}

/// The full catalog. Fixed at 12 entries.
pub fn catalog() -> Vec<RandomEvent> {
    use EventCategory::{Negative, Positive};
    use EffectKey::*;
    vec![
        RandomEvent::new(
            "Government Subsidy Approved!",
            "Your technology qualifies for a new government clean energy subsidy program.",
            Positive,
            &[(Cash, 500_000.0), (DemandBoost, 1.2)],
        ),
        RandomEvent::new(
            "Supply Chain Disruption",
            "Global chip shortage impacts your production capabilities.",
            Negative,
            &[(UnitCostMult, 1.15), (ProductionLimit, 0.7)],
        ),
        RandomEvent::new(
            "Breakthrough in R&D!",
            "Your engineering team achieves a major technological breakthrough.",
            Positive,
            &[(TechBoost, 1.2)],
        ),
        RandomEvent::new(
            "Key Engineer Departs",
            "Your lead engineer accepted a position at a competitor.",
            Negative,
            &[(TechLevelMult, 0.95), (EngineerLoss, 1.0)],
        ),
        RandomEvent::new(
            "Major Customer Win",
            "Fortune 500 company signs large purchase agreement.",
            Positive,
            &[(DemandBoost, 1.5), (Cash, 300_000.0)],
        ),
        RandomEvent::new(
            "Regulatory Change",
            "New environmental regulations increase compliance costs.",
            Negative,
            &[(OperatingCost, 150_000.0)],
        ),
        RandomEvent::new(
            "New Competitor Enters Market",
            "Well-funded startup announces competing product.",
            Negative,
            &[(MarketShareMult, 0.85)],
        ),
        RandomEvent::new(
            "Industry Conference Success",
            "Your CEO's keynote generates significant buzz and sales leads.",
            Positive,
            &[(MarketingEfficiency, 1.3)],
        ),
        RandomEvent::new(
            "Patent Granted",
            "Your core technology patent is approved, providing competitive protection.",
            Positive,
            &[(TechLevel, 1.15), (ValuationMult, 1.1)],
        ),
        RandomEvent::new(
            "Economic Downturn",
            "Market recession reduces overall demand for clean energy products.",
            Negative,
            &[(DemandBoost, 0.75)],
        ),
        RandomEvent::new(
            "Strategic Partnership",
            "Major energy company proposes distribution partnership.",
            Positive,
            &[(Cash, 400_000.0), (DemandBoost, 1.3)],
        ),
        RandomEvent::new(
            "Product Recall",
            "Quality issue requires costly product recall and repairs.",
            Negative,
            &[(Cash, -600_000.0), (MarketShareMult, 0.8)],
        ),
    ]
}
