//! Market and cost formulas.
//!
//! Pure helpers over plain numbers; the `Company` pipeline composes
//! them. Keeping them free of engine state makes the curves easy to
//! test in isolation.

use crate::types::{Money, Quarter, Units};

/// Quarterly growth of the addressable market.
pub const MARKET_GROWTH_RATE: f64 = 0.05;

/// Learning-curve exponent: ~20% unit-cost reduction per doubling of
/// cumulative production (progress ratio 0.85 ≈ 2^-0.234).
const LEARNING_EXPONENT: f64 = -0.234;

/// Addressable market in units at the given quarter, compounding from
/// the track's initial size at quarter 0.
pub fn addressable_market(initial_size: f64, quarter: Quarter) -> f64 {
    initial_size * (1.0 + MARKET_GROWTH_RATE).powi(quarter as i32)
}

/// Learning-curve cost factor for a cumulative production total.
/// 1.0 before anything has been built, then decaying with volume.
pub fn learning_factor(cumulative_production: Units) -> f64 {
    if cumulative_production == 0 {
        return 1.0;
    }
    let doublings = (cumulative_production as f64 / 1_000.0 + 1.0).log2();
    2f64.powf(doublings * LEARNING_EXPONENT)
}

/// Demand multiplier from relative price. Elasticity is negative, so
/// pricing above the competitor average shrinks demand.
pub fn price_effect(price: Money, avg_competitor_price: Money, elasticity: f64) -> f64 {
    (price / avg_competitor_price).powf(elasticity)
}

/// Demand multiplier from marketing spend. Logarithmic: the first
/// dollars buy the most awareness.
pub fn marketing_effect(marketing_spend: Money) -> f64 {
    1.0 + (1.0 + marketing_spend / 10_000.0).ln() * 0.1
}

/// Demand multiplier from the tech gap against the competitor average.
pub fn tech_effect(tech_level: f64, avg_competitor_tech: f64) -> f64 {
    1.0 + (tech_level / avg_competitor_tech - 1.0) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_compounds_quarterly() {
        assert_eq!(addressable_market(12_000.0, 0), 12_000.0);
        let q2 = addressable_market(12_000.0, 2);
        assert!((q2 - 12_000.0 * 1.05 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn learning_is_one_before_production() {
        assert_eq!(learning_factor(0), 1.0);
    }

    #[test]
    fn learning_reduces_cost_with_volume() {
        let f1 = learning_factor(1_000);
        let f2 = learning_factor(10_000);
        assert!(f1 < 1.0);
        assert!(f2 < f1);
        // one doubling of (cum/1000 + 1) ≈ 15% cheaper
        assert!((f1 - 0.85).abs() < 0.01);
    }

    #[test]
    fn pricing_above_market_cuts_demand() {
        let cheap = price_effect(400.0, 440.0, -2.0);
        let par = price_effect(440.0, 440.0, -2.0);
        let dear = price_effect(500.0, 440.0, -2.0);
        assert!(cheap > par);
        assert!((par - 1.0).abs() < 1e-12);
        assert!(dear < par);
    }

    #[test]
    fn marketing_has_diminishing_returns() {
        let none = marketing_effect(0.0);
        let some = marketing_effect(50_000.0);
        let more = marketing_effect(100_000.0);
        assert_eq!(none, 1.0);
        assert!(some > none);
        // second 50k buys less than the first
        assert!(more - some < some - none);
    }

    #[test]
    fn tech_gap_swings_demand_both_ways() {
        assert!(tech_effect(1.2, 1.0) > 1.0);
        assert!((tech_effect(1.0, 1.0) - 1.0).abs() < 1e-12);
        assert!(tech_effect(0.8, 1.0) < 1.0);
    }
}
