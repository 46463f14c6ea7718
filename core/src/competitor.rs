//! NPC competitors.
//!
//! Competitors do not run the full demand model. Each quarter they
//! drift: tech creeps up, price and market share wander. The active
//! flag is honored by every aggregate even though nothing in the
//! current rules deactivates anyone.

use crate::rng::GameRng;
use crate::types::Money;
use serde::{Deserialize, Serialize};

/// Market-share band a competitor is allowed to occupy.
pub const COMPETITOR_SHARE_FLOOR: f64 = 0.05;
pub const COMPETITOR_SHARE_CEIL: f64 = 0.35;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub tech_level: f64,
    pub market_share: f64,
    pub price: Money,
    pub is_active: bool,
}

impl Competitor {
    fn new(name: &str, tech_level: f64, market_share: f64, price: Money) -> Self {
        Self {
            name: name.to_string(),
            tech_level,
            market_share,
            price,
            is_active: true,
        }
    }

    /// One quarter of drift. Tech only ever improves; price and share
    /// wander, with share clamped to its band. Exactly three RNG draws,
    /// in this order.
    pub fn drift(&mut self, rng: &mut GameRng) {
        self.tech_level *= rng.uniform(1.01, 1.03);
        self.price *= rng.uniform(0.98, 1.02);
        self.market_share = (self.market_share * rng.uniform(0.95, 1.05))
            .clamp(COMPETITOR_SHARE_FLOOR, COMPETITOR_SHARE_CEIL);
    }
}

/// The fixed roster every game starts against.
pub fn starting_roster() -> Vec<Competitor> {
    vec![
        Competitor::new("TechPower Inc", 1.0, 0.30, 420.0),
        Competitor::new("GreenFuture Corp", 0.95, 0.25, 440.0),
        Competitor::new("EcoInnovate", 0.90, 0.20, 460.0),
    ]
}
