//! CleanStart — simulation engine for a clean-energy startup game.
//!
//! One `Company` per playthrough: 12 quarters of pricing, production,
//! marketing, R&D, hiring, and fundraising decisions against a
//! deterministic-plus-stochastic market model. The engine owns all
//! game state and exposes a small command API; rendering and widget
//! wiring live entirely outside this crate and consume only
//! `get_current_state()` and the command results.
//!
//! RULES:
//!   - All randomness flows through the seeded `GameRng` on the
//!     `Company`. Same seed + same commands = same playthrough.
//!   - Usage errors fail fast as `SimError`; expected business
//!     outcomes (a declined grant, a rejected fire order) are ordinary
//!     results with a success flag.
//!   - Nothing is persisted: the engine lives for one process.

pub mod command;
pub mod company;
pub mod competitor;
pub mod department;
pub mod error;
pub mod events;
pub mod funding;
pub mod market;
pub mod metrics;
pub mod rng;
pub mod snapshot;
pub mod tech;
pub mod types;

pub use command::{FundingOutcome, HireOutcome, QuarterDecisions, QuarterReport};
pub use company::Company;
pub use error::{SimError, SimResult};
pub use funding::FundingSource;
pub use snapshot::CompanyState;
pub use tech::TechnologyTrack;
