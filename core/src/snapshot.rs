//! Read-only state export for the presentation layer.
//!
//! Everything is cloned out of the engine: the caller gets owned data
//! and can never reach back into live company state.

use crate::competitor::Competitor;
use crate::department::Department;
use crate::events::{EventLogEntry, RandomEvent};
use crate::metrics::Metrics;
use crate::tech::{TechnologyTrack, TrackParams};
use serde::{Deserialize, Serialize};

/// Full company snapshot at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyState {
    pub metrics: Metrics,
    pub departments: Vec<Department>,
    pub competitors: Vec<Competitor>,
    pub track: TechnologyTrack,
    pub track_params: TrackParams,
    /// One entry per completed quarter, in order.
    pub history: Vec<Metrics>,
    pub game_over: bool,
    pub game_over_reason: String,
    pub last_event: Option<RandomEvent>,
    pub event_log: Vec<EventLogEntry>,
}
