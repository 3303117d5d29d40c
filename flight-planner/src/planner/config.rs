//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::domain::Time;

/// Minimum time on the ground between two connecting flights.
pub const DEFAULT_MIN_LAYOVER: Time = 20;

/// Configuration parameters for route planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Minimum connection time between arriving and departing again.
    /// Connections tighter than this are rejected.
    pub min_layover: Time,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_layover: Time) -> Self {
        Self { min_layover }
    }

    /// Earliest departure allowed after landing at `arrival`, or `None` if
    /// the layover would end past `Time::MAX`.
    pub fn ready_after(&self, arrival: Time) -> Option<Time> {
        arrival.checked_add(self.min_layover)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_layover: DEFAULT_MIN_LAYOVER,
        }
    }
}
