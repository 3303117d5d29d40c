//! Departure/arrival time window.

use serde::{Deserialize, Serialize};

use super::{Flight, Time};

/// Inclusive `[earliest, latest]` bound on the flights a query may use.
///
/// A flight fits when it departs no earlier than `earliest` and lands no
/// later than `latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub earliest: Time,
    pub latest: Time,
}

impl TimeWindow {
    pub fn new(earliest: Time, latest: Time) -> Self {
        Self { earliest, latest }
    }

    /// Returns true if `earliest > latest`, in which case nothing fits.
    pub fn is_inverted(&self) -> bool {
        self.earliest > self.latest
    }

    /// Returns true if the flight lies entirely within the window.
    pub fn admits(&self, flight: &Flight) -> bool {
        self.earliest <= flight.departure_time() && flight.arrival_time() <= self.latest
    }
}
