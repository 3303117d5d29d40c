//! Domain error types.
//!
//! These errors represent validation failures in the domain layer:
//! malformed flight records and itineraries that break the connection
//! rules. They are distinct from query and search errors.

use super::{CityId, FlightId, Time};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A flight lands before it takes off
    #[error("flight {flight} arrives at {arrival} before it departs at {departure}")]
    ArrivalBeforeDeparture {
        flight: FlightId,
        departure: Time,
        arrival: Time,
    },

    /// Consecutive flights don't share a city
    #[error("flight {next} departs {from} but the previous flight landed at {landed}")]
    Disconnected {
        next: FlightId,
        landed: CityId,
        from: CityId,
    },

    /// Connection shorter than the minimum layover
    #[error("flight {next} departs at {departure}, before the layover after {previous} ends at {ready}")]
    LayoverTooShort {
        previous: FlightId,
        next: FlightId,
        departure: Time,
        ready: Time,
    },

    /// Layover after a flight landing this late would end past `Time::MAX`
    #[error("flight {next} cannot follow {previous}: the layover runs past the last representable time")]
    LayoverUnbounded { previous: FlightId, next: FlightId },

    /// Flight departs before or lands after the search window
    #[error("flight {0} is outside the time window")]
    OutsideWindow(FlightId),
}
