//! Flight records and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Abstract point in time. No calendar or timezone semantics.
pub type Time = u64;

/// Abstract fare amount in a single currency.
pub type Fare = u64;

/// Unique identifier of a scheduled flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub u64);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Index of a city in the flight graph.
///
/// Cities are dense integers `0..n`; the graph sizes its adjacency table
/// from the largest id it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub usize);

impl CityId {
    /// Returns the raw table index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city {}", self.0)
    }
}

/// A scheduled point-to-point flight.
///
/// Flights are immutable values. Identity is the [`FlightId`]; the derived
/// equality compares every field.
///
/// # Invariants
///
/// - `arrival_time >= departure_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFlight", into = "RawFlight")]
pub struct Flight {
    id: FlightId,
    origin: CityId,
    departure_time: Time,
    destination: CityId,
    arrival_time: Time,
    fare: Fare,
}

impl Flight {
    /// Construct a flight, validating that it does not land before it departs.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{CityId, Flight, FlightId};
    ///
    /// let flight = Flight::new(FlightId(0), CityId(0), 10, CityId(1), 40, 120).unwrap();
    /// assert_eq!(flight.duration(), 30);
    ///
    /// // Landing before take-off is rejected
    /// assert!(Flight::new(FlightId(1), CityId(0), 40, CityId(1), 10, 120).is_err());
    /// ```
    pub fn new(
        id: FlightId,
        origin: CityId,
        departure_time: Time,
        destination: CityId,
        arrival_time: Time,
        fare: Fare,
    ) -> Result<Self, DomainError> {
        if arrival_time < departure_time {
            return Err(DomainError::ArrivalBeforeDeparture {
                flight: id,
                departure: departure_time,
                arrival: arrival_time,
            });
        }

        Ok(Self {
            id,
            origin,
            departure_time,
            destination,
            arrival_time,
            fare,
        })
    }

    pub fn id(&self) -> FlightId {
        self.id
    }

    pub fn origin(&self) -> CityId {
        self.origin
    }

    pub fn departure_time(&self) -> Time {
        self.departure_time
    }

    pub fn destination(&self) -> CityId {
        self.destination
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }

    /// Time spent in the air.
    pub fn duration(&self) -> Time {
        self.arrival_time - self.departure_time
    }

    /// Narrow tie-break key: `(arrival_time, fare)`.
    ///
    /// Two distinct flights with the same key are interchangeable for
    /// ordering purposes, even though they are not equal values.
    pub fn schedule_key(&self) -> (Time, Fare) {
        (self.arrival_time, self.fare)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}@{} -> {}@{} fare {}",
            self.id,
            self.origin,
            self.departure_time,
            self.destination,
            self.arrival_time,
            self.fare
        )
    }
}

/// Wire form of a [`Flight`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawFlight {
    flight_id: FlightId,
    origin_city: CityId,
    departure_time: Time,
    destination_city: CityId,
    arrival_time: Time,
    fare: Fare,
}

impl TryFrom<RawFlight> for Flight {
    type Error = DomainError;

    fn try_from(raw: RawFlight) -> Result<Self, Self::Error> {
        Flight::new(
            raw.flight_id,
            raw.origin_city,
            raw.departure_time,
            raw.destination_city,
            raw.arrival_time,
            raw.fare,
        )
    }
}

impl From<Flight> for RawFlight {
    fn from(flight: Flight) -> Self {
        Self {
            flight_id: flight.id,
            origin_city: flight.origin,
            departure_time: flight.departure_time,
            destination_city: flight.destination,
            arrival_time: flight.arrival_time,
            fare: flight.fare,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Construction succeeds exactly when arrival is not before departure
        #[test]
        fn valid_iff_ordered(dep in 0u64..1000, arr in 0u64..1000, fare in 0u64..500) {
            let result = Flight::new(FlightId(0), CityId(0), dep, CityId(1), arr, fare);
            prop_assert_eq!(result.is_ok(), arr >= dep);
        }

        /// Duration never underflows for a constructed flight
        #[test]
        fn duration_matches_times(dep in 0u64..1000, extra in 0u64..1000) {
            let f = Flight::new(FlightId(0), CityId(0), dep, CityId(1), dep + extra, 0).unwrap();
            prop_assert_eq!(f.duration(), extra);
        }
    }
}
