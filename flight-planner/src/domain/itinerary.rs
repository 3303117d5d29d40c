//! Itinerary type.
//!
//! An `Itinerary` is the result of a route query: the flights taken from
//! origin to destination, in traversal order. An empty itinerary means no
//! route satisfied the query's constraints.

use serde::{Deserialize, Serialize};

use super::{CityId, DomainError, Fare, Flight, Time, TimeWindow};

/// An ordered sequence of flights forming one trip.
///
/// Itineraries produced by the planner always chain (each flight departs
/// from the city the previous one landed at) and respect the window and
/// layover they were planned with; [`Itinerary::check_connections`]
/// verifies this for itineraries from elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Itinerary {
    flights: Vec<Flight>,
}

impl Itinerary {
    /// An itinerary with no flights: the "unreachable" result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps flights already in traversal order.
    pub fn new(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn into_flights(self) -> Vec<Flight> {
        self.flights
    }

    /// Number of flights taken.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }

    /// Sum of all fares, saturating at `Fare::MAX`.
    pub fn total_fare(&self) -> Fare {
        self.flights
            .iter()
            .fold(0, |total: Fare, f| total.saturating_add(f.fare()))
    }

    /// Departure of the first flight.
    pub fn departure_time(&self) -> Option<Time> {
        self.flights.first().map(Flight::departure_time)
    }

    /// Arrival of the last flight.
    pub fn arrival_time(&self) -> Option<Time> {
        self.flights.last().map(Flight::arrival_time)
    }

    pub fn origin(&self) -> Option<CityId> {
        self.flights.first().map(Flight::origin)
    }

    pub fn destination(&self) -> Option<CityId> {
        self.flights.last().map(Flight::destination)
    }

    /// Checks that the itinerary is flyable within `window` when every
    /// connection needs at least `min_layover` on the ground.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning in traversal order:
    /// - a flight outside the window
    /// - consecutive flights that don't share a city
    /// - a connection shorter than `min_layover`, including one whose
    ///   layover would end past `Time::MAX`
    pub fn check_connections(
        &self,
        window: TimeWindow,
        min_layover: Time,
    ) -> Result<(), DomainError> {
        let mut previous: Option<&Flight> = None;

        for flight in &self.flights {
            if !window.admits(flight) {
                return Err(DomainError::OutsideWindow(flight.id()));
            }

            if let Some(prev) = previous {
                if prev.destination() != flight.origin() {
                    return Err(DomainError::Disconnected {
                        next: flight.id(),
                        landed: prev.destination(),
                        from: flight.origin(),
                    });
                }

                let Some(ready) = prev.arrival_time().checked_add(min_layover) else {
                    return Err(DomainError::LayoverUnbounded {
                        previous: prev.id(),
                        next: flight.id(),
                    });
                };
                if flight.departure_time() < ready {
                    return Err(DomainError::LayoverTooShort {
                        previous: prev.id(),
                        next: flight.id(),
                        departure: flight.departure_time(),
                        ready,
                    });
                }
            }

            previous = Some(flight);
        }

        Ok(())
    }
}

impl From<Vec<Flight>> for Itinerary {
    fn from(flights: Vec<Flight>) -> Self {
        Self::new(flights)
    }
}

impl AsRef<[Flight]> for Itinerary {
    fn as_ref(&self) -> &[Flight] {
        &self.flights
    }
}

impl IntoIterator for Itinerary {
    type Item = Flight;
    type IntoIter = std::vec::IntoIter<Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.into_iter()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}
