//! Time-expanded flight graph.
//!
//! Edges are flights carrying their own departure and arrival times, so
//! "can I take this edge?" depends on when the traveller reaches its
//! origin. Each city's outgoing flights are kept sorted by departure time
//! so searches scan them in schedule order.

use crate::domain::{CityId, Flight};

/// Adjacency table from city to outgoing flights.
///
/// Built once and read-only afterwards. Cities are dense indices
/// `0..city_count()`, where `city_count` is one more than the largest
/// endpoint id seen.
#[derive(Debug, Clone, Default)]
pub struct FlightGraph {
    /// Outgoing flights per origin city, ascending by departure time.
    departures: Vec<Vec<Flight>>,

    /// Number of flights landing at each city.
    arrivals: Vec<usize>,
}

impl FlightGraph {
    /// Create a graph with `city_count` cities and no flights.
    pub fn with_cities(city_count: usize) -> Self {
        Self {
            departures: vec![Vec::new(); city_count],
            arrivals: vec![0; city_count],
        }
    }

    /// Build a graph from a full flight list.
    ///
    /// Flights sharing a departure time keep their input order. City ids
    /// must be dense table indices: the table is sized to the largest id
    /// plus one, so an id near `usize::MAX` overflows or exhausts memory.
    pub fn from_flights<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        let mut graph = Self::default();

        for flight in flights {
            graph.reserve_cities(&flight);
            graph.arrivals[flight.destination().index()] += 1;
            graph.departures[flight.origin().index()].push(flight);
        }

        for outgoing in &mut graph.departures {
            outgoing.sort_by_key(Flight::departure_time);
        }

        graph
    }

    /// Insert a flight into its origin's departure list.
    ///
    /// The list stays sorted by departure time; a flight departing at the
    /// same time as existing ones goes after them. The city table grows to
    /// cover both endpoints, with the same dense-id precondition as
    /// [`FlightGraph::from_flights`].
    pub fn add_flight(&mut self, flight: Flight) {
        self.reserve_cities(&flight);
        self.arrivals[flight.destination().index()] += 1;

        let outgoing = &mut self.departures[flight.origin().index()];
        let at = outgoing.partition_point(|f| f.departure_time() <= flight.departure_time());
        outgoing.insert(at, flight);
    }

    /// Outgoing flights from `city`, ascending by departure time.
    ///
    /// Cities outside the graph have no flights.
    pub fn flights_from(&self, city: CityId) -> &[Flight] {
        self.departures
            .get(city.index())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of cities (`n`).
    pub fn city_count(&self) -> usize {
        self.departures.len()
    }

    /// Check if a city id lies in `0..city_count()`.
    pub fn contains(&self, city: CityId) -> bool {
        city.index() < self.city_count()
    }

    /// Total number of flights.
    pub fn flight_count(&self) -> usize {
        self.departures.iter().map(|v| v.len()).sum()
    }

    /// Number of flights departing `city`.
    pub fn out_degree(&self, city: CityId) -> usize {
        self.flights_from(city).len()
    }

    /// Flights departing from or landing at `city`.
    pub fn traffic(&self, city: CityId) -> usize {
        let landing = self.arrivals.get(city.index()).copied().unwrap_or(0);
        self.out_degree(city) + landing
    }

    /// Iterate over every flight, grouped by origin city.
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.departures.iter().flatten()
    }

    /// Grows the table to `max(origin, destination) + 1` cities. Callers
    /// keep ids below `usize::MAX`.
    fn reserve_cities(&mut self, flight: &Flight) {
        let needed = flight.origin().index().max(flight.destination().index()) + 1;
        if needed > self.departures.len() {
            self.departures.resize_with(needed, Vec::new);
            self.arrivals.resize(needed, 0);
        }
    }
}
