//! Route planner: query validation and dispatch.
//!
//! The planner owns the flight graph and answers route queries against it.
//! Each query runs an independent best-first search with its own queue,
//! best-known table and path arena, so a shared `&Planner` can serve
//! queries from several threads at once.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CityId, Flight, Itinerary, Time, TimeWindow};
use crate::graph::FlightGraph;
use crate::queue::EmptyQueueError;

use super::config::PlannerConfig;
use super::{cheapest, least_flights, least_flights_cheapest};

/// Error from validating a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// City id outside the graph
    #[error("{city} is not in the graph ({city_count} cities)")]
    UnknownCity { city: CityId, city_count: usize },

    /// Origin and destination coincide
    #[error("origin and destination are both {0}")]
    SameCity(CityId),

    /// Window closes before it opens
    #[error("time window [{earliest}, {latest}] is inverted")]
    InvertedWindow { earliest: Time, latest: Time },
}

/// What a route query optimizes, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Fewest flights, then earliest arrival.
    LeastFlightsEarliest,
    /// Lowest total fare.
    Cheapest,
    /// Fewest flights, then lowest total fare.
    LeastFlightsCheapest,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::LeastFlightsEarliest => "least_flights_earliest",
            Objective::Cheapest => "cheapest",
            Objective::LeastFlightsCheapest => "least_flights_cheapest",
        })
    }
}

/// Request for a route between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub objective: Objective,
    pub start: CityId,
    pub end: CityId,
    pub window: TimeWindow,
}

impl RouteQuery {
    /// Create a new route query.
    pub fn new(objective: Objective, start: CityId, end: CityId, window: TimeWindow) -> Self {
        Self {
            objective,
            start,
            end,
            window,
        }
    }

    /// Validate the query against a graph.
    pub fn validate(&self, graph: &FlightGraph) -> Result<(), QueryError> {
        for city in [self.start, self.end] {
            if !graph.contains(city) {
                return Err(QueryError::UnknownCity {
                    city,
                    city_count: graph.city_count(),
                });
            }
        }

        if self.start == self.end {
            return Err(QueryError::SameCity(self.start));
        }

        if self.window.is_inverted() {
            return Err(QueryError::InvertedWindow {
                earliest: self.window.earliest,
                latest: self.window.latest,
            });
        }

        Ok(())
    }
}

/// Read-only inputs shared by the searches for one query.
pub(super) struct SearchContext<'a> {
    pub(super) graph: &'a FlightGraph,
    pub(super) config: &'a PlannerConfig,
    pub(super) start: CityId,
    pub(super) end: CityId,
    pub(super) window: TimeWindow,
}

impl SearchContext<'_> {
    /// Flights leaving `city` that depart at or after `ready` and fit the window.
    pub(super) fn departures(&self, city: CityId, ready: Time) -> impl Iterator<Item = &Flight> {
        let outgoing = self.graph.flights_from(city);
        let first = outgoing.partition_point(|f| f.departure_time() < ready);
        let window = self.window;

        outgoing[first..]
            .iter()
            .take_while(move |f| f.departure_time() <= window.latest)
            .filter(move |f| window.admits(f))
    }

    /// Earliest next departure after taking `flight`.
    ///
    /// `None` if nothing can depart after the layover and the flight does
    /// not land at the destination, so the state is a dead end. A flight
    /// into the destination always yields a time; nothing departs from there.
    pub(super) fn ready_after(&self, flight: &Flight) -> Option<Time> {
        self.config
            .ready_after(flight.arrival_time())
            .or((flight.destination() == self.end).then_some(Time::MAX))
    }
}

/// Result of one search run.
pub(super) struct SearchOutcome {
    pub(super) itinerary: Itinerary,

    /// Number of states taken off the queue and expanded.
    pub(super) expanded: usize,

    /// Path nodes allocated.
    pub(super) paths: usize,
}

/// Flight route planner.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{CityId, Flight, FlightId};
/// use flight_planner::planner::Planner;
///
/// let flights = vec![
///     Flight::new(FlightId(0), CityId(0), 0, CityId(1), 10, 5).unwrap(),
///     Flight::new(FlightId(1), CityId(1), 40, CityId(2), 50, 5).unwrap(),
///     Flight::new(FlightId(2), CityId(0), 0, CityId(2), 100, 3).unwrap(),
/// ];
/// let planner = Planner::new(flights);
///
/// let route = planner.cheapest_route(CityId(0), CityId(2), 0, 200);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.total_fare(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    graph: FlightGraph,
    config: PlannerConfig,
}

impl Planner {
    /// Build a planner over `flights` with the default configuration.
    ///
    /// City ids must be dense; see [`FlightGraph::from_flights`].
    pub fn new<I>(flights: I) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        Self::with_config(flights, PlannerConfig::default())
    }

    /// Build a planner over `flights` with a custom configuration.
    pub fn with_config<I>(flights: I, config: PlannerConfig) -> Self
    where
        I: IntoIterator<Item = Flight>,
    {
        Self::from_graph(FlightGraph::from_flights(flights), config)
    }

    /// Wrap an already-built graph.
    pub fn from_graph(graph: FlightGraph, config: PlannerConfig) -> Self {
        debug!(
            cities = graph.city_count(),
            flights = graph.flight_count(),
            min_layover = config.min_layover,
            "Planner built"
        );
        Self { graph, config }
    }

    pub fn graph(&self) -> &FlightGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Route with the fewest flights, arriving as early as possible among those.
    ///
    /// Returns an empty itinerary if `end` is unreachable within `[t1, t2]`.
    pub fn least_flights_earliest_route(
        &self,
        start: CityId,
        end: CityId,
        t1: Time,
        t2: Time,
    ) -> Itinerary {
        self.plan(&RouteQuery::new(
            Objective::LeastFlightsEarliest,
            start,
            end,
            TimeWindow::new(t1, t2),
        ))
    }

    /// Route with the lowest total fare.
    ///
    /// Returns an empty itinerary if `end` is unreachable within `[t1, t2]`.
    pub fn cheapest_route(&self, start: CityId, end: CityId, t1: Time, t2: Time) -> Itinerary {
        self.plan(&RouteQuery::new(
            Objective::Cheapest,
            start,
            end,
            TimeWindow::new(t1, t2),
        ))
    }

    /// Route with the fewest flights, cheapest among those.
    ///
    /// Returns an empty itinerary if `end` is unreachable within `[t1, t2]`,
    /// if either city is outside the graph, or if `start == end`.
    pub fn least_flights_cheapest_route(
        &self,
        start: CityId,
        end: CityId,
        t1: Time,
        t2: Time,
    ) -> Itinerary {
        self.plan(&RouteQuery::new(
            Objective::LeastFlightsCheapest,
            start,
            end,
            TimeWindow::new(t1, t2),
        ))
    }

    /// Answer a route query.
    ///
    /// Queries that fail [`RouteQuery::validate`] get an empty itinerary.
    pub fn plan(&self, query: &RouteQuery) -> Itinerary {
        if let Err(err) = query.validate(&self.graph) {
            debug!(objective = %query.objective, error = %err, "Rejecting route query");
            return Itinerary::empty();
        }

        let ctx = SearchContext {
            graph: &self.graph,
            config: &self.config,
            start: query.start,
            end: query.end,
            window: query.window,
        };

        let outcome = match Self::run(query.objective, &ctx) {
            Ok(outcome) => outcome,
            Err(err) => unreachable!("route search popped past its frontier: {err}"),
        };

        debug!(
            objective = %query.objective,
            start = query.start.index(),
            end = query.end.index(),
            expanded = outcome.expanded,
            paths = outcome.paths,
            flights = outcome.itinerary.len(),
            "Route search complete"
        );

        outcome.itinerary
    }

    fn run(objective: Objective, ctx: &SearchContext<'_>) -> Result<SearchOutcome, EmptyQueueError> {
        match objective {
            Objective::LeastFlightsEarliest => least_flights::search(ctx),
            Objective::Cheapest => cheapest::search(ctx),
            Objective::LeastFlightsCheapest => least_flights_cheapest::search(ctx),
        }
    }
}
