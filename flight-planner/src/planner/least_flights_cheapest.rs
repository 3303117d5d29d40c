//! Fewest flights, then cheapest total fare.
//!
//! States are ordered by `(flights, cost)` with the departure time of the
//! flight that produced the state breaking ties; the origin state, which
//! has no flight yet, comes first. A city is finalized per label: a state
//! is expanded only if no earlier expansion at its city dominates it on
//! `(flights, cost, ready)`.

use tracing::trace;

use crate::domain::{CityId, Fare, Time};
use crate::queue::{EmptyQueueError, PriorityQueue, Precedes};

use super::labels::{BestKnown, Dominates};
use super::path::{PathArena, PathId};
use super::search::{SearchContext, SearchOutcome};

#[derive(Debug, Clone, Copy)]
struct Step {
    flights: u32,
    cost: Fare,
    /// Departure of the flight taken into `city`; `None` at the origin.
    departure: Option<Time>,
    city: CityId,
    ready: Time,
    path: Option<PathId>,
}

impl Step {
    fn label(&self) -> StepLabel {
        StepLabel {
            flights: self.flights,
            cost: self.cost,
            ready: self.ready,
        }
    }
}

/// Fewer flights, then lower cost, then earlier departure.
#[derive(Debug, Clone, Copy)]
struct FewestThenCheapest;

impl Precedes<Step> for FewestThenCheapest {
    fn precedes(&self, a: &Step, b: &Step) -> bool {
        (a.flights, a.cost, a.departure) < (b.flights, b.cost, b.departure)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct StepLabel {
    flights: u32,
    cost: Fare,
    ready: Time,
}

impl Dominates for StepLabel {
    fn dominates(&self, other: &Self) -> bool {
        self.flights <= other.flights && self.cost <= other.cost && self.ready <= other.ready
    }
}

pub(super) fn search(ctx: &SearchContext<'_>) -> Result<SearchOutcome, EmptyQueueError> {
    let mut arena = PathArena::new();
    let mut finalized = BestKnown::new(ctx.graph.city_count());
    let mut queue = PriorityQueue::new(FewestThenCheapest);
    let mut optimal: Option<(u32, Fare, Option<PathId>)> = None;
    let mut expanded = 0;

    queue.push(Step {
        flights: 0,
        cost: 0,
        departure: None,
        city: ctx.start,
        ready: ctx.window.earliest,
        path: None,
    });

    while !queue.is_empty() {
        let step = queue.pop()?;

        if step.city == ctx.end {
            let improves = optimal
                .is_none_or(|(flights, cost, _)| (step.flights, step.cost) < (flights, cost));
            if improves {
                optimal = Some((step.flights, step.cost, step.path));
            }
            continue;
        }

        if optimal.is_some_and(|(flights, _, _)| step.flights >= flights) {
            continue;
        }

        if !finalized.record(step.city, step.label()) {
            continue;
        }

        expanded += 1;
        trace!(
            city = step.city.index(),
            flights = step.flights,
            cost = step.cost,
            "Expanding"
        );

        for flight in ctx.departures(step.city, step.ready) {
            let Some(ready) = ctx.ready_after(flight) else {
                continue;
            };
            let next = Step {
                flights: step.flights + 1,
                cost: step.cost.saturating_add(flight.fare()),
                departure: Some(flight.departure_time()),
                city: flight.destination(),
                ready,
                path: None,
            };

            let beaten = optimal
                .is_some_and(|(flights, cost, _)| (next.flights, next.cost) >= (flights, cost));
            if beaten || finalized.is_dominated(next.city, &next.label()) {
                continue;
            }

            let path = arena.extend(step.path, *flight);
            queue.push(Step {
                path: Some(path),
                ..next
            });
        }
    }

    Ok(SearchOutcome {
        itinerary: arena.itinerary(optimal.and_then(|(_, _, path)| path)),
        expanded,
        paths: arena.len(),
    })
}
