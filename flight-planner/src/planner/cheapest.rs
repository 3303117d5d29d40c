//! Cheapest total fare.
//!
//! Dijkstra over accumulated fare. The best-known table plays the role of
//! `min_cost[city]`, but keyed on `(fare, ready)`: a pricier way into a city
//! survives if it is the only one that lands early enough for some onward
//! connection.

use tracing::trace;

use crate::domain::{CityId, Fare, Time};
use crate::queue::{EmptyQueueError, PriorityQueue, Precedes};

use super::labels::{BestKnown, Dominates};
use super::path::{PathArena, PathId};
use super::search::{SearchContext, SearchOutcome};

#[derive(Debug, Clone, Copy)]
struct Fared {
    fare: Fare,
    city: CityId,
    arrival: Time,
    ready: Time,
    path: Option<PathId>,
}

impl Fared {
    fn label(&self) -> FareLabel {
        FareLabel {
            fare: self.fare,
            ready: self.ready,
        }
    }
}

/// Lower accumulated fare first.
#[derive(Debug, Clone, Copy)]
struct LowestFare;

impl Precedes<Fared> for LowestFare {
    fn precedes(&self, a: &Fared, b: &Fared) -> bool {
        a.fare < b.fare
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FareLabel {
    fare: Fare,
    ready: Time,
}

impl Dominates for FareLabel {
    fn dominates(&self, other: &Self) -> bool {
        self.fare <= other.fare && self.ready <= other.ready
    }
}

pub(super) fn search(ctx: &SearchContext<'_>) -> Result<SearchOutcome, EmptyQueueError> {
    let mut arena = PathArena::new();
    let mut min_cost = BestKnown::new(ctx.graph.city_count());
    let mut queue = PriorityQueue::new(LowestFare);
    let mut best: Option<(Fare, Option<PathId>)> = None;
    let mut expanded = 0;

    let origin = Fared {
        fare: 0,
        city: ctx.start,
        arrival: ctx.window.earliest,
        ready: ctx.window.earliest,
        path: None,
    };
    min_cost.record(ctx.start, origin.label());
    queue.push(origin);

    while !queue.is_empty() {
        let state = queue.pop()?;

        if state.city == ctx.end {
            if best.is_none_or(|(fare, _)| state.fare < fare) {
                best = Some((state.fare, state.path));
            }
            continue;
        }

        if best.is_some_and(|(fare, _)| state.fare >= fare) {
            continue;
        }

        // Superseded by a cheaper-and-earlier way in since it was queued
        if !min_cost.holds(state.city, &state.label()) {
            continue;
        }

        expanded += 1;
        trace!(
            city = state.city.index(),
            fare = state.fare,
            arrival = state.arrival,
            "Expanding"
        );

        for flight in ctx.departures(state.city, state.ready) {
            let Some(ready) = ctx.ready_after(flight) else {
                continue;
            };
            let next = Fared {
                fare: state.fare.saturating_add(flight.fare()),
                city: flight.destination(),
                arrival: flight.arrival_time(),
                ready,
                path: None,
            };

            if min_cost.record(next.city, next.label()) {
                let path = arena.extend(state.path, *flight);
                queue.push(Fared {
                    path: Some(path),
                    ..next
                });
            }
        }
    }

    Ok(SearchOutcome {
        itinerary: arena.itinerary(best.and_then(|(_, path)| path)),
        expanded,
        paths: arena.len(),
    })
}
