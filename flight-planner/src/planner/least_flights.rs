//! Fewest flights, then earliest arrival.
//!
//! States come off the queue ordered by `(flights, arrival)`, so the first
//! state to reach the destination is optimal. A city is expanded again
//! only by a state no earlier expansion dominates on `(flights, ready)`.

use tracing::trace;

use crate::domain::{CityId, Time};
use crate::queue::{EmptyQueueError, PriorityQueue, Precedes};

use super::labels::{BestKnown, Dominates};
use super::path::{PathArena, PathId};
use super::search::{SearchContext, SearchOutcome};

#[derive(Debug, Clone, Copy)]
struct Hop {
    flights: u32,
    arrival: Time,
    /// Earliest departure for the next flight.
    ready: Time,
    city: CityId,
    path: Option<PathId>,
}

/// Fewer flights first, earlier arrival on ties.
#[derive(Debug, Clone, Copy)]
struct FewestThenEarliest;

impl Precedes<Hop> for FewestThenEarliest {
    fn precedes(&self, a: &Hop, b: &Hop) -> bool {
        (a.flights, a.arrival) < (b.flights, b.arrival)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HopLabel {
    flights: u32,
    ready: Time,
}

impl Dominates for HopLabel {
    fn dominates(&self, other: &Self) -> bool {
        self.flights <= other.flights && self.ready <= other.ready
    }
}

/// Best arrival at the destination found so far.
#[derive(Clone, Copy)]
struct Best {
    flights: u32,
    arrival: Time,
    path: Option<PathId>,
}

pub(super) fn search(ctx: &SearchContext<'_>) -> Result<SearchOutcome, EmptyQueueError> {
    let mut arena = PathArena::new();
    let mut visited = BestKnown::new(ctx.graph.city_count());
    let mut queue = PriorityQueue::new(FewestThenEarliest);
    let mut best: Option<Best> = None;
    let mut expanded = 0;

    queue.push(Hop {
        flights: 0,
        arrival: ctx.window.earliest,
        ready: ctx.window.earliest,
        city: ctx.start,
        path: None,
    });

    while !queue.is_empty() {
        let hop = queue.pop()?;

        if hop.city == ctx.end {
            let improves = best.is_none_or(|b| hop.flights <= b.flights && hop.arrival < b.arrival);
            if improves {
                best = Some(Best {
                    flights: hop.flights,
                    arrival: hop.arrival,
                    path: hop.path,
                });
            }
            continue;
        }

        let label = HopLabel {
            flights: hop.flights,
            ready: hop.ready,
        };
        if !visited.record(hop.city, label) {
            continue;
        }

        expanded += 1;
        trace!(
            city = hop.city.index(),
            flights = hop.flights,
            arrival = hop.arrival,
            "Expanding"
        );

        let flights = hop.flights + 1;
        if best.is_some_and(|b| flights > b.flights) {
            continue;
        }

        for flight in ctx.departures(hop.city, hop.ready) {
            let Some(ready) = ctx.ready_after(flight) else {
                continue;
            };
            let path = arena.extend(hop.path, *flight);
            queue.push(Hop {
                flights,
                arrival: flight.arrival_time(),
                ready,
                city: flight.destination(),
                path: Some(path),
            });
        }
    }

    Ok(SearchOutcome {
        itinerary: arena.itinerary(best.and_then(|b| b.path)),
        expanded,
        paths: arena.len(),
    })
}
