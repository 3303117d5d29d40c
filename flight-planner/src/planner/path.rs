//! Arena of partial itineraries.
//!
//! A queued search state refers to its itinerary by a [`PathId`]. Extending
//! a path adds one node pointing at its parent, so sibling states share
//! their common prefix and expanding never copies a flight list.

use crate::domain::{Flight, Itinerary};

/// Handle to the last node of a path in a [`PathArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PathId(usize);

#[derive(Debug)]
struct PathNode {
    flight: Flight,
    parent: Option<PathId>,
}

/// Per-query store of path nodes. `None` stands for the empty path.
#[derive(Debug, Default)]
pub(super) struct PathArena {
    nodes: Vec<PathNode>,
}

impl PathArena {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Append `flight` to the path ending at `parent`.
    pub(super) fn extend(&mut self, parent: Option<PathId>, flight: Flight) -> PathId {
        self.nodes.push(PathNode { flight, parent });
        PathId(self.nodes.len() - 1)
    }

    /// Number of nodes allocated so far.
    pub(super) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Rebuild the flights from the root to `tip`, in traversal order.
    pub(super) fn itinerary(&self, tip: Option<PathId>) -> Itinerary {
        let mut flights = Vec::new();
        let mut cursor = tip;

        while let Some(PathId(index)) = cursor {
            let node = &self.nodes[index];
            flights.push(node.flight);
            cursor = node.parent;
        }

        flights.reverse();
        Itinerary::new(flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CityId, FlightId, Time};

    fn flight(id: u64, from: usize, dep: Time, to: usize, arr: Time) -> Flight {
        Flight::new(FlightId(id), CityId(from), dep, CityId(to), arr, 1).unwrap()
    }

    fn ids(itinerary: &Itinerary) -> Vec<u64> {
        itinerary.iter().map(|f| f.id().0).collect()
    }

    #[test]
    fn empty_path() {
        let arena = PathArena::new();
        assert!(arena.itinerary(None).is_empty());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn rebuilds_in_traversal_order() {
        let mut arena = PathArena::new();
        let a = arena.extend(None, flight(0, 0, 0, 1, 10));
        let b = arena.extend(Some(a), flight(1, 1, 30, 2, 40));
        let c = arena.extend(Some(b), flight(2, 2, 60, 3, 70));
        assert_eq!(ids(&arena.itinerary(Some(c))), vec![0, 1, 2]);
    }

    #[test]
    fn branches_share_prefix() {
        let mut arena = PathArena::new();
        let root = arena.extend(None, flight(0, 0, 0, 1, 10));
        let left = arena.extend(Some(root), flight(1, 1, 30, 2, 40));
        let right = arena.extend(Some(root), flight(2, 1, 35, 3, 45));

        assert_eq!(ids(&arena.itinerary(Some(left))), vec![0, 1]);
        assert_eq!(ids(&arena.itinerary(Some(right))), vec![0, 2]);
        assert_eq!(ids(&arena.itinerary(Some(root))), vec![0]);
        assert_eq!(arena.len(), 3);
    }
}
