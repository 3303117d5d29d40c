//! Best-known labels per city.
//!
//! A label summarizes a search state for domination checks: the objective
//! components plus the earliest time the traveller can depart again. Each
//! city keeps the labels that no other recorded label dominates.

use crate::domain::CityId;

/// Component-wise "at least as good as" between labels.
pub(super) trait Dominates {
    /// Returns true if `self` is no worse than `other` on every component.
    fn dominates(&self, other: &Self) -> bool;
}

/// Per-city sets of mutually non-dominated labels.
#[derive(Debug)]
pub(super) struct BestKnown<L> {
    labels: Vec<Vec<L>>,
}

impl<L: Dominates + PartialEq> BestKnown<L> {
    pub(super) fn new(city_count: usize) -> Self {
        Self {
            labels: (0..city_count).map(|_| Vec::new()).collect(),
        }
    }

    /// Returns true if some recorded label at `city` dominates `label`.
    pub(super) fn is_dominated(&self, city: CityId, label: &L) -> bool {
        self.labels[city.index()]
            .iter()
            .any(|known| known.dominates(label))
    }

    /// Record `label` at `city` unless it is dominated.
    ///
    /// Labels that `label` dominates are dropped. Returns whether the label
    /// was recorded.
    pub(super) fn record(&mut self, city: CityId, label: L) -> bool {
        if self.is_dominated(city, &label) {
            return false;
        }

        let known = &mut self.labels[city.index()];
        known.retain(|existing| !label.dominates(existing));
        known.push(label);
        true
    }

    /// Returns true if `label` is still recorded at `city`.
    pub(super) fn holds(&self, city: CityId, label: &L) -> bool {
        self.labels[city.index()].contains(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Pair(u32, u32);

    impl Dominates for Pair {
        fn dominates(&self, other: &Self) -> bool {
            self.0 <= other.0 && self.1 <= other.1
        }
    }

    #[test]
    fn records_incomparable_labels() {
        let mut best = BestKnown::new(1);
        assert!(best.record(CityId(0), Pair(1, 5)));
        assert!(best.record(CityId(0), Pair(5, 1)));
        assert!(best.holds(CityId(0), &Pair(1, 5)));
        assert!(best.holds(CityId(0), &Pair(5, 1)));
    }

    #[test]
    fn rejects_dominated_and_equal() {
        let mut best = BestKnown::new(1);
        assert!(best.record(CityId(0), Pair(2, 2)));
        assert!(!best.record(CityId(0), Pair(3, 2)));
        assert!(!best.record(CityId(0), Pair(2, 2)));
        assert!(best.is_dominated(CityId(0), &Pair(2, 9)));
        assert!(!best.is_dominated(CityId(0), &Pair(1, 9)));
    }

    #[test]
    fn better_label_evicts_worse() {
        let mut best = BestKnown::new(2);
        assert!(best.record(CityId(1), Pair(4, 4)));
        assert!(best.record(CityId(1), Pair(3, 4)));
        assert!(!best.holds(CityId(1), &Pair(4, 4)));
        assert!(best.holds(CityId(1), &Pair(3, 4)));
    }

    #[test]
    fn cities_are_independent() {
        let mut best = BestKnown::new(2);
        assert!(best.record(CityId(0), Pair(0, 0)));
        assert!(best.record(CityId(1), Pair(9, 9)));
        assert!(!best.is_dominated(CityId(1), &Pair(5, 5)));
    }
}
