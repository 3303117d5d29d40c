//! Binary min-heap over a caller-supplied ordering.
//!
//! Every route search drives its best-first expansion through one
//! [`PriorityQueue`]. The ordering is a strategy value implementing
//! [`Precedes`], so each search plugs in its own lexicographic rule
//! without a separate heap type per rule.

/// Error returned when popping from an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("pop from an empty priority queue")]
pub struct EmptyQueueError;

/// A strict "comes before" relation used to order queue items.
///
/// The relation must be irreflexive and transitive on the items actually
/// compared. It need not be total: items where neither precedes the other
/// are treated as equal and come out in unspecified order.
pub trait Precedes<T> {
    /// Returns true if `a` should be popped before `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Precedes<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders items by their `Ord` implementation, smallest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl<T: Ord> Precedes<T> for Ascending {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Binary min-heap ordered by `C`.
///
/// Duplicates are all retained. Ordering among items that don't precede
/// one another is unspecified (the heap is not stable).
///
/// # Examples
///
/// ```
/// use flight_planner::queue::PriorityQueue;
///
/// // Longest string first
/// let mut queue = PriorityQueue::new(|a: &&str, b: &&str| a.len() > b.len());
/// queue.push("ab");
/// queue.push("abcd");
/// queue.push("a");
///
/// assert_eq!(queue.pop(), Ok("abcd"));
/// assert_eq!(queue.pop(), Ok("ab"));
/// assert_eq!(queue.pop(), Ok("a"));
/// assert!(queue.pop().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, C> {
    heap: Vec<T>,
    order: C,
}

impl<T: Ord> PriorityQueue<T, Ascending> {
    /// Create a queue that pops the smallest item by `Ord` first.
    pub fn ascending() -> Self {
        Self::new(Ascending)
    }
}

impl<T, C: Precedes<T>> PriorityQueue<T, C> {
    /// Create an empty queue ordered by `order`.
    pub fn new(order: C) -> Self {
        Self {
            heap: Vec::new(),
            order,
        }
    }

    /// Create an empty queue with room for `capacity` items.
    pub fn with_capacity(order: C, capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            order,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert an item. Amortized O(log n).
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the first item by the ordering. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyQueueError> {
        if self.heap.is_empty() {
            return Err(EmptyQueueError);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().ok_or(EmptyQueueError)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.order.precedes(&self.heap[index], &self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.heap.len();

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut first = index;

            if left < size && self.order.precedes(&self.heap[left], &self.heap[first]) {
                first = left;
            }
            if right < size && self.order.precedes(&self.heap[right], &self.heap[first]) {
                first = right;
            }
            if first == index {
                break;
            }

            self.heap.swap(index, first);
            index = first;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, C: Precedes<T>>(queue: &mut PriorityQueue<T, C>) -> Vec<T> {
        let mut out = Vec::new();
        while !queue.is_empty() {
            out.push(queue.pop().unwrap());
        }
        out
    }

    #[test]
    fn pops_in_ascending_order() {
        let mut queue = PriorityQueue::ascending();
        for x in [5, 1, 4, 2, 3] {
            queue.push(x);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(drain(&mut queue), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn pop_empty_fails() {
        let mut queue: PriorityQueue<i32, _> = PriorityQueue::ascending();
        assert_eq!(queue.pop(), Err(EmptyQueueError));
    }

    #[test]
    fn pop_after_drain_fails() {
        let mut queue = PriorityQueue::ascending();
        queue.push(1);
        assert_eq!(queue.pop(), Ok(1));
        assert_eq!(queue.pop(), Err(EmptyQueueError));
    }

    #[test]
    fn retains_duplicates() {
        let mut queue = PriorityQueue::ascending();
        for x in [2, 2, 1, 2] {
            queue.push(x);
        }
        assert_eq!(drain(&mut queue), vec![1, 2, 2, 2]);
    }

    #[test]
    fn closure_ordering() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
        for x in [3, 9, 1] {
            queue.push(x);
        }
        assert_eq!(drain(&mut queue), vec![9, 3, 1]);
    }

    #[test]
    fn lexicographic_pairs() {
        let order = |a: &(u32, u64), b: &(u32, u64)| a.0 < b.0 || (a.0 == b.0 && a.1 < b.1);
        let mut queue = PriorityQueue::with_capacity(order, 4);
        for pair in [(2, 1), (1, 9), (1, 3), (0, 100)] {
            queue.push(pair);
        }
        assert_eq!(drain(&mut queue), vec![(0, 100), (1, 3), (1, 9), (2, 1)]);
    }

    #[test]
    fn partial_order_keeps_all_items() {
        // Only the first component is compared
        let mut queue = PriorityQueue::new(|a: &(u8, char), b: &(u8, char)| a.0 < b.0);
        for item in [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')] {
            queue.push(item);
        }
        let out = drain(&mut queue);
        let keys: Vec<_> = out.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![0, 0, 1, 1]);

        let mut tags: Vec<_> = out.iter().map(|(_, c)| *c).collect();
        tags.sort();
        assert_eq!(tags, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            EmptyQueueError.to_string(),
            "pop from an empty priority queue"
        );
    }
}
