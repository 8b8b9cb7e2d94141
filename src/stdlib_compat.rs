//! Standard library compatibility layer
//!
//! Provides [`MinHeap`], shaped like `std::collections::BinaryHeap` but backed
//! by [`PriorityQueue`].
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: This is a min-heap, while `BinaryHeap` is a max-heap.
//!   Use `std::cmp::Reverse<T>` to get max-heap behavior.
//!
//! # Example
//!
//! ```rust
//! use backport_collections::stdlib_compat::MinHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap = MinHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&3)); // min-heap, unlike BinaryHeap's max-heap
//! assert_eq!(heap.pop(), Some(3));
//! ```

use crate::priority_queue::PriorityQueue;

/// A `BinaryHeap`-style min-heap where each item is its own priority
///
/// Items with equal ordering come out in an unspecified relative order.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    queue: PriorityQueue<(), T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: PriorityQueue::with_capacity(capacity),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Pushes an item onto the heap
    ///
    /// The item itself serves as the priority.
    pub fn push(&mut self, item: T) {
        self.queue.enqueue((), item)
    }

    /// Returns a reference to the smallest item without removing it
    ///
    /// This is equivalent to `BinaryHeap::peek`, but returns the minimum (not maximum).
    pub fn peek(&self) -> Option<&T> {
        self.queue.try_peek().map(|(_, priority)| priority)
    }

    /// Removes and returns the smallest item
    ///
    /// This is equivalent to `BinaryHeap::pop`, but returns the minimum (not maximum).
    pub fn pop(&mut self) -> Option<T> {
        self.queue.try_dequeue().map(|(_, priority)| priority)
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Consumes the heap, returning its items in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.queue
            .into_sorted_vec()
            .into_iter()
            .map(|(_, priority)| priority)
            .collect()
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            queue: PriorityQueue::from_items(iter.into_iter().map(|item| ((), item))),
        }
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.queue
            .enqueue_range(iter.into_iter().map(|item| ((), item)));
    }
}
