//! Binary min-heap priority queue
//!
//! [`PriorityQueue`] stores `(element, priority)` pairs in a dense array laid
//! out as a binary heap (children of node `i` live at `2i + 1` and `2i + 2`)
//! and always exposes the pair with the smallest priority first. Priorities
//! are ranked by a [`Comparer`], [`NaturalOrder`] unless another one is
//! given at construction.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `enqueue`          | O(log n)   |
//! | `dequeue`          | O(log n)   |
//! | `peek`             | O(1)       |
//! | `enqueue_dequeue`  | O(log n)   |
//! | `from_items`       | O(n)       |
//! | `len`              | O(1)       |
//!
//! # Ordering of equal priorities
//!
//! Pairs with equal priorities come out in an unspecified relative order.
//! The queue is not stable, and callers must not rely on insertion order
//! among ties.
//!
//! # Example
//!
//! ```rust
//! use backport_collections::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue("three", 3);
//! queue.enqueue("one", 1);
//! queue.enqueue("two", 2);
//!
//! assert_eq!(queue.peek(), Ok((&"one", &1)));
//! assert_eq!(queue.dequeue(), Ok(("one", 1)));
//! assert_eq!(queue.dequeue(), Ok(("two", 2)));
//! assert_eq!(queue.dequeue(), Ok(("three", 3)));
//! assert!(queue.try_dequeue().is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use crate::error::{CollectionError, InvariantError};
use crate::traits::{Comparer, NaturalOrder};

/// A binary min-heap of `(element, priority)` pairs
///
/// Not synchronized: every mutation takes `&mut self`. Share it between
/// threads behind a lock.
#[derive(Clone)]
pub struct PriorityQueue<E, P, C = NaturalOrder> {
    /// Heap-ordered `(element, priority)` pairs
    nodes: Vec<(E, P)>,
    comparer: C,
}

impl<E, P> PriorityQueue<E, P> {
    /// Creates an empty queue ordered by `P`'s [`Ord`] implementation
    pub fn new() -> Self {
        Self::with_comparer(NaturalOrder)
    }

    /// Creates an empty queue with room for `capacity` pairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparer(capacity, NaturalOrder)
    }
}

impl<E, P: Ord> PriorityQueue<E, P> {
    /// Builds a queue from a sequence of pairs, heapifying once in O(n)
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
    {
        Self::from_items_with_comparer(items, NaturalOrder)
    }
}

impl<E, P, C> PriorityQueue<E, P, C> {
    /// Creates an empty queue ordered by `comparer`
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            nodes: Vec::new(),
            comparer,
        }
    }

    /// Creates an empty queue ordered by `comparer` with room for `capacity` pairs
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            comparer,
        }
    }

    /// Returns the number of pairs in the queue
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the queue holds no pairs
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of pairs the queue can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the comparer that ranks priorities
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Removes every pair, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Grows the backing storage to hold at least `capacity` pairs
    ///
    /// When growth is needed the new capacity is at least double the old one,
    /// so repeated small requests stay amortized O(1). Returns the resulting
    /// capacity. Never shrinks and never changes the queue's contents.
    pub fn ensure_capacity(&mut self, capacity: usize) -> usize {
        let current = self.nodes.capacity();
        if current < capacity {
            let target = capacity.max(current.saturating_mul(2));
            self.nodes.reserve_exact(target - self.nodes.len());
        }
        self.nodes.capacity()
    }

    /// Releases unused capacity if less than 90% of it is in use
    pub fn trim_excess(&mut self) {
        let threshold = (self.nodes.capacity() as f64 * 0.9) as usize;
        if self.nodes.len() < threshold {
            self.nodes.shrink_to_fit();
        }
    }

    /// Returns a view over all pairs in heap-array order
    ///
    /// The first pair is the root (the current minimum). Beyond that, no
    /// order is guaranteed.
    pub fn unordered_items(&self) -> UnorderedItems<'_, E, P> {
        UnorderedItems { nodes: &self.nodes }
    }

    /// Consumes the queue, returning its pairs in heap-array order
    pub fn into_vec(self) -> Vec<(E, P)> {
        self.nodes
    }
}

impl<E, P, C: Comparer<P>> PriorityQueue<E, P, C> {
    /// Builds a queue from a sequence of pairs ordered by `comparer`
    ///
    /// All pairs are appended first and then heapified in a single O(n) pass.
    pub fn from_items_with_comparer<I>(items: I, comparer: C) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
    {
        let mut queue = Self {
            nodes: items.into_iter().collect(),
            comparer,
        };
        queue.heapify();
        queue
    }

    /// Adds a pair to the queue
    pub fn enqueue(&mut self, element: E, priority: P) {
        self.nodes.push((element, priority));
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the pair with the smallest priority
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<(E, P), CollectionError> {
        self.try_dequeue().ok_or(CollectionError::EmptyCollection)
    }

    /// Removes and returns the pair with the smallest priority, if any
    pub fn try_dequeue(&mut self) -> Option<(E, P)> {
        if self.nodes.is_empty() {
            return None;
        }

        let last_idx = self.nodes.len() - 1;
        self.nodes.swap(0, last_idx);
        let result = self.nodes.pop();

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Returns the pair with the smallest priority without removing it
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<(&E, &P), CollectionError> {
        self.try_peek().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns the pair with the smallest priority, if any
    pub fn try_peek(&self) -> Option<(&E, &P)> {
        self.nodes.first().map(|(e, p)| (e, p))
    }

    /// Adds a pair and immediately removes the smallest one
    ///
    /// Returns exactly what `enqueue` followed by `dequeue` would return, with
    /// at most one sift-down. If the queue is empty, or `priority` does not
    /// rank after the current root, the new pair is handed straight back and
    /// the queue is left untouched.
    pub fn enqueue_dequeue(&mut self, element: E, priority: P) -> (E, P) {
        let replaces_root = match self.nodes.first() {
            Some((_, root)) => self.comparer.compare(&priority, root) == Ordering::Greater,
            None => false,
        };
        if !replaces_root {
            return (element, priority);
        }

        let root = mem::replace(&mut self.nodes[0], (element, priority));
        self.sift_down(0);
        root
    }

    /// Removes the smallest pair and adds a new one in a single heap fixup
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyCollection`] if the queue is empty; the
    /// new pair is not added in that case.
    pub fn dequeue_enqueue(&mut self, element: E, priority: P) -> Result<(E, P), CollectionError> {
        if self.nodes.is_empty() {
            return Err(CollectionError::EmptyCollection);
        }

        let root = mem::replace(&mut self.nodes[0], (element, priority));
        self.sift_down(0);
        Ok(root)
    }

    /// Adds every pair from `items`
    ///
    /// An empty queue is bulk loaded and heapified once; otherwise each pair
    /// is enqueued in turn.
    pub fn enqueue_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (E, P)>,
    {
        if self.nodes.is_empty() {
            self.nodes.extend(items);
            self.heapify();
            return;
        }

        let iter = items.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for (element, priority) in iter {
            self.enqueue(element, priority);
        }
    }

    /// Adds every element from `elements`, all with the same priority
    pub fn enqueue_range_with_priority<I>(&mut self, elements: I, priority: P)
    where
        I: IntoIterator<Item = E>,
        P: Clone,
    {
        if self.nodes.is_empty() {
            // Equal priorities already satisfy the heap property.
            self.nodes
                .extend(elements.into_iter().map(|e| (e, priority.clone())));
            return;
        }

        let iter = elements.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for element in iter {
            self.enqueue(element, priority.clone());
        }
    }

    /// Consumes the queue, returning its pairs from smallest to largest priority
    pub fn into_sorted_vec(mut self) -> Vec<(E, P)> {
        let mut sorted = Vec::with_capacity(self.nodes.len());
        while let Some(pair) = self.try_dequeue() {
            sorted.push(pair);
        }
        sorted
    }

    /// Verifies that every node ranks no earlier than its parent
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for child in 1..self.nodes.len() {
            let parent = (child - 1) / 2;
            if self.less(child, parent) {
                return Err(InvariantError::new(format!(
                    "heap property violated: node {child} orders before its parent {parent}"
                )));
            }
        }
        Ok(())
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.comparer.compare(&self.nodes[a].1, &self.nodes[b].1) == Ordering::Less
    }

    /// Restore the heap property over the whole array, bottom-up
    fn heapify(&mut self) {
        let len = self.nodes.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.nodes.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<E, P, C: Default> Default for PriorityQueue<E, P, C> {
    fn default() -> Self {
        Self::with_comparer(C::default())
    }
}

impl<E: fmt::Debug, P: fmt::Debug, C> fmt::Debug for PriorityQueue<E, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.nodes.len())
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<E, P, C: Comparer<P> + Default> From<Vec<(E, P)>> for PriorityQueue<E, P, C> {
    fn from(nodes: Vec<(E, P)>) -> Self {
        Self::from_items_with_comparer(nodes, C::default())
    }
}

impl<E, P, C: Comparer<P> + Default> FromIterator<(E, P)> for PriorityQueue<E, P, C> {
    fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
        Self::from_items_with_comparer(iter, C::default())
    }
}

impl<E, P, C: Comparer<P>> Extend<(E, P)> for PriorityQueue<E, P, C> {
    fn extend<I: IntoIterator<Item = (E, P)>>(&mut self, iter: I) {
        self.enqueue_range(iter);
    }
}

impl<E, P, C> IntoIterator for PriorityQueue<E, P, C> {
    type Item = (E, P);
    type IntoIter = std::vec::IntoIter<(E, P)>;

    /// Iterates in heap-array order, not priority order
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

/// Borrowed view over a queue's pairs in heap-array order
///
/// Returned by [`PriorityQueue::unordered_items`]. The view can be iterated
/// any number of times; each [`iter`](Self::iter) call starts from the root.
pub struct UnorderedItems<'a, E, P> {
    nodes: &'a [(E, P)],
}

impl<'a, E, P> UnorderedItems<'a, E, P> {
    /// Number of pairs in the view
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the view is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates the pairs, root first
    pub fn iter(&self) -> UnorderedIter<'a, E, P> {
        UnorderedIter {
            inner: self.nodes.iter(),
        }
    }
}

impl<E, P> Clone for UnorderedItems<'_, E, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, P> Copy for UnorderedItems<'_, E, P> {}

impl<E: fmt::Debug, P: fmt::Debug> fmt::Debug for UnorderedItems<'_, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, E, P> IntoIterator for UnorderedItems<'a, E, P> {
    type Item = (&'a E, &'a P);
    type IntoIter = UnorderedIter<'a, E, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E, P> IntoIterator for &UnorderedItems<'a, E, P> {
    type Item = (&'a E, &'a P);
    type IntoIter = UnorderedIter<'a, E, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a queue's pairs in heap-array order
pub struct UnorderedIter<'a, E, P> {
    inner: slice::Iter<'a, (E, P)>,
}

impl<E, P> Clone for UnorderedIter<'_, E, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, E, P> Iterator for UnorderedIter<'a, E, P> {
    type Item = (&'a E, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(e, p)| (e, p))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E, P> DoubleEndedIterator for UnorderedIter<'_, E, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(e, p)| (e, p))
    }
}

impl<E, P> ExactSizeIterator for UnorderedIter<'_, E, P> {}

impl<E, P> FusedIterator for UnorderedIter<'_, E, P> {}
