//! Comparer traits shared by the collections
//!
//! The collections take their ordering and equality as type parameters, so a
//! queue or dictionary can be configured without wrapping keys or priorities
//! in newtypes:
//!
//! - [`Comparer`]: a total order, used by [`PriorityQueue`](crate::PriorityQueue)
//!   to rank priorities. [`NaturalOrder`] forwards to [`Ord`], and any
//!   `Fn(&T, &T) -> Ordering` closure is a comparer too.
//! - [`EqualityComparer`]: hashing plus equality, used by
//!   [`OrderedDictionary`](crate::OrderedDictionary) to identify keys.
//!   [`DefaultComparer`] forwards to [`Hash`] and [`Eq`].
//!
//! # Example
//!
//! ```rust
//! use backport_collections::PriorityQueue;
//!
//! // Max-heap through a closure comparer
//! let mut queue = PriorityQueue::with_comparer(|a: &i32, b: &i32| b.cmp(a));
//! queue.enqueue("low", 1);
//! queue.enqueue("high", 9);
//! assert_eq!(queue.dequeue(), Ok(("high", 9)));
//! ```

use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

/// A total order over `T`
///
/// Implementations must be consistent: `compare(a, b)` is the reverse of
/// `compare(b, a)`, and the relation is transitive. A comparer that breaks
/// these rules does not cause undefined behavior, but the collection's
/// ordering guarantees no longer hold.
pub trait Comparer<T: ?Sized> {
    /// Compares two values
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Comparer that uses the type's [`Ord`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparer<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Comparer that inverts another comparer
///
/// `PriorityQueue<E, P, Reversed<NaturalOrder>>` dequeues the largest
/// priority first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Hashing and equality over `T`
///
/// Values that compare equal must produce the same hash. When a collection
/// looks keys up through a borrowed form `Q` of its key type `K`, the
/// comparer must agree on `K` and `Q`: `hash(k) == hash(k.borrow())`, the same
/// contract [`Borrow`](std::borrow::Borrow) places on `Hash` and `Eq`.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns true if both values are considered the same key
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Hashes a value
    fn hash(&self, value: &T) -> u64;
}

/// Equality comparer that uses the type's [`Hash`] and [`Eq`] implementations
///
/// Hashes with `S`, which defaults to [`FxBuildHasher`]. Pass a different
/// [`BuildHasher`] through [`with_hasher`](Self::with_hasher), for example
/// `std::collections::hash_map::RandomState` when keys come from untrusted
/// input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer<S = FxBuildHasher> {
    hasher: S,
}

impl DefaultComparer {
    /// Creates a comparer hashing with [`FxBuildHasher`]
    pub fn new() -> Self {
        Self {
            hasher: FxBuildHasher,
        }
    }
}

impl<S> DefaultComparer<S> {
    /// Creates a comparer hashing with the given builder
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }

    /// Returns the hash builder
    pub fn hasher(&self) -> &S {
        &self.hasher
    }
}

impl<T, S> EqualityComparer<T> for DefaultComparer<S>
where
    T: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        self.hasher.hash_one(value)
    }
}
