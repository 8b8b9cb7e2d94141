//! Priority queue and insertion-ordered dictionary
//!
//! This crate provides two generic collections whose observable behavior
//! follows the newer reference collection APIs, for code that wants the same
//! surface everywhere:
//!
//! - **[`PriorityQueue`]**: binary min-heap of `(element, priority)` pairs with
//!   a pluggable comparer, O(n) bulk loading, fused `enqueue_dequeue` /
//!   `dequeue_enqueue`, and an unordered view of its contents
//! - **[`OrderedDictionary`]**: hash map that keeps positional (insertion)
//!   order, with index-based `insert` / `remove_at` / `get_at` / `set_at` and
//!   a pluggable equality comparer
//! - **[`MinHeap`](stdlib_compat::MinHeap)**: a `BinaryHeap`-style facade over
//!   `PriorityQueue` for items that are their own priority
//!
//! Neither collection is synchronized. Every mutation takes `&mut self`;
//! wrap an instance in a lock to share it between threads.
//!
//! # Example
//!
//! ```rust
//! use backport_collections::{OrderedDictionary, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new();
//! for (task, priority) in [("write", 2), ("plan", 1), ("ship", 3)] {
//!     queue.enqueue(task, priority);
//! }
//! assert_eq!(queue.dequeue(), Ok(("plan", 1)));
//!
//! let mut dict = OrderedDictionary::new();
//! dict.add("a", 1).unwrap();
//! dict.add("c", 3).unwrap();
//! dict.insert(1, "b", 2).unwrap();
//! assert_eq!(dict.keys().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//! ```

pub mod error;
pub mod ordered_dictionary;
pub mod priority_queue;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use error::{CollectionError, InvariantError};
pub use ordered_dictionary::OrderedDictionary;
pub use priority_queue::{PriorityQueue, UnorderedItems};
pub use traits::{Comparer, DefaultComparer, EqualityComparer, NaturalOrder, Reversed};
