//! Insertion-ordered dictionary with positional access
//!
//! [`OrderedDictionary`] combines hash-map lookups with a stable, positional
//! order. Entries live in a dense `Vec` in the order they were added (or
//! placed with [`insert`](OrderedDictionary::insert)), and a
//! [`hashbrown::HashTable`] maps each key's hash to its position in that `Vec`.
//!
//! ```text
//!   indices: HashTable<usize>          entries: Vec<Bucket>
//!   ┌──────────────┐                   ┌───┬──────────────────────┐
//!   │ h("c") -> 0  │ ────────────────▶ │ 0 │ hash, "c", value     │
//!   │ h("a") -> 1  │ ────────────────▶ │ 1 │ hash, "a", value     │
//!   │ h("b") -> 2  │ ────────────────▶ │ 2 │ hash, "b", value     │
//!   └──────────────┘                   └───┴──────────────────────┘
//! ```
//!
//! Each bucket caches its key's hash, so the table can be resized or
//! re-pointed without calling the comparer again.
//!
//! # Time Complexity
//!
//! | Operation                      | Complexity    |
//! |--------------------------------|---------------|
//! | `add` / `try_add` / `set`      | O(1) average  |
//! | `get` / `contains_key` / `index_of` | O(1) average |
//! | `get_at` / `set_at`            | O(1)          |
//! | `remove` / `remove_at`         | O(n)          |
//! | `insert`                       | O(n)          |
//! | `contains_value`               | O(n)          |
//!
//! Removal and positional insertion shift every later entry, so they are
//! linear in the number of entries after the affected position.
//!
//! # Example
//!
//! ```rust
//! use backport_collections::OrderedDictionary;
//!
//! let mut dict = OrderedDictionary::new();
//! dict.add("c", 3).unwrap();
//! dict.add("a", 1).unwrap();
//! dict.add("b", 2).unwrap();
//!
//! assert_eq!(dict.keys().copied().collect::<Vec<_>>(), ["c", "a", "b"]);
//! assert_eq!(dict.index_of("a"), Some(1));
//!
//! dict.remove("c");
//! assert_eq!(dict.get_at(0), Ok((&"a", &1)));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::mem;
use std::ops::{Index, Range};
use std::slice;

use hashbrown::HashTable;

use crate::error::{CollectionError, InvariantError};
use crate::traits::{DefaultComparer, EqualityComparer};

#[derive(Clone)]
struct Bucket<K, V> {
    hash: u64,
    key: K,
    value: V,
}

/// A hash map that preserves positional order and supports index-based mutation
///
/// Keys are identified through an [`EqualityComparer`], [`DefaultComparer`]
/// unless another one is given at construction. Iteration always follows
/// position, never hash order.
///
/// Not synchronized: every mutation takes `&mut self`. Share it between
/// threads behind a lock.
#[derive(Clone)]
pub struct OrderedDictionary<K, V, C = DefaultComparer> {
    entries: Vec<Bucket<K, V>>,
    /// Position of every entry, keyed by the entry's cached hash
    indices: HashTable<usize>,
    comparer: C,
}

impl<K, V> OrderedDictionary<K, V> {
    /// Creates an empty dictionary using [`DefaultComparer`]
    pub fn new() -> Self {
        Self::with_comparer(DefaultComparer::new())
    }

    /// Creates an empty dictionary with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparer(capacity, DefaultComparer::new())
    }
}

impl<K: Hash + Eq, V> OrderedDictionary<K, V> {
    /// Copies entries from `entries` in order
    ///
    /// # Errors
    /// Returns [`CollectionError::DuplicateKey`] if the source repeats a key.
    pub fn try_from_entries<I>(entries: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::try_from_entries_with_comparer(entries, DefaultComparer::new())
    }
}

impl<K, V, C> OrderedDictionary<K, V, C> {
    /// Creates an empty dictionary that identifies keys with `comparer`
    pub fn with_comparer(comparer: C) -> Self {
        Self {
            entries: Vec::new(),
            indices: HashTable::new(),
            comparer,
        }
    }

    /// Creates an empty dictionary with room for `capacity` entries
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: HashTable::with_capacity(capacity),
            comparer,
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the dictionary can hold without reallocating
    ///
    /// This is the smaller of the entry storage and the hash index capacities.
    pub fn capacity(&self) -> usize {
        self.entries.capacity().min(self.indices.capacity())
    }

    /// Returns the comparer that identifies keys
    pub fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.indices.clear();
    }

    /// Grows the storage to hold at least `capacity` entries, returning the
    /// resulting capacity
    pub fn ensure_capacity(&mut self, capacity: usize) -> usize {
        if self.entries.capacity() < capacity {
            let len = self.entries.len();
            self.entries.reserve_exact(capacity - len);
        }
        if self.indices.capacity() < capacity {
            let entries = &self.entries;
            self.indices
                .reserve(capacity - self.indices.len(), |&i| entries[i].hash);
        }
        self.capacity()
    }

    /// Shrinks the storage to fit the current entries
    pub fn trim_excess(&mut self) {
        let entries = &self.entries;
        self.indices.shrink_to_fit(|&i| entries[i].hash);
        self.entries.shrink_to_fit();
    }

    /// Shrinks the storage to hold `capacity` entries
    ///
    /// # Errors
    /// Returns [`CollectionError::ArgumentOutOfRange`] if `capacity` is less
    /// than [`len`](Self::len).
    pub fn trim_excess_to(&mut self, capacity: usize) -> Result<(), CollectionError> {
        let len = self.entries.len();
        if capacity < len {
            return Err(CollectionError::ArgumentOutOfRange {
                name: "capacity",
                value: capacity,
                min: len,
            });
        }

        let entries = &self.entries;
        self.indices.shrink_to(capacity, |&i| entries[i].hash);
        self.entries.shrink_to(capacity);
        Ok(())
    }

    /// Returns the entry at `index`
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`.
    pub fn get_at(&self, index: usize) -> Result<(&K, &V), CollectionError> {
        self.entries
            .get(index)
            .map(|b| (&b.key, &b.value))
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Returns the entry at `index` with a mutable value
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`.
    pub fn get_at_mut(&mut self, index: usize) -> Result<(&K, &mut V), CollectionError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .map(|b| (&b.key, &mut b.value))
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// Replaces the value at `index`, keeping its key and position
    ///
    /// Returns the previous value.
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`.
    pub fn set_at(&mut self, index: usize, value: V) -> Result<V, CollectionError> {
        let (_, slot) = self.get_at_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Removes the entry at `index`, shifting later entries down by one
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<(K, V), CollectionError> {
        let len = self.entries.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        Ok(self.shift_remove(index))
    }

    /// Returns true if any entry holds `value` (linear scan)
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|b| b.value == *value)
    }

    /// Returns the entry for `key` along with its position
    pub fn get_full<Q>(&self, key: &Q) -> Option<(usize, &K, &V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        let index = self.index_of(key)?;
        let bucket = &self.entries[index];
        Some((index, &bucket.key, &bucket.value))
    }

    /// Returns the value for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        let index = self.index_of(key)?;
        Some(&self.entries[index].value)
    }

    /// Returns a mutable reference to the value for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        let index = self.index_of(key)?;
        Some(&mut self.entries[index].value)
    }

    /// Returns the value for `key`
    ///
    /// # Errors
    /// Returns [`CollectionError::KeyNotFound`] if the key is absent.
    pub fn value_of<Q>(&self, key: &Q) -> Result<&V, CollectionError>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        self.get(key).ok_or(CollectionError::KeyNotFound)
    }

    /// Returns true if the dictionary holds `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        self.index_of(key).is_some()
    }

    /// Returns the position of `key`
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        if self.entries.is_empty() {
            return None;
        }
        let hash = self.comparer.hash(key);
        self.find(hash, key)
    }

    /// Removes `key`, returning its value; later entries shift down by one
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key`, returning the stored key and value
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        let index = self.index_of(key)?;
        Some(self.shift_remove(index))
    }

    /// Iterates the entries in positional order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates the entries in positional order with mutable values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    /// Iterates the keys in positional order
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.iter(),
        }
    }

    /// Iterates the values in positional order
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.iter(),
        }
    }

    /// Iterates mutable values in positional order
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.entries.iter_mut(),
        }
    }

    fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: EqualityComparer<Q>,
    {
        let entries = &self.entries;
        let comparer = &self.comparer;
        self.indices
            .find(hash, |&i| {
                entries[i].hash == hash && comparer.equals(entries[i].key.borrow(), key)
            })
            .copied()
    }

    /// Appends an entry whose key is known to be absent
    fn push_entry(&mut self, hash: u64, key: K, value: V) -> usize {
        let index = self.entries.len();
        let entries = &self.entries;
        self.indices.insert_unique(hash, index, |&i| entries[i].hash);
        self.entries.push(Bucket { hash, key, value });
        index
    }

    /// Removes the entry at a valid `index` and re-points every later entry
    fn shift_remove(&mut self, index: usize) -> (K, V) {
        let bucket = self.entries.remove(index);
        if let Ok(slot) = self.indices.find_entry(bucket.hash, |&i| i == index) {
            slot.remove();
        }
        self.decrement_indices(index..self.entries.len());
        debug_assert_eq!(self.indices.len(), self.entries.len());
        (bucket.key, bucket.value)
    }

    /// Entries in `moved` were each shifted one position down; fix their slots
    fn decrement_indices(&mut self, moved: Range<usize>) {
        if moved.len() > self.indices.len() / 2 {
            let start = moved.start;
            for slot in self.indices.iter_mut() {
                if *slot > start {
                    *slot -= 1;
                }
            }
            return;
        }

        // Ascending, so an updated slot never collides with one still pending.
        for new in moved {
            let hash = self.entries[new].hash;
            if let Some(slot) = self.indices.find_mut(hash, |&i| i == new + 1) {
                *slot = new;
            }
        }
    }

    /// Entries in `moved` were each shifted one position up; fix their slots
    fn increment_indices(&mut self, moved: Range<usize>) {
        if moved.len() > self.indices.len() / 2 {
            let start = moved.start;
            for slot in self.indices.iter_mut() {
                if *slot >= start - 1 {
                    *slot += 1;
                }
            }
            return;
        }

        for new in moved.rev() {
            let hash = self.entries[new].hash;
            if let Some(slot) = self.indices.find_mut(hash, |&i| i == new - 1) {
                *slot = new;
            }
        }
    }
}

impl<K, V, C: EqualityComparer<K>> OrderedDictionary<K, V, C> {
    /// Copies entries from `entries` in order, identifying keys with `comparer`
    ///
    /// # Errors
    /// Returns [`CollectionError::DuplicateKey`] if the source repeats a key.
    pub fn try_from_entries_with_comparer<I>(
        entries: I,
        comparer: C,
    ) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = entries.into_iter();
        let mut dict = Self::with_capacity_and_comparer(iter.size_hint().0, comparer);
        for (key, value) in iter {
            dict.add(key, value)?;
        }
        Ok(dict)
    }

    /// Appends a new entry
    ///
    /// # Errors
    /// Returns [`CollectionError::DuplicateKey`] if `key` is already present;
    /// the dictionary is left unchanged.
    pub fn add(&mut self, key: K, value: V) -> Result<(), CollectionError> {
        match self.try_add_full(key, value) {
            (_, true) => Ok(()),
            (_, false) => Err(CollectionError::DuplicateKey),
        }
    }

    /// Appends a new entry unless `key` is already present
    ///
    /// Returns true if the entry was added.
    pub fn try_add(&mut self, key: K, value: V) -> bool {
        self.try_add_full(key, value).1
    }

    /// Appends a new entry unless `key` is already present
    ///
    /// Returns the position of the new or existing entry, and whether the
    /// entry was added. An existing entry keeps its value.
    pub fn try_add_full(&mut self, key: K, value: V) -> (usize, bool) {
        let hash = self.comparer.hash(&key);
        match self.find(hash, &key) {
            Some(index) => (index, false),
            None => (self.push_entry(hash, key, value), true),
        }
    }

    /// Sets the value for `key`
    ///
    /// An existing entry is updated in place and keeps its position; a new
    /// key is appended. Returns the previous value, if any.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.comparer.hash(&key);
        match self.find(hash, &key) {
            Some(index) => Some(mem::replace(&mut self.entries[index].value, value)),
            None => {
                self.push_entry(hash, key, value);
                None
            }
        }
    }

    /// Inserts an entry at `index`, shifting the entries at and after it up
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index <= len`, or
    /// [`CollectionError::DuplicateKey`] if `key` is already present. Either
    /// way the dictionary is left unchanged.
    pub fn insert(&mut self, index: usize, key: K, value: V) -> Result<(), CollectionError> {
        let len = self.entries.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        let hash = self.comparer.hash(&key);
        if self.find(hash, &key).is_some() {
            return Err(CollectionError::DuplicateKey);
        }
        if index == len {
            self.push_entry(hash, key, value);
            return Ok(());
        }

        self.entries.insert(index, Bucket { hash, key, value });
        self.increment_indices(index + 1..len + 1);
        let entries = &self.entries;
        self.indices.insert_unique(hash, index, |&i| entries[i].hash);
        debug_assert_eq!(self.indices.len(), self.entries.len());
        Ok(())
    }

    /// Replaces both the key and the value at `index`
    ///
    /// Returns the previous key and value.
    ///
    /// # Errors
    /// Returns [`CollectionError::IndexOutOfRange`] unless `index < len`, or
    /// [`CollectionError::DuplicateKey`] if `key` is held by a different
    /// entry.
    pub fn set_at_entry(
        &mut self,
        index: usize,
        key: K,
        value: V,
    ) -> Result<(K, V), CollectionError> {
        let len = self.entries.len();
        if index >= len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        let hash = self.comparer.hash(&key);
        match self.find(hash, &key) {
            Some(existing) if existing != index => return Err(CollectionError::DuplicateKey),
            Some(_) => {}
            None => {
                let old_hash = self.entries[index].hash;
                if let Ok(slot) = self.indices.find_entry(old_hash, |&i| i == index) {
                    slot.remove();
                }
                let entries = &self.entries;
                self.indices.insert_unique(hash, index, |&i| entries[i].hash);
            }
        }

        let bucket = &mut self.entries[index];
        bucket.hash = hash;
        let old_key = mem::replace(&mut bucket.key, key);
        let old_value = mem::replace(&mut bucket.value, value);
        Ok((old_key, old_value))
    }

    /// Verifies that the hash index and the entries agree
    ///
    /// Checks that every entry's cached hash matches the comparer, that
    /// looking up each key yields its own position, and that the index has
    /// exactly one slot per entry.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.indices.len() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index holds {} slots for {} entries",
                self.indices.len(),
                self.entries.len()
            )));
        }
        for (position, bucket) in self.entries.iter().enumerate() {
            if bucket.hash != self.comparer.hash(&bucket.key) {
                return Err(InvariantError::new(format!(
                    "stale cached hash at position {position}"
                )));
            }
            match self.find(bucket.hash, &bucket.key) {
                Some(found) if found == position => {}
                Some(found) => {
                    return Err(InvariantError::new(format!(
                        "key at position {position} resolves to position {found}"
                    )))
                }
                None => {
                    return Err(InvariantError::new(format!(
                        "key at position {position} is missing from the index"
                    )))
                }
            }
        }
        Ok(())
    }
}

impl<K, V, C: Default> Default for OrderedDictionary<K, V, C> {
    fn default() -> Self {
        Self::with_comparer(C::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for OrderedDictionary<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Equal when both hold the same entries in the same order
impl<K: PartialEq, V: PartialEq, C> PartialEq for OrderedDictionary<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for OrderedDictionary<K, V, C> {}

impl<K, V, C, Q> Index<&Q> for OrderedDictionary<K, V, C>
where
    Q: ?Sized,
    K: Borrow<Q>,
    C: EqualityComparer<Q>,
{
    type Output = V;

    /// # Panics
    /// Panics if the key is absent; use [`value_of`](OrderedDictionary::value_of)
    /// to get a [`CollectionError::KeyNotFound`] instead.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", CollectionError::KeyNotFound),
        }
    }
}

impl<K, V, C> IntoIterator for OrderedDictionary<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedDictionary<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut OrderedDictionary<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ----------------------------------------------------------------------------
// Iterators
// ----------------------------------------------------------------------------

macro_rules! positional_iterator {
    ($name:ident<$lt:lifetime>, $item:ty, |$b:ident| $map:expr) => {
        impl<$lt, K, V> Iterator for $name<$lt, K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$b| $map)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$lt, K, V> DoubleEndedIterator for $name<$lt, K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$b| $map)
            }
        }

        impl<$lt, K, V> ExactSizeIterator for $name<$lt, K, V> {}

        impl<$lt, K, V> FusedIterator for $name<$lt, K, V> {}
    };
}

/// Iterator over `(&K, &V)` in positional order
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Bucket<K, V>>,
}

/// Iterator over `(&K, &mut V)` in positional order
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, Bucket<K, V>>,
}

/// Iterator over keys in positional order
pub struct Keys<'a, K, V> {
    inner: slice::Iter<'a, Bucket<K, V>>,
}

/// Iterator over values in positional order
pub struct Values<'a, K, V> {
    inner: slice::Iter<'a, Bucket<K, V>>,
}

/// Iterator over mutable values in positional order
pub struct ValuesMut<'a, K, V> {
    inner: slice::IterMut<'a, Bucket<K, V>>,
}

positional_iterator!(Iter<'a>, (&'a K, &'a V), |b| (&b.key, &b.value));
positional_iterator!(IterMut<'a>, (&'a K, &'a mut V), |b| (&b.key, &mut b.value));
positional_iterator!(Keys<'a>, &'a K, |b| &b.key);
positional_iterator!(Values<'a>, &'a V, |b| &b.value);
positional_iterator!(ValuesMut<'a>, &'a mut V, |b| &mut b.value);

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Owning iterator over `(K, V)` in positional order
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<Bucket<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|b| (b.key, b.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|b| (b.key, b.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
