use crate::Error;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Read-only snapshot of a [`CyclicIterator`] position.
///
/// Obtained with the
/// [`state()`](struct.CyclicIterator.html#method.state) method.
/// Taking a snapshot never mutates the iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Index of the next element to produce, in `[0, total_elements)`.
    pub cursor: usize,
    /// Number of full passes over the elements completed so far.
    pub cycle_count: usize,
    /// Number of distinct elements captured at construction.
    pub total_elements: usize,
}

/// Unbounded periodic iteration over the elements of a set.
///
/// [`CyclicIterator`] snapshots the elements of a set-like input once at
/// construction, fixing the iteration order for the lifetime of the
/// instance, then produces that order indefinitely: after the last
/// element, production wraps to the first one and a cycle counter is
/// incremented. Mutating the source collection after construction has no
/// effect on the iterator.
///
/// The sequence produced is periodic with period `total_elements`: the
/// m-th pull (1-indexed) returns the element at index
/// `(m - 1) % total_elements` of the captured order, exactly, including
/// across wrap boundaries. An iterator over an empty set can never
/// produce an element and every pull fails with
/// [`Error::Exhausted`](../enum.Error.html#variant.Exhausted).
///
/// The captured order is stable for the instance's lifetime but
/// otherwise implementation defined: building from a
/// [`BTreeSet`](std::collections::BTreeSet) captures ascending order
/// while a [`HashSet`](std::collections::HashSet) capture follows the
/// hash iteration order of the source.
///
/// ## Examples
///
/// ```
/// use lazygen::{CyclicIterator, Generator};
/// use std::collections::BTreeSet;
///
/// let set: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
/// let mut cycle = CyclicIterator::from(set);
///
/// // The captured order repeats past the end of the set.
/// let drawn: Vec<u32> = (0..7).map(|_| cycle.pull().unwrap()).collect();
/// assert_eq!(drawn, vec![1, 2, 3, 1, 2, 3, 1]);
///
/// // Two full cycles were completed along the way.
/// let state = cycle.state();
/// assert_eq!(state.cursor, 1);
/// assert_eq!(state.cycle_count, 2);
/// assert_eq!(state.total_elements, 3);
/// ```
///
/// [`CyclicIterator`] can also be built from a
/// [builder pattern](../builder/struct.CyclicBuilder.html) and a
/// [configuration](config/struct.CyclicConfig.html).
#[derive(Debug)]
pub struct CyclicIterator<T> {
    // Element order fixed at construction, never mutated afterward.
    pub(super) elements: Vec<T>,
    pub(super) cursor: usize,
    pub(super) cycle_count: usize,
}

impl<T> CyclicIterator<T> {
    pub(super) fn from_elements(elements: Vec<T>) -> Self {
        CyclicIterator {
            elements,
            cursor: 0,
            cycle_count: 0,
        }
    }

    /// Get a read-only snapshot of the iterator position.
    pub fn state(&self) -> State {
        State {
            cursor: self.cursor,
            cycle_count: self.cycle_count,
            total_elements: self.elements.len(),
        }
    }

    /// Get the number of distinct elements captured at construction.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the captured set is empty.
    ///
    /// An empty cyclic iterator fails every pull with
    /// [`Error::Exhausted`](../enum.Error.html#variant.Exhausted).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Eq + Hash> CyclicIterator<T> {
    /// Build a cyclic iterator from any finite collection of distinct
    /// elements, capturing the collection's iteration order.
    ///
    /// Returns
    /// [`Error::InvalidArgument`](../enum.Error.html#variant.InvalidArgument)
    /// when the input contains duplicate elements and is therefore not a
    /// proper set.
    pub fn new<I>(items: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = items.into_iter().collect();
        let mut seen = HashSet::with_capacity(elements.len());
        for (i, item) in elements.iter().enumerate() {
            if !seen.insert(item) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate element at position {} in cyclic input",
                    i
                )));
            }
        }
        Ok(Self::from_elements(elements))
    }
}

impl<T: Ord> From<BTreeSet<T>> for CyclicIterator<T> {
    /// Capture the set's ascending order. Set-ness is guaranteed by the
    /// source type so this conversion cannot fail.
    fn from(set: BTreeSet<T>) -> Self {
        Self::from_elements(set.into_iter().collect())
    }
}

impl<T: Eq + Hash> From<HashSet<T>> for CyclicIterator<T> {
    /// Capture the set's hash iteration order. Set-ness is guaranteed by
    /// the source type so this conversion cannot fail.
    fn from(set: HashSet<T>) -> Self {
        Self::from_elements(set.into_iter().collect())
    }
}

impl<T: Clone> Clone for CyclicIterator<T> {
    fn clone(&self) -> Self {
        CyclicIterator {
            elements: self.elements.clone(),
            cursor: self.cursor,
            cycle_count: self.cycle_count,
        }
    }
}
