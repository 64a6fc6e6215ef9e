use super::CyclicIterator;
use crate::builder::Build;
use crate::Error;
use std::collections::HashSet;
use std::hash::Hash;

/// `CyclicIterator` builder.
///
/// Elements are captured in the order they are added; adding an element
/// already captured is a no-op, so a built iterator always wraps a
/// proper set and the build itself cannot fail.
///
/// ## Examples
/// ```
/// use lazygen::Generator;
/// use lazygen::builder::{Build, CyclicBuilder};
///
/// let mut cycle = CyclicBuilder::new()
///     .element(1)
///     .element(2)
///     .element(1) // duplicate, dropped
///     .build()
///     .unwrap();
/// assert_eq!(cycle.state().total_elements, 2);
/// assert_eq!(cycle.pull(), Ok(1));
/// ```
pub struct CyclicBuilder<T> {
    pub(super) elements: Vec<T>,
    pub(super) seen: HashSet<T>,
}

impl<T: Eq + Hash> CyclicBuilder<T> {
    pub fn new() -> Self {
        CyclicBuilder {
            elements: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append `element` to the captured order unless already present.
    pub fn element(mut self, element: T) -> Self
    where
        T: Clone,
    {
        if self.seen.insert(element.clone()) {
            self.elements.push(element);
        }
        self
    }

    /// Append every element of `items`, dropping duplicates.
    pub fn elements<I>(mut self, items: I) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self = self.element(item);
        }
        self
    }
}

impl<T: Eq + Hash> Default for CyclicBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> Clone for CyclicBuilder<T> {
    fn clone(&self) -> Self {
        CyclicBuilder {
            elements: self.elements.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<T> Build<CyclicIterator<T>> for CyclicBuilder<T> {
    fn build(self) -> Result<CyclicIterator<T>, Error> {
        Ok(CyclicIterator::from_elements(self.elements))
    }
}

#[cfg(test)]
mod tests {
    use super::CyclicBuilder;
    use crate::builder::Build;
    use crate::Generator;

    #[test]
    fn duplicates_are_dropped() {
        let mut cycle = CyclicBuilder::new()
            .elements(vec![3, 1, 3, 2, 1])
            .build()
            .unwrap();
        assert_eq!(cycle.state().total_elements, 3);
        let drawn: Vec<i32> =
            (0..6).map(|_| cycle.pull().unwrap()).collect();
        assert_eq!(drawn, vec![3, 1, 2, 3, 1, 2]);
    }

    #[test]
    fn empty_build_is_exhausted() {
        let mut cycle =
            CyclicBuilder::<u32>::new().build().unwrap();
        assert!(cycle.pull().is_err());
    }
}
