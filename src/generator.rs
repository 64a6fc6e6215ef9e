use crate::Error;

/// This is the main abstraction: the pull interface for lazy sequence
/// generators.
///
/// `Generator` trait defines the primitive to produce the elements of a
/// lazy sequence one at a time. The interface is made such that
/// [`Generator`] implementers hold only the state needed to compute the
/// next element, never the sequence itself, so unbounded sequences and
/// very long finite ones cost the same constant amount of memory.
///
/// A generator either yields its next element or reports why it cannot
/// with an [`Error`](enum.Error.html): a structurally empty source or a
/// finite sequence that ran to its end. Infinite generators over a
/// non-empty source never fail a pull.
///
/// Every generator in this crate also implements
/// [`std::iter::Iterator`], where exhaustion maps to `None`, so
/// generators compose with standard iterator adapters. The [`Generator`]
/// interface remains the only one distinguishing a structurally empty
/// source from an ordinary end of sequence.
///
/// See
/// [`Generator` implementors](trait.Generator.html#implementors)
/// for the sequences shipped with this crate.
pub trait Generator {
    /// The type of elements this generator produces.
    type Item;

    /// Produce the next element of the sequence.
    ///
    /// Returns [`Error::Exhausted`](enum.Error.html#variant.Exhausted)
    /// when the sequence has no more elements to produce, either because
    /// the backing source is empty or because a finite sequence ran to
    /// its end.
    fn pull(&mut self) -> Result<Self::Item, Error>;
}
