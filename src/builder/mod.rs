pub use crate::cyclic::builder::CyclicBuilder;
pub use crate::binomial::builder::BinomialBuilder;
#[cfg(feature = "password")]
pub use crate::password::builder::PasswordBuilder;

use crate::Error;

/// Consume a builder into the generator it describes.
///
/// Builders accumulate parameters first and validate them last, so an
/// invalid description is only reported when the generator is actually
/// spawned.
pub trait Build<G> {
    fn build(self) -> Result<G, Error>;
}

/// Entry point to build a generator from a builder pattern chain.
///
/// ## Examples
///
/// ```
/// use lazygen::Generator;
/// use lazygen::builder::{Build, Builder};
///
/// let mut row = Builder::binomial(4).build().unwrap();
/// assert_eq!(row.pull(), Ok(1));
///
/// let mut cycle = Builder::cyclic()
///     .element("a")
///     .element("b")
///     .build()
///     .unwrap();
/// assert_eq!(cycle.pull(), Ok("a"));
/// ```
pub struct Builder {}

impl Builder {
    /// Start describing a [`CyclicIterator`](../struct.CyclicIterator.html).
    pub fn cyclic<T: Eq + std::hash::Hash>() -> CyclicBuilder<T> {
        CyclicBuilder::new()
    }

    /// Start describing a [`BinomialRow`](../struct.BinomialRow.html)
    /// for row `n` of Pascal's triangle.
    pub fn binomial(n: i64) -> BinomialBuilder {
        BinomialBuilder::new(n)
    }

    /// Start describing a
    /// [`PasswordGenerator`](../struct.PasswordGenerator.html) producing
    /// passwords of `length` characters.
    #[cfg(feature = "password")]
    pub fn password(length: usize) -> PasswordBuilder {
        PasswordBuilder::new(length)
    }
}
