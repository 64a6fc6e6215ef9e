use crate::{Error, Generator};
use std::fmt::Display;

/// A [`Generator`](../trait.Generator.html) whose concrete type was
/// chosen at runtime from a configuration.
///
/// Because the configuration cannot be known at compile time, every
/// generator built from one is boxed behind the same element type:
/// [`String`]. Generators over numeric elements render them with their
/// [`Display`](std::fmt::Display) implementation.
pub struct DynGenerator {
    generator: Box<dyn Generator<Item = String>>,
}

// Renders the elements of the wrapped generator into strings so that
// generators over any printable element share one boxed type.
struct Stringify<G> {
    inner: G,
}

impl<G> Generator for Stringify<G>
where
    G: Generator,
    G::Item: Display,
{
    type Item = String;

    fn pull(&mut self) -> Result<String, Error> {
        self.inner.pull().map(|item| item.to_string())
    }
}

impl DynGenerator {
    pub(crate) fn new<G>(generator: G) -> Self
    where
        G: 'static + Generator,
        G::Item: Display,
    {
        DynGenerator {
            generator: Box::new(Stringify { inner: generator }),
        }
    }
}

impl Generator for DynGenerator {
    type Item = String;

    fn pull(&mut self) -> Result<String, Error> {
        self.generator.pull()
    }
}

impl Iterator for DynGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.pull().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::DynGenerator;
    use crate::{BinomialRow, Error, Generator};

    #[test]
    fn renders_elements_as_strings() {
        let mut generator =
            DynGenerator::new(BinomialRow::generate(4).unwrap());
        let row: Vec<String> =
            (0..5).map(|_| generator.pull().unwrap()).collect();
        assert_eq!(row, vec!["1", "4", "6", "4", "1"]);
        assert_eq!(generator.pull(), Err(Error::Exhausted));
    }
}
