use super::{PasswordGenerator, ALPHABET};
use crate::{Error, Generator};
use rand::Rng;

impl<R: Rng> Generator for PasswordGenerator<R> {
    type Item = String;

    /// Produce a fresh password.
    ///
    /// The sequence is unbounded, so this pull never fails.
    fn pull(&mut self) -> Result<String, Error> {
        let alphabet = ALPHABET.as_bytes();
        let password = (0..self.length)
            .map(|_| {
                alphabet[self.rng.gen_range(0..alphabet.len())] as char
            })
            .collect();
        Ok(password)
    }
}

impl<R: Rng> Iterator for PasswordGenerator<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.pull().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
