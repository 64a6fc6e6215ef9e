use crate::Error;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Characters passwords are drawn from: ASCII lowercase, ASCII
/// uppercase, digits and a handful of punctuation marks.
pub const ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyz\
     ABCDEFGHIJKLMNOPQRSTUVWXYZ\
     0123456789!?@#$*";

/// Infinite generator of random fixed-length passwords.
///
/// Each pull yields a fresh password of exactly `length` characters,
/// every character drawn uniformly and independently from
/// [`ALPHABET`](constant.ALPHABET.html). The sequence is unbounded: a
/// pull on this generator never fails.
///
/// The generator owns its random source. The default constructor uses
/// the thread-local generator; tests and reproducible callers can
/// provide their own seeded source with
/// [`with_rng()`](struct.PasswordGenerator.html#method.with_rng).
///
/// ## Examples
///
/// ```
/// use lazygen::{Generator, PasswordGenerator};
///
/// let mut passwords = PasswordGenerator::new(8).unwrap();
/// let p = passwords.pull().unwrap();
/// assert_eq!(p.len(), 8);
///
/// // Zero-length passwords are rejected up front.
/// assert!(PasswordGenerator::new(0).is_err());
/// ```
///
/// [`PasswordGenerator`] can also be built from a
/// [builder pattern](../builder/struct.PasswordBuilder.html) and a
/// [configuration](config/struct.PasswordConfig.html).
pub struct PasswordGenerator<R = ThreadRng> {
    pub(super) length: usize,
    pub(super) rng: R,
}

impl PasswordGenerator<ThreadRng> {
    /// Build a generator of passwords of `length` characters backed by
    /// the thread-local random source.
    ///
    /// Returns
    /// [`Error::InvalidArgument`](../enum.Error.html#variant.InvalidArgument)
    /// when `length` is zero.
    pub fn new(length: usize) -> Result<Self, Error> {
        Self::with_rng(length, rand::thread_rng())
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Build a generator of passwords of `length` characters drawing
    /// randomness from `rng`.
    ///
    /// A seeded `rng` makes the password sequence reproducible.
    pub fn with_rng(length: usize, rng: R) -> Result<Self, Error> {
        if length == 0 {
            return Err(Error::InvalidArgument(String::from(
                "password length must be positive",
            )));
        }
        Ok(PasswordGenerator { length, rng })
    }

    /// Get the length of every produced password.
    pub fn length(&self) -> usize {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::{PasswordGenerator, ALPHABET};
    use crate::Error;

    #[test]
    fn alphabet_is_the_documented_one() {
        assert_eq!(ALPHABET.len(), 68);
        assert!(ALPHABET.is_ascii());
        // Uniform choice needs distinct characters.
        let mut bytes: Vec<u8> = ALPHABET.bytes().collect();
        bytes.sort_unstable();
        bytes.dedup();
        assert_eq!(bytes.len(), 68);
    }

    #[test]
    fn zero_length_is_rejected() {
        match PasswordGenerator::new(0) {
            Err(Error::InvalidArgument(_)) => {}
            _ => panic!("zero length password accepted"),
        }
    }

    #[test]
    fn length_is_recorded() {
        let passwords = PasswordGenerator::new(12).unwrap();
        assert_eq!(passwords.length(), 12);
    }
}
