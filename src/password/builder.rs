use super::PasswordGenerator;
use crate::builder::Build;
use crate::Error;

/// `PasswordGenerator` builder.
///
/// ## Examples
/// ```
/// use lazygen::Generator;
/// use lazygen::builder::{Build, PasswordBuilder};
///
/// let mut passwords = PasswordBuilder::new(8).build().unwrap();
/// assert_eq!(passwords.pull().unwrap().len(), 8);
/// ```
#[derive(Clone)]
pub struct PasswordBuilder {
    pub(super) length: usize,
}

impl PasswordBuilder {
    /// The [`PasswordGenerator`](../../struct.PasswordGenerator.html)
    /// spawned by this builder will produce passwords of `length`
    /// characters.
    pub fn new(length: usize) -> Self {
        PasswordBuilder { length }
    }
}

impl Build<PasswordGenerator> for PasswordBuilder {
    fn build(self) -> Result<PasswordGenerator, Error> {
        PasswordGenerator::new(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::PasswordBuilder;
    use crate::builder::Build;

    #[test]
    fn zero_length_fails_at_build_time() {
        assert!(PasswordBuilder::new(0).build().is_err());
    }
}
