mod password;
pub use password::{PasswordGenerator, ALPHABET};
mod generator;
pub(crate) mod builder;
#[cfg(feature = "config")]
pub(crate) mod config;
