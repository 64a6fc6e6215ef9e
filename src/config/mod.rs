//! Module to instantiate a generator from a configuration file.
//!
//! Configuration files/strings are a way to instantiate generators.
//! They describe a generator using the [`toml`](https://toml.io/en/)
//! format. The [`ConfigBuilder`] structure is the entry point to create
//! a generator instance from a configuration string or file.
//! For instance, a cyclic iterator over three elements can be built as
//! follow:
//! ```
//! use lazygen::config::ConfigBuilder;
//! use lazygen::{DynGenerator, Generator};
//!
//! let config_str = "
//! id = 'CyclicConfig'
//! elements = ['a', 'b', 'c']
//! ";
//! let mut generator: DynGenerator =
//!     ConfigBuilder::from_string(config_str).unwrap().build().unwrap();
//! assert_eq!(generator.pull(), Ok(String::from("a")));
//! ```
//!
//! See the [`ConfigBuilder`] structure for more details on possible
//! configurations. See the [`configs`](configs/index.html) module for
//! the collection of generator configuration formats.

/// Trait used to instantiate a configuration object from a toml
/// configuration and build a generator out of it.
///
/// The configuration object obtained with the
/// [`from_toml()`](trait.ConfigInstance.html#tymethod.from_toml) method
/// can later be built into a [`DynGenerator`] after the parsed
/// configuration was checked to be valid.
///
/// Implementers of this trait will need to manually update the
/// [`ConfigBuilder`] implementation to be able to build the trait
/// implementer configuration.
pub trait ConfigInstance: Sized {
    /// The value of the `id` field identifying this configuration
    /// format in a toml table.
    fn id() -> &'static str;

    /// Method to create this configuration trait from a parsed toml
    /// [`toml::Value`].
    ///
    /// Implementers of this method can expect that the input `Value`
    /// object will match a [`toml::value::Table`] and contain an `id`
    /// field. This is enforced by the [`ConfigBuilder`] when building a
    /// configuration from a toml string.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError>;

    /// Build the configuration object into a generator.
    ///
    /// Configuration values that parse but describe an invalid
    /// generator, for instance a negative binomial row index, are
    /// reported here with
    /// [`ConfigError::InvalidGenerator`](enum.ConfigError.html).
    fn build(self) -> Result<DynGenerator, ConfigError>;
}

/// Obtain the configuration object matching a generator builder.
///
/// This is the reverse direction of [`ConfigInstance`]: any builder of
/// this crate can be turned into the configuration describing the same
/// generator, for instance to write it to a configuration file.
pub trait IntoConfig<C: ConfigInstance> {
    fn into_config(&self) -> C;
}

mod builder;
pub use builder::ConfigBuilder;
mod error;
pub use error::ConfigError;
mod dynamic;
pub use dynamic::DynGenerator;

/// Collection of generator configurations.
pub mod configs {
    pub use crate::binomial::config::BinomialConfig;
    pub use crate::cyclic::config::CyclicConfig;
    #[cfg(feature = "password")]
    pub use crate::password::config::PasswordConfig;
}

#[cfg(test)]
pub(crate) mod tests;
