use super::{ConfigError, ConfigInstance, DynGenerator};
use crate::binomial::config::BinomialConfig;
use crate::cyclic::config::CyclicConfig;
#[cfg(feature = "password")]
use crate::password::config::PasswordConfig;
use std::io::Read;

#[cfg(not(feature = "password"))]
static CONFIGS: [&str; 2] = ["BinomialConfig", "CyclicConfig"];
#[cfg(feature = "password")]
static CONFIGS: [&str; 3] =
    ["BinomialConfig", "CyclicConfig", "PasswordConfig"];

enum GeneratorConfig {
    Binomial(BinomialConfig),
    Cyclic(CyclicConfig),
    #[cfg(feature = "password")]
    Password(PasswordConfig),
}

/// Generator builder from a toml configuration.
///
/// This structure is the entry point to build a generator from a
/// configuration file/string. It is instantiated from a
/// [`toml`](../../toml/index.html) configuration string or file and
/// consumed to produce a [`DynGenerator`].
///
/// In order to be valid, a configuration must be a proper toml string
/// where the root element is a toml
/// [`Table`](../../toml/value/type.Table.html) containing an `id` key
/// identifying the type of generator to build. Valid generator types
/// are enumerated in the [`configs`](configs/index.html) module.
/// If one of these conditions is not satisfied, a
/// [`ConfigError::ConfigFormatError`] or a
/// [`ConfigError::TomlFormatError`] is returned instead of a valid
/// [`ConfigBuilder`].
///
/// ## Examples
///
/// ```
/// use lazygen::config::ConfigBuilder;
/// use lazygen::{DynGenerator, Generator};
///
/// let config_str = "
/// id = 'BinomialConfig'
/// row = 4
/// ";
/// let mut row: DynGenerator =
///     ConfigBuilder::from_string(config_str).unwrap().build().unwrap();
/// assert_eq!(row.pull(), Ok(String::from("1")));
/// assert_eq!(row.pull(), Ok(String::from("4")));
/// ```
pub struct ConfigBuilder {
    config: GeneratorConfig,
}

impl ConfigBuilder {
    /// Build a [`ConfigBuilder`] from a string configuration.
    pub fn from_string(s: &str) -> Result<Self, ConfigError> {
        match toml::from_str::<toml::Value>(s) {
            Ok(value) => Self::from_toml(&value),
            Err(e) => Err(ConfigError::TomlFormatError(e)),
        }
    }

    /// Build a [`ConfigBuilder`] from a file configuration.
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, ConfigError> {
        let mut file = match std::fs::File::open(&path) {
            Ok(f) => f,
            Err(e) => return Err(ConfigError::IOError(e)),
        };
        let mut s = String::new();
        if let Err(e) = file.read_to_string(&mut s) {
            return Err(ConfigError::IOError(e));
        }
        Self::from_string(s.as_str())
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let table = match value {
            toml::Value::Table(t) => t,
            _ => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Generator configuration must be a toml table.",
                )));
            }
        };

        let id = match table.get("id") {
            Some(toml::Value::String(s)) => s.as_str(),
            Some(_) => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Invalid id type. Must be a string.",
                )));
            }
            None => {
                return Err(ConfigError::ConfigFormatError(String::from(
                    "Generator configuration must contain an id field.",
                )));
            }
        };

        let config = match id {
            "BinomialConfig" => GeneratorConfig::Binomial(
                BinomialConfig::from_toml(value)?,
            ),
            "CyclicConfig" => {
                GeneratorConfig::Cyclic(CyclicConfig::from_toml(value)?)
            }
            #[cfg(feature = "password")]
            "PasswordConfig" => GeneratorConfig::Password(
                PasswordConfig::from_toml(value)?,
            ),
            unknown => {
                return Err(ConfigError::ConfigFormatError(format!(
                    "Unknown generator configuration id: {}. \
                     Supported configurations are: {:?}",
                    unknown, CONFIGS
                )));
            }
        };
        Ok(ConfigBuilder { config })
    }

    /// Consume this builder into the generator it describes.
    pub fn build(self) -> Result<DynGenerator, ConfigError> {
        match self.config {
            GeneratorConfig::Binomial(c) => c.build(),
            GeneratorConfig::Cyclic(c) => c.build(),
            #[cfg(feature = "password")]
            GeneratorConfig::Password(c) => c.build(),
        }
    }
}
