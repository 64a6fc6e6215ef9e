use super::builder::PasswordBuilder;
use super::PasswordGenerator;
use crate::config::{
    ConfigError, ConfigInstance, DynGenerator, IntoConfig,
};
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`PasswordGenerator`](../struct.PasswordGenerator.html) generators.
///
/// This configuration format is composed of two key/value fields that
/// must be present:
/// - `id = "PasswordConfig"` and
/// - `length = <int>`
///
/// The `id` field must be exactly "PasswordConfig" while `length` sets
/// the number of characters of every produced password. A zero length
/// parses but fails to build. The built generator draws from the
/// thread-local random source.
/// ```
/// use lazygen::config::ConfigBuilder;
/// use lazygen::{DynGenerator, Generator};
///
/// let config_str = "
/// id = 'PasswordConfig'
/// length = 8
/// ";
/// let mut passwords: DynGenerator =
///     ConfigBuilder::from_string(config_str).unwrap().build().unwrap();
/// assert_eq!(passwords.pull().unwrap().len(), 8);
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct PasswordConfig {
    #[allow(dead_code)]
    id: String,
    length: usize,
}

impl ConfigInstance for PasswordConfig {
    fn id() -> &'static str {
        "PasswordConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(value).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Cannot serialize PasswordConfig value: {:?}",
                e
            ))
        })?;
        toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid PasswordConfig: {}\n{:?}",
                toml, e
            ))
        })
    }

    fn build(self) -> Result<DynGenerator, ConfigError> {
        PasswordGenerator::new(self.length)
            .map(DynGenerator::new)
            .map_err(ConfigError::InvalidGenerator)
    }
}

impl IntoConfig<PasswordConfig> for PasswordBuilder {
    fn into_config(&self) -> PasswordConfig {
        PasswordConfig {
            id: String::from(PasswordConfig::id()),
            length: self.length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PasswordConfig;
    use crate::config::tests::test_config_builder;
    use crate::config::{ConfigError, ConfigInstance};
    use crate::password::builder::PasswordBuilder;
    use crate::Generator;

    #[test]
    fn test_valid_password_config() {
        let config_str = "id='PasswordConfig'\nlength=8";
        let value: toml::Value = toml::from_str(config_str).unwrap();
        let config = PasswordConfig::from_toml(&value).unwrap();
        let mut passwords = config.build().unwrap();
        assert_eq!(passwords.pull().unwrap().len(), 8);
    }

    #[test]
    fn test_zero_length_fails_to_build() {
        let config_str = "id='PasswordConfig'\nlength=0";
        let value: toml::Value = toml::from_str(config_str).unwrap();
        let config = PasswordConfig::from_toml(&value).unwrap();
        match config.build() {
            Err(ConfigError::InvalidGenerator(_)) => {}
            _ => panic!("expected InvalidGenerator"),
        }
    }

    #[test]
    fn test_builder_into_config() {
        test_config_builder(PasswordBuilder::new(8));
    }
}
