use super::builder::CyclicBuilder;
use super::CyclicIterator;
use crate::config::{
    ConfigError, ConfigInstance, DynGenerator, IntoConfig,
};
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`CyclicIterator`](../struct.CyclicIterator.html) generators.
///
/// This configuration format is composed of two key/value fields that
/// must be present:
/// - `id = "CyclicConfig"` and
/// - `elements = [<string>, ...]`
///
/// The `id` field must be exactly "CyclicConfig" while `elements` lists
/// the distinct strings to cycle over, in the order the iterator will
/// capture. A configuration with duplicate elements parses but fails to
/// build.
/// ```
/// use lazygen::config::ConfigBuilder;
/// use lazygen::{DynGenerator, Generator};
///
/// let config_str = "
/// id = 'CyclicConfig'
/// elements = ['red', 'green', 'blue']
/// ";
/// let mut cycle: DynGenerator =
///     ConfigBuilder::from_string(config_str).unwrap().build().unwrap();
/// assert_eq!(cycle.pull(), Ok(String::from("red")));
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct CyclicConfig {
    #[allow(dead_code)]
    id: String,
    elements: Vec<String>,
}

impl ConfigInstance for CyclicConfig {
    fn id() -> &'static str {
        "CyclicConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(value).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Cannot serialize CyclicConfig value: {:?}",
                e
            ))
        })?;
        toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid CyclicConfig: {}\n{:?}",
                toml, e
            ))
        })
    }

    fn build(self) -> Result<DynGenerator, ConfigError> {
        CyclicIterator::new(self.elements)
            .map(DynGenerator::new)
            .map_err(ConfigError::InvalidGenerator)
    }
}

impl IntoConfig<CyclicConfig> for CyclicBuilder<String> {
    fn into_config(&self) -> CyclicConfig {
        CyclicConfig {
            id: String::from(CyclicConfig::id()),
            elements: self.elements.clone(),
        }
    }
}
