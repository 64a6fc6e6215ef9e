use super::builder::BinomialBuilder;
use super::BinomialRow;
use crate::config::{
    ConfigError, ConfigInstance, DynGenerator, IntoConfig,
};
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`BinomialRow`](../struct.BinomialRow.html) generators.
///
/// This configuration format is composed of two key/value fields that
/// must be present:
/// - `id = "BinomialConfig"` and
/// - `row = <int>`
///
/// The `id` field must be exactly "BinomialConfig" while `row` is the
/// index of the Pascal's triangle row to produce. A negative or
/// oversized row parses but fails to build.
/// ```
/// use lazygen::config::ConfigBuilder;
/// use lazygen::{DynGenerator, Generator};
///
/// let config_str = "
/// id = 'BinomialConfig'
/// row = 2
/// ";
/// let row: DynGenerator =
///     ConfigBuilder::from_string(config_str).unwrap().build().unwrap();
/// let coefficients: Vec<String> = row.collect();
/// assert_eq!(coefficients, vec!["1", "2", "1"]);
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct BinomialConfig {
    #[allow(dead_code)]
    id: String,
    row: i64,
}

impl ConfigInstance for BinomialConfig {
    fn id() -> &'static str {
        "BinomialConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(value).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Cannot serialize BinomialConfig value: {:?}",
                e
            ))
        })?;
        toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid BinomialConfig: {}\n{:?}",
                toml, e
            ))
        })
    }

    fn build(self) -> Result<DynGenerator, ConfigError> {
        BinomialRow::generate(self.row)
            .map(DynGenerator::new)
            .map_err(ConfigError::InvalidGenerator)
    }
}

impl IntoConfig<BinomialConfig> for BinomialBuilder {
    fn into_config(&self) -> BinomialConfig {
        BinomialConfig {
            id: String::from(BinomialConfig::id()),
            row: self.row,
        }
    }
}
