use crate::config::{ConfigInstance, IntoConfig};
use serde::Serialize;

pub(crate) fn test_config_builder<B, C>(builder: B)
where
    B: IntoConfig<C>,
    C: ConfigInstance + Serialize,
{
    // Builder turns into a configuration object.
    let config: C = builder.into_config();
    // The configuration round-trips through its toml representation.
    let toml_str = toml::to_string(&config).unwrap();
    let value: toml::Value = toml::from_str(&toml_str).unwrap();
    let reparsed = C::from_toml(&value).unwrap();
    // The reparsed configuration builds a working generator.
    reparsed.build().unwrap();
}
