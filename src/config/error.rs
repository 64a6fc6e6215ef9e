use crate::Error;
use std::io::Error as IOError;
use std::string::String;
use toml::de::Error as TomlDeError;

#[derive(Debug)]
pub enum ConfigError {
    /// The configuration string is not valid toml.
    TomlFormatError(TomlDeError),
    /// The configuration is valid toml but does not match any known
    /// generator configuration format.
    ConfigFormatError(String),
    /// The configuration parsed but describes an invalid generator,
    /// for instance a negative binomial row index.
    InvalidGenerator(Error),
    /// The configuration file could not be read.
    IOError(IOError),
}
