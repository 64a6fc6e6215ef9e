#![cfg(feature = "config")]

use lazygen::config::{ConfigBuilder, ConfigError};
use lazygen::Generator;
use std::io::Write;

#[test]
fn config_cyclic_from_string() {
    let config_str = "
id = 'CyclicConfig'
elements = ['1', '2', '3']
";
    let mut cycle = ConfigBuilder::from_string(config_str)
        .unwrap()
        .build()
        .unwrap();
    let drawn: Vec<String> =
        (0..7).map(|_| cycle.pull().unwrap()).collect();
    assert_eq!(drawn, vec!["1", "2", "3", "1", "2", "3", "1"]);
}

#[test]
fn config_binomial_from_string() {
    let row = ConfigBuilder::from_string("id = 'BinomialConfig'\nrow = 4")
        .unwrap()
        .build()
        .unwrap();
    let coefficients: Vec<String> = row.collect();
    assert_eq!(coefficients, vec!["1", "4", "6", "4", "1"]);
}

#[test]
fn config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "id = 'BinomialConfig'\nrow = 2").unwrap();
    let row = ConfigBuilder::from_file(file.path())
        .unwrap()
        .build()
        .unwrap();
    let coefficients: Vec<String> = row.collect();
    assert_eq!(coefficients, vec!["1", "2", "1"]);
}

#[test]
fn config_missing_file_is_an_io_error() {
    match ConfigBuilder::from_file("/no/such/configuration.toml") {
        Err(ConfigError::IOError(_)) => {}
        _ => panic!("expected IOError"),
    }
}

#[test]
fn config_invalid_generator_is_reported_at_build() {
    let builder =
        ConfigBuilder::from_string("id = 'BinomialConfig'\nrow = -4")
            .unwrap();
    match builder.build() {
        Err(ConfigError::InvalidGenerator(_)) => {}
        _ => panic!("expected InvalidGenerator"),
    }
}

#[cfg(feature = "password")]
#[test]
fn config_password_from_string() {
    let mut passwords =
        ConfigBuilder::from_string("id = 'PasswordConfig'\nlength = 8")
            .unwrap()
            .build()
            .unwrap();
    assert_eq!(passwords.pull().unwrap().len(), 8);
}
