mod generator;
pub use crate::generator::Generator;

mod error;
pub use crate::error::Error;

/// Unbounded periodic iteration over a snapshot of a set.
///
/// The order of elements is fixed once at construction and repeated
/// indefinitely, with a counter tracking elapsed full cycles.
pub mod cyclic;
pub use crate::cyclic::CyclicIterator;

/// Lazy row of Pascal's triangle.
///
/// The binomial coefficients of a row are produced one at a time, each
/// computed from the previous one with exact integer arithmetic.
pub mod binomial;
pub use crate::binomial::BinomialRow;

/// Infinite random password generation over a fixed alphabet.
#[cfg(feature = "password")]
pub mod password;
#[cfg(feature = "password")]
pub use crate::password::PasswordGenerator;

/// Insertion sort and list predicates over mixed-type values.
pub mod sort;

/// Builder pattern entry points for the generators of this crate.
pub mod builder;

/// Module to instantiate a generator from a configuration file.
#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "config")]
pub use crate::config::DynGenerator;
