mod cyclic;
pub use cyclic::{CyclicIterator, State};
mod generator;
pub(crate) mod builder;
#[cfg(feature = "config")]
pub(crate) mod config;
