mod binomial;
pub use binomial::BinomialRow;
mod generator;
pub(crate) mod builder;
#[cfg(feature = "config")]
pub(crate) mod config;
