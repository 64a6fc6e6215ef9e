use std::fmt::{Display, Formatter};

/// Failures reported by generator constructors and pulls.
///
/// Errors are local to the offending call and immediately returned to
/// the caller. Nothing is retried internally and no partial result is
/// ever returned on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction or call parameter was rejected, for instance a
    /// negative row index or an input collection with duplicates.
    InvalidArgument(String),
    /// The generator cannot produce an element: the backing source is
    /// structurally empty, or a finite sequence ran to its end.
    Exhausted,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidArgument(s) => {
                write!(f, "invalid argument: {}", s)
            }
            Error::Exhausted => write!(f, "generator exhausted"),
        }
    }
}

impl std::error::Error for Error {}
