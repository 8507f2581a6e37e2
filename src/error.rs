use std::error;
use std::fmt;
use std::result;

/// A type alias for `Result<T, Error>`.
pub type Result<T> = result::Result<T, Error>;

/// An error produced while building or reconstructing a SLINK dendrogram.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input to [`SlinkCore::cluster`](crate::SlinkCore::cluster) was
    /// malformed: an empty point set, or a distance that is NaN or negative.
    InvalidInput(String),
    /// A (π, λ) pair violated one of the pointer-representation invariants
    /// and a [`DendrogramBuilder`](crate::DendrogramBuilder) could not
    /// reconstruct merges from it. This indicates a programmer error (a
    /// hand-built or corrupted pointer representation), not a user-input
    /// error.
    Internal(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidInput(ref msg) => write!(f, "invalid input: {}", msg),
            Error::Internal(ref msg) => write!(f, "internal error: {}", msg),
        }
    }
}
