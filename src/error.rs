//! Failures reported by the containers.

use std::error;
use std::fmt;
use std::result;

/// A caller-contract violation detected by one of the containers.
///
/// None of these errors leave the container partially modified: the operation that fails performs
/// no mutation before reporting the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key being inserted is already present.
    DuplicateKey,
    /// The key being looked up or removed is not present.
    NonexistentKey,
    /// An extremal key was requested from an empty tree.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "Duplicate key!"),
            Error::NonexistentKey => write!(f, "Key does not exist!"),
            Error::EmptyTree => write!(f, "Tree is empty!"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
