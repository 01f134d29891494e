//! Error types for tree access and parsing
//!
//! [`TreeError`] covers every way a flat array can fail to describe a tree:
//! bad child indices, cycles, runaway depth, and unparsable input text.
//! The unchecked [`height`](super::height::height) never returns these; it
//! treats a malformed array as a caller bug and panics.

use std::fmt;

/// Errors raised by the checked tree routines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Asked for the record of the null sentinel
    NullNode,

    /// Child index points outside the array (or is negative but not the sentinel)
    IndexOutOfBounds { index: i32, len: usize },

    /// A node is its own ancestor
    Cycle { index: i32 },

    /// Traversal went deeper than the configured limit
    DepthLimitExceeded { limit: usize },

    /// A token in tree text is not an integer
    InvalidToken { line: usize, token: String },
}

impl TreeError {
    /// The offending slot index, if the error is about one
    pub fn index(&self) -> Option<i32> {
        match self {
            TreeError::IndexOutOfBounds { index, .. } => Some(*index),
            TreeError::Cycle { index } => Some(*index),
            TreeError::NullNode => None,
            TreeError::DepthLimitExceeded { .. } => None,
            TreeError::InvalidToken { .. } => None,
        }
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::NullNode => write!(f, "Null index -1 has no node record"),
            TreeError::IndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "Node index {} out of bounds for array of {} slots",
                    index, len
                )
            }
            TreeError::Cycle { index } => {
                write!(f, "Cycle detected: node {} is its own ancestor", index)
            }
            TreeError::DepthLimitExceeded { limit } => {
                write!(f, "Tree depth exceeds limit of {}", limit)
            }
            TreeError::InvalidToken { line, token } => {
                write!(f, "Invalid integer '{}' at line {}", token, line)
            }
        }
    }
}

impl std::error::Error for TreeError {}
