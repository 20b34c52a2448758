//! Errors raised while building or querying word families

use std::collections::TryReserveError;
use std::fmt;

/// Error type for family construction and queries
///
/// Every variant is a caller error or resource exhaustion. A failed lookup
/// is not an error: `find` and `largest` return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyError {
    /// The word list handed to the partition builder had no words
    EmptyWordList,
    /// A word's length differs from the first word in the list
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A growth increment of zero can never make room for a word
    ZeroIncrement,
    /// A family was requested from a list with no families
    NoFamilies,
    /// A random word was requested from a family with no words
    EmptyFamily { signature: String },
    /// Growing a family's word collection failed to allocate
    OutOfMemory(TryReserveError),
}

impl fmt::Display for FamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list must contain at least one word"),
            Self::LengthMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "Word {index} has {found} letters, expected {expected} like the first word"
            ),
            Self::ZeroIncrement => write!(f, "Growth increment must be at least 1"),
            Self::NoFamilies => write!(f, "Family list has no families"),
            Self::EmptyFamily { signature } => {
                write!(f, "Family {signature} has no words to pick from")
            }
            Self::OutOfMemory(err) => write!(f, "Failed to grow family word list: {err}"),
        }
    }
}

impl std::error::Error for FamilyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfMemory(err) => Some(err),
            _ => None,
        }
    }
}
