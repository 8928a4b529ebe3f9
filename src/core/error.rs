//! Error types for dictionary construction and ladder validation
//!
//! Search itself never fails: "no path" is an empty result, not an error.

use thiserror::Error;

/// Caller misuse when building a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary contains an empty word")]
    EmptyWord,
    #[error("word {0:?} is not normalized (expected trimmed lowercase)")]
    NotNormalized(String),
}

/// Why a sequence of words is not a valid ladder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    #[error("ladder is empty")]
    Empty,
    #[error("word {word:?} at step {step} is not in the dictionary")]
    UnknownWord { step: usize, word: String },
    #[error("{from:?} and {to:?} have different lengths")]
    LengthMismatch { from: String, to: String },
    #[error("{from:?} -> {to:?} changes {changed} letters (expected exactly one)")]
    NotOneLetter {
        from: String,
        to: String,
        changed: usize,
    },
}
