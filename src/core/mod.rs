//! Core domain types for word ladders
//!
//! The dictionary index, the transformation graph built over it, and the cost
//! functions the search strategies share. Nothing here performs I/O.

mod cost;
mod error;
mod graph;
mod index;
mod ladder;

pub use cost::{CostModel, HammingCost, differs_by_one, hamming_distance};
pub use error::{DictionaryError, LadderError};
pub use graph::{Neighbors, TransformationGraph};
pub use index::{WordIndex, validate_word, word_len};
pub use ladder::{check_ladder, check_move};
