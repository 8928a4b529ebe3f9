//! Word lists for word ladders
//!
//! Provides an embedded dictionary compiled into the binary and a loader for
//! custom word files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordIndex;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_normalized() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let index = WordIndex::new(DICTIONARY.iter().copied()).unwrap();
        assert_eq!(index.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_covers_common_lengths() {
        let index = WordIndex::new(DICTIONARY.iter().copied()).unwrap();
        for length in 3..=5 {
            assert!(
                index.length_bucket(length).len() > 20,
                "too few {length}-letter words"
            );
        }
    }
}
