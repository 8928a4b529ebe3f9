//! Dictionary index bucketed by word length
//!
//! A `WordIndex` is built once from a dictionary snapshot and is read-only afterwards.

use super::error::DictionaryError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

/// Immutable dictionary with words grouped by length
///
/// Every word lives in exactly one length bucket. Lengths are measured in characters.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: FxHashSet<String>,
    buckets: FxHashMap<usize, FxHashSet<String>>,
    // Returned for lengths with no words
    empty: FxHashSet<String>,
}

impl WordIndex {
    /// Build an index from a finalized dictionary
    ///
    /// Words must already be normalized (trimmed and lowercase). Duplicates collapse.
    ///
    /// # Errors
    /// Returns `DictionaryError` if a word is empty or not normalized.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::WordIndex;
    ///
    /// let index = WordIndex::new(["cat", "bat", "boat"]).unwrap();
    /// assert!(index.contains("cat"));
    /// assert_eq!(index.length_bucket(3).len(), 2);
    ///
    /// assert!(WordIndex::new(["Cat"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();

        for word in words {
            let word: String = word.into();
            validate_word(&word)?;

            index
                .buckets
                .entry(word_len(&word))
                .or_default()
                .insert(word.clone());
            index.words.insert(word);
        }

        Ok(index)
    }

    /// Check whether a word is in the dictionary
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words of the given length
    ///
    /// Returns an empty set if there are none.
    #[must_use]
    pub fn length_bucket(&self, length: usize) -> &FxHashSet<String> {
        self.buckets.get(&length).unwrap_or(&self.empty)
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word (unordered)
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Word count per length, ordered by length
    #[must_use]
    pub fn length_distribution(&self) -> BTreeMap<usize, usize> {
        self.buckets
            .iter()
            .map(|(&length, words)| (length, words.len()))
            .collect()
    }
}

/// Length of a word in characters
#[inline]
#[must_use]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Check that a word is non-empty, trimmed and has no uppercase characters
///
/// # Errors
/// Returns `DictionaryError` describing the first problem.
pub fn validate_word(word: &str) -> Result<(), DictionaryError> {
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }

    if word.trim() != word || word.chars().any(char::is_uppercase) {
        return Err(DictionaryError::NotNormalized(word.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_length() {
        let index = WordIndex::new(["cat", "dog", "boat", "stone"]).unwrap();

        assert_eq!(index.len(), 4);
        assert_eq!(index.length_bucket(3).len(), 2);
        assert_eq!(index.length_bucket(4).len(), 1);
        assert_eq!(index.length_bucket(5).len(), 1);
        assert!(index.length_bucket(7).is_empty());
    }

    #[test]
    fn every_word_in_exactly_one_bucket() {
        let index = WordIndex::new(["cat", "dog", "boat", "stone", "hat"]).unwrap();

        for word in index.words() {
            let hits = index
                .length_distribution()
                .keys()
                .filter(|&&len| index.length_bucket(len).contains(word))
                .count();
            assert_eq!(hits, 1, "{word} should be in exactly one bucket");
        }
    }

    #[test]
    fn contains_is_exact() {
        let index = WordIndex::new(["cat"]).unwrap();
        assert!(index.contains("cat"));
        assert!(!index.contains("CAT"));
        assert!(!index.contains("ca"));
    }

    #[test]
    fn duplicates_collapse() {
        let index = WordIndex::new(["cat", "cat", "bat"]).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.length_bucket(3).len(), 2);
    }

    #[test]
    fn rejects_empty_word() {
        assert!(matches!(
            WordIndex::new(["cat", ""]),
            Err(DictionaryError::EmptyWord)
        ));
    }

    #[test]
    fn rejects_unnormalized_words() {
        assert!(matches!(
            WordIndex::new(["Cat"]),
            Err(DictionaryError::NotNormalized(w)) if w == "Cat"
        ));
        assert!(WordIndex::new([" cat"]).is_err());
        assert!(WordIndex::new(["cat\n"]).is_err());
    }

    #[test]
    fn empty_dictionary_is_valid() {
        let index = WordIndex::new(Vec::<String>::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.length_distribution().is_empty());
    }

    #[test]
    fn length_counts_characters() {
        let index = WordIndex::new(["café", "cafe"]).unwrap();
        assert_eq!(index.length_bucket(4).len(), 2);
        assert_eq!(word_len("café"), 4);
    }

    #[test]
    fn distribution_is_ordered() {
        let index = WordIndex::new(["stone", "cat", "boat", "dog"]).unwrap();
        let dist: Vec<_> = index.length_distribution().into_iter().collect();
        assert_eq!(dist, vec![(3, 2), (4, 1), (5, 1)]);
    }
}
