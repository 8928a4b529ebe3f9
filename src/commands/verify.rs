//! Ladder verification command
//!
//! Checks a user-written ladder against the dictionary.

use crate::core::{LadderError, WordIndex, check_ladder};

/// Result of verifying a ladder
pub struct VerifyResult {
    pub words: Vec<String>,
    pub outcome: Result<(), LadderError>,
}

/// Verify a sequence of normalized words
#[must_use]
pub fn verify_ladder(words: Vec<String>, index: &WordIndex) -> VerifyResult {
    let outcome = check_ladder(index, &words);
    VerifyResult { words, outcome }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> WordIndex {
        WordIndex::new(["cat", "cot", "cog", "dog"]).unwrap()
    }

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn valid_ladder_verifies() {
        let result = verify_ladder(words(&["cat", "cot", "cog", "dog"]), &index());
        assert!(result.outcome.is_ok());
        assert_eq!(result.words, vec!["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn invalid_step_reported() {
        let result = verify_ladder(words(&["cat", "cog"]), &index());
        assert!(matches!(
            result.outcome,
            Err(LadderError::NotOneLetter { changed: 2, .. })
        ));
    }

    #[test]
    fn words_are_checked_as_given() {
        let result = verify_ladder(words(&["CAT", "cot"]), &index());
        assert_eq!(result.words, vec!["CAT", "cot"]);
        assert!(matches!(
            result.outcome,
            Err(LadderError::UnknownWord { step: 0, .. })
        ));
    }
}
