//! Ladder validation
//!
//! Checks user-supplied sequences against the dictionary and the one-letter rule.

use super::cost::hamming_distance;
use super::error::LadderError;
use super::index::{WordIndex, word_len};

/// Validate the move from `from` to `to`, where `to` sits at position `step`
///
/// # Errors
/// Returns `LadderError` if `to` is not in the dictionary, the lengths differ, or
/// the move does not change exactly one letter.
pub fn check_move(
    index: &WordIndex,
    step: usize,
    from: &str,
    to: &str,
) -> Result<(), LadderError> {
    check_known(index, step, to)?;
    check_step(from, to)
}

/// Validate a full ladder
///
/// Every word must be in the dictionary and each consecutive pair must differ in
/// exactly one position.
///
/// # Errors
/// Returns the first problem found, in path order.
///
/// # Examples
/// ```
/// use word_ladder::core::{WordIndex, check_ladder};
///
/// let index = WordIndex::new(["cat", "cot", "cog", "dog"]).unwrap();
/// assert!(check_ladder(&index, &["cat", "cot", "cog", "dog"]).is_ok());
/// assert!(check_ladder(&index, &["cat", "cog"]).is_err());
/// ```
pub fn check_ladder<S: AsRef<str>>(index: &WordIndex, path: &[S]) -> Result<(), LadderError> {
    if path.is_empty() {
        return Err(LadderError::Empty);
    }

    check_known(index, 0, path[0].as_ref())?;
    for (i, pair) in path.windows(2).enumerate() {
        check_move(index, i + 1, pair[0].as_ref(), pair[1].as_ref())?;
    }

    Ok(())
}

fn check_known(index: &WordIndex, step: usize, word: &str) -> Result<(), LadderError> {
    if index.contains(word) {
        Ok(())
    } else {
        Err(LadderError::UnknownWord {
            step,
            word: word.to_string(),
        })
    }
}

fn check_step(from: &str, to: &str) -> Result<(), LadderError> {
    if word_len(from) != word_len(to) {
        return Err(LadderError::LengthMismatch {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let changed = hamming_distance(from, to);
    if changed != 1 {
        return Err(LadderError::NotOneLetter {
            from: from.to_string(),
            to: to.to_string(),
            changed,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> WordIndex {
        WordIndex::new(["cat", "cot", "cog", "dog", "coat"]).unwrap()
    }

    #[test]
    fn valid_ladder_passes() {
        assert_eq!(check_ladder(&index(), &["cat", "cot", "cog", "dog"]), Ok(()));
    }

    #[test]
    fn single_word_is_a_ladder() {
        assert_eq!(check_ladder(&index(), &["cat"]), Ok(()));
    }

    #[test]
    fn empty_ladder_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(check_ladder(&index(), &empty), Err(LadderError::Empty));
    }

    #[test]
    fn unknown_word_reports_step() {
        assert_eq!(
            check_ladder(&index(), &["cat", "cut", "cot"]),
            Err(LadderError::UnknownWord {
                step: 1,
                word: "cut".to_string()
            })
        );
    }

    #[test]
    fn multi_letter_step_rejected() {
        assert_eq!(
            check_ladder(&index(), &["cat", "cog"]),
            Err(LadderError::NotOneLetter {
                from: "cat".to_string(),
                to: "cog".to_string(),
                changed: 2
            })
        );
    }

    #[test]
    fn repeated_word_rejected() {
        assert!(matches!(
            check_ladder(&index(), &["cat", "cat"]),
            Err(LadderError::NotOneLetter { changed: 0, .. })
        ));
    }

    #[test]
    fn length_change_rejected() {
        assert!(matches!(
            check_ladder(&index(), &["cot", "coat"]),
            Err(LadderError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn unknown_start_reports_step_zero() {
        assert_eq!(
            check_ladder(&index(), &["bat", "cat"]),
            Err(LadderError::UnknownWord {
                step: 0,
                word: "bat".to_string()
            })
        );
    }

    #[test]
    fn unknown_word_later_in_ladder_reports_its_step() {
        assert_eq!(
            check_ladder(&index(), &["cat", "cot", "cut"]),
            Err(LadderError::UnknownWord {
                step: 2,
                word: "cut".to_string()
            })
        );
    }

    #[test]
    fn check_move_validates_target_word() {
        let index = index();
        assert_eq!(check_move(&index, 1, "cat", "cot"), Ok(()));
        assert_eq!(
            check_move(&index, 3, "cat", "bat"),
            Err(LadderError::UnknownWord {
                step: 3,
                word: "bat".to_string()
            })
        );
        assert!(check_move(&index, 1, "cat", "dog").is_err());
    }
}
