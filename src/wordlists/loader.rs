//! Dictionary loading utilities
//!
//! Normalizes raw word lists (trim, lowercase, drop blanks) into a `WordIndex`.
//! Entries that still fail validation after normalizing are skipped.

use crate::core::{WordIndex, validate_word};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load a dictionary from a file with one word per line
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let index = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", index.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordIndex> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;

    let index = words_from_lines(content.lines());
    debug!(path = %path.display(), words = index.len(), "loaded dictionary");
    Ok(index)
}

/// Build a dictionary from an embedded word slice
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::DICTIONARY;
///
/// let index = words_from_slice(DICTIONARY);
/// assert_eq!(index.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordIndex {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> WordIndex {
    let words: Vec<String> = lines.filter_map(normalize).collect();

    // Every word passed validate_word above
    WordIndex::new(words).unwrap_or_default()
}

/// Trim and lowercase a raw entry, dropping blanks and invalid words
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let word = trimmed.to_lowercase();
    match validate_word(&word) {
        Ok(()) => Some(word),
        Err(e) => {
            warn!(entry = trimmed, error = %e, "skipping dictionary entry");
            None
        }
    }
}
