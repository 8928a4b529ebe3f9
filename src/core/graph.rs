//! Word transformation graph
//!
//! Two words are adjacent when they have the same length and differ in exactly one
//! position. Adjacency is derived from wildcard patterns: for every position, a word
//! is filed under the key `(position, word with that character removed)`. Words
//! sharing a key are mutually adjacent, so each bucket is grouped in
//! O(bucket size × word length) instead of compared pairwise.
//!
//! Neighbor sets are computed on first request and memoized for the lifetime of the
//! graph. Entries are never evicted; a changed dictionary means building a new graph.

use super::error::DictionaryError;
use super::index::WordIndex;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Position of the wildcard plus the remaining characters
type PatternKey = (usize, String);

/// Shared, immutable neighbor set
pub type Neighbors = Arc<FxHashSet<String>>;

/// Adjacency relation over a dictionary snapshot
///
/// Safe to share across threads: the memoization cache uses insert-if-absent, and
/// racing callers compute identical sets for the same word.
#[derive(Debug)]
pub struct TransformationGraph {
    index: WordIndex,
    groups: FxHashMap<PatternKey, Vec<String>>,
    cache: RwLock<FxHashMap<String, Neighbors>>,
    empty: Neighbors,
}

impl TransformationGraph {
    /// Build a graph that computes neighbor sets lazily
    #[must_use]
    pub fn new(index: WordIndex) -> Self {
        let mut groups: FxHashMap<PatternKey, Vec<String>> = FxHashMap::default();
        for word in index.words() {
            for key in patterns(word) {
                groups.entry(key).or_default().push(word.to_string());
            }
        }

        debug!(
            words = index.len(),
            patterns = groups.len(),
            "built wildcard pattern groups"
        );

        Self {
            index,
            groups,
            cache: RwLock::new(FxHashMap::default()),
            empty: Arc::default(),
        }
    }

    /// Build a graph with every neighbor set precomputed
    #[must_use]
    pub fn eager(index: WordIndex) -> Self {
        let graph = Self::new(index);
        graph.precompute();
        graph
    }

    /// Build a lazy graph straight from a word list
    ///
    /// # Errors
    /// Returns `DictionaryError` if a word is empty or not normalized.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::TransformationGraph;
    ///
    /// let graph = TransformationGraph::from_words(["cat", "bat", "bot", "dog"]).unwrap();
    /// assert!(graph.neighbors("cat").contains("bat"));
    /// assert!(graph.neighbors("dog").is_empty());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(WordIndex::new(words)?))
    }

    /// Fill the cache for every dictionary word in parallel
    pub fn precompute(&self) {
        let cache = self.read_cache();
        let missing: Vec<&str> = self
            .index
            .words()
            .filter(|word| !cache.contains_key(*word))
            .collect();
        drop(cache);

        let computed: Vec<(String, Neighbors)> = missing
            .par_iter()
            .map(|&word| (word.to_string(), Arc::new(self.compute_neighbors(word))))
            .collect();

        let mut cache = self.write_cache();
        for (word, neighbors) in computed {
            cache.entry(word).or_insert(neighbors);
        }

        debug!(cached = cache.len(), "precomputed neighbor sets");
    }

    /// Words one transformation away from `word`
    ///
    /// A word outside the dictionary has no neighbors.
    pub fn neighbors(&self, word: &str) -> Neighbors {
        if !self.index.contains(word) {
            return Arc::clone(&self.empty);
        }

        if let Some(hit) = self.read_cache().get(word) {
            return Arc::clone(hit);
        }

        let computed = Arc::new(self.compute_neighbors(word));
        let mut cache = self.write_cache();
        Arc::clone(cache.entry(word.to_string()).or_insert(computed))
    }

    /// The dictionary this graph was built from
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Number of memoized neighbor sets
    pub fn cached_len(&self) -> usize {
        self.read_cache().len()
    }

    /// Number of undirected edges
    ///
    /// Touches every word, so the cache ends up fully populated.
    pub fn edge_count(&self) -> usize {
        self.precompute();
        let degree_sum: usize = self.read_cache().values().map(|n| n.len()).sum();
        degree_sum / 2
    }

    /// Every word reachable within `depth` transformations, with its distance
    ///
    /// The start word is included at distance 0 when it is in the dictionary.
    /// Results are ordered by distance, then alphabetically.
    pub fn neighborhood(&self, word: &str, depth: usize) -> Vec<(String, usize)> {
        if !self.index.contains(word) {
            return Vec::new();
        }

        let mut distances: FxHashMap<String, usize> = FxHashMap::default();
        let mut queue = VecDeque::from([(word.to_string(), 0)]);
        distances.insert(word.to_string(), 0);

        while let Some((current, dist)) = queue.pop_front() {
            if dist == depth {
                continue;
            }
            for next in self.neighbors(&current).iter() {
                if !distances.contains_key(next) {
                    distances.insert(next.clone(), dist + 1);
                    queue.push_back((next.clone(), dist + 1));
                }
            }
        }

        let mut reached: Vec<(String, usize)> = distances.into_iter().collect();
        reached.sort_by(|(w1, d1), (w2, d2)| d1.cmp(d2).then_with(|| w1.cmp(w2)));
        reached
    }

    fn compute_neighbors(&self, word: &str) -> FxHashSet<String> {
        patterns(word)
            .filter_map(|key| self.groups.get(&key))
            .flatten()
            .filter(|&other| other != word)
            .cloned()
            .collect()
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, FxHashMap<String, Neighbors>> {
        // Cached values are complete sets, so a poisoned lock still holds valid data
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, FxHashMap<String, Neighbors>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Wildcard keys for each position of a word
fn patterns(word: &str) -> impl Iterator<Item = PatternKey> + '_ {
    word.char_indices()
        .enumerate()
        .map(move |(position, (byte, ch))| {
            let mut rest = String::with_capacity(word.len() - ch.len_utf8());
            rest.push_str(&word[..byte]);
            rest.push_str(&word[byte + ch.len_utf8()..]);
            (position, rest)
        })
}
