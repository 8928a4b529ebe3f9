//! Shared frontier machinery for the priority-based searches
//!
//! The open set tolerates duplicate entries for a word; the caller skips entries
//! for already-closed words when they are popped (lazy deletion).

use super::strategy::SearchReport;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

/// A discovered word waiting to be expanded
///
/// Ordered by priority, then by lower accumulated cost, then alphabetically.
/// Derived `Ord` follows field order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Entry {
    pub priority: u32,
    pub cost: u32,
    pub word: String,
}

/// Min-priority open set
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
}

impl Frontier {
    pub fn push(&mut self, priority: u32, cost: u32, word: String) {
        self.heap.push(Reverse(Entry {
            priority,
            cost,
            word,
        }));
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

/// Walk predecessors back from `target` and return the path start-first
///
/// The start word is the only word without a predecessor.
pub(crate) fn reconstruct_path(came_from: &FxHashMap<String, String>, target: String) -> Vec<String> {
    let mut path = vec![target];
    while let Some(prev) = path.last().and_then(|word| came_from.get(word)) {
        path.push(prev.clone());
    }
    path.reverse();
    path
}

/// Outcome for requests that never reach the graph
///
/// Unequal lengths give an empty path; identical endpoints give `[start]`.
pub(crate) fn trivial_outcome(start: &str, target: &str) -> Option<SearchReport> {
    if start.chars().count() != target.chars().count() {
        return Some(SearchReport::default());
    }
    if start == target {
        return Some(SearchReport {
            path: vec![start.to_string()],
            expanded: 0,
        });
    }
    None
}

/// Build the report and log a one-line summary
pub(crate) fn finish(
    strategy: &'static str,
    start: &str,
    target: &str,
    path: Vec<String>,
    expanded: usize,
) -> SearchReport {
    debug!(
        strategy,
        start,
        target,
        expanded,
        words = path.len(),
        "search finished"
    );
    SearchReport { path, expanded }
}
