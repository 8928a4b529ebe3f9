//! Dictionary exploration commands
//!
//! Neighbor listings, transformation trees and dictionary statistics.

use crate::core::TransformationGraph;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Words reachable from a word, grouped by distance
pub struct NeighborsResult {
    pub word: String,
    pub known: bool,
    /// `(distance, words)` pairs for distances 1..=depth, words sorted
    pub levels: Vec<(usize, Vec<String>)>,
}

/// List words within `depth` transformations of `word`
#[must_use]
pub fn list_neighbors(word: &str, depth: usize, graph: &TransformationGraph) -> NeighborsResult {
    let mut levels: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (reached, distance) in graph.neighborhood(word, depth) {
        if distance > 0 {
            levels.entry(distance).or_default().push(reached);
        }
    }

    NeighborsResult {
        word: word.to_string(),
        known: graph.index().contains(word),
        levels: levels.into_iter().collect(),
    }
}

/// A word and the transformations explored from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTree {
    pub word: String,
    pub children: Vec<TransformTree>,
}

/// Build a tree of transformations from `root`, `depth` levels deep
///
/// Children are explored alphabetically and each word appears at most once in the
/// whole tree, under the first branch that reaches it.
#[must_use]
pub fn transformation_tree(root: &str, depth: usize, graph: &TransformationGraph) -> TransformTree {
    let mut visited: FxHashSet<String> = FxHashSet::default();
    visited.insert(root.to_string());
    grow(root, depth, graph, &mut visited)
}

fn grow(
    word: &str,
    depth: usize,
    graph: &TransformationGraph,
    visited: &mut FxHashSet<String>,
) -> TransformTree {
    let mut children = Vec::new();

    if depth > 0 {
        let mut next: Vec<String> = graph.neighbors(word).iter().cloned().collect();
        next.sort();

        for child in next {
            if visited.insert(child.clone()) {
                children.push(grow(&child, depth - 1, graph, visited));
            }
        }
    }

    TransformTree {
        word: word.to_string(),
        children,
    }
}

/// Summary of the loaded dictionary
pub struct DictionaryStats {
    pub total_words: usize,
    /// Word length → count
    pub distribution: BTreeMap<usize, usize>,
    pub edges: usize,
    /// Words with no one-letter neighbor
    pub isolated: usize,
}

/// Compute dictionary statistics (populates the whole neighbor cache)
#[must_use]
pub fn dictionary_stats(graph: &TransformationGraph) -> DictionaryStats {
    let index = graph.index();
    let edges = graph.edge_count();
    let isolated = index
        .words()
        .filter(|word| graph.neighbors(word).is_empty())
        .count();

    DictionaryStats {
        total_words: index.len(),
        distribution: index.length_distribution(),
        edges,
        isolated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> TransformationGraph {
        TransformationGraph::from_words(["cat", "bat", "hat", "cot", "cog", "dog", "stone"]).unwrap()
    }

    #[test]
    fn neighbors_grouped_by_distance() {
        let result = list_neighbors("cat", 2, &graph());

        assert!(result.known);
        assert_eq!(
            result.levels,
            vec![
                (1, vec!["bat".to_string(), "cot".to_string(), "hat".to_string()]),
                (2, vec!["cog".to_string()]),
            ]
        );
    }

    #[test]
    fn neighbors_of_unknown_word() {
        let result = list_neighbors("zzz", 1, &graph());
        assert!(!result.known);
        assert!(result.levels.is_empty());
    }

    #[test]
    fn tree_visits_each_word_once() {
        let tree = transformation_tree("cat", 2, &graph());

        // "bat" is explored first and claims "hat" before level one reaches it
        let first_level: Vec<&str> = tree.children.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(first_level, vec!["bat", "cot"]);
        assert_eq!(tree.children[0].children[0].word, "hat");
        assert_eq!(tree.children[1].children[0].word, "cog");
    }

    #[test]
    fn tree_depth_zero_is_leaf() {
        let tree = transformation_tree("cat", 0, &graph());
        assert!(tree.children.is_empty());
    }

    #[test]
    fn stats_summarize_dictionary() {
        let stats = dictionary_stats(&graph());

        assert_eq!(stats.total_words, 7);
        assert_eq!(stats.distribution.get(&3), Some(&6));
        assert_eq!(stats.distribution.get(&5), Some(&1));
        // cat-bat, cat-hat, bat-hat, cat-cot, cot-cog, cog-dog
        assert_eq!(stats.edges, 6);
        assert_eq!(stats.isolated, 1);
    }
}
