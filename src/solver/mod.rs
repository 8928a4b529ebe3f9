//! Word ladder search algorithms
//!
//! Breadth-first, uniform-cost and A* search share one read-only
//! `TransformationGraph`; each call keeps its own frontier and discards it on return.

mod astar;
mod breadth_first;
mod frontier;
pub mod strategy;
mod uniform_cost;

pub use astar::AStar;
pub use breadth_first::BreadthFirst;
pub use strategy::{PathFinder, SearchReport, StrategyKind, StrategyType};
pub use uniform_cost::UniformCost;

use crate::core::{DictionaryError, TransformationGraph};

/// Build a transformation graph from a normalized dictionary
///
/// # Errors
/// Returns `DictionaryError` if a word is empty or not trimmed lowercase.
pub fn build_graph<I, S>(dictionary: I) -> Result<TransformationGraph, DictionaryError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TransformationGraph::from_words(dictionary)
}

/// Find a ladder with the chosen strategy
///
/// Returns an empty vector when there is no ladder or the endpoints differ in length.
///
/// # Examples
/// ```
/// use word_ladder::solver::{StrategyKind, build_graph, find_path};
///
/// let graph = build_graph(["hit", "hot", "dot", "dog", "cog", "cot"]).unwrap();
/// let path = find_path(StrategyKind::AStar, &graph, "hit", "cog");
/// assert_eq!(path, vec!["hit", "hot", "cot", "cog"]);
///
/// assert!(find_path(StrategyKind::BreadthFirst, &graph, "hit", "cogs").is_empty());
/// ```
#[must_use]
pub fn find_path(
    strategy: StrategyKind,
    graph: &TransformationGraph,
    start: &str,
    target: &str,
) -> Vec<String> {
    StrategyType::new(strategy, graph).find_path(start, target)
}

/// Suggest the next word on a shortest ladder from `current` to `target`
///
/// Returns `None` if `current` is already the target or no ladder exists.
#[must_use]
pub fn next_move(
    strategy: StrategyKind,
    graph: &TransformationGraph,
    current: &str,
    target: &str,
) -> Option<String> {
    find_path(strategy, graph, current, target).into_iter().nth(1)
}
