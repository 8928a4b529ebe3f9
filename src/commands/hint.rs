//! Hint command
//!
//! Suggests the next word toward a target.

use crate::core::TransformationGraph;
use crate::solver::{PathFinder, StrategyKind, StrategyType};

/// Result of asking for a hint
pub struct HintResult {
    pub current: String,
    pub target: String,
    pub strategy: StrategyKind,
    /// Suggested next word, if a ladder exists
    pub next: Option<String>,
    /// Transformations left after taking the suggestion
    pub remaining: Option<usize>,
    /// Number of one-letter moves available from the current word
    pub options: usize,
}

/// Suggest the next move from `current` toward `target`
#[must_use]
pub fn get_hint(
    current: &str,
    target: &str,
    strategy: StrategyKind,
    graph: &TransformationGraph,
) -> HintResult {
    let report = StrategyType::new(strategy, graph).search(current, target);
    let next = report.path.get(1).cloned();
    let remaining = next.as_ref().map(|_| report.path.len() - 2);

    HintResult {
        current: current.to_string(),
        target: target.to_string(),
        strategy,
        next,
        remaining,
        options: graph.neighbors(current).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> TransformationGraph {
        TransformationGraph::from_words(["cold", "cord", "card", "ward", "warm", "bold"]).unwrap()
    }

    #[test]
    fn hint_suggests_next_word() {
        let hint = get_hint("cold", "warm", StrategyKind::AStar, &graph());

        assert_eq!(hint.next.as_deref(), Some("cord"));
        assert_eq!(hint.remaining, Some(3));
        assert_eq!(hint.options, 2);
    }

    #[test]
    fn hint_at_target_has_no_move() {
        let hint = get_hint("warm", "warm", StrategyKind::BreadthFirst, &graph());
        assert!(hint.next.is_none());
        assert!(hint.remaining.is_none());
    }

    #[test]
    fn hint_without_ladder() {
        let hint = get_hint("cold", "wxyz", StrategyKind::UniformCost, &graph());
        assert!(hint.next.is_none());
    }
}
