//! Path finding strategies
//!
//! Defines the `PathFinder` trait and the runtime-selectable strategy wrapper.

use super::{AStar, BreadthFirst, UniformCost};
use crate::core::TransformationGraph;
use std::fmt;
use std::str::FromStr;

/// Outcome of one search
///
/// An empty path means there is no ladder (or the request was invalid). Paths are
/// always complete: they start at the start word and end at the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub path: Vec<String>,
    /// Words whose neighbors were explored
    pub expanded: usize,
}

impl SearchReport {
    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of transformations in the path, if one was found
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// A search algorithm over a word transformation graph
pub trait PathFinder {
    /// Search for a ladder from `start` to `target`
    fn search(&self, start: &str, target: &str) -> SearchReport;

    /// Ordered words from `start` to `target` inclusive, or empty if there is none
    fn find_path(&self, start: &str, target: &str) -> Vec<String> {
        self.search(start, target).path
    }
}

/// Names of the available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    BreadthFirst,
    UniformCost,
    AStar,
}

impl StrategyKind {
    pub const ALL: [Self; 3] = [Self::BreadthFirst, Self::UniformCost, Self::AStar];

    /// Parse a strategy name
    ///
    /// Accepts "bfs"/"breadth-first", "ucs"/"uniform-cost" and "astar"/"a*".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth_first" => Some(Self::BreadthFirst),
            "ucs" | "uniform-cost" | "uniform_cost" | "dijkstra" => Some(Self::UniformCost),
            "astar" | "a*" | "a-star" => Some(Self::AStar),
            _ => None,
        }
    }

    /// Short name, as accepted by `from_name`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth First",
            Self::UniformCost => "Uniform Cost",
            Self::AStar => "A* Search",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown strategy {s:?} (expected bfs, ucs or astar)"))
    }
}

/// Enum wrapper for all strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType<'g> {
    BreadthFirst(BreadthFirst<'g>),
    UniformCost(UniformCost<'g>),
    AStar(AStar<'g>),
}

impl<'g> StrategyType<'g> {
    #[must_use]
    pub const fn new(kind: StrategyKind, graph: &'g TransformationGraph) -> Self {
        match kind {
            StrategyKind::BreadthFirst => Self::BreadthFirst(BreadthFirst::new(graph)),
            StrategyKind::UniformCost => Self::UniformCost(UniformCost::new(graph)),
            StrategyKind::AStar => Self::AStar(AStar::new(graph)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::BreadthFirst(_) => StrategyKind::BreadthFirst,
            Self::UniformCost(_) => StrategyKind::UniformCost,
            Self::AStar(_) => StrategyKind::AStar,
        }
    }
}

impl PathFinder for StrategyType<'_> {
    fn search(&self, start: &str, target: &str) -> SearchReport {
        match self {
            Self::BreadthFirst(s) => s.search(start, target),
            Self::UniformCost(s) => s.search(start, target),
            Self::AStar(s) => s.search(start, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!(StrategyKind::from_name("bfs"), Some(StrategyKind::BreadthFirst));
        assert_eq!(StrategyKind::from_name("UCS"), Some(StrategyKind::UniformCost));
        assert_eq!(StrategyKind::from_name("a*"), Some(StrategyKind::AStar));
        assert_eq!(StrategyKind::from_name("dfs"), None);
    }

    #[test]
    fn name_round_trips() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.name().parse::<StrategyKind>(), Ok(kind));
        }
    }

    #[test]
    fn from_str_reports_unknown() {
        let err = "greedy".parse::<StrategyKind>().unwrap_err();
        assert!(err.contains("greedy"));
    }

    #[test]
    fn wrapper_dispatches_to_kind() {
        let graph = TransformationGraph::from_words(["cat", "cot", "cog", "dog"]).unwrap();

        for kind in StrategyKind::ALL {
            let strategy = StrategyType::new(kind, &graph);
            assert_eq!(strategy.kind(), kind);
            assert_eq!(
                strategy.find_path("cat", "dog"),
                vec!["cat", "cot", "cog", "dog"]
            );
        }
    }

    #[test]
    fn report_steps() {
        let report = SearchReport {
            path: vec!["cat".to_string(), "cot".to_string()],
            expanded: 1,
        };
        assert!(report.is_found());
        assert_eq!(report.steps(), Some(1));
        assert_eq!(SearchReport::default().steps(), None);
    }
}
