//! A* search
//!
//! Same frontier discipline as uniform-cost search, ordered by f(n) = g(n) + h(n).
//! With an admissible, consistent heuristic the first time the target is popped its
//! path is minimal, so closed words never need reopening.
//!
//! Ties on f(n) prefer the lower g(n), then the alphabetically smaller word.

use super::frontier::{Frontier, finish, reconstruct_path, trivial_outcome};
use super::strategy::{PathFinder, SearchReport};
use crate::core::{CostModel, HammingCost, TransformationGraph};
use rustc_hash::{FxHashMap, FxHashSet};

/// Heuristic-guided search over a shared graph
#[derive(Debug, Clone, Copy)]
pub struct AStar<'g, C = HammingCost> {
    graph: &'g TransformationGraph,
    cost: C,
}

impl<'g> AStar<'g> {
    #[must_use]
    pub const fn new(graph: &'g TransformationGraph) -> Self {
        Self::with_cost(graph, HammingCost)
    }
}

impl<'g, C: CostModel> AStar<'g, C> {
    /// Use a custom cost model
    ///
    /// Optimality holds only if its heuristic is admissible and consistent.
    #[must_use]
    pub const fn with_cost(graph: &'g TransformationGraph, cost: C) -> Self {
        Self { graph, cost }
    }
}

impl<C: CostModel> PathFinder for AStar<'_, C> {
    fn search(&self, start: &str, target: &str) -> SearchReport {
        if let Some(outcome) = trivial_outcome(start, target) {
            return outcome;
        }

        let mut open = Frontier::default();
        let mut closed: FxHashSet<String> = FxHashSet::default();
        let mut g_scores: FxHashMap<String, u32> = FxHashMap::default();
        let mut came_from: FxHashMap<String, String> = FxHashMap::default();
        let mut expanded = 0;

        open.push(self.cost.f(0, start, target), 0, start.to_string());
        g_scores.insert(start.to_string(), 0);

        while let Some(entry) = open.pop() {
            if closed.contains(&entry.word) {
                continue;
            }

            if entry.word == target {
                let path = reconstruct_path(&came_from, entry.word);
                return finish("astar", start, target, path, expanded);
            }

            expanded += 1;
            let tentative = self.cost.g(entry.cost);
            for next in self.graph.neighbors(&entry.word).iter() {
                if closed.contains(next) {
                    continue;
                }
                if g_scores.get(next).is_none_or(|&known| tentative < known) {
                    g_scores.insert(next.clone(), tentative);
                    came_from.insert(next.clone(), entry.word.clone());
                    let f = self.cost.f(tentative, next, target);
                    open.push(f, tentative, next.clone());
                }
            }
            closed.insert(entry.word);
        }

        finish("astar", start, target, Vec::new(), expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::UniformCost;

    fn graph(words: &[&str]) -> TransformationGraph {
        TransformationGraph::from_words(words.iter().copied()).unwrap()
    }

    #[test]
    fn finds_shortest_ladder() {
        let g = graph(&["cat", "bat", "bot", "bog", "dog"]);
        let path = AStar::new(&g).find_path("cat", "dog");
        assert_eq!(path, vec!["cat", "bat", "bot", "bog", "dog"]);
    }

    #[test]
    fn expands_fewer_nodes_than_uniform_cost() {
        // A fan of dead ends hangs off the start word
        let g = graph(&[
            "aaa", "baa", "caa", "daa", "eaa", "faa", "aab", "aba", "abb", "bbb",
        ]);

        let astar = AStar::new(&g).search("aaa", "bbb");
        let ucs = UniformCost::new(&g).search("aaa", "bbb");

        assert_eq!(astar.path.len(), ucs.path.len());
        assert_eq!(astar.path.len(), 4);
        assert!(astar.expanded < ucs.expanded);
    }

    #[test]
    fn one_step_target() {
        let g = graph(&["cold", "cord", "card"]);
        assert_eq!(AStar::new(&g).find_path("cold", "cord"), vec!["cold", "cord"]);
    }

    #[test]
    fn no_path_and_edge_cases() {
        let g = graph(&["cat", "dog", "boat"]);
        let astar = AStar::new(&g);
        assert!(astar.find_path("cat", "dog").is_empty());
        assert!(astar.find_path("cat", "boat").is_empty());
        assert_eq!(astar.find_path("dog", "dog"), vec!["dog"]);
        assert_eq!(astar.find_path("zzz", "zzz"), vec!["zzz"]);
    }
}
