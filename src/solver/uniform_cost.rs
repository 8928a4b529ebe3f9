//! Uniform-cost (Dijkstra) search
//!
//! Orders the frontier by accumulated cost g(n) alone. With unit costs this explores
//! in the same order as breadth-first search, but stays correct for any non-negative
//! `CostModel`.

use super::frontier::{Frontier, finish, reconstruct_path, trivial_outcome};
use super::strategy::{PathFinder, SearchReport};
use crate::core::{CostModel, HammingCost, TransformationGraph};
use rustc_hash::{FxHashMap, FxHashSet};

/// Cost-ordered search over a shared graph
///
/// Equal-cost entries pop in alphabetical order.
#[derive(Debug, Clone, Copy)]
pub struct UniformCost<'g, C = HammingCost> {
    graph: &'g TransformationGraph,
    cost: C,
}

impl<'g> UniformCost<'g> {
    #[must_use]
    pub const fn new(graph: &'g TransformationGraph) -> Self {
        Self::with_cost(graph, HammingCost)
    }
}

impl<'g, C: CostModel> UniformCost<'g, C> {
    /// Use a custom cost model
    #[must_use]
    pub const fn with_cost(graph: &'g TransformationGraph, cost: C) -> Self {
        Self { graph, cost }
    }
}

impl<C: CostModel> PathFinder for UniformCost<'_, C> {
    fn search(&self, start: &str, target: &str) -> SearchReport {
        if let Some(outcome) = trivial_outcome(start, target) {
            return outcome;
        }

        let mut open = Frontier::default();
        let mut closed: FxHashSet<String> = FxHashSet::default();
        let mut best_cost: FxHashMap<String, u32> = FxHashMap::default();
        let mut came_from: FxHashMap<String, String> = FxHashMap::default();
        let mut expanded = 0;

        open.push(0, 0, start.to_string());
        best_cost.insert(start.to_string(), 0);

        while let Some(entry) = open.pop() {
            if closed.contains(&entry.word) {
                continue;
            }

            if entry.word == target {
                let path = reconstruct_path(&came_from, entry.word);
                return finish("ucs", start, target, path, expanded);
            }

            expanded += 1;
            let tentative = self.cost.g(entry.cost);
            for next in self.graph.neighbors(&entry.word).iter() {
                if closed.contains(next) {
                    continue;
                }
                if best_cost.get(next).is_none_or(|&known| tentative < known) {
                    best_cost.insert(next.clone(), tentative);
                    came_from.insert(next.clone(), entry.word.clone());
                    open.push(tentative, tentative, next.clone());
                }
            }
            closed.insert(entry.word);
        }

        finish("ucs", start, target, Vec::new(), expanded)
    }
}
