//! Breadth-first search
//!
//! Explores the graph level by level, so the first time the target is dequeued
//! the path to it has the fewest transformations.

use super::frontier::{finish, reconstruct_path, trivial_outcome};
use super::strategy::{PathFinder, SearchReport};
use crate::core::TransformationGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Level-order search over a shared graph
#[derive(Debug, Clone, Copy)]
pub struct BreadthFirst<'g> {
    graph: &'g TransformationGraph,
}

impl<'g> BreadthFirst<'g> {
    #[must_use]
    pub const fn new(graph: &'g TransformationGraph) -> Self {
        Self { graph }
    }
}

impl PathFinder for BreadthFirst<'_> {
    fn search(&self, start: &str, target: &str) -> SearchReport {
        if let Some(outcome) = trivial_outcome(start, target) {
            return outcome;
        }

        let mut queue = VecDeque::from([start.to_string()]);
        let mut visited: FxHashSet<String> = FxHashSet::default();
        let mut came_from: FxHashMap<String, String> = FxHashMap::default();
        let mut expanded = 0;
        visited.insert(start.to_string());

        while let Some(current) = queue.pop_front() {
            if current == target {
                let path = reconstruct_path(&came_from, current);
                return finish("bfs", start, target, path, expanded);
            }

            expanded += 1;
            for next in self.graph.neighbors(&current).iter() {
                if visited.insert(next.clone()) {
                    came_from.insert(next.clone(), current.clone());
                    queue.push_back(next.clone());
                }
            }
        }

        finish("bfs", start, target, Vec::new(), expanded)
    }
}
