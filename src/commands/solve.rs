//! Ladder solving command
//!
//! Finds a ladder between two words with one strategy.

use crate::core::TransformationGraph;
use crate::solver::{PathFinder, StrategyKind, StrategyType};
use std::time::{Duration, Instant};

/// Configuration for solving a ladder
pub struct SolveConfig {
    pub start: String,
    pub target: String,
    pub strategy: StrategyKind,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, target: String) -> Self {
        Self {
            start,
            target,
            strategy: StrategyKind::AStar,
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Result of solving a ladder
pub struct SolveResult {
    pub start: String,
    pub target: String,
    pub strategy: StrategyKind,
    pub path: Vec<String>,
    pub expanded: usize,
    pub duration: Duration,
    pub start_known: bool,
    pub target_known: bool,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Solve a ladder using the configured strategy
#[must_use]
pub fn solve_ladder(config: SolveConfig, graph: &TransformationGraph) -> SolveResult {
    let index = graph.index();
    let strategy = StrategyType::new(config.strategy, graph);

    let timer = Instant::now();
    let report = strategy.search(&config.start, &config.target);
    let duration = timer.elapsed();

    SolveResult {
        start_known: index.contains(&config.start),
        target_known: index.contains(&config.target),
        start: config.start,
        target: config.target,
        strategy: config.strategy,
        path: report.path,
        expanded: report.expanded,
        duration,
    }
}

/// Result of running every strategy on the same request
pub struct CompareResult {
    pub start: String,
    pub target: String,
    pub runs: Vec<SolveResult>,
}

impl CompareResult {
    /// True when all strategies found ladders of the same length (or none at all)
    #[must_use]
    pub fn lengths_agree(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].path.len() == pair[1].path.len())
    }
}

/// Solve the same ladder with every strategy
#[must_use]
pub fn compare_strategies(start: &str, target: &str, graph: &TransformationGraph) -> CompareResult {
    let runs = StrategyKind::ALL
        .into_iter()
        .map(|kind| {
            let config =
                SolveConfig::new(start.to_string(), target.to_string()).with_strategy(kind);
            solve_ladder(config, graph)
        })
        .collect();

    CompareResult {
        start: start.to_string(),
        target: target.to_string(),
        runs,
    }
}
