//! Benchmark command
//!
//! Solves random same-length word pairs with every strategy against one shared graph
//! and checks that the strategies agree on ladder length.

use crate::core::TransformationGraph;
use crate::solver::{PathFinder, StrategyKind, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random pairs
    pub count: usize,
    /// Restrict pairs to this word length
    pub length: Option<usize>,
    /// Seed for pair selection; random if unset
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 100,
            length: None,
            seed: None,
            show_progress: true,
        }
    }
}

/// Aggregate numbers for one strategy
pub struct StrategyTotals {
    pub strategy: StrategyKind,
    pub found: usize,
    pub expanded: usize,
    pub duration: Duration,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub seed: u64,
    pub pairs: usize,
    /// Pairs for which a ladder exists
    pub solvable: usize,
    /// Pairs where strategies returned different ladder lengths
    pub disagreements: Vec<(String, String)>,
    pub totals: Vec<StrategyTotals>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

struct PairOutcome {
    start: String,
    target: String,
    /// Path length, expansions and time per strategy, in `StrategyKind::ALL` order
    runs: Vec<(usize, usize, Duration)>,
}

/// Run the benchmark
///
/// Returns an empty result if no word length has at least two words.
#[must_use]
pub fn run_benchmark(graph: &TransformationGraph, config: &BenchmarkConfig) -> BenchmarkResult {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let pairs = random_pairs(graph, config, seed);
    info!(pairs = pairs.len(), seed, "starting benchmark");

    let progress = if config.show_progress {
        progress_bar(pairs.len())
    } else {
        ProgressBar::hidden()
    };

    let began = Instant::now();
    let outcomes: Vec<PairOutcome> = pairs
        .into_par_iter()
        .map(|(start, target)| {
            let runs = StrategyKind::ALL
                .iter()
                .map(|&kind| {
                    let timer = Instant::now();
                    let report = StrategyType::new(kind, graph).search(&start, &target);
                    (report.path.len(), report.expanded, timer.elapsed())
                })
                .collect();
            progress.inc(1);
            PairOutcome {
                start,
                target,
                runs,
            }
        })
        .collect();
    let duration = began.elapsed();
    progress.finish_and_clear();

    summarize(seed, &outcomes, duration)
}

fn summarize(seed: u64, outcomes: &[PairOutcome], duration: Duration) -> BenchmarkResult {
    let mut totals: Vec<StrategyTotals> = StrategyKind::ALL
        .iter()
        .map(|&strategy| StrategyTotals {
            strategy,
            found: 0,
            expanded: 0,
            duration: Duration::ZERO,
        })
        .collect();
    let mut disagreements = Vec::new();
    let mut solvable = 0;

    for outcome in outcomes {
        for (total, &(len, expanded, elapsed)) in totals.iter_mut().zip(&outcome.runs) {
            if len > 0 {
                total.found += 1;
            }
            total.expanded += expanded;
            total.duration += elapsed;
        }

        let first_len = outcome.runs.first().map_or(0, |run| run.0);
        if outcome.runs.iter().any(|run| run.0 != first_len) {
            warn!(start = %outcome.start, target = %outcome.target, "strategies disagree");
            disagreements.push((outcome.start.clone(), outcome.target.clone()));
        } else if first_len > 0 {
            solvable += 1;
        }
    }

    let pairs = outcomes.len();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        seed,
        pairs,
        solvable,
        disagreements,
        totals,
        duration,
        pairs_per_second: if secs > 0.0 { pairs as f64 / secs } else { 0.0 },
    }
}

/// Pick distinct same-length word pairs
fn random_pairs(
    graph: &TransformationGraph,
    config: &BenchmarkConfig,
    seed: u64,
) -> Vec<(String, String)> {
    let index = graph.index();

    // Sorted so a seed always yields the same pairs
    let buckets: Vec<Vec<&String>> = index
        .length_distribution()
        .into_iter()
        .filter(|&(length, count)| count >= 2 && config.length.is_none_or(|l| l == length))
        .map(|(length, _)| {
            let mut words: Vec<&String> = index.length_bucket(length).iter().collect();
            words.sort();
            words
        })
        .collect();

    if buckets.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    (0..config.count)
        .map(|_| {
            let words = &buckets[rng.random_range(0..buckets.len())];
            let i = rng.random_range(0..words.len());
            let mut j = rng.random_range(0..words.len() - 1);
            if j >= i {
                j += 1;
            }
            (words[i].clone(), words[j].clone())
        })
        .collect()
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb.set_message("solving pairs");
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::words_from_slice;

    fn config(count: usize, length: Option<usize>) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            length,
            seed: Some(42),
            show_progress: false,
        }
    }

    #[test]
    fn benchmark_runs_on_embedded_dictionary() {
        let graph = TransformationGraph::eager(words_from_slice(DICTIONARY));
        let result = run_benchmark(&graph, &config(30, None));

        assert_eq!(result.pairs, 30);
        assert_eq!(result.seed, 42);
        assert!(result.disagreements.is_empty());
        assert!(result.solvable <= result.pairs);
        assert_eq!(result.totals.len(), 3);
    }

    #[test]
    fn strategies_find_the_same_pairs() {
        let graph = TransformationGraph::new(words_from_slice(DICTIONARY));
        let result = run_benchmark(&graph, &config(20, Some(4)));

        for total in &result.totals {
            assert_eq!(total.found, result.solvable);
        }
    }

    #[test]
    fn same_seed_same_pairs() {
        let graph = TransformationGraph::new(words_from_slice(DICTIONARY));
        let first = random_pairs(&graph, &config(10, None), 9);
        let second = random_pairs(&graph, &config(10, None), 9);

        assert_eq!(first, second);
        for (start, target) in &first {
            assert_ne!(start, target);
            assert_eq!(start.len(), target.len());
        }
    }

    #[test]
    fn length_filter_applies() {
        let graph = TransformationGraph::new(words_from_slice(DICTIONARY));
        let pairs = random_pairs(&graph, &config(10, Some(5)), 1);
        assert!(pairs.iter().all(|(s, t)| s.len() == 5 && t.len() == 5));
    }

    #[test]
    fn no_eligible_bucket_gives_empty_result() {
        let graph = TransformationGraph::from_words(["cat", "boat"]).unwrap();
        let result = run_benchmark(&graph, &config(10, None));

        assert_eq!(result.pairs, 0);
        assert_eq!(result.solvable, 0);
    }
}
