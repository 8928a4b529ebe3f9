//! Command implementations

pub mod benchmark;
pub mod explore;
pub mod hint;
pub mod solve;
pub mod verify;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use explore::{
    DictionaryStats, NeighborsResult, TransformTree, dictionary_stats, list_neighbors,
    transformation_tree,
};
pub use hint::{HintResult, get_hint};
pub use solve::{CompareResult, SolveConfig, SolveResult, compare_strategies, solve_ladder};
pub use verify::{VerifyResult, verify_ladder};
