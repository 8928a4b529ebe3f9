//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_compare_result, print_hint_result, print_neighbors_result,
    print_solve_result, print_stats, print_tree, print_verify_result,
};
