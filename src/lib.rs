//! Word Ladder
//!
//! Finds ladders between words of equal length, changing one letter per step, using
//! breadth-first, uniform-cost or A* search over a shared transformation graph.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solver::{StrategyKind, build_graph, find_path};
//!
//! let graph = build_graph(["cat", "bat", "bot", "bog", "dog"]).unwrap();
//!
//! let path = find_path(StrategyKind::AStar, &graph, "cat", "dog");
//! assert_eq!(path, vec!["cat", "bat", "bot", "bog", "dog"]);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
