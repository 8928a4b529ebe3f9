//! Word Ladder - CLI
//!
//! Solve, compare and explore word ladders from the command line.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, compare_strategies, dictionary_stats, get_hint,
        list_neighbors, run_benchmark, solve_ladder, transformation_tree, verify_ladder,
    },
    core::{TransformationGraph, WordIndex},
    output::{
        print_benchmark_result, print_compare_result, print_hint_result, print_neighbors_result,
        print_solve_result, print_stats, print_tree, print_verify_result,
    },
    solver::StrategyKind,
    wordlists::{DICTIONARY, loader},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find word ladders with breadth-first, uniform-cost and A* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Precompute every neighbor set before running the command
    #[arg(long, global = true)]
    eager: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a ladder between two words
    Solve {
        start: String,
        target: String,

        /// Strategy: astar (default), ucs, bfs
        #[arg(short, long, default_value = "astar")]
        strategy: StrategyKind,

        /// Show changed letters, expansions and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run every strategy on the same pair and compare
    Compare { start: String, target: String },

    /// Suggest the next word toward a target
    Hint {
        current: String,
        target: String,

        #[arg(short, long, default_value = "astar")]
        strategy: StrategyKind,
    },

    /// List words reachable from a word
    Neighbors {
        word: String,

        /// How many transformations away to look
        #[arg(short, long, default_value = "1")]
        depth: usize,
    },

    /// Show a tree of transformations from a word
    Tree {
        word: String,

        #[arg(short, long, default_value = "2")]
        depth: usize,

        /// Highlight this word in the tree
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Show dictionary statistics
    Stats,

    /// Check that a sequence of words is a valid ladder
    Verify {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Solve random pairs with every strategy and compare
    Benchmark {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Only use words of this length
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for pair selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str) -> Result<WordIndex> {
    match wordlist {
        "embedded" => Ok(loader::words_from_slice(DICTIONARY)),
        path => loader::load_from_file(path),
    }
}

/// Trim and lowercase a word from the command line
fn normalize_arg(word: &str) -> String {
    word.trim().to_lowercase()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let index = load_dictionary(&cli.wordlist)
        .with_context(|| format!("could not load wordlist '{}'", cli.wordlist))?;
    if index.is_empty() {
        bail!("wordlist '{}' contains no words", cli.wordlist);
    }
    info!(words = index.len(), eager = cli.eager, "dictionary loaded");

    let graph = if cli.eager {
        TransformationGraph::eager(index)
    } else {
        TransformationGraph::new(index)
    };

    match cli.command {
        Commands::Solve {
            start,
            target,
            strategy,
            verbose,
        } => {
            let config = SolveConfig::new(normalize_arg(&start), normalize_arg(&target))
                .with_strategy(strategy);
            print_solve_result(&solve_ladder(config, &graph), verbose);
        }
        Commands::Compare { start, target } => {
            let result = compare_strategies(&normalize_arg(&start), &normalize_arg(&target), &graph);
            print_compare_result(&result);
        }
        Commands::Hint {
            current,
            target,
            strategy,
        } => {
            let result = get_hint(
                &normalize_arg(&current),
                &normalize_arg(&target),
                strategy,
                &graph,
            );
            print_hint_result(&result);
        }
        Commands::Neighbors { word, depth } => {
            print_neighbors_result(&list_neighbors(&normalize_arg(&word), depth, &graph));
        }
        Commands::Tree {
            word,
            depth,
            target,
        } => {
            let tree = transformation_tree(&normalize_arg(&word), depth, &graph);
            let target = target.as_deref().map(normalize_arg);
            print_tree(&tree, target.as_deref());
        }
        Commands::Stats => print_stats(&dictionary_stats(&graph)),
        Commands::Verify { words } => {
            let words = words.iter().map(String::as_str).map(normalize_arg).collect();
            let result = verify_ladder(words, graph.index());
            print_verify_result(&result);
            if result.outcome.is_err() {
                std::process::exit(1);
            }
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            let config = BenchmarkConfig {
                count,
                length,
                seed,
                ..BenchmarkConfig::default()
            };
            print_benchmark_result(&run_benchmark(&graph, &config));
        }
    }

    Ok(())
}
