//! Display functions for command results

use super::formatters::{change_marker, create_progress_bar, format_ladder, render_tree};
use crate::commands::{
    BenchmarkResult, CompareResult, DictionaryStats, HintResult, NeighborsResult, SolveResult,
    TransformTree, VerifyResult,
};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {} ({})",
        result.start.bright_yellow().bold(),
        result.target.bright_yellow().bold(),
        result.strategy.label()
    );
    println!("{}", "─".repeat(60).cyan());

    print_unknown_endpoints(result);

    if !result.success() {
        println!("\n{}", "❌ No ladder found".red().bold());
        return;
    }

    println!();
    for (i, word) in result.path.iter().enumerate() {
        if i > 0 {
            println!("   ↓");
        }
        println!("  {}", word.bold());
        if verbose && i + 1 < result.path.len() {
            let marker = change_marker(word, &result.path[i + 1]);
            println!("  {}", marker.bright_black());
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ {} transformations", result.path.len() - 1)
            .green()
            .bold()
    );
    if verbose {
        println!("   Expanded:  {} words", result.expanded);
        println!("   Time:      {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

fn print_unknown_endpoints(result: &SolveResult) {
    if !result.start_known {
        println!("{}", format!("⚠ '{}' is not in the dictionary", result.start).yellow());
    }
    if !result.target_known {
        println!("{}", format!("⚠ '{}' is not in the dictionary", result.target).yellow());
    }
}

/// Print a side-by-side comparison of all strategies
pub fn print_compare_result(result: &CompareResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ",
        "STRATEGY COMPARISON:".bright_cyan().bold(),
        result.start.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_expanded = result.runs.iter().map(|r| r.expanded).max().unwrap_or(0);

    for run in &result.runs {
        let length = if run.success() {
            format!("{} steps", run.path.len() - 1)
        } else {
            "no path".to_string()
        };
        let bar = create_progress_bar(run.expanded as f64, max_expanded as f64, 20);
        println!(
            "\n  {:<14} {:>9}  [{}] {:>5} expanded  {:.3}ms",
            run.strategy.label().bold(),
            length,
            bar.green(),
            run.expanded,
            run.duration.as_secs_f64() * 1000.0
        );
        if run.success() {
            println!("  {}", format_ladder(&run.path).bright_black());
        }
    }

    println!();
    if result.lengths_agree() {
        println!("{}", "✅ All strategies agree on ladder length".green().bold());
    } else {
        println!("{}", "❌ Strategies disagree on ladder length".red().bold());
    }
}

/// Print a next-move hint
pub fn print_hint_result(result: &HintResult) {
    println!(
        "\nCurrent: {}   Target: {} 🎯",
        result.current.bold(),
        result.target.bold()
    );
    println!("Available transformations: {}", result.options);

    match (&result.next, result.remaining) {
        (Some(next), Some(remaining)) => {
            println!(
                "\n💡 Try {} ({} more after that, via {})",
                next.bright_yellow().bold(),
                remaining,
                result.strategy.label()
            );
        }
        _ if result.current == result.target => {
            println!("\n{}", "You are already at the target!".green());
        }
        _ => println!("\n{}", "No ladder reaches the target from here.".red()),
    }
}

/// Print words reachable from a word, by distance
pub fn print_neighbors_result(result: &NeighborsResult) {
    if !result.known {
        println!("{}", format!("⚠ '{}' is not in the dictionary", result.word).yellow());
        return;
    }

    println!("\nTransformations of {}:", result.word.bright_yellow().bold());
    if result.levels.is_empty() {
        println!("  (none)");
    }
    for (distance, words) in &result.levels {
        println!(
            "  {} {:>3} │ {}",
            format!("{distance} step{}", if *distance == 1 { "" } else { "s" }).cyan(),
            words.len(),
            words.join(", ")
        );
    }
}

/// Print a transformation tree, marking the target if given
pub fn print_tree(tree: &TransformTree, target: Option<&str>) {
    println!("\nWord Transformation Tree:");
    println!("========================");
    println!("Current: {}", tree.word);
    if let Some(target) = target {
        println!("Target:  {target} 🎯");
    }
    println!("\nPossible Transformations:");

    for line in render_tree(tree) {
        match target {
            Some(t) if line.ends_with(&format!(" {t}")) => {
                println!("{} {}", line, "🎯 (Target)".green());
            }
            _ => println!("{line}"),
        }
    }
}

/// Print dictionary statistics
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words:       {}", stats.total_words);
    println!("   Edges:       {}", stats.edges);
    println!("   Isolated:    {}", stats.isolated);

    println!("\n📈 {}", "Length distribution:".bright_cyan().bold());
    let max = stats.distribution.values().copied().max().unwrap_or(0);
    for (length, count) in &stats.distribution {
        let bar = create_progress_bar(*count as f64, max as f64, 40);
        println!("   {length:>2}: {} {count:5}", bar.green());
    }
}

/// Print the outcome of verifying a ladder
pub fn print_verify_result(result: &VerifyResult) {
    println!("\n  {}", format_ladder(&result.words));
    match &result.outcome {
        Ok(()) => println!(
            "\n{}",
            format!("✅ Valid ladder ({} transformations)", result.words.len() - 1)
                .green()
                .bold()
        ),
        Err(e) => println!("\n{}", format!("❌ {e}").red().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Run:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.pairs);
    println!("   Solvable:         {}", result.solvable);
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    println!("\n📈 {}", "Per strategy:".bright_cyan().bold());
    let max_expanded = result.totals.iter().map(|t| t.expanded).max().unwrap_or(0);
    for total in &result.totals {
        let avg = if result.pairs > 0 {
            total.expanded as f64 / result.pairs as f64
        } else {
            0.0
        };
        let bar = create_progress_bar(total.expanded as f64, max_expanded as f64, 30);
        println!(
            "   {:<14} [{}] {:>8.1} expanded/pair  found {:>4}  {:.2}s",
            total.strategy.label(),
            bar.green(),
            avg,
            total.found,
            total.duration.as_secs_f64()
        );
    }

    println!();
    if result.disagreements.is_empty() {
        println!("{}", "✅ All strategies agree on every pair".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} disagreements", result.disagreements.len())
                .red()
                .bold()
        );
        for (start, target) in &result.disagreements {
            println!("   {start} → {target}");
        }
    }
}
