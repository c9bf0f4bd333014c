//! Display functions for session state and command results

use super::formatters::{create_progress_bar, known_positions, letter_list};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, StrategyStats};
use crate::recommend::Recommendation;
use crate::session::Session;
use colored::Colorize;
use std::io::{self, Write};

/// Write the session summary shown before every turn
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_stats<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let store = session.constraints();

    writeln!(
        out,
        "Possible words remaining: {}",
        session.candidates().len().to_string().bright_yellow().bold()
    )?;
    writeln!(out, "Known positions: {}", known_positions(store).green())?;
    writeln!(
        out,
        "Known letters (wrong position): {}",
        letter_list(store.misplaced_letters()).yellow()
    )?;
    writeln!(
        out,
        "Excluded letters: {}",
        letter_list(store.excluded_letters().iter().copied()).bright_black()
    )
}

/// Write both strategies' suggestions
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_recommendation<W: Write>(out: &mut W, rec: &Recommendation) -> io::Result<()> {
    writeln!(out, "\n💡 {}", "BEST FOR AVERAGE CASE:".bright_cyan().bold())?;
    writeln!(out, "   Word: {}", rec.average.word.text().bright_white().bold())?;
    writeln!(
        out,
        "   Average remaining: {:.2} | Worst case: {}",
        rec.average.score.expected(),
        rec.average.score.worst_case()
    )?;

    writeln!(
        out,
        "\n🛡️  {}",
        "BEST FOR WORST CASE (Minimax):".bright_cyan().bold()
    )?;
    writeln!(out, "   Word: {}", rec.minimax.word.text().bright_white().bold())?;
    writeln!(
        out,
        "   Average remaining: {:.2} | Worst case: {}",
        rec.minimax.score.expected(),
        rec.minimax.score.worst_case()
    )?;
    writeln!(out, "   (When tied on worst case, picks best average)")?;

    if rec.strategies_agree() {
        writeln!(out, "\n✨ {}", "Both strategies agree!".green())?;
    }
    Ok(())
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} strategy)",
        result.target.text().bright_yellow().bold(),
        result.strategy.name()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.text(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Expected:   {:.2} remaining, worst case {}",
                step.score.expected(),
                step.score.worst_case()
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_candidates as f64;
    let bar = create_progress_bar(result.score.expected(), total, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Expected:    [{}] {}",
        bar.green(),
        format!("{:.2} remaining", result.score.expected()).bright_yellow()
    );
    println!("   Worst case:  {} remaining", result.score.worst_case());

    if !result.largest_groups.is_empty() {
        println!("\n📈 {}", "Largest groups:".bright_cyan().bold());
        for (pattern, size) in &result.largest_groups {
            println!("   {} {size:5}", pattern.to_emoji());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words tested:     {}", result.total_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    print_strategy_stats(&result.average);
    print_strategy_stats(&result.minimax);
}

fn print_strategy_stats(stats: &StrategyStats) {
    println!(
        "\n📊 {}",
        format!("Strategy: {}", stats.strategy.name())
            .bright_cyan()
            .bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses())
            .bright_yellow()
            .bold()
    );
    if stats.solved > 0 {
        println!(
            "   Best case:        {}",
            stats.min_guesses.to_string().green()
        );
        println!(
            "   Worst case:       {}",
            stats.max_guesses.to_string().yellow()
        );
    }
    if stats.failed() > 0 {
        println!("   Failed:           {}", stats.failed().to_string().red());
    }

    if stats.games == 0 {
        return;
    }
    for (&guess_count, &count) in &stats.distribution {
        let pct = (count as f64 / stats.games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}
