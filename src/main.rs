//! Wordle Minimax - CLI
//!
//! Interactive Wordle assistant suggesting guesses by expected and
//! worst-case remaining candidates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_minimax::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, run_benchmark, run_simple, sample_targets,
        solve_word,
    },
    core::Word,
    output::{benchmark_bar, print_analysis_result, print_benchmark_result, print_solve_result},
    recommend::{DEFAULT_PROGRESS_INTERVAL, Recommender, RecommenderConfig, StrategyKind},
    session::Session,
    wordlists::{self, EMBEDDED},
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver ranking guesses by expected and worst-case remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a whitespace-separated file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Candidates scored between progress updates
    #[arg(long, global = true, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_every: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver (default)
    Simple {
        /// Hide the progress bar while suggestions are computed
        #[arg(long)]
        quiet: bool,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Strategy: average (default) or minimax
        #[arg(short, long, default_value = "average")]
        strategy: String,

        /// Maximum number of guesses
        #[arg(short = 'g', long, default_value = "6")]
        max_guesses: usize,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a word partitions the word list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Compare both strategies over random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for target sampling
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Maximum number of guesses per game
        #[arg(short = 'g', long, default_value = "6")]
        max_guesses: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_words(source: &str) -> Result<Vec<Word>> {
    let words = wordlists::load(source)
        .with_context(|| format!("Could not load word list '{source}'"))?;
    info!(source, words = words.len(), "word list ready");
    Ok(words)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let recommender = Recommender::new(RecommenderConfig {
        progress_interval: cli.progress_every,
    });

    // Default to the interactive solver if no command given
    let command = cli.command.unwrap_or(Commands::Simple { quiet: false });

    match command {
        Commands::Simple { quiet } => {
            println!("✓ Loaded {} words", words.len());
            let session = Session::with_recommender(words, recommender);
            run_simple(session, !quiet).context("Interactive session failed")
        }
        Commands::Solve {
            word,
            strategy,
            max_guesses,
            verbose,
        } => {
            let mut config = SolveConfig::new(word, StrategyKind::from_name(&strategy));
            config.max_guesses = max_guesses;
            let result = solve_word(&config, &words, recommender)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &words, &words)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let config = BenchmarkConfig {
                count,
                seed,
                max_guesses,
            };
            run_benchmark_command(&config, &words, recommender);
            Ok(())
        }
    }
}

fn run_benchmark_command(config: &BenchmarkConfig, words: &[Word], recommender: Recommender) {
    let targets = sample_targets(words, config.count, config.seed);
    println!(
        "Running benchmark on {} random words (seed {})...",
        targets.len(),
        config.seed
    );

    let bar = benchmark_bar(targets.len());
    let result = run_benchmark(words, &targets, recommender, config.max_guesses, &bar);
    print_benchmark_result(&result);
}
