//! Wordle Advisor - CLI
//!
//! Suggests Wordle guesses ranked by expected information gain.

use anyhow::{Context, Result, bail};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordle_advisor::{
    commands::{
        SolveConfig, analyze_word, load_history, resume_session, run_benchmark, run_play,
        sample_targets, solve_word,
    },
    core::GuessHistory,
    output::{TerminalProgress, print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{CachePolicy, RankingConfig, Session},
    wordlists::{
        Corpus,
        loader::{SAMPLE_WORD_LENGTH, load_from_file_with_progress, sample_corpus},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle guess advisor ranking guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in five-letter list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Word length, 3 to 15
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Largest candidate set scored against the whole word list
    #[arg(long, global = true, value_parser = RangedU64ValueParser::<usize>::new().range(2..))]
    pool_ceiling: Option<usize>,

    /// Guesses scored between progress updates
    #[arg(long, global = true, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    batch_size: Option<usize>,

    /// Never reuse a previous ranking
    #[arg(long, global = true)]
    strict_cache: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Continue a game from a history file of `word pattern` lines
    Resume {
        /// History file
        file: PathBuf,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy for each step
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark the advisor on random words from the list
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for choosing the words
        #[arg(long)]
        seed: Option<u64>,

        /// Guesses allowed per game
        #[arg(long, default_value = "6")]
        max_guesses: usize,
    },
}

impl Cli {
    fn ranking_config(&self) -> RankingConfig {
        let defaults = RankingConfig::default();
        RankingConfig {
            pool_ceiling: self.pool_ceiling.unwrap_or(defaults.pool_ceiling),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            cache_policy: if self.strict_cache {
                CachePolicy::AlwaysRecompute
            } else {
                CachePolicy::ReuseOnOverlap
            },
            ..defaults
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("wordle_advisor=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load the word list given by `-w`, or the built-in list
fn load_corpus(wordlist: Option<&Path>, length: usize) -> Result<Corpus> {
    match wordlist {
        Some(path) => load_from_file_with_progress(path, length, &mut TerminalProgress::new())
            .with_context(|| format!("could not load {length}-letter words")),
        None if length == SAMPLE_WORD_LENGTH => {
            sample_corpus().context("built-in word list is invalid")
        }
        None => bail!(
            "the built-in word list only has {SAMPLE_WORD_LENGTH}-letter words; pass --wordlist for length {length}"
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = cli.ranking_config();
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let corpus = load_corpus(cli.wordlist.as_deref(), cli.length)?;
            let mut session = Session::new(&corpus, config);
            play(&mut session, GuessHistory::new())
        }
        Commands::Resume { file } => {
            let history = load_history(&file)?;
            let length = history.word_length().unwrap_or(cli.length);
            let corpus = load_corpus(cli.wordlist.as_deref(), length)?;
            let mut session = resume_session(&corpus, config, &history)?;
            play(&mut session, history)
        }
        Commands::Solve { word, details } => {
            let corpus = load_corpus(cli.wordlist.as_deref(), cli.length)?;
            let mut session = Session::new(&corpus, config);
            let result = solve_word(
                &mut session,
                &SolveConfig::new(word),
                &mut TerminalProgress::new(),
            )?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Analyze { word } => {
            let corpus = load_corpus(cli.wordlist.as_deref(), cli.length)?;
            let result = analyze_word(&word, &corpus)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let corpus = load_corpus(cli.wordlist.as_deref(), cli.length)?;
            let targets = sample_targets(&corpus, count, seed);
            println!("Running benchmark on {} random words...", targets.len());

            let result = run_benchmark(&corpus, &config, &targets, max_guesses)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn play(session: &mut Session<'_>, mut history: GuessHistory) -> Result<()> {
    let stdin = io::stdin();
    run_play(
        session,
        &mut history,
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut TerminalProgress::new(),
    )
}
