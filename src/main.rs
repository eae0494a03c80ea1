//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or a simple line-based mode, or score a single guess.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{run_simple, score_guess},
    core::Word,
    game::{Session, SessionConfig},
    output::{print_score_result, print_statistics},
    wordlists::{
        ANSWERS, RandomWordSource,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'answers' (default, embedded list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "answers")]
    wordlist: String,

    /// Seed for target selection (same seed, same sequence of words)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "wordle_game.log")]
    log_file: PathBuf,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Route `log` output to stderr, or to a file when the TUI owns the terminal
fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("invalid log level '{level}'"))?;

    if level == LevelFilter::Off {
        return Ok(());
    }

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "answers" => Ok(words_from_slice(ANSWERS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn build_session(cli: &Cli) -> Result<Session<RandomWordSource>> {
    let words = load_words(&cli.wordlist)?;
    log::info!("{} words loaded from '{}'", words.len(), cli.wordlist);

    let source = match cli.seed {
        Some(seed) => RandomWordSource::with_seed(words, seed)?,
        None => RandomWordSource::new(words)?,
    };

    let config = SessionConfig {
        require_known_word: cli.strict,
    };
    Ok(Session::new(source, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    let log_file = matches!(command, Commands::Play).then_some(cli.log_file.as_path());
    init_logging(&cli.log_level, log_file)?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(build_session(cli)?);
    let stats = run_tui(app)?;

    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    Ok(())
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = build_session(cli)?;
    run_simple(&mut session)?;
    Ok(())
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target)?;
    print_score_result(&result.guess, &result.target, &result.feedback);
    Ok(())
}
