//! Unscramble - CLI
//!
//! Word scramble game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unscramble::{
    commands::run_simple,
    core::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig, Word},
    game::{GameSession, WordSource},
    wordlists::{builtin_vocabulary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Word scramble game: unscramble as many words as you can in a fixed number of rounds",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of words per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,

    /// Points awarded for each correct answer
    #[arg(short, long, global = true, default_value_t = DEFAULT_SCORE_INCREASE)]
    points: u32,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed the word picker for a reproducible game
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file (RUST_LOG controls the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "builtin" => Ok(builtin_vocabulary()),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given. Otherwise they go to stderr, except in the
/// TUI where stderr output would corrupt the screen.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn build_session(cli: &Cli) -> Result<GameSession> {
    let vocabulary = load_vocabulary(&cli.wordlist)?;
    info!(words = vocabulary.len(), wordlist = %cli.wordlist, "vocabulary loaded");

    let source = match cli.seed {
        Some(seed) => WordSource::seeded(vocabulary, seed),
        None => WordSource::from_os_rng(vocabulary),
    };

    let config = GameConfig::new(cli.rounds, cli.points);
    GameSession::new(config, source).context("invalid game configuration")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    let tui = matches!(command, Commands::Play);

    init_logging(cli.log_file.as_deref(), tui)?;

    let mut session = build_session(&cli)?;

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(&mut session).context("line mode failed"),
    }
}

fn run_play_command(session: GameSession) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
