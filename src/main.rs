//! Wordshift - CLI
//!
//! Timed Wordle where the secret word changes under you, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use wordshift::{
    commands::{run_simple, run_stats},
    core::Word,
    game::{Game, GameConfig, config},
    stats::{JsonFileStore, MemoryStore, StatsLedger, StatsStore, file_or_memory},
    wordlists::{EMBEDDED, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordshift",
    about = "Timed Wordle variant where the secret word keeps shifting under you",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Seconds between word changes
    #[arg(long, global = true, default_value_t = config::WORD_CHANGE_INTERVAL)]
    interval: f64,

    /// Seconds on the clock once the word has changed for the last time
    #[arg(long, global = true, default_value_t = config::FINAL_COUNTDOWN)]
    final_countdown: f64,

    /// Seconds deducted for a guess that is not in the word list
    #[arg(long, global = true, default_value_t = config::TIME_PENALTY)]
    penalty: f64,

    /// Number of word changes before the final countdown
    #[arg(long, global = true, default_value_t = config::MAX_WORD_CHANGES)]
    max_changes: u32,

    /// Seed for reproducible word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Fixed secret word for the first game
    #[arg(long, global = true)]
    word: Option<String>,

    /// Stats file (default: platform data directory)
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,

    /// Keep stats in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Write logs to this file (filter with `RUST_LOG`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show win statistics
    Stats {
        /// Zero the wins and streak counters
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rotation_interval: self.interval,
            final_countdown: self.final_countdown,
            time_penalty: self.penalty,
            max_word_changes: self.max_changes,
            ..GameConfig::default()
        }
    }

    fn stats_store(&self) -> Box<dyn StatsStore> {
        if self.no_save {
            return Box::new(MemoryStore::default());
        }
        file_or_memory(match &self.stats_file {
            Some(path) => Ok(JsonFileStore::with_path(path)),
            None => JsonFileStore::new(),
        })
    }
}

/// Initialize logging to `log_file`, or to stderr when `to_stderr` is set
///
/// The TUI owns the terminal, so without a log file it runs with logging off.
fn init_logging(log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordshift=info"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), !matches!(command, Commands::Play))?;

    let mut ledger = StatsLedger::load(cli.stats_store());

    if let Commands::Stats { reset } = command {
        run_stats(&mut ledger, reset);
        return Ok(());
    }

    let config = cli.game_config();
    let words = WordSource::load(&cli.wordlist)?;
    words.ensure_rotatable(config.max_word_changes)?;
    tracing::info!(
        words = words.len(),
        origin = words.origin(),
        "word list ready"
    );

    let first_secret = cli
        .word
        .as_deref()
        .map(Word::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid --word: {e}"))?;
    if let Some(secret) = &first_secret
        && !words.is_valid(secret)
    {
        anyhow::bail!("--word {secret} is not in word list {}", words.origin());
    }

    let mut game = Game::new(words, config, ledger);
    if let Some(seed) = cli.seed {
        game = game.with_seed(seed);
    }

    match command {
        Commands::Play => run_play_command(game, first_secret),
        Commands::Simple => run_simple(&mut game, first_secret),
        Commands::Stats { .. } => Ok(()),
    }
}

fn run_play_command(game: Game, first_secret: Option<Word>) -> Result<()> {
    use wordshift::interactive::{App, run_tui};

    let app = App::new(game, first_secret);
    run_tui(app)
}
