//! Motus - CLI
//!
//! Team word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use motus::{
    commands::{check_guess, run_simple},
    config::GameConfig,
    game::GameController,
    output::print_check_result,
    wordlists::{DICTIONARY, Dictionary, loader::load_from_file},
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "motus",
    about = "Turn-based team word-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of teams
    #[arg(short, long, global = true)]
    teams: Option<usize>,

    /// Configuration file (default: motus.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (default: embedded dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for reproducible word draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per round
    #[arg(long, global = true)]
    max_attempts: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Evaluate a guess against a word
    Check {
        /// The hidden word
        secret: String,

        /// The guess; shorter guesses are padded with blanks
        guess: String,
    },
}

impl Cli {
    /// Layer command-line flags over the loaded configuration
    fn apply(&self, config: &mut GameConfig) {
        if let Some(teams) = self.teams {
            config.teams = teams;
        }
        if let Some(path) = &self.dictionary {
            config.dictionary = Some(path.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
    }

    /// File and environment settings with the flags on top
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = GameConfig::load(self.config.as_deref())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.resolve_config()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&config, matches!(command, Commands::Play))?;
    info!(?config, "Configuration loaded");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
    }
}

/// Log to a file in TUI mode so output does not corrupt the screen
fn init_logging(config: &GameConfig, to_file: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_filter()).context("invalid log_level")?,
    };

    if to_file {
        let log_file = std::fs::File::create("motus.log").context("cannot create motus.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("cannot initialize logging: {e}"))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("cannot initialize logging: {e}"))?;
    }
    Ok(())
}

/// Build the word source from the configured file or the embedded list
fn load_dictionary(config: &GameConfig) -> Result<Dictionary> {
    let words = match &config.dictionary {
        Some(path) => load_from_file(path)
            .with_context(|| format!("cannot read dictionary {}", path.display()))?,
        None => DICTIONARY.iter().map(ToString::to_string).collect(),
    };

    let dictionary = match config.seed {
        Some(seed) => Dictionary::seeded(words, seed),
        None => Dictionary::new(words),
    };
    info!(words = dictionary.remaining(), "Dictionary loaded");
    Ok(dictionary)
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use motus::interactive::run_tui;

    let game = GameController::with_config(load_dictionary(config)?, config)?;
    run_tui(game)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = GameController::with_config(load_dictionary(config)?, config)?;
    run_simple(&mut game)?;
    info!(words_left = game.words().remaining(), "Game finished");
    Ok(())
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess)?;
    print_check_result(&result);
    Ok(())
}
