use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::core::config::{Config, Overrides};
use crate::core::engine::Engine;
use crate::core::logging::init_file_logging;
use crate::games::hangman::game::normalize_word;
use crate::games::hangman::{load_or_bundled, GameEngine, HangmanApp};
use crate::Result;

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "Guess the word one letter at a time, in your terminal")]
#[command(version)]
pub struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Word list, one word per line ('#' comments allowed)
    #[arg(short, long, global = true)]
    pub words: Option<PathBuf>,

    /// Seed the word picker for a reproducible game
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Always take the first valid word instead of a random one
    #[arg(long, global = true)]
    pub first: bool,

    /// Where to write logs
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub no_log: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play interactively (the default)
    Play,
    /// Validate the word list and report how many words are usable
    Check,
}

impl Cli {
    pub fn config(&self) -> Result<Config> {
        let config = Config::load_optional(self.config.as_deref())?;
        Ok(config.apply(Overrides {
            words_file: self.words.clone(),
            seed: self.seed,
            first: self.first,
            log_file: self.log_file.clone(),
        }))
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    match cli.command.clone().unwrap_or(Commands::Play) {
        Commands::Play => {
            if !cli.no_log {
                init_file_logging(&config.log_path(), &config.log_filter)?;
            }
            play(&config).await
        }
        Commands::Check => check(&config),
    }
}

fn source_name(config: &Config) -> String {
    config
        .words_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled word list".to_string())
}

fn check(config: &Config) -> Result<()> {
    let words = load_or_bundled(config.words_file.as_deref())?;
    let accepted = words.iter().filter(|w| normalize_word(w).is_some()).count();
    let rejected = words.len() - accepted;

    println!("{}: {} usable, {} rejected", source_name(config), accepted, rejected);
    for word in words.iter().filter(|w| normalize_word(w).is_none()) {
        println!("  rejected: {:?}", word);
    }

    if accepted == 0 {
        anyhow::bail!("{} has no usable words", source_name(config));
    }
    Ok(())
}

async fn play(config: &Config) -> Result<()> {
    let words = load_or_bundled(config.words_file.as_deref())?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let engine = GameEngine::new(&words, config.selection, rng)
        .with_context(|| format!("cannot start a round from {}", source_name(config)))?;

    info!(source = %source_name(config), policy = ?config.selection, "starting hangterm");

    let terminal = ratatui::init();
    let result = Engine::new(HangmanApp::new(engine)).run(terminal).await;
    ratatui::restore();

    result.map(|_| {
        println!("Thanks for playing!");
    })
}
