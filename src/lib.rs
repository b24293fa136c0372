pub mod core {
	pub mod config;
	pub mod engine;
	pub mod game;
	pub mod logging;
	pub mod renderer;
}

pub mod cli;
pub mod games;

// Re-export for convenience
pub use crate::core::game::{Flow, TerminalGame};
pub use crate::games::hangman::{GameEngine, GameError, GuessOutcome, RoundStatus, SelectionPolicy};

/// Result type for the application layer
pub type Result<T> = anyhow::Result<T>;
