/// Hangman game module
pub mod app;
pub mod game;
pub mod renderer;
pub mod words;

pub use app::HangmanApp;
pub use game::{
    GameEngine, GameError, GuessOutcome, RoundSnapshot, RoundStatus, SelectionPolicy,
    MAX_ATTEMPTS, PLACEHOLDER,
};
pub use renderer::{HangmanRenderer, HangmanScreen};
pub use words::{bundled_words, load_or_bundled, load_words, parse_words, WordSourceError};
