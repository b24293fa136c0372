use std::collections::BTreeSet;

use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Wrong guesses allowed per round.
pub const MAX_ATTEMPTS: u8 = 6;

/// Marker shown for letters that have not been guessed yet.
pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("word source is empty or contains no usable words")]
    InvalidWordSource,

    #[error("'{0}' is not a letter a-z")]
    InvalidGuess(char),
}

/// Result of a single call to [`GameEngine::guess`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Hit,
    Miss,
    /// The letter was guessed earlier this round; nothing changed.
    AlreadyGuessed,
    /// The round is won or lost; nothing changed.
    RoundAlreadyOver,
}

impl GuessOutcome {
    /// Whether the call changed the round state
    pub fn is_mutating(self) -> bool {
        matches!(self, GuessOutcome::Hit | GuessOutcome::Miss)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// How a secret word is drawn from the candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    #[default]
    Random,
    First,
}

/// Serializable view of a round, safe to hand to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub masked_word: String,
    pub attempts_left: u8,
    pub guessed: Vec<char>,
    pub wrong: Vec<char>,
    pub status: RoundStatus,
}

/// Owns the secret word and everything guessed against it.
///
/// The engine only mutates through [`initialize`](Self::initialize),
/// [`new_round`](Self::new_round) and [`guess`](Self::guess); everything else
/// is a pure query that callers poll after each mutation.
#[derive(Debug)]
pub struct GameEngine<R> {
    secret_word: String,
    guessed: BTreeSet<char>,
    attempts_left: u8,
    word_source: Vec<String>,
    policy: SelectionPolicy,
    rng: R,
}

impl<R: RngCore> GameEngine<R> {
    /// Build an engine and start its first round.
    pub fn new<S: AsRef<str>>(
        candidates: &[S],
        policy: SelectionPolicy,
        rng: R,
    ) -> Result<Self, GameError> {
        let mut engine = Self {
            secret_word: String::new(),
            guessed: BTreeSet::new(),
            attempts_left: MAX_ATTEMPTS,
            word_source: Vec::new(),
            policy,
            rng,
        };
        engine.initialize(candidates)?;
        Ok(engine)
    }

    /// Replace the word source and start a fresh round from it.
    ///
    /// On error the current round is left as it was.
    pub fn initialize<S: AsRef<str>>(&mut self, candidates: &[S]) -> Result<(), GameError> {
        let valid: Vec<String> = candidates
            .iter()
            .filter_map(|word| normalize_word(word.as_ref()))
            .collect();

        let rejected = candidates.len() - valid.len();
        if rejected > 0 {
            warn!(rejected, total = candidates.len(), "dropped invalid candidate words");
        }
        if valid.is_empty() {
            return Err(GameError::InvalidWordSource);
        }

        self.word_source = valid;
        self.new_round();
        Ok(())
    }

    /// Start another round drawing from the current word source.
    pub fn new_round(&mut self) {
        let index = match self.policy {
            _ if self.word_source.len() == 1 => 0,
            SelectionPolicy::First => 0,
            SelectionPolicy::Random => self.rng.random_range(0..self.word_source.len()),
        };

        self.secret_word = self.word_source[index].clone();
        self.guessed.clear();
        self.attempts_left = MAX_ATTEMPTS;

        info!(
            word_len = self.secret_word.len(),
            candidates = self.word_source.len(),
            "round started"
        );
        debug!(word = %self.secret_word, "secret word chosen");
    }

    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, GameError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidGuess(letter));
        }
        let letter = letter.to_ascii_lowercase();

        if self.is_over() {
            return Ok(GuessOutcome::RoundAlreadyOver);
        }
        if !self.guessed.insert(letter) {
            return Ok(GuessOutcome::AlreadyGuessed);
        }

        let outcome = if self.secret_word.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.attempts_left = self.attempts_left.saturating_sub(1);
            GuessOutcome::Miss
        };

        debug!(%letter, ?outcome, attempts_left = self.attempts_left, "guess applied");
        match self.status() {
            RoundStatus::Won => info!(attempts_left = self.attempts_left, "round won"),
            RoundStatus::Lost => info!(word = %self.secret_word, "round lost"),
            RoundStatus::InProgress => {}
        }

        Ok(outcome)
    }
}

impl<R> GameEngine<R> {
    pub fn masked_word(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { PLACEHOLDER })
            .collect()
    }

    pub fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    pub fn max_attempts(&self) -> u8 {
        MAX_ATTEMPTS
    }

    pub fn is_won(&self) -> bool {
        self.secret_word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.attempts_left == 0
    }

    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.attempts_left == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// The real word. Display policy decides when to call this.
    pub fn secret_word_revealed(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn wrong_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.secret_word.contains(*c))
    }

    pub fn word_len(&self) -> usize {
        self.secret_word.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.word_source.len()
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            masked_word: self.masked_word(),
            attempts_left: self.attempts_left,
            guessed: self.guessed.iter().copied().collect(),
            wrong: self.wrong_letters().collect(),
            status: self.status(),
        }
    }
}

/// Lowercased word if it is non-empty and purely a-z, otherwise `None`.
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}
