use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand_core::RngCore;
use tracing::{info, warn};

use crate::core::game::{Flow, TerminalGame};
use crate::core::renderer::GameRenderer;
use crate::games::hangman::game::{GameEngine, GameError, GuessOutcome, RoundStatus};
use crate::games::hangman::renderer::{HangmanRenderer, HangmanScreen};

/// Interactive hangman: owns one engine and turns key presses into guesses.
pub struct HangmanApp<R> {
    engine: GameEngine<R>,
    renderer: HangmanRenderer,
    message: String,
}

impl<R: RngCore> HangmanApp<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            renderer: HangmanRenderer,
            message: "Welcome to Hangman! Type a letter.".to_string(),
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn screen(&self) -> HangmanScreen {
        HangmanScreen {
            round: self.engine.snapshot(),
            revealed: self
                .engine
                .is_over()
                .then(|| self.engine.secret_word_revealed().to_string()),
            message: self.message.clone(),
        }
    }

    fn submit(&mut self, letter: char) {
        let shown = letter.to_ascii_uppercase();
        let outcome = match self.engine.guess(letter) {
            Ok(outcome) => outcome,
            Err(GameError::InvalidGuess(_)) => {
                self.message = "Please guess a letter A-Z".to_string();
                return;
            }
            Err(e) => {
                self.message = e.to_string();
                return;
            }
        };

        self.message = match outcome {
            GuessOutcome::Hit => format!("Good guess! '{}' is in the word.", shown),
            GuessOutcome::Miss => format!("Sorry, '{}' is not in the word.", shown),
            GuessOutcome::AlreadyGuessed => format!("Letter '{}' already guessed", shown),
            GuessOutcome::RoundAlreadyOver => return,
        };

        // Only a hit or miss can end the round
        if !outcome.is_mutating() {
            return;
        }

        match self.engine.status() {
            RoundStatus::Won => self.message = "You win!".to_string(),
            RoundStatus::Lost => {
                self.message = format!(
                    "Game over. The word was: {}",
                    self.engine.secret_word_revealed().to_uppercase()
                )
            }
            RoundStatus::InProgress => return,
        }
        self.log_round_end();
    }

    fn log_round_end(&self) {
        match serde_json::to_string(&self.engine.snapshot()) {
            Ok(round) => info!(%round, "round finished"),
            Err(e) => warn!(error = %e, "could not serialize round"),
        }
    }

    fn replay_prompt(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                info!(last = ?self.engine.status(), "starting another round");
                self.engine.new_round();
                self.message = "New word! Type a letter.".to_string();
                Flow::Continue
            }
            KeyCode::Char('n') | KeyCode::Char('N') => Flow::Quit,
            _ => Flow::Continue,
        }
    }
}

impl<R: RngCore> TerminalGame for HangmanApp<R> {
    fn handle_input(&mut self, event: KeyEvent) -> Flow {
        if event.code == KeyCode::Esc {
            return Flow::Quit;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
            return Flow::Quit;
        }
        // Shortcuts are never guesses
        if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Flow::Continue;
        }
        if self.engine.is_over() {
            return self.replay_prompt(event.code);
        }
        if let KeyCode::Char(c) = event.code {
            self.submit(c);
        }
        Flow::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        self.renderer.render(frame, &self.screen());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::game::{SelectionPolicy, MAX_ATTEMPTS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn app(word: &str) -> HangmanApp<StdRng> {
        let engine =
            GameEngine::new(&[word], SelectionPolicy::First, StdRng::seed_from_u64(0)).unwrap();
        HangmanApp::new(engine)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut HangmanApp<StdRng>, c: char) -> Flow {
        app.handle_input(key(KeyCode::Char(c)))
    }

    #[test]
    fn test_letters_become_guesses() {
        let mut app = app("cat");
        assert_eq!(press(&mut app, 'C'), Flow::Continue);
        assert_eq!(app.engine().masked_word(), "c__");
        assert_eq!(app.message(), "Good guess! 'C' is in the word.");

        press(&mut app, 'x');
        assert_eq!(app.engine().attempts_left(), MAX_ATTEMPTS - 1);
        assert_eq!(app.message(), "Sorry, 'X' is not in the word.");

        press(&mut app, 'x');
        assert_eq!(app.engine().attempts_left(), MAX_ATTEMPTS - 1);
        assert_eq!(app.message(), "Letter 'X' already guessed");
    }

    #[test]
    fn test_non_letters_are_rejected() {
        let mut app = app("cat");
        press(&mut app, '7');
        assert_eq!(app.message(), "Please guess a letter A-Z");
        assert!(app.engine().guessed_letters().is_empty());

        assert_eq!(app.handle_input(key(KeyCode::Enter)), Flow::Continue);
        assert!(app.engine().guessed_letters().is_empty());
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app("cat");
        assert_eq!(app.handle_input(key(KeyCode::Esc)), Flow::Quit);
    }

    #[test]
    fn test_ctrl_c_quits_without_guessing() {
        let mut app = app("dog");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_input(ctrl_c), Flow::Quit);
        assert!(app.engine().guessed_letters().is_empty());
        assert_eq!(app.engine().attempts_left(), MAX_ATTEMPTS);
    }

    #[test]
    fn test_modified_letters_are_ignored() {
        let mut app = app("dog");
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            let event = KeyEvent::new(KeyCode::Char('x'), modifiers);
            assert_eq!(app.handle_input(event), Flow::Continue);
        }
        assert!(app.engine().guessed_letters().is_empty());
        assert_eq!(app.engine().attempts_left(), MAX_ATTEMPTS);

        // shift is how uppercase letters arrive, so it still guesses
        let shifted = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        app.handle_input(shifted);
        assert_eq!(app.engine().masked_word(), "d__");
    }

    #[test]
    fn test_repeat_guess_keeps_round_message() {
        let mut app = app("ox");
        press(&mut app, 'o');
        press(&mut app, 'o');
        assert_eq!(app.message(), "Letter 'O' already guessed");
        assert!(!app.engine().is_over());
    }

    #[test]
    fn test_win_then_replay() {
        let mut app = app("ox");
        press(&mut app, 'o');
        press(&mut app, 'x');
        assert!(app.engine().is_won());
        assert_eq!(app.message(), "You win!");
        assert_eq!(app.screen().revealed.as_deref(), Some("ox"));

        // letters other than y/n are ignored on the prompt
        assert_eq!(press(&mut app, 'q'), Flow::Continue);
        assert!(app.engine().is_won());

        assert_eq!(press(&mut app, 'y'), Flow::Continue);
        assert!(!app.engine().is_over());
        assert!(app.engine().guessed_letters().is_empty());
        assert_eq!(app.engine().attempts_left(), MAX_ATTEMPTS);
        assert_eq!(app.screen().revealed, None);
    }

    #[test]
    fn test_loss_then_decline() {
        let mut app = app("ox");
        for c in "abcdef".chars() {
            press(&mut app, c);
        }
        assert_eq!(app.engine().status(), RoundStatus::Lost);
        assert_eq!(app.message(), "Game over. The word was: OX");
        assert_eq!(press(&mut app, 'n'), Flow::Quit);
    }
}
