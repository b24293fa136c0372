use crate::core::game::{Flow, TerminalGame};
use crate::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

const IDLE_POLL: Duration = Duration::from_millis(16);

pub struct Engine<G: TerminalGame> {
    game: G,
}

impl<G: TerminalGame> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until the game asks to quit. The caller owns terminal init/restore.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases as well as presses
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.game.handle_input(key) == Flow::Quit {
                        debug!("game requested quit");
                        return Ok(self.game);
                    }
                }
            }

            // Yield between polls so an idle game does not spin
            tokio::time::sleep(IDLE_POLL).await;
        }
    }
}
