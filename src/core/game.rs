/// Core game interface driven by the terminal loop
use crossterm::event::KeyEvent;

/// What the loop should do after a game has seen an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait that all terminal games implement
/// The engine owns the terminal; the game owns its state and reacts to keys
pub trait TerminalGame {
    /// React to a key press
    fn handle_input(&mut self, event: KeyEvent) -> Flow;

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);
}
