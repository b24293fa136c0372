/// Generic game renderer trait for dependency injection
use ratatui::Frame;

/// Pure state-to-frame drawing; renderers hold no game logic
pub trait GameRenderer<State> {
    fn render(&self, frame: &mut Frame, state: &State);
}
