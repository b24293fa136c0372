/// Hangman-specific renderer - injected dependency
use crate::core::renderer::GameRenderer;
use crate::games::hangman::game::{RoundSnapshot, RoundStatus, MAX_ATTEMPTS, PLACEHOLDER};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LETTERS_PER_ROW: usize = 8;

/// Gallows drawings, indexed by wrong guesses made (0..=6)
static GALLOWS: [[&str; 7]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "========="],
];

/// Everything the hangman screen shows, polled from the engine before each draw
#[derive(Debug, Clone)]
pub struct HangmanScreen {
    pub round: RoundSnapshot,
    /// Only filled once the round is over
    pub revealed: Option<String>,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct HangmanRenderer;

pub fn gallows(attempts_left: u8) -> &'static [&'static str; 7] {
    let stage = MAX_ATTEMPTS.saturating_sub(attempts_left.min(MAX_ATTEMPTS)) as usize;
    &GALLOWS[stage]
}

/// "c__" -> "C _ _"
pub fn spaced_word(masked: &str) -> String {
    masked
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn letter_style(letter: char, round: &RoundSnapshot) -> Style {
    if round.wrong.contains(&letter) {
        Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)
    } else if round.guessed.contains(&letter) {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn letter_grid(round: &RoundSnapshot) -> Vec<Line<'static>> {
    let letters: Vec<char> = ('a'..='z').collect();
    letters
        .chunks(LETTERS_PER_ROW)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&c| {
                    let label = format!(" {} ", c.to_ascii_uppercase());
                    Span::styled(label, letter_style(c, round))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl HangmanRenderer {
    fn render_round_over(&self, frame: &mut Frame, state: &HangmanScreen) {
        let headline = match state.round.status {
            RoundStatus::Won => Line::styled(
                "You win!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            _ => Line::styled(
                format!(
                    "Game over. The word was: {}",
                    state.revealed.as_deref().unwrap_or("?").to_uppercase()
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let area = centered(frame.area(), 44, 6);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(vec![headline, Line::from(""), Line::from("Try again? (y/n)")])
                .alignment(Alignment::Center)
                .block(Block::default().title(" Game Over ").borders(Borders::ALL)),
            area,
        );
    }
}

impl GameRenderer<HangmanScreen> for HangmanRenderer {
    fn render(&self, frame: &mut Frame, state: &HangmanScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(9),    // Gallows + word
                Constraint::Length(6), // Letters
                Constraint::Length(3), // Status
            ])
            .split(frame.area());

        let header = Paragraph::new("HANGMAN")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(0)])
            .split(chunks[1]);

        let drawing: Vec<Line> = gallows(state.round.attempts_left)
            .iter()
            .map(|row| Line::from(*row))
            .collect();
        frame.render_widget(Paragraph::new(drawing), middle[0]);

        let word_color = match state.round.status {
            RoundStatus::Won => Color::Green,
            RoundStatus::Lost => Color::Red,
            RoundStatus::InProgress => Color::Yellow,
        };
        let word = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                spaced_word(&state.round.masked_word),
                Style::default().fg(word_color).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(format!(
                "{} letters, '{}' = hidden",
                state.round.masked_word.chars().count(),
                PLACEHOLDER
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().title(" Word ").borders(Borders::ALL));
        frame.render_widget(word, middle[1]);

        frame.render_widget(
            Paragraph::new(letter_grid(&state.round))
                .alignment(Alignment::Center)
                .block(Block::default().title(" Letters ").borders(Borders::ALL)),
            chunks[2],
        );

        let status = Paragraph::new(format!(
            "Attempts left: {} {}   |   {}",
            state.round.attempts_left,
            "❤".repeat(state.round.attempts_left as usize),
            state.message
        ))
        .block(Block::default().borders(Borders::ALL).title(" [A-Z] guess  [Esc] quit "))
        .style(Style::default().fg(Color::Yellow));
        frame.render_widget(status, chunks[3]);

        if state.round.status != RoundStatus::InProgress {
            self.render_round_over(frame, state);
        }
    }
}
