//! Formatting utilities for terminal output

use crate::core::{LetterSet, Reveal, RevealState};
use colored::{ColoredString, Colorize};

/// Format a reveal row as spaced letters, `_` for blanks
#[must_use]
pub fn reveal_row_text(reveals: &[Reveal]) -> String {
    reveals
        .iter()
        .map(|reveal| reveal.display_char().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Color one reveal cell by state
#[must_use]
pub fn colored_reveal(reveal: Reveal) -> ColoredString {
    let cell = reveal.display_char().to_string();
    match reveal.state {
        RevealState::Correct => cell.bright_green().bold(),
        RevealState::Typing => cell.bright_white(),
        RevealState::Blank => cell.bright_black(),
    }
}

/// Reveal row with each cell colored by state
#[must_use]
pub fn colored_reveal_row(reveals: &[Reveal]) -> String {
    reveals
        .iter()
        .map(|&reveal| colored_reveal(reveal).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filled dots for remaining attempts, hollow dots for spent ones
#[must_use]
pub fn attempts_indicator(remaining: u8, max: u8) -> String {
    let remaining = remaining.min(max);
    format!(
        "{}{}",
        "●".repeat(usize::from(remaining)),
        "○".repeat(usize::from(max - remaining))
    )
}

/// Disabled letters, alphabetical and space separated
#[must_use]
pub fn disabled_letters_text(letters: LetterSet) -> String {
    if letters.is_empty() {
        return "none".to_string();
    }
    letters
        .iter()
        .map(|letter| char::from(letter).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Difficulty label with a traffic-light color
#[must_use]
pub fn difficulty_label(difficulty: &str) -> ColoredString {
    match difficulty.to_ascii_lowercase().as_str() {
        "easy" => difficulty.green(),
        "medium" => difficulty.yellow(),
        "hard" => difficulty.red(),
        _ => difficulty.normal(),
    }
}
