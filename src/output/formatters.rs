//! Formatting utilities for terminal output

use crate::core::{EvaluatedGuess, KeyStatusMap, LetterStatus};
use colored::{ColoredString, Colorize};

/// Keyboard rows as laid out on screen
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Colour one letter tile by status
#[must_use]
pub fn colored_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Format an evaluated guess as a row of coloured tiles
#[must_use]
pub fn colored_row(guess: &EvaluatedGuess) -> String {
    guess
        .iter()
        .map(|r| colored_tile(r.letter, Some(r.status)).to_string())
        .collect()
}

/// Format the keyboard with each key coloured by its best status
#[must_use]
pub fn colored_keyboard(keys: &KeyStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|letter| colored_tile(letter, keys.get(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn colored_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = EvaluatedGuess::evaluate(
            &Word::new("trace").unwrap(),
            &Word::new("crane").unwrap(),
        );
        assert_eq!(colored_row(&guess), " T  R  A  C  E ");
    }

    #[test]
    fn keyboard_has_three_indented_rows() {
        colored::control::set_override(false);
        let rows = colored_keyboard(&KeyStatusMap::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[1].starts_with("   A "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
