//! Formatting utilities for terminal output

use crate::core::{KeyStatus, KeyboardStatus, LetterResult, Pattern};
use colored::{ColoredString, Colorize};

/// Key rows of a QWERTY keyboard, top to bottom
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// `CRATE 🟩🟩🟩⬜🟩`
#[must_use]
pub fn pattern_row(guess: &str, pattern: &Pattern) -> String {
    format!("{guess} {}", pattern.to_emoji())
}

/// Guess letters as coloured tiles
#[must_use]
pub fn colored_guess(guess: &str, pattern: &Pattern) -> String {
    guess
        .chars()
        .zip(pattern.results())
        .map(|(letter, &result)| tile(letter, result).to_string())
        .collect()
}

fn tile(letter: char, result: LetterResult) -> ColoredString {
    let text = format!(" {letter} ");
    match result {
        LetterResult::Correct => text.black().on_green().bold(),
        LetterResult::Present => text.black().on_yellow().bold(),
        LetterResult::Absent => text.white().on_bright_black(),
    }
}

/// Three keyboard rows with every letter coloured by its best known status
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardStatus) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|letter| key(letter, keyboard.status(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

fn key(letter: char, status: Option<KeyStatus>) -> ColoredString {
    let text = letter.to_string();
    match status {
        Some(KeyStatus::Correct) => text.green().bold(),
        Some(KeyStatus::Present) => text.yellow().bold(),
        Some(KeyStatus::Wrong) => text.bright_black(),
        None => text.normal(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn pattern_row_has_word_and_squares() {
        let pattern = Pattern::from_str("22202").unwrap();
        assert_eq!(pattern_row("CRATE", &pattern), "CRATE 🟩🟩🟩⬜🟩");
    }

    #[test]
    fn keyboard_rows_cover_the_alphabet() {
        let mut keyboard = KeyboardStatus::new();
        keyboard.record_pattern(
            &Word::new("crate").unwrap(),
            &Pattern::from_str("22202").unwrap(),
        );
        colored::control::set_override(false);
        let rows = keyboard_rows(&keyboard);
        colored::control::unset_override();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "Q W E R T Y U I O P");
        assert_eq!(rows[2], "  Z X C V B N M");
        let letters: usize = QWERTY_ROWS.iter().map(|r| r.len()).sum();
        assert_eq!(letters, 26);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
