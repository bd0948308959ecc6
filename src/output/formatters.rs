//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyboardMarks, Mark, Word};
use crate::game::Urgency;
use colored::{ColoredString, Colorize};

/// A single board tile, letter padded and coloured by its mark
#[must_use]
pub fn tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Some(Mark::Correct) => text.black().on_green().bold(),
        Some(Mark::Present) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| tile(letter, Some(mark)).to_string())
        .collect()
}

/// The keyboard as rows of tiles coloured by each letter's best mark
#[must_use]
pub fn keyboard_rows(marks: &KeyboardMarks) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| row.chars().map(|c| tile(c, marks.get(c)).to_string()).collect())
        .collect()
}

/// Emoji grid of every scored row, one line per guess
#[must_use]
pub fn share_grid(rows: &[Feedback]) -> String {
    rows.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remaining seconds coloured by urgency
#[must_use]
pub fn timer_label(seconds: u32, urgency: Urgency) -> ColoredString {
    let text = format!("{seconds:>3}s");
    match urgency {
        Urgency::Normal => text.bright_green(),
        Urgency::Warning => text.bright_yellow().bold(),
        Urgency::Critical => text.bright_red().bold(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_row_keeps_letter_order() {
        colored::control::set_override(false);
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("toast").unwrap();
        let row = guess_row(&guess, &Feedback::evaluate(&secret, &guess));
        assert_eq!(row, " T  O  A  S  T ");
    }

    #[test]
    fn keyboard_rows_cover_every_letter() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&KeyboardMarks::default());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], " Z  X  C  V  B  N  M ");

        let letters: usize = rows.iter().map(|r| r.split_whitespace().count()).sum();
        assert_eq!(letters, 26);

        // Guessed letters keep their place in the layout
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("toast").unwrap();
        let feedback = Feedback::evaluate(&secret, &guess);
        let marked = keyboard_rows(&KeyboardMarks::from_rows([(&guess, &feedback)]));
        assert_eq!(marked, rows);
    }

    #[test]
    fn share_grid_lists_rows_in_order() {
        let secret = Word::new("crane").unwrap();
        let rows = [
            Feedback::evaluate(&secret, &Word::new("toast").unwrap()),
            Feedback::SOLVED,
        ];
        assert_eq!(share_grid(&rows), "⬜⬜🟩⬜⬜\n🟩🟩🟩🟩🟩");
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn timer_label_pads_seconds() {
        colored::control::set_override(false);
        assert_eq!(timer_label(7, Urgency::Critical).to_string(), "  7s");
        assert_eq!(timer_label(60, Urgency::Normal).to_string(), " 60s");
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
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
