//! Guess feedback evaluation and representation
//!
//! Feedback is one [`Mark`] per column:
//! - `Correct`: letter in the right column (green)
//! - `Present`: letter elsewhere in the secret (yellow)
//! - `Absent`: letter not in the secret, or all its copies already used (gray)

use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Per-letter verdict for one column of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Emoji used for share strings and the console view
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the
    ///    pool of unmatched secret letters
    /// 2. Second pass: mark `Present` while the pool still holds the letter,
    ///    consuming one copy each time; everything else is `Absent`
    ///
    /// Greens must be consumed before yellows are handed out, otherwise an
    /// early yellow can steal the copy a later green needs.
    ///
    /// # Examples
    /// ```
    /// use wordshift::core::{Feedback, Mark, Word};
    ///
    /// let secret = Word::new("arrow").unwrap();
    /// let guess = Word::new("error").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Absent, Mark::Correct, Mark::Correct, Mark::Correct, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut available = secret.char_counts();

        // Allow: Index needed to access guess[i], secret[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == secret.chars()[i] {
                marks[i] = Mark::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Correct {
                continue;
            }
            let letter = guess.chars()[i];
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if every column is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Columns marked `Correct`
    pub fn correct_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Correct)
            .map(|(i, _)| i)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Best known mark for each letter, for colouring the on-screen keyboard
///
/// A letter keeps the strongest verdict it has received in any displayed row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardMarks(FxHashMap<char, Mark>);

impl KeyboardMarks {
    /// Fold every (guess, feedback) row into per-letter marks
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (&'a Word, &'a Feedback)>) -> Self {
        let mut best: FxHashMap<char, Mark> = FxHashMap::default();
        for (guess, feedback) in rows {
            for (i, &mark) in feedback.marks().iter().enumerate() {
                let entry = best.entry(guess.char_at(i)).or_insert(mark);
                if mark > *entry {
                    *entry = mark;
                }
            }
        }
        Self(best)
    }

    /// Mark for `letter`, if it has appeared in any guess
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Mark> {
        self.0.get(&letter.to_ascii_uppercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(secret: &str, guess: &str) -> Feedback {
        Feedback::evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    /// Build feedback from "G", "Y" and "-" per column
    fn pattern(s: &str) -> Feedback {
        let mut marks = [Mark::Absent; WORD_LEN];
        for (slot, ch) in marks.iter_mut().zip(s.chars()) {
            *slot = match ch {
                'G' => Mark::Correct,
                'Y' => Mark::Present,
                _ => Mark::Absent,
            };
        }
        Feedback::new(marks)
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("fghij", "abcde");
        assert_eq!(feedback, pattern("-----"));
        assert_eq!(feedback.correct_columns().count(), 0);
    }

    #[test]
    fn feedback_all_correct() {
        let feedback = eval("crane", "crane");
        assert_eq!(feedback, Feedback::SOLVED);
        assert!(feedback.is_solved());
    }

    #[test]
    fn feedback_duplicate_letters_green_takes_priority() {
        // ARROW vs ERROR: both middle R's and the O are exact, leaving {A, W}
        // so the trailing R has no copy left
        assert_eq!(eval("arrow", "error"), pattern("-GGG-"));
    }

    #[test]
    fn feedback_duplicate_letters_yellow_limited_by_count() {
        // SPEED vs ERASE: ERASE has two E's, both yellow
        assert_eq!(eval("erase", "speed"), pattern("Y-YY-"));

        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(eval("floor", "robot"), pattern("YY-G-"));

        // Only one L in PLANT, so only the first unmatched L is yellow
        assert_eq!(eval("plant", "hello"), pattern("--Y--"));
    }

    #[test]
    fn feedback_shared_letter_in_place() {
        // CRANE and TOAST share the A in column 2
        assert_eq!(eval("crane", "toast"), pattern("--G--"));
    }

    #[test]
    fn feedback_is_idempotent() {
        let secret = Word::new("arrow").unwrap();
        let guess = Word::new("error").unwrap();
        assert_eq!(
            Feedback::evaluate(&secret, &guess),
            Feedback::evaluate(&secret, &guess)
        );
    }

    #[test]
    fn feedback_emoji() {
        let feedback = pattern("GY-GY");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(Feedback::SOLVED.to_string(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn keyboard_marks_keep_best_verdict() {
        let secret = Word::new("crane").unwrap();
        let first = Word::new("nacre").unwrap();
        let second = Word::new("crown").unwrap();
        let rows = [
            (first.clone(), Feedback::evaluate(&secret, &first)),
            (second.clone(), Feedback::evaluate(&secret, &second)),
        ];

        let keyboard = KeyboardMarks::from_rows(rows.iter().map(|(w, f)| (w, f)));

        // C is yellow in NACRE but green in CROWN
        assert_eq!(keyboard.get('C'), Some(Mark::Correct));
        assert_eq!(keyboard.get('n'), Some(Mark::Present));
        assert_eq!(keyboard.get('W'), Some(Mark::Absent));
        assert_eq!(keyboard.get('Z'), None);
    }
}
