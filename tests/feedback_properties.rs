//! Property tests for guess evaluation

use proptest::prelude::*;
use wordshift::core::{Feedback, Mark, WORD_LEN, Word};

fn word_strategy() -> impl Strategy<Value = Word> {
    // A small alphabet forces repeated letters
    "[A-F]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn count(word: &Word, letter: u8) -> usize {
    word.chars().iter().filter(|&&c| c == letter).count()
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(secret in word_strategy(), guess in word_strategy()) {
        prop_assert_eq!(
            Feedback::evaluate(&secret, &guess),
            Feedback::evaluate(&secret, &guess)
        );
    }

    #[test]
    fn correct_exactly_where_letters_match(secret in word_strategy(), guess in word_strategy()) {
        let feedback = Feedback::evaluate(&secret, &guess);
        for i in 0..WORD_LEN {
            let matches = secret.chars()[i] == guess.chars()[i];
            prop_assert_eq!(feedback.marks()[i] == Mark::Correct, matches);
        }
    }

    #[test]
    fn marked_letters_never_exceed_secret_count(
        secret in word_strategy(),
        guess in word_strategy(),
    ) {
        let feedback = Feedback::evaluate(&secret, &guess);
        for &letter in guess.chars() {
            let marked = (0..WORD_LEN)
                .filter(|&i| guess.chars()[i] == letter && feedback.marks()[i] != Mark::Absent)
                .count();
            prop_assert_eq!(marked, count(&secret, letter).min(count(&guess, letter)));
        }
    }

    #[test]
    fn solved_only_on_exact_match(secret in word_strategy(), guess in word_strategy()) {
        let feedback = Feedback::evaluate(&secret, &guess);
        prop_assert_eq!(feedback.is_solved(), secret == guess);
    }
}

#[test]
fn arrow_error_under_two_pass_rules() {
    let secret = Word::new("ARROW").unwrap();
    let guess = Word::new("ERROR").unwrap();
    assert_eq!(
        Feedback::evaluate(&secret, &guess),
        Feedback::new([
            Mark::Absent,
            Mark::Correct,
            Mark::Correct,
            Mark::Correct,
            Mark::Absent,
        ])
    );
}
