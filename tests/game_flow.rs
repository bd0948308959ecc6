//! End-to-end sessions driven through the public API

use wordshift::core::{Feedback, Mark, Word};
use wordshift::error::ConfigurationError;
use wordshift::game::{
    Game, GameConfig, GameEvent, Key, LossReason, Phase, SessionResult, SubmitOutcome,
};
use wordshift::stats::{MemoryStore, Stats, StatsLedger};
use wordshift::wordlists::WordSource;
use wordshift::wordlists::loader::words_from_slice;

fn pool(words: &[&str]) -> WordSource {
    WordSource::from_words(words_from_slice(words), "test").unwrap()
}

fn game(words: &[&str], store: &MemoryStore) -> Game {
    Game::new(
        pool(words),
        GameConfig::default(),
        StatsLedger::load(Box::new(store.clone())),
    )
    .with_seed(7)
}

fn enter(game: &mut Game, guess: &str) -> SubmitOutcome {
    for c in guess.chars() {
        game.handle_key(Key::Letter(c));
    }
    game.handle_key(Key::Enter).unwrap()
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn singleton_pool_is_a_configuration_error() {
    let words = pool(&["CRANE"]);
    assert!(words.ensure_rotatable(3).is_err());

    let mut game = game(&["CRANE"], &MemoryStore::default());
    assert!(matches!(
        game.start(),
        Err(ConfigurationError::PoolTooSmall { size: 1, .. })
    ));
}

#[test]
fn singleton_pool_without_rotation_can_play() {
    let config = GameConfig {
        max_word_changes: 0,
        ..GameConfig::default()
    };
    let mut game = Game::new(pool(&["CRANE"]), config, StatsLedger::in_memory());
    game.start().unwrap();
    assert_eq!(
        enter(&mut game, "crane"),
        SubmitOutcome::Ended {
            feedback: Feedback::SOLVED,
            result: SessionResult::Win { attempts: 1 }
        }
    );
}

#[test]
fn crane_toast_session_is_won_in_two() {
    let store = MemoryStore::default();
    let mut game = game(&["CRANE", "TOAST"], &store);
    game.start_with_secret(word("CRANE")).unwrap();

    assert_eq!(
        enter(&mut game, "TOAST"),
        SubmitOutcome::Accepted {
            feedback: Feedback::new([
                Mark::Absent,
                Mark::Absent,
                Mark::Correct,
                Mark::Absent,
                Mark::Absent,
            ])
        }
    );
    assert!(matches!(
        enter(&mut game, "CRANE"),
        SubmitOutcome::Ended {
            result: SessionResult::Win { attempts: 2 },
            ..
        }
    ));

    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(store.saved(), Some(Stats { wins: 1, streak: 1 }));

    let ended: Vec<_> = game
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::SessionEnded { .. }))
        .collect();
    assert_eq!(
        ended,
        vec![GameEvent::SessionEnded {
            result: SessionResult::Win { attempts: 2 },
            secret: word("CRANE"),
        }]
    );
}

#[test]
fn rotation_never_repeats_the_prior_secret() {
    // Budget of 2: one rotation, then the final countdown, then expiry
    let config = GameConfig {
        max_word_changes: 2,
        ..GameConfig::default()
    };

    for seed in 0..50 {
        let words = pool(&["CRANE", "TOAST", "SLATE", "PLANT"]);
        let mut game =
            Game::new(words, config.clone(), StatsLedger::in_memory()).with_seed(seed);
        game.start_with_secret(word("CRANE")).unwrap();
        let handle = game.timer_handle().unwrap();

        for _ in 0..3 {
            game.tick(handle, 60.0);
        }

        assert_eq!(game.phase(), Phase::LostTimeExpired);
        let revealed = game.revealed_secret().unwrap();
        assert_ne!(revealed, &word("CRANE"), "seed {seed}");
    }
}

#[test]
fn streak_resets_on_loss_and_keeps_wins() {
    let store = MemoryStore::with_stats(Stats { wins: 5, streak: 2 });
    let mut game = game(&["CRANE", "TOAST"], &store);
    game.start_with_secret(word("CRANE")).unwrap();

    for _ in 0..6 {
        enter(&mut game, "TOAST");
    }
    assert_eq!(game.phase(), Phase::LostRowsExhausted);
    assert_eq!(store.saved(), Some(Stats { wins: 5, streak: 0 }));
}

#[test]
fn full_timeline_ends_in_time_expired() {
    let store = MemoryStore::default();
    let mut game = game(&["CRANE", "TOAST"], &store);
    game.start_with_secret(word("CRANE")).unwrap();
    enter(&mut game, "TOAST");
    game.drain_events();

    let handle = game.timer_handle().unwrap();
    let mut rotations = 0;
    let mut final_warnings = 0;
    let mut endings = Vec::new();

    // Ten minutes of 0.1 s ticks
    for _ in 0..6000 {
        game.tick(handle, 0.1);
        for event in game.drain_events() {
            match event {
                GameEvent::WordRotated { locked_columns, .. } => {
                    assert_eq!(locked_columns, vec![2]);
                    rotations += 1;
                }
                GameEvent::FinalCountdownStarted { .. } => final_warnings += 1,
                GameEvent::SessionEnded { result, .. } => endings.push(result),
                _ => {}
            }
        }
    }

    assert_eq!(rotations, 2);
    assert_eq!(final_warnings, 1);
    assert_eq!(
        endings,
        vec![SessionResult::Loss {
            reason: LossReason::TimeExpired
        }]
    );
    assert_eq!(game.locked_columns(), vec![2]);
    assert_eq!(store.saved(), Some(Stats { wins: 0, streak: 0 }));
}

#[test]
fn invalid_guess_costs_time_but_not_a_row() {
    let mut game = game(&["CRANE", "TOAST"], &MemoryStore::default());
    game.start_with_secret(word("CRANE")).unwrap();

    let handle = game.timer_handle().unwrap();
    game.tick(handle, 10.0);

    assert_eq!(
        enter(&mut game, "ABCDE"),
        SubmitOutcome::InvalidWord { penalty: 5.0 }
    );
    assert_eq!(game.remaining_time(), 45.0);
    assert_eq!(game.cursor(), (0, 5));
}

#[test]
fn stale_handle_from_previous_session_is_ignored() {
    let mut game = game(&["CRANE", "TOAST"], &MemoryStore::default());
    game.start_with_secret(word("CRANE")).unwrap();
    let stale = game.timer_handle().unwrap();

    game.start_with_secret(word("TOAST")).unwrap();
    for _ in 0..10 {
        game.tick(stale, 60.0);
    }

    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.word_change_count(), 0);
    assert_eq!(game.remaining_time(), 60.0);
}
