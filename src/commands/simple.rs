//! Simple interactive CLI mode
//!
//! Line-based game without TUI. Time keeps running while the player types:
//! the wall time spent at the prompt is replayed into the engine as fixed
//! ticks before the line is processed.

use crate::core::{Feedback, WORD_LEN, Word, WordError};
use crate::game::{Game, GameEvent, Key, SubmitOutcome};
use crate::output::{
    print_banner, print_event, print_history, print_result, print_rules, print_status,
};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// What a line typed at the prompt asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Guess(Word),
    Invalid(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "exit" | ":q" => Self::Quit,
            "new" | ":n" => Self::NewGame,
            _ => match line.parse::<Word>() {
                Ok(word) => Self::Guess(word),
                Err(WordError::InvalidLength(_)) => {
                    Self::Invalid(format!("Guess must be exactly {WORD_LEN} letters!"))
                }
                Err(_) => Self::Invalid("Letters only!".to_string()),
            },
        }
    }
}

/// Converts measured wall time into fixed-size engine ticks
///
/// Time short of a whole tick is carried to the next call.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReplay {
    step: f64,
    carry: f64,
}

impl TickReplay {
    #[must_use]
    pub fn new(step: f64) -> Self {
        Self {
            step: step.max(0.001),
            carry: 0.0,
        }
    }

    /// Deliver `elapsed` seconds to `game`, returning the ticks delivered
    ///
    /// Stops early once the session ends.
    pub fn replay(&mut self, game: &mut Game, elapsed: f64) -> usize {
        self.carry += elapsed.max(0.0);
        let mut delivered = 0;
        while self.carry + 1e-9 >= self.step {
            let Some(handle) = game.timer_handle() else {
                self.carry = 0.0;
                break;
            };
            game.tick(handle, self.step);
            self.carry -= self.step;
            delivered += 1;
        }
        delivered
    }

    pub fn clear(&mut self) {
        self.carry = 0.0;
    }
}

/// Type `guess` into the current row and press Enter
///
/// A rejected guess is erased again so the next line starts on an empty row.
pub fn submit_line(game: &mut Game, guess: &str) -> SubmitOutcome {
    for ch in guess.chars() {
        game.handle_key(Key::Letter(ch));
    }
    let outcome = game
        .handle_key(Key::Enter)
        .unwrap_or(SubmitOutcome::Ignored);

    if matches!(
        outcome,
        SubmitOutcome::InvalidWord { .. } | SubmitOutcome::Incomplete
    ) {
        while game.backspace() {}
    }
    outcome
}

/// Run the simple interactive CLI mode
///
/// `first_secret`, when given, is used for the first session only.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the word
/// pool cannot support a session.
pub fn run_simple(game: &mut Game, mut first_secret: Option<Word>) -> Result<()> {
    print_banner();
    print_rules(game.config());

    let mut replay = TickReplay::new(game.config().tick_interval);

    'session: loop {
        match first_secret.take() {
            Some(secret) => game.start_with_secret(secret)?,
            None => game.start()?,
        }
        replay.clear();
        game.drain_events();
        println!("{}", "🔄 New game started! The clock is running.\n".bright_cyan());

        loop {
            print_history(game);
            print_status(game);

            let asked = Instant::now();
            let Some(line) = get_user_input("Guess")? else {
                return Ok(());
            };
            replay.replay(game, asked.elapsed().as_secs_f64());
            if report_events(game) {
                break;
            }

            match Command::parse(&line) {
                Command::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Command::NewGame => continue 'session,
                Command::Invalid(msg) => println!("{}", msg.red()),
                Command::Guess(guess) => {
                    submit_line(game, guess.text());
                    if report_events(game) {
                        break;
                    }
                }
            }
        }

        print_history(game);
        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {}
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Print drained events; true once the session has ended
fn report_events(game: &mut Game) -> bool {
    let mut ended = false;
    for event in game.drain_events() {
        if let GameEvent::SessionEnded { result, secret } = &event {
            let rows: Vec<Feedback> = game.history().map(|(_, feedback)| *feedback).collect();
            print_result(*result, secret, &rows, game.stats());
            ended = true;
        } else {
            print_event(&event);
        }
    }
    ended
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Phase};
    use crate::stats::StatsLedger;
    use crate::wordlists::WordSource;
    use crate::wordlists::loader::words_from_slice;

    fn game() -> Game {
        let words = WordSource::from_words(words_from_slice(&["crane", "toast"]), "test").unwrap();
        let mut game = Game::new(words, GameConfig::default(), StatsLedger::in_memory());
        game.start_with_secret(Word::new("crane").unwrap()).unwrap();
        game.drain_events();
        game
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(" quit "), Command::Quit);
        assert_eq!(Command::parse("NEW"), Command::NewGame);
        assert_eq!(
            Command::parse("crane"),
            Command::Guess(Word::new("CRANE").unwrap())
        );
        assert!(matches!(Command::parse("cran"), Command::Invalid(_)));
        assert_eq!(
            Command::parse("cr4ne"),
            Command::Invalid("Letters only!".to_string())
        );
        assert_eq!(
            Command::parse("cranes"),
            Command::Invalid("Guess must be exactly 5 letters!".to_string())
        );
    }

    #[test]
    fn replay_delivers_whole_ticks_and_carries_rest() {
        let mut game = game();
        let mut replay = TickReplay::new(1.0);

        assert_eq!(replay.replay(&mut game, 2.5), 2);
        assert_eq!(game.remaining_time(), 58.0);
        assert_eq!(replay.replay(&mut game, 0.5), 1);
        assert_eq!(game.remaining_time(), 57.0);
    }

    #[test]
    fn replay_stops_at_session_end() {
        let mut game = game();
        let mut replay = TickReplay::new(60.0);

        assert_eq!(replay.replay(&mut game, 600.0), 4);
        assert_eq!(game.phase(), Phase::LostTimeExpired);
        assert_eq!(replay.replay(&mut game, 60.0), 0);
    }

    #[test]
    fn rejected_line_is_erased() {
        let mut game = game();
        assert_eq!(
            submit_line(&mut game, "ZZZZZ"),
            SubmitOutcome::InvalidWord { penalty: 5.0 }
        );
        assert_eq!(game.cursor(), (0, 0));
        assert!(matches!(
            submit_line(&mut game, "TOAST"),
            SubmitOutcome::Accepted { .. }
        ));
        assert_eq!(game.cursor(), (1, 0));
    }
}
