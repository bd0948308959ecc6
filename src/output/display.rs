//! Display functions for the console game

use super::formatters::{create_progress_bar, guess_row, keyboard_rows, share_grid, timer_label};
use crate::core::{Feedback, Word};
use crate::game::{Game, GameConfig, GameEvent, LossReason, SessionResult};
use crate::stats::Stats;
use colored::Colorize;

/// Print the title banner
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 WORDSHIFT - The Shifting Wordle              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
}

/// Print the rules for the given configuration
pub fn print_rules(config: &GameConfig) {
    println!("{}", "How to play:".bright_cyan().bold());
    println!("  • Guess the 5-letter word in {} tries.", config.max_rows);
    println!(
        "  • Every {}s the secret word changes, up to {} times.",
        config.rotation_interval, config.max_word_changes
    );
    println!("  • After the last change you have {}s to finish.", config.final_countdown);
    println!("  • Letters you placed correctly stay locked across changes.");
    println!("  • A guess that is not in the word list costs {}s.\n", config.time_penalty);
    println!(
        "  {} right spot   {} wrong spot   {} not in word\n",
        " A ".black().on_green().bold(),
        " B ".black().on_yellow().bold(),
        " C ".white().on_bright_black()
    );
    println!("Commands: 'new' for a new game, 'quit' to exit\n");
}

/// Print the timer, rotation budget and stats line
pub fn print_status(game: &Game) {
    let config = game.config();
    let total = if game.is_final_countdown() {
        config.final_countdown
    } else {
        config.rotation_interval
    };
    let bar = create_progress_bar(game.remaining_time(), total, 20);
    let phase = if game.is_final_countdown() {
        "FINAL".bright_red().bold().to_string()
    } else {
        format!(
            "changes {}/{}",
            game.word_change_count(),
            game.max_word_changes()
        )
    };
    let stats = game.stats();

    println!("{}", "─".repeat(60).cyan());
    println!(
        " ⏱ {} [{}]  {}  wins {} streak {}",
        timer_label(game.display_seconds(), game.urgency()),
        bar,
        phase,
        stats.wins,
        stats.streak
    );
    for row in keyboard_rows(&game.keyboard_marks()) {
        println!("   {row}");
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print every submitted guess with its current feedback
pub fn print_history(game: &Game) {
    for (i, (guess, feedback)) in game.history().enumerate() {
        println!(
            "  {} {}",
            (i + 1).to_string().bright_black(),
            guess_row(guess, feedback)
        );
    }
}

/// Print the console rendition of one engine event
///
/// Board and timer updates are shown through [`print_status`] and
/// [`print_history`] instead.
pub fn print_event(event: &GameEvent) {
    match event {
        GameEvent::GuessRejected { guess, penalty } => {
            println!(
                "{}",
                format!("❌ {guess} is not in the word list! -{penalty}s").red()
            );
        }
        GameEvent::WordRotated {
            change_count,
            max_changes,
            locked_columns,
            ..
        } => {
            println!(
                "\n{}",
                format!("🔀 Word Changed! ({change_count}/{max_changes})")
                    .bright_magenta()
                    .bold()
            );
            if !locked_columns.is_empty() {
                let cols: Vec<String> = locked_columns
                    .iter()
                    .map(|c| (c + 1).to_string())
                    .collect();
                println!("   Locked positions: {}", cols.join(", "));
            }
        }
        GameEvent::FinalCountdownStarted { seconds } => {
            let text =
                format!("⚠ Final countdown! {seconds}s left. Game ends when the timer reaches zero!");
            println!("\n{}", text.bright_red().bold());
        }
        _ => {}
    }
}

/// Print the end-of-session summary with the emoji grid of `rows`
pub fn print_result(result: SessionResult, secret: &Word, rows: &[Feedback], stats: Stats) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match result {
        SessionResult::Win { attempts } => {
            println!("{}", "    🎉  Y O U   W I N !  🎉".bright_green().bold());
            println!(
                "\n  You guessed the word in {} {}!",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "attempt" } else { "attempts" }
            );
        }
        SessionResult::Loss { reason } => {
            println!("{}", "    💀  G A M E   O V E R  💀".bright_red().bold());
            let prefix = match reason {
                LossReason::TimeExpired => "Time's up! ",
                LossReason::RowsExhausted => "",
            };
            println!(
                "\n  {prefix}The word was {}",
                secret.text().bright_yellow().bold()
            );
        }
    }
    if !rows.is_empty() {
        println!();
        for line in share_grid(rows).lines() {
            println!("  {line}");
        }
    }
    print_stats(stats);
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the win count and streak
pub fn print_stats(stats: Stats) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Wins:    {}", stats.wins.to_string().bright_yellow().bold());
    println!("   Streak:  {}", stats.streak.to_string().bright_yellow().bold());
}
