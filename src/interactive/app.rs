//! TUI application state and logic

use crate::core::Word;
use crate::game::{Game, GameEvent, Key, LossReason, SessionResult, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;

/// Seconds the shifting columns and the word-change notice stay visible
const FLASH_SECONDS: f64 = 1.5;

/// Application state
pub struct App {
    pub game: Game,
    pub screen: Screen,
    pub messages: Vec<Message>,
    pub notice: Option<String>,
    pub shifting_columns: Vec<usize>,
    pub modal: Option<Modal>,
    pub should_quit: bool,
    flash_remaining: f64,
    first_secret: Option<Word>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Rules,
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

/// End-of-game dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

impl App {
    /// Wrap `game`; the first session starts from the rules screen
    #[must_use]
    pub fn new(game: Game, first_secret: Option<Word>) -> Self {
        Self {
            game,
            screen: Screen::Rules,
            messages: Vec::new(),
            notice: None,
            shifting_columns: Vec::new(),
            modal: None,
            should_quit: false,
            flash_remaining: 0.0,
            first_secret,
        }
    }

    /// Start a session, abandoning any running one
    ///
    /// # Errors
    ///
    /// Returns an error if the word pool cannot support a session.
    pub fn new_game(&mut self) -> Result<()> {
        match self.first_secret.take() {
            Some(secret) => self.game.start_with_secret(secret)?,
            None => self.game.start()?,
        }
        self.game.drain_events();

        self.screen = Screen::Playing;
        self.modal = None;
        self.notice = None;
        self.shifting_columns.clear();
        self.flash_remaining = 0.0;
        self.messages.clear();
        self.add_message("New game started! The clock is running.", MessageStyle::Info);
        Ok(())
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new session fails.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            Screen::Rules => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.new_game()?,
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::GameOver => match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.new_game()?,
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.press(Key::Letter(c)),
                KeyCode::Backspace => self.press(Key::Backspace),
                KeyCode::Enter => self.press(Key::Enter),
                _ => {}
            },
        }
        Ok(())
    }

    fn press(&mut self, key: Key) {
        if let Some(SubmitOutcome::Incomplete) = self.game.handle_key(key) {
            self.add_message("Word too short!", MessageStyle::Error);
        }
        self.absorb_events();
    }

    /// Deliver `elapsed` seconds to the running session
    pub fn on_tick(&mut self, elapsed: f64) {
        if self.flash_remaining > 0.0 {
            self.flash_remaining -= elapsed;
            if self.flash_remaining <= 0.0 {
                self.flash_remaining = 0.0;
                self.notice = None;
                self.shifting_columns.clear();
            }
        }

        if let Some(handle) = self.game.timer_handle() {
            self.game.tick(handle, elapsed);
        }
        self.absorb_events();
    }

    /// Turn engine events into messages, notices and dialogs
    ///
    /// Board, keyboard and timer are drawn straight from the game's accessors,
    /// so their events need no bookkeeping here.
    fn absorb_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::GuessRejected { penalty, .. } => {
                    self.add_message(
                        &format!("Not in word list! -{penalty}s"),
                        MessageStyle::Error,
                    );
                }
                GameEvent::WordRotated {
                    change_count,
                    max_changes,
                    changed_columns,
                    ..
                } => {
                    self.notice = Some(format!("Word Changed! ({change_count}/{max_changes})"));
                    self.shifting_columns = changed_columns;
                    self.flash_remaining = FLASH_SECONDS;
                }
                GameEvent::FinalCountdownStarted { seconds } => {
                    self.add_message(
                        &format!("Final countdown! {seconds}s left. Game ends when the timer reaches zero!"),
                        MessageStyle::Warning,
                    );
                }
                GameEvent::SessionEnded { result, secret } => {
                    if result.is_win() {
                        self.add_message(
                            "Solved! Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Success,
                        );
                    }
                    self.modal = Some(end_modal(result, &secret));
                    self.screen = Screen::GameOver;
                }
                GameEvent::TileChanged { .. }
                | GameEvent::FeedbackReady { .. }
                | GameEvent::KeyboardColorsInvalidated
                | GameEvent::TimerTick { .. } => {}
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn end_modal(result: SessionResult, secret: &Word) -> Modal {
    match result {
        SessionResult::Win { attempts } => Modal {
            title: "You Win!".to_string(),
            message: format!("You guessed the word in {attempts} attempts!"),
        },
        SessionResult::Loss {
            reason: LossReason::RowsExhausted,
        } => Modal {
            title: "Game Over!".to_string(),
            message: format!("The word was {secret}"),
        },
        SessionResult::Loss {
            reason: LossReason::TimeExpired,
        } => Modal {
            title: "Game Over!".to_string(),
            message: format!("Time's up! The word was {secret}"),
        },
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick = app.game.config().tick_duration();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_event(key)?;
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            app.on_tick(elapsed.as_secs_f64());
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
