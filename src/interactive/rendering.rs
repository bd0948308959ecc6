//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, timer and dialogs for the shifting word game.

use super::app::{App, MessageStyle, Screen};
use crate::core::{KEYBOARD_ROWS, Mark, WORD_LEN};
use crate::game::Urgency;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(3),  // Timer
            Constraint::Min(8),     // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Length(5),  // Messages
            Constraint::Length(1),  // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_timer(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_help(f, app, chunks[5]);

    match app.screen {
        Screen::Rules => render_rules(f, app),
        Screen::GameOver => render_modal(f, app),
        Screen::Playing => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.stats();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "WORDSHIFT",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   Wins: {}  Streak: {}", stats.wins, stats.streak)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Normal => Color::Green,
        Urgency::Warning => Color::Yellow,
        Urgency::Critical => Color::Red,
    }
}

fn render_timer(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let config = game.config();
    let total = if game.is_final_countdown() {
        config.final_countdown
    } else {
        config.rotation_interval
    };
    let ratio = if total > 0.0 {
        (game.remaining_time() / total).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let title = if game.is_final_countdown() {
        " FINAL COUNTDOWN ".to_string()
    } else {
        format!(
            " Word changes: {}/{} ",
            game.word_change_count(),
            game.max_word_changes()
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(urgency_color(game.urgency())))
        .ratio(ratio)
        .label(format!("{}s", game.display_seconds()));

    f.render_widget(gauge, area);
}

fn mark_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Style of one board tile
///
/// Only empty tiles show the rotation shift; scored and typed letters stay put.
fn tile_style(mark: Option<Mark>, filled: bool, shifting: bool) -> Style {
    match mark {
        Some(mark) => mark_style(mark),
        None if filled => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None if shifting => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::SLOW_BLINK | Modifier::ITALIC),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history: Vec<_> = app.game.history().collect();
    let mut lines = Vec::with_capacity(app.game.board().len() + 1);

    for (r, row) in app.game.board().iter().enumerate() {
        let scored = history.get(r).map(|(_, feedback)| feedback.marks());
        let mut spans = Vec::with_capacity(WORD_LEN * 2);
        for (c, slot) in row.iter().enumerate() {
            let letter = slot.unwrap_or(' ');
            let style = tile_style(
                scored.map(|marks| marks[c]),
                slot.is_some(),
                app.shifting_columns.contains(&c),
            );
            let text = if slot.is_some() {
                format!(" {letter} ")
            } else {
                " · ".to_string()
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if let Some(notice) = &app.notice {
        lines.push(Line::from(Span::styled(
            notice.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Board ").borders(Borders::ALL));
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let marks = app.game.keyboard_marks();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let style = marks
                        .get(c)
                        .map_or_else(|| Style::default().fg(Color::White), mark_style);
                    [Span::styled(format!(" {c} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::Rules => "Enter: Start | q: Quit",
        Screen::Playing => "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit",
        Screen::GameOver => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Centered rectangle of the given percentage of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_rules(f: &mut Frame, app: &App) {
    let config = app.game.config();
    let lines = vec![
        Line::from(format!(
            "Guess the 5-letter word in {} tries.",
            config.max_rows
        )),
        Line::from(format!(
            "Every {}s the word changes, up to {} times.",
            config.rotation_interval, config.max_word_changes
        )),
        Line::from(format!(
            "Then you have {}s before time runs out.",
            config.final_countdown
        )),
        Line::from("Correctly placed letters stay locked."),
        Line::from(format!(
            "Words not in the list cost {}s.",
            config.time_penalty
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" A ", mark_style(Mark::Correct)),
            Span::raw(" right spot  "),
            Span::styled(" B ", mark_style(Mark::Present)),
            Span::raw(" wrong spot  "),
            Span::styled(" C ", mark_style(Mark::Absent)),
            Span::raw(" not in word"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let area = centered_rect(70, 60, f.area());
    let rules = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" How to Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(Clear, area);
    f.render_widget(rules, area);
}

fn render_modal(f: &mut Frame, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };
    let won = app.game.result().is_some_and(|r| r.is_win());
    let color = if won { Color::Green } else { Color::Red };

    let lines = vec![
        Line::from(""),
        Line::from(modal.message.clone()),
        Line::from(""),
        Line::from("Press 'n' for new game or 'q' to quit."),
    ];

    let area = centered_rect(60, 40, f.area());
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", modal.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}
