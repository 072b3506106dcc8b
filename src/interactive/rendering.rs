//! TUI rendering with ratatui
//!
//! Draws the guess-the-dish board from a session snapshot.

use super::app::{App, MessageStyle};
use crate::core::{LetterSet, Reveal, RevealState};
use crate::game::{GamePhase, MAX_ATTEMPTS, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// On-screen keyboard rows
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.controller.session().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &snapshot, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    render_board(f, &snapshot, main_chunks[0]);
    render_info_panel(f, app, &snapshot, main_chunks[1]);

    render_keyboard(f, snapshot.disabled_letters, chunks[2]);
    render_status(f, app, &snapshot, chunks[3]);
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let title = format!(
        "🍲 QUICK COOK - Guess the Dish | Level {} of {}",
        snapshot.level_index + 1,
        snapshot.level_count
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(panel("").style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let content = vec![
        Line::from(attempts_spans(snapshot.attempts_remaining)),
        Line::from(""),
        Line::from(reveal_spans(&snapshot.reveals)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {} letters", snapshot.input_len, snapshot.target_len),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let (title, color) = match snapshot.phase {
        GamePhase::Playing => (" Dish ", Color::White),
        GamePhase::LevelWon => (" 🎉 You guessed it! ", Color::Green),
        GamePhase::GameLost => (" Out of attempts ", Color::Red),
        GamePhase::AllLevelsComplete => (" 🏆 All dishes complete! ", Color::Yellow),
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(panel(title).style(Style::default().fg(color)))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn attempts_spans(remaining: u8) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw("Attempts: ")];
    for i in 0..MAX_ATTEMPTS {
        spans.push(if i < remaining {
            Span::styled("● ", Style::default().fg(Color::Red))
        } else {
            Span::styled("○ ", Style::default().fg(Color::DarkGray))
        });
    }
    spans
}

fn reveal_spans(reveals: &[Reveal]) -> Vec<Span<'static>> {
    reveals
        .iter()
        .map(|reveal| {
            let style = match reveal.state {
                RevealState::Correct => Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                RevealState::Typing => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                RevealState::Blank => Style::default().fg(Color::DarkGray),
            };
            Span::styled(format!(" {} ", reveal.display_char()), style)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, disabled: LetterSet, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| {
                    let style = if disabled.contains(key) {
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                    };
                    Span::styled(format!(" {} ", char::from(key)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Level progress
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_level_progress(f, snapshot, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_level_progress(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let done = snapshot.level_index
        + usize::from(matches!(
            snapshot.phase,
            GamePhase::LevelWon | GamePhase::AllLevelsComplete
        ));
    let percent = (done * 100 / snapshot.level_count.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(panel(" Dishes Guessed "))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{done}/{}", snapshot.level_count));

    f.render_widget(gauge, area);
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
                MessageStyle::Error => Style::default().fg(Color::Red),
                MessageStyle::Hint => Style::default().fg(Color::Cyan),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    f.render_widget(List::new(messages).block(panel(" Messages ")), area);
}

fn render_status(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Phase: {}", snapshot.phase)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Lost: {}",
        app.stats.games_played, app.stats.levels_won, app.stats.games_lost
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match snapshot.phase {
        GamePhase::Playing => "Esc: Quit | Enter: Submit | Backspace: Delete | ?: Hint",
        GamePhase::LevelWon => "Esc: Quit | n: Next dish",
        GamePhase::GameLost | GamePhase::AllLevelsComplete => "Esc: Quit | r: Play again",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
