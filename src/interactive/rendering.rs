//! TUI rendering with ratatui
//!
//! Layout for the scramble board, the guess box and the final score dialog.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{round_label, score_label, score_percent, spaced_letters};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Word count and score
            Constraint::Min(7),    // Scrambled word
            Constraint::Length(3), // Guess input
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_game_status(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_status(f, app, chunks[5]);

    if app.input_mode() == InputMode::FinalScore {
        render_final_score(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let snapshot = app.session.snapshot();
    let config = app.session.config();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let rounds = Paragraph::new(round_label(snapshot, config))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(rounds, chunks[0]);

    let score = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(score_percent(snapshot.score, config.max_score()))
        .label(score_label(snapshot));
    f.render_widget(score, chunks[1]);
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let snapshot = app.session.snapshot();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_letters(&snapshot.scrambled_word),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Unscramble the word using all the letters.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let board = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Scrambled Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let snapshot = app.session.snapshot();

    // The title doubles as the validation message, like a text field label
    let (title, color) = if snapshot.has_error() {
        (format!(" {} ", snapshot.error_text), Color::Red)
    } else {
        (" Enter your word ".to_string(), Color::Yellow)
    };

    let input = Paragraph::new(app.session.input_value())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats = app.stats.borrow();
    let stats_text = format!(
        "Games: {} | Best: {} | Avg: {:.0}",
        stats.total_games,
        stats.best_score,
        stats.average_score()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode() {
        InputMode::FinalScore => "p: Play Again | q: Exit",
        InputMode::Playing => "Enter: Submit | Tab: Skip | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_final_score<R: Rng>(f: &mut Frame, app: &App<R>) {
    let area = centered_rect(50, 30, f.area());
    let score = app.session.snapshot().score;

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You scored: {score}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[q] Exit", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[p] Play Again", Style::default().fg(Color::Green)),
        ]),
    ];

    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🎉 Congratulations! ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// Rectangle of the given percentage size centered in `area`
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
