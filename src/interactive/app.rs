//! TUI application state and logic

use crate::game::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use tracing::info;

/// Application state
pub struct App<R = StdRng> {
    pub session: GameSession<R>,
    pub messages: Vec<Message>,
    pub stats: Rc<RefCell<Statistics>>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    FinalScore,
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
    Error,
}

/// Results of the games finished since the program started
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub best_score: u32,
    pub total_score: u64,
}

impl Statistics {
    pub fn record(&mut self, score: u32) {
        self.total_games += 1;
        self.best_score = self.best_score.max(score);
        self.total_score += u64::from(score);
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_score as f64 / self.total_games as f64
        }
    }
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(mut session: GameSession<R>) -> Self {
        let stats = Rc::new(RefCell::new(Statistics::default()));

        // Count a game once, when the session first reports it finished.
        let sink = Rc::clone(&stats);
        let mut was_over = session.snapshot().is_game_over;
        session.subscribe(move |snapshot| {
            if snapshot.is_game_over && !was_over {
                sink.borrow_mut().record(snapshot.score);
            }
            was_over = snapshot.is_game_over;
        });

        Self {
            session,
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters to find the word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits your guess, Tab skips the word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.session.snapshot().is_game_over {
            InputMode::FinalScore
        } else {
            InputMode::Playing
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode() {
            InputMode::FinalScore => match key.code {
                KeyCode::Char('p') | KeyCode::Enter => self.play_again(),
                KeyCode::Char('q' | 'e') | KeyCode::Esc => self.exit(),
                _ => {
                    // The final score dialog only answers to its two buttons
                }
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_alphabetic() => {
                    let mut text = self.session.input_value().to_string();
                    text.push(c.to_ascii_lowercase());
                    self.session.update_input(text);
                }
                KeyCode::Backspace => {
                    let mut text = self.session.input_value().to_string();
                    text.pop();
                    self.session.update_input(text);
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => self.skip(),
                _ => {}
            },
        }
    }

    pub fn submit(&mut self) {
        let empty = self.session.input_value().is_empty();
        let score_before = self.session.snapshot().score;
        self.session.submit_or_check();

        let snapshot = self.session.snapshot();
        if empty {
            let text = snapshot.error_text.clone();
            self.add_message(&text, MessageStyle::Error);
        } else if snapshot.score > score_before {
            let gained = snapshot.score - score_before;
            self.add_message(&format!("Correct! +{gained} points"), MessageStyle::Success);
        } else {
            self.add_message("Not quite. On to the next word.", MessageStyle::Info);
        }
        self.announce_game_over();
    }

    pub fn skip(&mut self) {
        self.session.skip();
        self.add_message("Skipped.", MessageStyle::Info);
        self.announce_game_over();
    }

    pub fn play_again(&mut self) {
        self.session.dismiss_game_over();
        self.session.reset();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn exit(&mut self) {
        self.session.dismiss_game_over();
        self.should_quit = true;
    }

    fn announce_game_over(&mut self) {
        if self.session.snapshot().is_game_over {
            let score = self.session.snapshot().score;
            info!(score, "game finished");
            self.add_message(
                &format!("Game over! You scored {score}."),
                MessageStyle::Success,
            );
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

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
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
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
