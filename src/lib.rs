//! Unscramble
//!
//! A word scramble game: the player is shown a shuffled word and has a fixed
//! number of rounds to unscramble as many words as possible.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::core::GameConfig;
//! use unscramble::game::{GameSession, WordSource};
//! use unscramble::wordlists::builtin_vocabulary;
//!
//! let source = WordSource::seeded(builtin_vocabulary(), 7);
//! let mut session = GameSession::new(GameConfig::default(), source).unwrap();
//!
//! session.update_input("guess");
//! session.submit_or_check();
//! assert_eq!(session.snapshot().stage, 1);
//! ```

// Core domain types
pub mod core;

// Word selection and session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
