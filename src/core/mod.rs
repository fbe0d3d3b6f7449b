//! Core domain types for the scramble game
//!
//! Vocabulary words, game configuration and the externally visible snapshot.
//! Nothing here touches the terminal or owns a random number generator.

mod config;
mod snapshot;
mod word;

pub use config::{ConfigError, DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE, GameConfig};
pub use snapshot::GameSnapshot;
pub use word::{Word, WordError};
