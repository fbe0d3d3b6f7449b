//! Word lists for the scramble game
//!
//! Provides the built-in vocabulary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;

/// The built-in vocabulary as validated words
#[must_use]
pub fn builtin_vocabulary() -> Vec<Word> {
    loader::words_from_slice(WORDS)
}
