//! Vocabulary word representation
//!
//! A Word is a validated, lowercase vocabulary entry that can always be
//! scrambled into something other than itself.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use thiserror::Error;

/// A vocabulary entry the game can ask the player to unscramble
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid vocabulary entries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word '{0}' must contain only ASCII letters")]
    NonAlphabetic(String),
    #[error("word '{0}' needs at least two different letters to be scrambled")]
    NoDistinctShuffle(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - It contains anything other than ASCII letters
    /// - Every letter is the same (no scramble can differ from the word)
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("Koala").unwrap();
    /// assert_eq!(word.text(), "koala");
    ///
    /// assert!(Word::new("x-ray").is_err());
    /// assert!(Word::new("zzz").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NonAlphabetic(text));
        }

        let distinct: FxHashSet<char> = text.chars().collect();
        if distinct.len() < 2 {
            return Err(WordError::NoDistinctShuffle(text));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the word and return its text
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Produce a random permutation of the letters that differs from the word
    ///
    /// Identity shuffles are rejected and retried, which happens often for
    /// short words or words with repeated letters.
    pub fn scramble<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut letters: Vec<char> = self.text.chars().collect();
        loop {
            letters.shuffle(rng);
            if letters.iter().copied().ne(self.text.chars()) {
                return letters.into_iter().collect();
            }
        }
    }

    /// Check whether `candidate` is a valid scramble of this word
    ///
    /// A valid scramble uses exactly the same letters and is not the word itself.
    #[must_use]
    pub fn is_scramble(&self, candidate: &str) -> bool {
        candidate != self.text && letter_counts(candidate) == letter_counts(&self.text)
    }
}

/// Count each letter in a string, used for permutation checks
fn letter_counts(text: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in text.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
