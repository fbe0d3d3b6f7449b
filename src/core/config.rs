//! Game configuration and its startup validation

use super::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Rounds per game when nothing else is configured
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Points awarded for each correct answer when nothing else is configured
pub const DEFAULT_SCORE_INCREASE: u32 = 20;

/// Configuration problems detected before a game starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one round")]
    NoRounds,
    #[error("the vocabulary is empty")]
    EmptyVocabulary,
    #[error("the vocabulary has {words} distinct words but a game needs {rounds}")]
    VocabularyTooSmall { words: usize, rounds: usize },
    #[error("{rounds} rounds of {points} points do not fit in a score")]
    ScoreOverflow { rounds: usize, points: u32 },
}

/// Round count and scoring rule for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: usize,
    pub score_increase: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREASE)
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_rounds: usize, score_increase: u32) -> Self {
        Self {
            max_rounds,
            score_increase,
        }
    }

    /// Highest score reachable in one game (`max_rounds * score_increase`)
    #[must_use]
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.max_rounds)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.score_increase)
    }

    /// Check that a game with this configuration can always find an unused word
    ///
    /// A game presents one word per round, so the vocabulary must hold at least
    /// `max_rounds` distinct words.
    ///
    /// # Errors
    /// Returns `ConfigError` if there are no rounds, the maximum score does not
    /// fit in a `u32`, there are no words, or fewer distinct words than rounds.
    pub fn validate(&self, vocabulary: &[Word]) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }

        let fits = u32::try_from(self.max_rounds)
            .ok()
            .and_then(|rounds| rounds.checked_mul(self.score_increase))
            .is_some();
        if !fits {
            return Err(ConfigError::ScoreOverflow {
                rounds: self.max_rounds,
                points: self.score_increase,
            });
        }

        if vocabulary.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }

        let distinct: FxHashSet<&str> = vocabulary.iter().map(Word::text).collect();
        if distinct.len() < self.max_rounds {
            return Err(ConfigError::VocabularyTooSmall {
                words: distinct.len(),
                rounds: self.max_rounds,
            });
        }

        Ok(())
    }
}
