//! Externally visible game state

/// Everything a front-end needs to draw the game at one instant
///
/// Snapshots are replaced wholesale on every transition, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    /// The puzzle currently shown to the player
    pub scrambled_word: String,
    pub score: u32,
    /// Zero-based round index
    pub stage: usize,
    /// Pending validation message, empty when there is none
    pub error_text: String,
    pub is_game_over: bool,
}

impl GameSnapshot {
    /// Snapshot for the first round of a fresh game
    #[must_use]
    pub fn new(scrambled_word: impl Into<String>) -> Self {
        Self {
            scrambled_word: scrambled_word.into(),
            ..Self::default()
        }
    }

    /// One-based round number as shown to the player
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.stage + 1
    }

    #[inline]
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error_text.is_empty()
    }
}
