//! Random word selection from a fixed vocabulary

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

/// Picks unused words from a vocabulary and scrambles them
///
/// The vocabulary is fixed at construction and never mutated.
pub struct WordSource<R = StdRng> {
    vocabulary: Vec<Word>,
    rng: R,
}

impl WordSource<StdRng> {
    /// Word source seeded from the operating system
    #[must_use]
    pub fn from_os_rng(vocabulary: Vec<Word>) -> Self {
        Self::new(vocabulary, StdRng::from_os_rng())
    }

    /// Word source that produces the same games for the same seed
    #[must_use]
    pub fn seeded(vocabulary: Vec<Word>, seed: u64) -> Self {
        Self::new(vocabulary, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordSource<R> {
    pub const fn new(vocabulary: Vec<Word>, rng: R) -> Self {
        Self { vocabulary, rng }
    }

    #[inline]
    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    /// Pick a word outside `excluding` and a scramble of it
    ///
    /// Returns `(answer, scrambled)`. Recording the answer as used is up to the
    /// caller.
    ///
    /// # Panics
    /// Panics if the vocabulary is empty. Loops forever if every word is
    /// excluded; `GameConfig::validate` rules both out before a game starts.
    pub fn pick_word(&mut self, excluding: &FxHashSet<String>) -> (Word, String) {
        let answer = loop {
            let index = self.rng.random_range(0..self.vocabulary.len());
            let candidate = &self.vocabulary[index];
            if !excluding.contains(candidate.text()) {
                break candidate.clone();
            }
        };

        let scrambled = answer.scramble(&mut self.rng);
        (answer, scrambled)
    }
}
