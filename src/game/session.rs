//! Game session state machine
//!
//! A session is either playing (`is_game_over == false`) or finished. Every
//! mutating call except `update_input` publishes exactly one new snapshot to
//! the registered observers, in call order.

use super::source::WordSource;
use crate::core::{ConfigError, GameConfig, GameSnapshot};
use rand::Rng;
use rand::rngs::StdRng;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Validation message shown when the player submits an empty guess
pub const EMPTY_INPUT_MESSAGE: &str = "Must not be empty!";

type Observer = Box<dyn FnMut(&GameSnapshot)>;

/// One player's game: the current puzzle, score and round
pub struct GameSession<R = StdRng> {
    config: GameConfig,
    source: WordSource<R>,
    snapshot: GameSnapshot,
    current_answer: String,
    used_words: FxHashSet<String>,
    input_value: String,
    observers: Vec<Observer>,
}

impl<R: Rng> GameSession<R> {
    /// Create a session that is ready to play its first round
    ///
    /// # Errors
    /// Returns `ConfigError` if the vocabulary cannot supply a distinct word
    /// for every round.
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::{GameConfig, Word};
    /// use unscramble::game::{GameSession, WordSource};
    ///
    /// let words = ["cat", "fox", "oak"].map(|w| Word::new(w).unwrap()).to_vec();
    /// let session = GameSession::new(GameConfig::new(3, 20), WordSource::seeded(words, 1)).unwrap();
    ///
    /// assert_eq!(session.snapshot().stage, 0);
    /// assert_eq!(session.snapshot().scrambled_word.len(), 3);
    /// ```
    pub fn new(config: GameConfig, source: WordSource<R>) -> Result<Self, ConfigError> {
        config.validate(source.vocabulary())?;

        let mut session = Self {
            config,
            source,
            snapshot: GameSnapshot::default(),
            current_answer: String::new(),
            used_words: FxHashSet::default(),
            input_value: String::new(),
            observers: Vec::new(),
        };
        session.reset();
        Ok(session)
    }

    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    #[inline]
    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Register a callback that receives every published snapshot
    pub fn subscribe(&mut self, observer: impl FnMut(&GameSnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start a new game from round one with a zero score
    pub fn reset(&mut self) {
        self.used_words.clear();
        self.input_value.clear();

        let scrambled = self.next_word();
        debug!(max_rounds = self.config.max_rounds, "new game");
        self.publish(GameSnapshot::new(scrambled));
    }

    /// Replace the player's in-progress guess
    pub fn update_input(&mut self, text: impl Into<String>) {
        self.input_value = text.into();
    }

    /// Check the current guess and move on to the next round
    ///
    /// A correct guess scores unless the score has already reached the cap.
    /// Any non-empty guess, right or wrong, advances the round. An empty guess
    /// only sets the validation message.
    pub fn submit_or_check(&mut self) {
        let mut next = self.snapshot.clone();

        let correct = self.input_value == self.current_answer;
        if correct && next.score < self.config.max_score() {
            next.score = next.score.saturating_add(self.config.score_increase);
        }
        debug!(correct, score = next.score, "guess submitted");

        if self.input_value.is_empty() {
            next.error_text = EMPTY_INPUT_MESSAGE.to_string();
        } else {
            next = self.advance(next);
        }

        self.publish(next);
    }

    /// Give up on the current word
    pub fn skip(&mut self) {
        let next = self.advance(self.snapshot.clone());
        self.publish(next);
    }

    /// Leave the finished state without starting a new game
    pub fn dismiss_game_over(&mut self) {
        let next = GameSnapshot {
            is_game_over: false,
            ..self.snapshot.clone()
        };
        self.publish(next);
    }

    fn advance(&mut self, mut next: GameSnapshot) -> GameSnapshot {
        self.input_value.clear();

        if next.stage + 1 < self.config.max_rounds {
            next.scrambled_word = self.next_word();
            next.stage += 1;
            next.error_text.clear();
            debug!(stage = next.stage, "next round");
        } else {
            next.is_game_over = true;
            debug!(score = next.score, "game over");
        }

        next
    }

    fn next_word(&mut self) -> String {
        let (answer, scrambled) = self.source.pick_word(&self.used_words);
        self.used_words.insert(answer.text().to_string());
        self.current_answer = answer.into_text();
        scrambled
    }

    fn publish(&mut self, snapshot: GameSnapshot) {
        self.snapshot = snapshot;
        for observer in &mut self.observers {
            observer(&self.snapshot);
        }
    }

    #[cfg(test)]
    pub(crate) fn current_answer(&self) -> &str {
        &self.current_answer
    }

    #[cfg(test)]
    pub(crate) const fn used_words(&self) -> &FxHashSet<String> {
        &self.used_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::cell::RefCell;
    use std::rc::Rc;

    const WORDS: &[&str] = &[
        "animal", "balloon", "camera", "dance", "eerie", "flowers", "guitar", "honey",
    ];

    fn session(max_rounds: usize, seed: u64) -> GameSession {
        let vocabulary = WORDS.iter().map(|w| Word::new(w).unwrap()).collect();
        GameSession::new(
            GameConfig::new(max_rounds, 20),
            WordSource::seeded(vocabulary, seed),
        )
        .unwrap()
    }

    fn recorder(session: &mut GameSession) -> Rc<RefCell<Vec<GameSnapshot>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
        seen
    }

    fn answer_correctly(session: &mut GameSession) {
        let answer = session.current_answer().to_string();
        session.update_input(answer);
        session.submit_or_check();
    }

    #[test]
    fn fresh_session_is_playable() {
        let session = session(5, 1);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.stage, 0);
        assert_eq!(snapshot.score, 0);
        assert!(!snapshot.is_game_over);
        assert!(snapshot.error_text.is_empty());
        assert_eq!(session.input_value(), "");
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn empty_submission_sets_error() {
        let mut session = session(5, 2);
        let before = session.snapshot().clone();

        session.update_input("");
        session.submit_or_check();

        let after = session.snapshot();
        assert_eq!(after.error_text, EMPTY_INPUT_MESSAGE);
        assert_eq!(after.stage, 0);
        assert_eq!(after.score, 0);
        assert_eq!(after.scrambled_word, before.scrambled_word);
    }

    #[test]
    fn correct_answer_scores_and_advances() {
        let mut session = session(5, 3);
        session.submit_or_check();
        let previous_word = session.snapshot().scrambled_word.clone();

        answer_correctly(&mut session);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.score, 20);
        assert_eq!(snapshot.stage, 1);
        assert_eq!(snapshot.error_text, "");
        assert_ne!(snapshot.scrambled_word, previous_word);
        assert_eq!(session.input_value(), "");
    }

    #[test]
    fn wrong_answer_advances_without_scoring() {
        let mut session = session(5, 4);

        session.update_input("definitely not it");
        session.submit_or_check();

        assert_eq!(session.snapshot().score, 0);
        assert_eq!(session.snapshot().stage, 1);
        assert_eq!(session.input_value(), "");
    }

    #[test]
    fn answer_check_is_case_sensitive() {
        let mut session = session(5, 5);

        let shouted = session.current_answer().to_uppercase();
        session.update_input(shouted);
        session.submit_or_check();

        assert_eq!(session.snapshot().score, 0);
        assert_eq!(session.snapshot().stage, 1);
    }

    #[test]
    fn last_skip_ends_game_without_advancing_stage() {
        let mut session = session(5, 6);

        for expected_stage in 1..5 {
            session.skip();
            assert_eq!(session.snapshot().stage, expected_stage);
            assert!(!session.snapshot().is_game_over);
        }

        let last_word = session.snapshot().scrambled_word.clone();
        session.skip();

        assert!(session.snapshot().is_game_over);
        assert_eq!(session.snapshot().stage, 4);
        assert_eq!(session.snapshot().scrambled_word, last_word);
        assert_eq!(session.used_words().len(), 5);
    }

    #[test]
    fn skip_clears_pending_error_and_input() {
        let mut session = session(5, 7);
        session.submit_or_check();
        assert!(session.snapshot().has_error());

        session.update_input("half typed");
        session.skip();

        assert!(!session.snapshot().has_error());
        assert_eq!(session.input_value(), "");
    }

    #[test]
    fn dismiss_then_reset() {
        let mut session = session(5, 8);
        answer_correctly(&mut session);
        for _ in 0..4 {
            session.skip();
        }
        assert!(session.snapshot().is_game_over);
        let finished = session.snapshot().clone();

        session.dismiss_game_over();
        assert!(!session.snapshot().is_game_over);
        assert_eq!(session.snapshot().score, finished.score);
        assert_eq!(session.snapshot().stage, finished.stage);
        assert_eq!(session.snapshot().scrambled_word, finished.scrambled_word);

        session.reset();
        assert_eq!(session.snapshot().score, 0);
        assert_eq!(session.snapshot().stage, 0);
        assert!(!session.snapshot().is_game_over);
        assert_eq!(session.used_words().len(), 1);
    }

    #[test]
    fn perfect_game_reaches_cap() {
        let mut session = session(5, 9);
        for _ in 0..5 {
            answer_correctly(&mut session);
        }

        assert!(session.snapshot().is_game_over);
        assert_eq!(session.snapshot().score, session.config().max_score());
    }

    #[test]
    fn score_never_exceeds_cap_after_dismiss() {
        let mut session = session(3, 10);
        for _ in 0..3 {
            answer_correctly(&mut session);
        }
        assert_eq!(session.snapshot().score, 60);

        // Still on the last round after dismissing; a correct answer must not score.
        session.dismiss_game_over();
        answer_correctly(&mut session);
        assert_eq!(session.snapshot().score, 60);
        assert!(session.snapshot().is_game_over);
    }

    #[test]
    fn words_never_repeat_within_game() {
        for seed in 0..20 {
            let mut session = session(WORDS.len(), seed);
            let mut answers = vec![session.current_answer().to_string()];

            while !session.snapshot().is_game_over {
                session.skip();
                if !session.snapshot().is_game_over {
                    answers.push(session.current_answer().to_string());
                }
            }

            let mut distinct = answers.clone();
            distinct.sort();
            distinct.dedup();
            assert_eq!(distinct.len(), answers.len(), "seed {seed} repeated a word");
            assert_eq!(answers.len(), WORDS.len());
        }
    }

    #[test]
    fn scramble_always_differs_from_answer() {
        let mut session = session(WORDS.len(), 12);
        loop {
            let answer = Word::new(session.current_answer()).unwrap();
            assert!(answer.is_scramble(&session.snapshot().scrambled_word));
            if session.snapshot().is_game_over {
                break;
            }
            session.skip();
        }
    }

    #[test]
    fn score_and_stage_never_decrease() {
        let mut session = session(WORDS.len(), 13);
        let seen = recorder(&mut session);

        for round in 0..WORDS.len() {
            match round % 3 {
                0 => answer_correctly(&mut session),
                1 => {
                    session.update_input("nope");
                    session.submit_or_check();
                }
                _ => session.skip(),
            }
        }

        let seen = seen.borrow();
        for pair in seen.windows(2) {
            assert!(pair[1].score >= pair[0].score);
            assert!(pair[1].stage >= pair[0].stage);
        }
        assert!(seen.iter().all(|s| s.score <= session.config().max_score()));
    }

    #[test]
    fn observers_see_one_snapshot_per_operation() {
        let mut session = session(3, 14);
        let seen = recorder(&mut session);

        session.update_input("typing");
        assert!(seen.borrow().is_empty());

        session.submit_or_check();
        session.update_input("");
        session.submit_or_check();
        session.skip();
        session.skip();
        session.dismiss_game_over();
        session.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0].stage, 1);
        assert!(seen[1].has_error());
        assert_eq!(seen[2].stage, 2);
        assert!(seen[3].is_game_over);
        assert!(!seen[4].is_game_over);
        assert_eq!(seen[5], *session.snapshot());
    }

    #[test]
    fn rejects_score_that_cannot_fit() {
        let vocabulary = WORDS.iter().map(|w| Word::new(w).unwrap()).collect();
        let result = GameSession::new(
            GameConfig::new(2, 4_000_000_000),
            WordSource::seeded(vocabulary, 16),
        );
        assert!(matches!(result, Err(ConfigError::ScoreOverflow { .. })));
    }

    #[test]
    fn largest_valid_score_reaches_cap() {
        let vocabulary = WORDS.iter().map(|w| Word::new(w).unwrap()).collect();
        let mut session = GameSession::new(
            GameConfig::new(1, u32::MAX),
            WordSource::seeded(vocabulary, 17),
        )
        .unwrap();

        answer_correctly(&mut session);
        assert_eq!(session.snapshot().score, u32::MAX);
        assert!(session.snapshot().is_game_over);
    }

    #[test]
    fn single_round_game() {
        let mut session = session(1, 15);
        session.skip();
        assert!(session.snapshot().is_game_over);
        assert_eq!(session.snapshot().stage, 0);
    }

    #[test]
    fn rejects_vocabulary_smaller_than_game() {
        let vocabulary = vec![Word::new("cat").unwrap(), Word::new("fox").unwrap()];
        let result = GameSession::new(GameConfig::new(3, 20), WordSource::seeded(vocabulary, 0));
        assert!(matches!(
            result,
            Err(ConfigError::VocabularyTooSmall {
                words: 2,
                rounds: 3
            })
        ));
    }
}
