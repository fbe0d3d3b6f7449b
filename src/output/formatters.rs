//! Formatting utilities for terminal output

use crate::core::{GameConfig, GameSnapshot};

/// Spread a word out as uppercase letters for display ("tca" -> "T C A")
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch.to_ascii_uppercase());
    }
    result
}

/// Round counter as shown to the player ("Word: 3/10")
#[must_use]
pub fn round_label(snapshot: &GameSnapshot, config: &GameConfig) -> String {
    format!("Word: {}/{}", snapshot.round(), config.max_rounds)
}

/// Score as shown to the player
#[must_use]
pub fn score_label(snapshot: &GameSnapshot) -> String {
    format!("Score: {}", snapshot.score)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of the maximum score reached, clamped to 0-100
#[must_use]
pub fn score_percent(score: u32, max_score: u32) -> u16 {
    if max_score == 0 {
        return 0;
    }
    (u64::from(score) * 100 / u64::from(max_score)).min(100) as u16
}
