//! Display functions for line mode

use super::formatters::{create_progress_bar, round_label, score_label, spaced_letters};
use crate::core::{GameConfig, GameSnapshot};
use colored::Colorize;

/// Print the welcome banner and the command summary
pub fn print_banner(config: &GameConfig) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Unscramble - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Unscramble {} words. Each correct answer is worth {} points.",
        config.max_rounds, config.score_increase
    );
    println!("Type your guess and press Enter.\n");
    println!("Commands: ':skip' to skip a word, ':quit' to exit\n");
}

/// Print the status line and the current puzzle
pub fn print_round(snapshot: &GameSnapshot, config: &GameConfig) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "{}    {}",
        round_label(snapshot, config).bright_cyan(),
        score_label(snapshot).bright_green()
    );
    println!("────────────────────────────────────────────────────────────");
    println!(
        "\n   {}\n",
        spaced_letters(&snapshot.scrambled_word)
            .bright_yellow()
            .bold()
    );
}

/// Print a validation message
pub fn print_error(message: &str) {
    println!("{}\n", format!("❌ {message}").red());
}

/// Print the final score dialog
pub fn print_final_score(snapshot: &GameSnapshot, config: &GameConfig) {
    let max_score = config.max_score();
    let bar = create_progress_bar(f64::from(snapshot.score), f64::from(max_score), 30);

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    🎉  C O N G R A T U L A T I O N S !  🎉    ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  You scored: {}",
        snapshot.score.to_string().bright_yellow().bold()
    );
    println!("  [{}] {}/{}", bar.green(), snapshot.score, max_score);
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}
