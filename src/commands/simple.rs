//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::GameSession;
use crate::output::{print_banner, print_error, print_final_score, print_round};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing the prompt.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> io::Result<()> {
    let stdin = io::stdin();
    play(session, stdin.lock())
}

fn play<R: Rng, B: BufRead>(session: &mut GameSession<R>, mut input: B) -> io::Result<()> {
    print_banner(session.config());

    loop {
        if session.snapshot().is_game_over {
            print_final_score(session.snapshot(), session.config());
            info!(score = session.snapshot().score, "game finished");

            let answer = get_user_input(&mut input, "Play again? (yes/no)")?;
            session.dismiss_game_over();
            match answer.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_round(session.snapshot(), session.config());

        let Some(line) = get_user_input(&mut input, "Your guess")? else {
            // End of input
            println!();
            return Ok(());
        };

        match line.as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":skip" | ":s" => session.skip(),
            guess => {
                if let Some(message) = submit_guess(session, guess) {
                    print_error(&message);
                }
            }
        }
    }
}

/// Submit a guess and return the validation message if it was rejected
///
/// Only a submission that stayed on the same round counts as rejected; a
/// leftover message on a later snapshot is not reported again.
fn submit_guess<R: Rng>(session: &mut GameSession<R>, guess: &str) -> Option<String> {
    let stage_before = session.snapshot().stage;
    let over_before = session.snapshot().is_game_over;

    session.update_input(guess.to_lowercase());
    session.submit_or_check();

    let snapshot = session.snapshot();
    let stayed = snapshot.stage == stage_before && snapshot.is_game_over == over_before;
    (stayed && snapshot.has_error()).then(|| snapshot.error_text.clone())
}

/// Get user input with a prompt
///
/// Returns `None` once the input is exhausted.
fn get_user_input<B: BufRead>(input: &mut B, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
