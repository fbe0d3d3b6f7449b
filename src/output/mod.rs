//! Terminal output formatting
//!
//! Display utilities for line mode and labels shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_error, print_final_score, print_round};
