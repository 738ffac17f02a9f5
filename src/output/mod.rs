//! Terminal output formatting
//!
//! Display utilities for line-mode play and command results.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_grid, print_scoreboard};
