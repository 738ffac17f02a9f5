//! Interactive TUI interface
//!
//! Terminal front end: renders the grid and teams, maps key presses to game
//! input and drives the controller's pending continuations.

mod app;
mod rendering;

pub use app::{App, Bell, MessageStyle, TeamView, map_key, run_tui};
