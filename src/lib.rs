//! Motus
//!
//! A turn-based team word-guessing game: each team in turn tries to find a
//! hidden word within a fixed number of attempts, with per-letter feedback
//! after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use motus::game::{GameController, InputEvent, Key};
//! use motus::wordlists::Dictionary;
//! use std::time::Instant;
//!
//! let words = Dictionary::seeded(["lutins", "pastis"], 1);
//! let mut game = GameController::new(words, 2).unwrap();
//!
//! // The first key press draws the first word
//! game.handle_input(InputEvent::press(Key::Submit), Instant::now()).unwrap();
//! assert_eq!(game.turn().word_len(), 6);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Settings
pub mod config;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{GameError, Result};
