//! Core domain types for Motus
//!
//! Pure, deterministic types: the secret word and the feedback computed for a guess.
//! Nothing here knows about teams, turns or time.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{BLANK, SecretWord, WordError, normalize_letter};
