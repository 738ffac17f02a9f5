//! Word lists and secret word selection
//!
//! Provides the embedded dictionary compiled into the binary and the
//! [`WordSource`] abstraction the game controller draws secret words from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use source::{Dictionary, WordSource};
