//! Game error types

use crate::core::WordError;

/// Errors raised by the game core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// No word bucket has enough words left for every team
    #[error("dictionary exhausted: no word length has {team_count} words left")]
    ExhaustedDictionary { team_count: usize },

    #[error("guess has {actual} letters, expected {expected}")]
    InvalidGuessLength { expected: usize, actual: usize },

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("a game needs at least one team")]
    NoTeams,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
