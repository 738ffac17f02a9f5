//! Motus feedback calculation and representation
//!
//! Each guessed letter receives one verdict:
//! - Correct: right letter in the right column
//! - Misplaced: letter appears elsewhere in the secret word
//! - Absent: letter not in the word (or all its occurrences already used)

use super::SecretWord;
use super::word::BLANK;
use crate::error::GameError;

/// Correctness tag of a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    /// Not evaluated yet
    #[default]
    Unknown,
    Correct,
    Misplaced,
    Absent,
}

impl Verdict {
    /// Emoji used by the line-mode output and the `check` command
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Unknown => '⬛',
            Self::Correct => '🟥',
            Self::Misplaced => '🟡',
            Self::Absent => '🟦',
        }
    }
}

/// Verdicts for one submitted guess, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// Implements the two-pass rule including duplicate letters:
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass, left to right: mark misplaced letters from the remaining pool
    ///
    /// Blank positions (`BLANK`) are always absent.
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuessLength` if the guess and the secret do
    /// not have the same number of letters.
    ///
    /// # Examples
    /// ```
    /// use motus::core::{Feedback, SecretWord, Verdict};
    ///
    /// let secret = SecretWord::new("LUTINS").unwrap();
    /// let guess: Vec<char> = "LATTES".chars().collect();
    /// let feedback = Feedback::evaluate(&secret, &guess).unwrap();
    ///
    /// assert_eq!(feedback.verdicts()[0], Verdict::Correct);
    /// assert_eq!(feedback.verdicts()[2], Verdict::Correct);
    /// assert_eq!(feedback.verdicts()[3], Verdict::Absent);
    /// ```
    pub fn evaluate(secret: &SecretWord, guess: &[char]) -> Result<Self, GameError> {
        if guess.len() != secret.len() {
            return Err(GameError::InvalidGuessLength {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let mut result = vec![Verdict::Absent; guess.len()];
        let mut available = secret.letter_counts();

        // First pass: exact column matches
        for (i, (&guessed, &expected)) in guess.iter().zip(secret.letters()).enumerate() {
            if guessed == expected {
                result[i] = Verdict::Correct;
                if let Some(count) = available.get_mut(&guessed) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: letters present elsewhere, consumed left to right
        for (i, &guessed) in guess.iter().enumerate() {
            if result[i] == Verdict::Correct || guessed == BLANK {
                continue;
            }
            if let Some(count) = available.get_mut(&guessed)
                && *count > 0
            {
                result[i] = Verdict::Misplaced;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Verdicts in column order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the number of correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of misplaced letters
    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Misplaced).count()
    }

    /// Convert feedback to an emoji string
    ///
    /// # Examples
    /// ```
    /// use motus::core::{Feedback, SecretWord};
    ///
    /// let secret = SecretWord::new("SOUPLE").unwrap();
    /// let guess: Vec<char> = "SOLEIL".chars().collect();
    /// let feedback = Feedback::evaluate(&secret, &guess).unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟥🟥🟡🟡🟦🟦");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}
