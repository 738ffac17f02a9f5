//! Secret word representation
//!
//! A `SecretWord` stores an uppercase, accent-free word along with letter counts
//! used by feedback evaluation.

use rustc_hash::FxHashMap;
use std::fmt;

/// Placeholder used for guess positions that were never typed.
///
/// Never a valid secret letter, so it can never be marked correct.
pub const BLANK: char = ' ';

/// A Motus secret word
///
/// Always non-empty, ASCII uppercase, and free of diacritics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,
    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Fold a typed character to the uppercase ASCII letter it stands for
///
/// Accented letters lose their diacritics (`é` → `E`). Returns `None` for
/// anything that is not a single letter once folded.
///
/// # Examples
/// ```
/// use motus::core::normalize_letter;
///
/// assert_eq!(normalize_letter('é'), Some('E'));
/// assert_eq!(normalize_letter('q'), Some('Q'));
/// assert_eq!(normalize_letter('7'), None);
/// ```
#[must_use]
pub fn normalize_letter(ch: char) -> Option<char> {
    if !ch.is_alphabetic() {
        return None;
    }

    let mut folded = deunicode::deunicode_char(ch)?.chars();
    match (folded.next(), folded.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Some(letter.to_ascii_uppercase()),
        _ => None,
    }
}

impl SecretWord {
    /// Create a new secret word from raw dictionary text
    ///
    /// Surrounding whitespace is trimmed, accents are folded and the result
    /// is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than letters.
    ///
    /// # Examples
    /// ```
    /// use motus::core::SecretWord;
    ///
    /// let word = SecretWord::new("château").unwrap();
    /// assert_eq!(word.text(), "CHATEAU");
    /// assert_eq!(word.len(), 7);
    ///
    /// assert!(SecretWord::new("deux mots").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = trimmed
            .chars()
            .map(|ch| normalize_letter(ch).ok_or(WordError::InvalidCharacter(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text: letters.iter().collect(),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false, kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific column
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback evaluation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
