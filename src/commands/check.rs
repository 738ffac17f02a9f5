//! Guess checking command
//!
//! Evaluates a single guess against a given word, outside of any game.

use crate::core::{BLANK, Feedback, SecretWord, WordError, normalize_letter};
use crate::error::GameError;
use crate::game::ScoringPolicy;

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: SecretWord,
    /// Normalized guess, padded with blanks to the secret's length
    pub guess: Vec<char>,
    pub feedback: Feedback,
    /// Whether the guess filled every column and matched
    pub found: bool,
    /// Points a team would earn for this guess on the first attempt
    pub first_attempt_points: u32,
}

/// Evaluate `guess` against `secret`
///
/// Both are normalized like typed input. A shorter guess is padded with
/// blanks, as when a team submits an incomplete row.
///
/// # Errors
///
/// Returns an error if:
/// - Either word contains something other than letters
/// - The guess is longer than the secret
///
/// # Examples
/// ```
/// use motus::commands::check_guess;
///
/// let result = check_guess("lutins", "snitul").unwrap();
/// assert_eq!(result.feedback.count_misplaced(), 6);
/// assert!(!result.found);
/// ```
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, GameError> {
    let secret = SecretWord::new(secret)?;

    let mut letters = guess
        .trim()
        .chars()
        .map(|ch| normalize_letter(ch).ok_or(WordError::InvalidCharacter(ch)))
        .collect::<Result<Vec<_>, _>>()?;

    if letters.len() > secret.len() {
        return Err(GameError::InvalidGuessLength {
            expected: secret.len(),
            actual: letters.len(),
        });
    }
    let typed = letters.len();
    letters.resize(secret.len(), BLANK);

    let feedback = Feedback::evaluate(&secret, &letters)?;
    let found = typed == secret.len() && letters.as_slice() == secret.letters();
    let first_attempt_points = if found {
        ScoringPolicy::default().points(0)
    } else {
        0
    };

    Ok(CheckResult {
        secret,
        guess: letters,
        feedback,
        found,
        first_attempt_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    #[test]
    fn check_exact_match() {
        let result = check_guess("lutins", "LUTINS").unwrap();

        assert!(result.found);
        assert!(result.feedback.is_perfect());
        assert_eq!(result.first_attempt_points, 60);
    }

    #[test]
    fn check_very_long_word() {
        let word = "a".repeat(300);
        let result = check_guess(&word, &word).unwrap();

        assert!(result.found);
        assert_eq!(result.feedback.count_correct(), 300);
    }

    #[test]
    fn check_normalizes_accents() {
        let result = check_guess("fenêtre", "FENETRE").unwrap();
        assert!(result.found);
    }

    #[test]
    fn check_pads_short_guess() {
        let result = check_guess("jungle", "jun").unwrap();

        assert_eq!(result.guess, vec!['J', 'U', 'N', BLANK, BLANK, BLANK]);
        assert_eq!(result.feedback.count_correct(), 3);
        assert_eq!(result.feedback.verdicts()[5], Verdict::Absent);
        assert!(!result.found);
        assert_eq!(result.first_attempt_points, 0);
    }

    #[test]
    fn check_rejects_long_guess() {
        assert_eq!(
            check_guess("python", "pythons"),
            Err(GameError::InvalidGuessLength {
                expected: 6,
                actual: 7
            })
        );
    }

    #[test]
    fn check_rejects_invalid_characters() {
        assert!(matches!(
            check_guess("python", "py-hon"),
            Err(GameError::InvalidWord(WordError::InvalidCharacter('-')))
        ));
        assert!(matches!(
            check_guess("", "abc"),
            Err(GameError::InvalidWord(WordError::Empty))
        ));
    }
}
