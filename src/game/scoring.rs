//! Points awarded for a found word

use crate::config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_POINTS_PER_ATTEMPT};

/// Rewards earlier successes: every unused attempt is worth a fixed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    max_attempts: usize,
    points_per_attempt: u32,
}

impl ScoringPolicy {
    #[must_use]
    pub const fn new(max_attempts: usize, points_per_attempt: u32) -> Self {
        Self {
            max_attempts,
            points_per_attempt,
        }
    }

    /// Points for finding the word on attempt `attempt_index` (0-based)
    ///
    /// `(max_attempts - attempt_index) * points_per_attempt`; indexes past the
    /// last attempt earn nothing.
    ///
    /// # Examples
    /// ```
    /// use motus::game::ScoringPolicy;
    ///
    /// let scoring = ScoringPolicy::default();
    /// assert_eq!(scoring.points(0), 60);
    /// assert_eq!(scoring.points(2), 40);
    /// assert_eq!(scoring.points(5), 10);
    /// ```
    #[must_use]
    pub fn points(&self, attempt_index: usize) -> u32 {
        let unused = self.max_attempts.saturating_sub(attempt_index);
        u32::try_from(unused)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.points_per_attempt)
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_POINTS_PER_ATTEMPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_decrease_with_each_attempt() {
        let scoring = ScoringPolicy::default();
        let points: Vec<u32> = (0..6).map(|i| scoring.points(i)).collect();
        assert_eq!(points, vec![60, 50, 40, 30, 20, 10]);
    }

    #[test]
    fn points_past_last_attempt_are_zero() {
        let scoring = ScoringPolicy::default();
        assert_eq!(scoring.points(6), 0);
        assert_eq!(scoring.points(100), 0);
    }

    #[test]
    fn points_use_custom_settings() {
        let scoring = ScoringPolicy::new(8, 5);
        assert_eq!(scoring.points(0), 40);
        assert_eq!(scoring.points(7), 5);
    }
}
