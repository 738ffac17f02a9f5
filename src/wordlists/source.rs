//! Secret word selection
//!
//! Words are grouped into buckets by length. Each draw removes the word from
//! its bucket, so a word is used at most once per game session.

use crate::core::SecretWord;
use crate::error::{GameError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Supplier of secret words for new rounds
pub trait WordSource {
    /// Draw a fresh secret word
    ///
    /// Only word lengths with at least `team_count` words left are eligible,
    /// so every team can get a word of the same length.
    ///
    /// # Errors
    /// Returns `GameError::ExhaustedDictionary` if no length qualifies.
    fn select_word(&mut self, team_count: usize) -> Result<SecretWord>;
}

/// Length-bucketed word pool with seedable randomness
#[derive(Debug, Clone)]
pub struct Dictionary {
    buckets: BTreeMap<usize, BTreeSet<String>>,
    rng: StdRng,
}

impl Dictionary {
    /// Build a dictionary from raw words, seeded from the OS
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Build a dictionary with a fixed seed (reproducible draws)
    pub fn seeded<I, S>(words: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng<I, S>(words: I, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self {
            buckets: BTreeMap::new(),
            rng,
        };
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Add a word, normalizing it first
    ///
    /// Returns false if the word is invalid or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        match SecretWord::new(raw) {
            Ok(word) => self
                .buckets
                .entry(word.len())
                .or_default()
                .insert(word.text().to_string()),
            Err(e) => {
                warn!(word = raw, error = %e, "Skipping dictionary entry");
                false
            }
        }
    }

    /// Total number of words left across all buckets
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    /// Word lengths that currently have at least `team_count` words
    #[must_use]
    pub fn qualifying_lengths(&self, team_count: usize) -> Vec<usize> {
        self.buckets
            .iter()
            .filter(|(_, words)| !words.is_empty() && words.len() >= team_count)
            .map(|(&length, _)| length)
            .collect()
    }
}

impl WordSource for Dictionary {
    fn select_word(&mut self, team_count: usize) -> Result<SecretWord> {
        let lengths = self.qualifying_lengths(team_count);
        if lengths.is_empty() {
            warn!(team_count, remaining = self.remaining(), "Dictionary exhausted");
            return Err(GameError::ExhaustedDictionary { team_count });
        }

        let length = lengths[self.rng.random_range(0..lengths.len())];
        let bucket = self
            .buckets
            .get_mut(&length)
            .ok_or(GameError::ExhaustedDictionary { team_count })?;

        let index = self.rng.random_range(0..bucket.len());
        let text = bucket
            .iter()
            .nth(index)
            .cloned()
            .ok_or(GameError::ExhaustedDictionary { team_count })?;
        bucket.remove(&text);

        debug!(length, left_in_bucket = bucket.len(), "Selected secret word");
        Ok(SecretWord::new(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const WORDS: &[&str] = &[
        "lutins", "pastis", "jungle", "dentel", "python", "souple", "buffet", "complet",
        "hauteur", "calibre", "pipeline", "remorquer",
    ];

    #[test]
    fn dictionary_buckets_by_length() {
        let dictionary = Dictionary::seeded(WORDS, 1);

        assert_eq!(dictionary.remaining(), 12);
        // Seven six-letter words, three of seven letters, one each of eight and nine
        assert_eq!(dictionary.qualifying_lengths(7), vec![6]);
        assert_eq!(dictionary.qualifying_lengths(2), vec![6, 7]);
        assert_eq!(dictionary.qualifying_lengths(8), Vec::<usize>::new());
    }

    #[test]
    fn dictionary_normalizes_and_dedupes() {
        let mut dictionary = Dictionary::seeded(["château", "CHATEAU", "chateau"], 1);
        assert_eq!(dictionary.remaining(), 1);

        assert!(!dictionary.insert("pas valide"));
        assert!(dictionary.insert("fenêtre"));
        assert_eq!(dictionary.remaining(), 2);
        assert_eq!(dictionary.qualifying_lengths(2), vec![7]);
    }

    #[test]
    fn qualifying_lengths_respect_team_count() {
        let dictionary = Dictionary::seeded(WORDS, 1);

        assert_eq!(dictionary.qualifying_lengths(1), vec![6, 7, 8, 9]);
        assert_eq!(dictionary.qualifying_lengths(3), vec![6, 7]);
        assert_eq!(dictionary.qualifying_lengths(4), vec![6]);
        assert!(dictionary.qualifying_lengths(8).is_empty());
    }

    #[test]
    fn select_word_never_repeats() {
        let mut dictionary = Dictionary::seeded(WORDS, 7);
        let mut seen = HashSet::new();

        for _ in 0..WORDS.len() {
            let word = dictionary.select_word(1).unwrap();
            assert!(seen.insert(word.text().to_string()), "repeated {word}");
        }

        assert_eq!(dictionary.remaining(), 0);
        assert_eq!(
            dictionary.select_word(1),
            Err(GameError::ExhaustedDictionary { team_count: 1 })
        );
    }

    #[test]
    fn select_word_only_from_qualifying_buckets() {
        let mut dictionary = Dictionary::seeded(WORDS, 3);

        // With 3 teams only lengths 6 and 7 qualify at first
        let word = dictionary.select_word(3).unwrap();
        assert!(matches!(word.len(), 6 | 7), "unexpected length {}", word.len());
    }

    #[test]
    fn select_word_exhausts_when_buckets_too_small() {
        let mut dictionary = Dictionary::seeded(["lutins", "pastis", "complet"], 1);

        assert_eq!(dictionary.select_word(2).unwrap().len(), 6);
        // One six-letter word left: not enough for two teams
        assert_eq!(
            dictionary.select_word(2),
            Err(GameError::ExhaustedDictionary { team_count: 2 })
        );
        // The state is unchanged by the failed draw
        assert_eq!(dictionary.remaining(), 2);
    }

    #[test]
    fn seeded_dictionaries_draw_identically() {
        let mut a = Dictionary::seeded(WORDS, 42);
        let mut b = Dictionary::seeded(WORDS, 42);

        for _ in 0..5 {
            assert_eq!(a.select_word(2).unwrap(), b.select_word(2).unwrap());
        }
    }

    #[test]
    fn empty_dictionary_is_exhausted() {
        let mut dictionary = Dictionary::seeded(Vec::<String>::new(), 0);
        assert!(matches!(
            dictionary.select_word(1),
            Err(GameError::ExhaustedDictionary { .. })
        ));
    }
}
