//! Round progression: attempt, letter cursor, team and the letter grid

use crate::core::{BLANK, Feedback, SecretWord, Verdict};

/// Text shown in a slot that holds neither a typed nor a revealed letter
pub const PLACEHOLDER: char = '.';

/// Grid coordinates of a letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub attempt: usize,
    pub letter: usize,
}

impl Position {
    #[must_use]
    pub const fn new(attempt: usize, letter: usize) -> Self {
        Self { attempt, letter }
    }
}

/// A single cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSlot {
    pub letter: char,
    pub verdict: Verdict,
    pub cursor: bool,
}

impl Default for LetterSlot {
    fn default() -> Self {
        Self {
            letter: PLACEHOLDER,
            verdict: Verdict::Unknown,
            cursor: false,
        }
    }
}

/// Mutable state of the round in progress
///
/// Invariants: `attempt < max_attempts`, `letter <= secret.len()`, and at most
/// one slot carries the cursor.
#[derive(Debug, Clone)]
pub struct TurnState {
    attempt: usize,
    letter: usize,
    team: usize,
    max_attempts: usize,
    secret: Option<SecretWord>,
    grid: Vec<Vec<LetterSlot>>,
    /// Columns already found in an earlier attempt of this round
    confirmed: Vec<bool>,
}

impl TurnState {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            attempt: 0,
            letter: 0,
            team: 0,
            max_attempts,
            secret: None,
            grid: Vec::new(),
            confirmed: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> usize {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn team(&self) -> usize {
        self.team
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn secret(&self) -> Option<&SecretWord> {
        self.secret.as_ref()
    }

    /// Length of the secret word, zero before the first round
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.secret.as_ref().map_or(0, SecretWord::len)
    }

    #[must_use]
    pub fn grid(&self) -> &[Vec<LetterSlot>] {
        &self.grid
    }

    #[must_use]
    pub fn slot(&self, position: Position) -> Option<&LetterSlot> {
        self.grid
            .get(position.attempt)
            .and_then(|row| row.get(position.letter))
    }

    #[must_use]
    pub fn is_last_attempt(&self) -> bool {
        self.attempt + 1 >= self.max_attempts
    }

    /// True once every column of the current row has been typed
    #[must_use]
    pub fn row_full(&self) -> bool {
        self.letter == self.word_len()
    }

    pub(crate) fn set_team(&mut self, team: usize) {
        self.team = team;
    }

    /// Reset for a new round: fresh grid, row 0 prepared
    pub(crate) fn start_round(&mut self, secret: SecretWord) -> Vec<Position> {
        let len = secret.len();
        self.attempt = 0;
        self.letter = 0;
        self.grid = vec![vec![LetterSlot::default(); len]; self.max_attempts];
        self.confirmed = vec![false; len];
        self.secret = Some(secret);
        self.prepare_row()
    }

    /// Fill the current row with hints and put the cursor on its first column
    fn prepare_row(&mut self) -> Vec<Position> {
        let attempt = self.attempt;
        let hints: Vec<char> = (0..self.word_len()).map(|col| self.hint(col)).collect();
        let Some(row) = self.grid.get_mut(attempt) else {
            return Vec::new();
        };

        for (col, (slot, hint)) in row.iter_mut().zip(hints).enumerate() {
            *slot = LetterSlot {
                letter: hint,
                verdict: Verdict::Unknown,
                cursor: col == 0,
            };
        }
        (0..row.len()).map(|col| Position::new(attempt, col)).collect()
    }

    /// Letter to show in an untyped slot of column `col`
    fn hint(&self, col: usize) -> char {
        match &self.secret {
            Some(secret) if self.confirmed.get(col).copied().unwrap_or(false) => {
                secret.letter_at(col)
            }
            _ => PLACEHOLDER,
        }
    }

    fn set_cursor(&mut self, col: usize, on: bool) -> Option<Position> {
        let attempt = self.attempt;
        let slot = self.grid.get_mut(attempt)?.get_mut(col)?;
        slot.cursor = on;
        Some(Position::new(attempt, col))
    }

    /// Write a letter at the cursor and move right
    ///
    /// Returns `None` when the row is already full.
    pub(crate) fn type_letter(&mut self, ch: char) -> Option<Vec<Position>> {
        if self.letter >= self.word_len() {
            return None;
        }

        let col = self.letter;
        let slot = self.grid.get_mut(self.attempt)?.get_mut(col)?;
        slot.letter = ch;
        slot.cursor = false;
        let mut changed = vec![Position::new(self.attempt, col)];

        self.letter += 1;
        if self.letter < self.word_len() {
            changed.extend(self.set_cursor(self.letter, true));
        }
        Some(changed)
    }

    /// Erase the last typed letter
    ///
    /// Returns `None` at the start of the row.
    pub(crate) fn backspace(&mut self) -> Option<Vec<Position>> {
        if self.letter == 0 {
            return None;
        }

        let mut changed = Vec::with_capacity(2);
        if self.letter != self.word_len() {
            changed.extend(self.set_cursor(self.letter, false));
        }

        self.letter -= 1;
        let col = self.letter;
        let hint = self.hint(col);
        let slot = self.grid.get_mut(self.attempt)?.get_mut(col)?;
        slot.letter = hint;
        slot.cursor = true;
        changed.push(Position::new(self.attempt, col));
        Some(changed)
    }

    /// Remove the cursor before a submission of an incomplete row
    pub(crate) fn clear_cursor(&mut self) -> Option<Position> {
        if self.row_full() {
            return None;
        }
        self.set_cursor(self.letter, false)
    }

    /// Guess built from the typed prefix; untyped columns are blanks
    #[must_use]
    pub fn guess(&self) -> Vec<char> {
        let typed = self.letter;
        self.grid
            .get(self.attempt)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, slot)| if col < typed { slot.letter } else { BLANK })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Store the verdicts of the current row and remember found columns
    pub(crate) fn apply_feedback(&mut self, feedback: &Feedback) -> Vec<Position> {
        let attempt = self.attempt;
        let Some(row) = self.grid.get_mut(attempt) else {
            return Vec::new();
        };

        for (col, (slot, &verdict)) in row.iter_mut().zip(feedback.verdicts()).enumerate() {
            slot.verdict = verdict;
            if verdict == Verdict::Correct
                && let Some(found) = self.confirmed.get_mut(col)
            {
                *found = true;
            }
        }
        (0..row.len()).map(|col| Position::new(attempt, col)).collect()
    }

    /// Show the secret word in the current row
    pub(crate) fn reveal(&mut self) -> Vec<Position> {
        let attempt = self.attempt;
        let (Some(secret), Some(row)) = (&self.secret, self.grid.get_mut(attempt)) else {
            return Vec::new();
        };

        for (slot, &letter) in row.iter_mut().zip(secret.letters()) {
            *slot = LetterSlot {
                letter,
                verdict: Verdict::Correct,
                cursor: false,
            };
        }
        (0..row.len()).map(|col| Position::new(attempt, col)).collect()
    }

    /// Move to the next row
    pub(crate) fn advance_attempt(&mut self) -> Vec<Position> {
        self.attempt += 1;
        self.letter = 0;
        self.prepare_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(word: &str) -> TurnState {
        let mut turn = TurnState::new(6);
        turn.start_round(SecretWord::new(word).unwrap());
        turn
    }

    fn cursors(turn: &TurnState) -> Vec<Position> {
        let mut found = Vec::new();
        for (i, row) in turn.grid().iter().enumerate() {
            for (j, slot) in row.iter().enumerate() {
                if slot.cursor {
                    found.push(Position::new(i, j));
                }
            }
        }
        found
    }

    fn type_word(turn: &mut TurnState, word: &str) {
        for ch in word.chars() {
            turn.type_letter(ch);
        }
    }

    #[test]
    fn start_round_resets_grid() {
        let turn = started("LUTINS");

        assert_eq!(turn.attempt(), 0);
        assert_eq!(turn.letter(), 0);
        assert_eq!(turn.grid().len(), 6);
        assert!(turn.grid().iter().all(|row| row.len() == 6));
        assert_eq!(cursors(&turn), vec![Position::new(0, 0)]);
    }

    #[test]
    fn typing_moves_cursor() {
        let mut turn = started("LUTINS");

        let changed = turn.type_letter('L').unwrap();
        assert_eq!(changed, vec![Position::new(0, 0), Position::new(0, 1)]);
        assert_eq!(turn.letter(), 1);
        assert_eq!(turn.grid()[0][0].letter, 'L');
        assert_eq!(cursors(&turn), vec![Position::new(0, 1)]);
    }

    #[test]
    fn typing_into_full_row_is_ignored() {
        let mut turn = started("LUTINS");
        type_word(&mut turn, "LUTINS");

        assert!(turn.row_full());
        assert!(cursors(&turn).is_empty());
        assert!(turn.type_letter('X').is_none());
        assert_eq!(turn.guess(), vec!['L', 'U', 'T', 'I', 'N', 'S']);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut turn = started("LUTINS");
        assert!(turn.backspace().is_none());
        assert_eq!(turn.letter(), 0);
        assert_eq!(cursors(&turn), vec![Position::new(0, 0)]);
    }

    #[test]
    fn backspace_restores_placeholder() {
        let mut turn = started("LUTINS");
        type_word(&mut turn, "LO");

        let changed = turn.backspace().unwrap();
        assert_eq!(changed, vec![Position::new(0, 2), Position::new(0, 1)]);
        assert_eq!(turn.letter(), 1);
        assert_eq!(turn.grid()[0][1].letter, PLACEHOLDER);
        assert_eq!(cursors(&turn), vec![Position::new(0, 1)]);
    }

    #[test]
    fn backspace_from_full_row_only_touches_last_slot() {
        let mut turn = started("LUTINS");
        type_word(&mut turn, "LUTINS");

        let changed = turn.backspace().unwrap();
        assert_eq!(changed, vec![Position::new(0, 5)]);
        assert_eq!(cursors(&turn), vec![Position::new(0, 5)]);
    }

    #[test]
    fn confirmed_columns_are_hinted_on_next_rows() {
        let mut turn = started("LUTINS");
        type_word(&mut turn, "LAPINS");
        let feedback = Feedback::evaluate(turn.secret().unwrap(), &turn.guess()).unwrap();
        turn.apply_feedback(&feedback);
        turn.advance_attempt();

        let letters: String = turn.grid()[1].iter().map(|s| s.letter).collect();
        assert_eq!(letters, "L..INS");

        // Erasing a typed letter over a found column shows the found letter again
        turn.type_letter('B');
        turn.backspace();
        assert_eq!(turn.grid()[1][0].letter, 'L');
    }

    #[test]
    fn partial_guess_is_padded_with_blanks() {
        let mut turn = started("JUNGLE");
        type_word(&mut turn, "JU");

        assert_eq!(turn.guess(), vec!['J', 'U', BLANK, BLANK, BLANK, BLANK]);
        assert_eq!(turn.clear_cursor(), Some(Position::new(0, 2)));
        assert!(cursors(&turn).is_empty());
    }

    #[test]
    fn reveal_shows_secret() {
        let mut turn = started("PYTHON");
        turn.reveal();

        let letters: String = turn.grid()[0].iter().map(|s| s.letter).collect();
        assert_eq!(letters, "PYTHON");
        assert!(turn.grid()[0].iter().all(|s| s.verdict == Verdict::Correct));
    }

    #[test]
    fn last_attempt_detection() {
        let mut turn = started("PYTHON");
        for _ in 0..5 {
            assert!(!turn.is_last_attempt());
            turn.advance_attempt();
        }
        assert!(turn.is_last_attempt());
        assert_eq!(turn.attempt(), 5);
    }
}
