//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::game::{LetterSlot, Team};
use colored::{ColoredString, Colorize};

/// Verdicts of a grid row as emoji
#[must_use]
pub fn row_emoji(row: &[LetterSlot]) -> String {
    row.iter().map(|slot| slot.verdict.emoji()).collect()
}

/// One letter styled after its verdict, Motus colors
#[must_use]
pub fn colored_letter(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Correct => text.white().on_red().bold(),
        Verdict::Misplaced => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_blue(),
        Verdict::Unknown => text.bright_white().on_bright_black(),
    }
}

/// A grid row with every letter colored
#[must_use]
pub fn colored_row(row: &[LetterSlot]) -> String {
    row.iter()
        .map(|slot| colored_letter(slot.letter, slot.verdict).to_string())
        .collect()
}

/// Plain scoreboard line, the active team marked with `>`
#[must_use]
pub fn scoreboard(teams: &[Team]) -> String {
    teams
        .iter()
        .map(|team| {
            let marker = if team.is_active() { ">" } else { " " };
            format!("{marker}Team {}: {}", team.index() + 1, team.score())
        })
        .collect::<Vec<_>>()
        .join("  ")
}
