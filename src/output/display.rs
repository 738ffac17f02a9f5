//! Display functions for command results and line-mode play

use super::formatters::{colored_row, row_emoji, scoreboard};
use crate::commands::CheckResult;
use crate::game::{LetterSlot, Team};
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Word:  {}", result.secret.text().bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    let row: Vec<LetterSlot> = result
        .guess
        .iter()
        .zip(result.feedback.verdicts())
        .map(|(&letter, &verdict)| LetterSlot {
            letter,
            verdict,
            cursor: false,
        })
        .collect();

    println!("\n  {}", colored_row(&row));
    println!("  {}", result.feedback.to_emoji());
    println!(
        "\n  Correct: {}  Misplaced: {}",
        result.feedback.count_correct().to_string().red().bold(),
        result.feedback.count_misplaced().to_string().yellow().bold()
    );

    if result.found {
        println!(
            "{}",
            format!(
                "\n✅ Found! Worth {} points on a first attempt",
                result.first_attempt_points
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", "\n❌ Not the word".red());
    }
}

/// Print every row up to and including `attempt`
pub fn print_grid(grid: &[Vec<LetterSlot>], attempt: usize) {
    for (i, row) in grid.iter().enumerate().take(attempt + 1) {
        println!(
            "  {}  {}  {}",
            (i + 1).to_string().bright_black(),
            colored_row(row),
            row_emoji(row)
        );
    }
}

/// Print the team scores
pub fn print_scoreboard(teams: &[Team]) {
    println!("{}", scoreboard(teams).bright_cyan());
}
