//! Simple line-based play mode
//!
//! Text-based game without TUI: each line typed is fed to the controller one
//! letter at a time, then submitted.

use crate::core::SecretWord;
use crate::error::GameError;
use crate::game::{
    AudioSink, Cue, GameController, InputEvent, Key, LetterSlot, Phase, Position, RenderSink,
    SubmitOutcome,
};
use crate::output::{print_grid, print_scoreboard};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

/// Prints round-level events; the grid itself is printed after each guess
struct LinePrinter;

impl RenderSink for LinePrinter {
    fn on_round_started(&mut self, team: usize, word_len: usize, max_attempts: usize) {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!(
            " Team {}: find a {}-letter word in {} attempts",
            (team + 1).to_string().bright_yellow().bold(),
            word_len,
            max_attempts
        );
        println!("{}", "═".repeat(60).bright_cyan());
    }

    fn on_slot_changed(&mut self, _position: Position, _slot: &LetterSlot) {}

    fn on_attempt_revealed(&mut self, _attempt: usize, word: &SecretWord) {
        println!("\nThe word was {}", word.text().bright_yellow().bold());
    }

    fn on_team_activated(&mut self, _team: usize) {}

    fn on_team_deactivated(&mut self, _team: usize) {}

    fn on_team_scored(&mut self, team: usize, score: u32) {
        println!(
            "{}",
            format!("Team {} now has {score} points", team + 1)
                .green()
                .bold()
        );
    }

    fn on_round_shine(&mut self, _attempt: usize) {
        println!("{}", "    ✨ ✨ ✨ ✨ ✨ ✨    ".bright_yellow());
    }

    fn on_game_over(&mut self) {
        println!("\n{}", "No words left: the game is over.".red().bold());
    }
}

impl AudioSink for LinePrinter {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Victory => println!("\n{}", "🎉 BRAVO! 🎉".bright_green().bold()),
            Cue::Loss => println!("\n{}", "💀 Perdu...".red().bold()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// controller fails for any reason other than running out of words.
pub fn run_simple<W: WordSource>(game: &mut GameController<W>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        M O T U S                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a guess and press Enter. Missing letters count as blanks.");
    println!("Commands: 'quit' to exit, 'score' to show the scores\n");

    // The first key press only draws the first word
    let started = game.handle_input(InputEvent::press(Key::Submit), Instant::now());
    flush_events(game);
    if !continue_after(started)? {
        return finish(game);
    }

    loop {
        if game.phase() == Phase::Exhausted {
            break;
        }

        if let Some(due) = game.due() {
            std::thread::sleep(due.saturating_duration_since(Instant::now()));
            let ticked = game.tick(Instant::now());
            flush_events(game);
            if !continue_after(ticked)? {
                break;
            }
            continue;
        }

        let turn = game.turn();
        print_grid(turn.grid(), turn.attempt());
        let input = get_user_input(&format!(
            "Team {} attempt {}/{}",
            turn.team() + 1,
            turn.attempt() + 1,
            turn.max_attempts()
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "score" | "scores" => {
                print_scoreboard(game.session().teams());
                continue;
            }
            _ => {}
        }

        let now = Instant::now();
        for ch in input.chars() {
            match Key::from_char(ch) {
                Some(key) => {
                    game.handle_input(InputEvent::press(key), now)?;
                }
                None => debug!(?ch, "Ignoring non-letter input"),
            }
        }
        let submitted = game.handle_input(InputEvent::press(Key::Submit), now);

        if let Ok(Some(outcome)) = &submitted {
            let turn = game.turn();
            match outcome {
                SubmitOutcome::NextAttempt { .. } => {
                    print_grid(turn.grid(), turn.attempt().saturating_sub(1));
                }
                SubmitOutcome::Found { .. } | SubmitOutcome::Lost => {
                    print_grid(turn.grid(), turn.attempt());
                }
            }
        }
        flush_events(game);
        if !continue_after(submitted.map(|_| ()))? {
            break;
        }
    }

    finish(game)
}

fn flush_events<W: WordSource>(game: &mut GameController<W>) {
    let (mut render, mut audio) = (LinePrinter, LinePrinter);
    for event in game.take_events() {
        event.dispatch(&mut render, &mut audio);
    }
}

/// Running out of words ends the game; anything else is a real error
fn continue_after<T>(result: Result<T, GameError>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(GameError::ExhaustedDictionary { .. }) => Ok(false),
        Err(e) => Err(e).context("game controller failed"),
    }
}

fn finish<W: WordSource>(game: &GameController<W>) -> Result<()> {
    println!("\nFinal scores:");
    print_scoreboard(game.session().teams());
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        // End of input behaves like quitting
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
