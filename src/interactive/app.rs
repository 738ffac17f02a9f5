//! TUI application state and logic

use crate::core::SecretWord;
use crate::error::GameError;
use crate::game::{
    AudioSink, Cue, GameController, InputEvent, Key, LetterSlot, Phase, Position, RenderSink,
};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Longest wait for a key before checking pending continuations
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Display copy of a team
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamView {
    pub score: u32,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// Application state: everything the renderer needs, kept in sync by game events
pub struct App {
    pub grid: Vec<Vec<LetterSlot>>,
    pub teams: Vec<TeamView>,
    pub current_team: usize,
    pub word_len: usize,
    pub max_attempts: usize,
    /// Row being celebrated after a win
    pub shining: Option<usize>,
    pub phase: Phase,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub game_over: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(team_count: usize, max_attempts: usize) -> Self {
        Self {
            grid: Vec::new(),
            teams: vec![TeamView::default(); team_count],
            current_team: 0,
            word_len: 0,
            max_attempts,
            shining: None,
            phase: Phase::Idle,
            messages: vec![
                Message {
                    text: "Welcome to Motus!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press any key to draw the first word.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            game_over: false,
            should_quit: false,
        }
    }

    /// View sized after a controller's teams and attempts
    #[must_use]
    pub fn for_game<W: WordSource>(game: &GameController<W>) -> Self {
        Self::new(game.session().len(), game.turn().max_attempts())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Forward drained controller events and classify the controller result
    ///
    /// Running out of words is shown to the players; other errors abort.
    ///
    /// # Errors
    /// Returns any controller error other than `ExhaustedDictionary`.
    pub fn absorb<W, T>(
        &mut self,
        game: &mut GameController<W>,
        audio: &mut impl AudioSink,
        result: Result<T, GameError>,
    ) -> Result<()>
    where
        W: WordSource,
    {
        for event in game.take_events() {
            event.dispatch(self, audio);
        }
        self.phase = game.phase();

        match result {
            Ok(_) => Ok(()),
            Err(GameError::ExhaustedDictionary { .. }) => {
                self.add_message("Press 'q' to quit.", MessageStyle::Info);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl RenderSink for App {
    fn on_round_started(&mut self, team: usize, word_len: usize, max_attempts: usize) {
        self.grid = vec![vec![LetterSlot::default(); word_len]; max_attempts];
        self.word_len = word_len;
        self.max_attempts = max_attempts;
        self.current_team = team;
        self.shining = None;
        self.add_message(
            &format!("Team {}: {word_len}-letter word", team + 1),
            MessageStyle::Info,
        );
    }

    fn on_slot_changed(&mut self, position: Position, slot: &LetterSlot) {
        if let Some(cell) = self
            .grid
            .get_mut(position.attempt)
            .and_then(|row| row.get_mut(position.letter))
        {
            *cell = *slot;
        }
    }

    fn on_attempt_revealed(&mut self, _attempt: usize, word: &SecretWord) {
        self.stats.rounds_played += 1;
        self.add_message(
            &format!("Lost! The word was {}", word.text()),
            MessageStyle::Error,
        );
    }

    fn on_team_activated(&mut self, team: usize) {
        for (i, view) in self.teams.iter_mut().enumerate() {
            view.active = i == team;
        }
    }

    fn on_team_deactivated(&mut self, team: usize) {
        if let Some(view) = self.teams.get_mut(team) {
            view.active = false;
        }
    }

    fn on_team_scored(&mut self, team: usize, score: u32) {
        if let Some(view) = self.teams.get_mut(team) {
            view.score = score;
        }
        self.add_message(
            &format!("Team {} now has {score} points", team + 1),
            MessageStyle::Success,
        );
    }

    fn on_round_shine(&mut self, attempt: usize) {
        self.shining = Some(attempt);
        self.stats.rounds_played += 1;
        self.stats.rounds_won += 1;
        let celebration = match attempt {
            0 => "🎯 First try! Extraordinary! 🌟",
            1 => "🔥 MAGNIFICENT! Two attempts! 🔥",
            2 => "✨ SPLENDID! Three attempts! ✨",
            _ => "🎉 BRAVO! 🎉",
        };
        self.add_message(celebration, MessageStyle::Success);
    }

    fn on_game_over(&mut self) {
        self.game_over = true;
        self.add_message("No words left: the game is over.", MessageStyle::Error);
    }
}

/// Audio sink ringing the terminal bell
pub struct Bell {
    enabled: bool,
}

impl Bell {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AudioSink for Bell {
    fn play(&mut self, cue: Cue) {
        info!(cue = cue.name(), "Playing cue");
        if !self.enabled {
            return;
        }
        let rings: &[u8] = match cue {
            Cue::Victory => b"\x07",
            Cue::Loss => b"\x07\x07",
        };
        // Fire and forget
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(rings).and_then(|()| stdout.flush()) {
            error!(error = %e, "Cannot ring the bell");
        }
    }
}

/// Translate a terminal key event into a game input
///
/// Key releases and keys the game does not use map to `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    let repeat = match key.kind {
        KeyEventKind::Press => false,
        KeyEventKind::Repeat => true,
        KeyEventKind::Release => return None,
    };

    let key = match key.code {
        KeyCode::Char(c) => Key::from_char(c)?,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Submit,
        _ => return None,
    };

    Some(InputEvent { key, repeat })
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Esc => true,
        _ => false,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(game: GameController<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, game);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "TUI stopped");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut game: GameController<W>,
) -> Result<()> {
    let mut app = App::for_game(&game);
    let mut bell = Bell::new(true);
    info!(teams = app.teams.len(), "TUI started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = game.due().map_or(POLL_INTERVAL, |due| {
            due.saturating_duration_since(Instant::now())
                .min(POLL_INTERVAL)
        });

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            if is_quit(&key) || (app.game_over && key.code == KeyCode::Char('q')) {
                app.should_quit = true;
            } else if let Some(input) = map_key(key) {
                let result = game.handle_input(input, Instant::now());
                app.absorb(&mut game, &mut bell, result)?;
            }
        }

        let result = game.tick(Instant::now());
        app.absorb(&mut game, &mut bell, result)?;

        if app.should_quit {
            break;
        }
    }

    info!(
        rounds = app.stats.rounds_played,
        won = app.stats.rounds_won,
        "TUI closed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::wordlists::Dictionary;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn map_key_normalizes_letters() {
        assert_eq!(
            map_key(key(KeyCode::Char('é'), KeyEventKind::Press)),
            Some(InputEvent::press(Key::Letter('E')))
        );
        assert_eq!(map_key(key(KeyCode::Char('1'), KeyEventKind::Press)), None);
    }

    #[test]
    fn map_key_flags_repeats_and_skips_releases() {
        assert_eq!(
            map_key(key(KeyCode::Backspace, KeyEventKind::Repeat)),
            Some(InputEvent::repeat(Key::Backspace))
        );
        assert_eq!(map_key(key(KeyCode::Enter, KeyEventKind::Release)), None);
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyEventKind::Press)),
            Some(InputEvent::press(Key::Submit))
        );
        assert_eq!(map_key(key(KeyCode::Tab, KeyEventKind::Press)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(&key(KeyCode::Esc, KeyEventKind::Press)));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&key(KeyCode::Char('c'), KeyEventKind::Press)));
    }

    #[test]
    fn app_takes_size_from_controller() {
        let config = crate::config::GameConfig {
            teams: 3,
            max_attempts: 4,
            ..crate::config::GameConfig::default()
        };
        let game = GameController::with_config(Dictionary::seeded(["lutins"], 1), &config).unwrap();
        let app = App::for_game(&game);

        assert_eq!(app.teams.len(), 3);
        assert_eq!(app.max_attempts, 4);
        assert!(app.teams.iter().all(|t| !t.active));
    }

    #[test]
    fn app_mirrors_controller_events() {
        let now = Instant::now();
        let mut game = GameController::new(Dictionary::seeded(["lutins"], 1), 1).unwrap();
        let mut app = App::for_game(&game);
        let mut bell = Bell::new(false);

        let result = game.handle_input(InputEvent::press(Key::Submit), now);
        app.absorb(&mut game, &mut bell, result).unwrap();
        assert_eq!(app.word_len, 6);
        assert!(app.teams[0].active);
        assert!(app.grid[0][0].cursor);

        for ch in "LUTINS".chars() {
            let result = game.handle_input(InputEvent::press(Key::Letter(ch)), now);
            app.absorb(&mut game, &mut bell, result).unwrap();
        }
        let result = game.handle_input(InputEvent::press(Key::Submit), now);
        app.absorb(&mut game, &mut bell, result).unwrap();

        assert_eq!(app.shining, Some(0));
        assert!(app.grid[0].iter().all(|s| s.verdict == Verdict::Correct));
        assert_eq!(app.stats.rounds_won, 1);

        let later = now + Duration::from_secs(1);
        let result = game.tick(later);
        app.absorb(&mut game, &mut bell, result).unwrap();
        assert_eq!(app.teams[0].score, 60);

        // Single-word dictionary: the next round cannot start
        let result = game.tick(later + Duration::from_secs(5));
        app.absorb(&mut game, &mut bell, result).unwrap();
        assert!(app.game_over);
        assert_eq!(app.phase, Phase::Exhausted);
    }
}
