//! Game controller: the state machine driving rounds
//!
//! The controller never blocks. Pauses after a round are stored as a phase
//! with a due instant; front ends call [`GameController::tick`] from their
//! event loop and the pending step runs once its instant has passed. Input
//! received while a pause is pending is dropped.

use super::events::{Cue, GameEvent, InputEvent, Key};
use super::scoring::ScoringPolicy;
use super::team::GameSession;
use super::turn::{Position, TurnState};
use crate::config::GameConfig;
use crate::core::Feedback;
use crate::error::{GameError, Result};
use crate::wordlists::WordSource;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Where the controller is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first key press
    Idle,
    /// Accepting letters for the current attempt
    Playing,
    /// Word found; points are awarded at `due`
    Celebrating { due: Instant },
    /// Round over; the next team starts at `due`
    RoundEnding { due: Instant },
    /// The dictionary ran out; nothing more can happen
    Exhausted,
}

/// Timing of the scheduled continuations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pauses {
    pub victory: Duration,
    pub round_end: Duration,
}

/// Outcome of a submitted attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Found { attempt: usize },
    Lost,
    NextAttempt { feedback: Feedback },
}

pub struct GameController<W: WordSource> {
    words: W,
    session: GameSession,
    turn: TurnState,
    scoring: ScoringPolicy,
    pauses: Pauses,
    phase: Phase,
    events: Vec<GameEvent>,
}

impl<W: WordSource> GameController<W> {
    /// Create a controller for `team_count` teams with the default rules
    ///
    /// # Errors
    /// Returns `GameError::NoTeams` if `team_count` is zero.
    pub fn new(words: W, team_count: usize) -> Result<Self> {
        Self::with_config(words, &GameConfig {
            teams: team_count,
            ..GameConfig::default()
        })
    }

    /// Create a controller from a full configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_config(words: W, config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            words,
            session: GameSession::new(config.teams)?,
            turn: TurnState::new(config.max_attempts),
            scoring: ScoringPolicy::new(config.max_attempts, config.points_per_attempt),
            pauses: Pauses {
                victory: config.victory_pause(),
                round_end: config.round_end_pause(),
            },
            phase: Phase::Idle,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    /// True while a scheduled continuation is waiting
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(
            self.phase,
            Phase::Celebrating { .. } | Phase::RoundEnding { .. }
        )
    }

    /// Instant at which the pending continuation becomes due
    #[must_use]
    pub const fn due(&self) -> Option<Instant> {
        match self.phase {
            Phase::Celebrating { due } | Phase::RoundEnding { due } => Some(due),
            _ => None,
        }
    }

    /// Drain the events emitted since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feed one key event
    ///
    /// Returns the outcome when the event submitted an attempt.
    ///
    /// # Errors
    /// Returns `GameError::ExhaustedDictionary` if a new word is needed and
    /// none is left. The controller is then exhausted for good.
    #[instrument(level = "trace", skip(self, now))]
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Result<Option<SubmitOutcome>> {
        match self.phase {
            Phase::Idle => self.setup_word().map(|()| None),
            Phase::Playing => {
                if event.repeat && event.key != Key::Backspace {
                    return Ok(None);
                }
                match event.key {
                    Key::Letter(ch) => self.type_letter(ch),
                    Key::Backspace => self.backspace(),
                    Key::Submit => return self.submit(now).map(Some),
                }
                Ok(None)
            }
            Phase::Celebrating { .. } | Phase::RoundEnding { .. } => {
                debug!(?event, "Input dropped during pause");
                Ok(None)
            }
            Phase::Exhausted => Ok(None),
        }
    }

    /// Run the pending continuation if it is due
    ///
    /// # Errors
    /// Returns `GameError::ExhaustedDictionary` if the next round cannot start.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        match self.phase {
            Phase::Celebrating { due } if now >= due => {
                self.award_points();
                self.phase = Phase::RoundEnding {
                    due: now + self.pauses.round_end,
                };
                Ok(())
            }
            Phase::RoundEnding { due } if now >= due => self.end_round(),
            _ => Ok(()),
        }
    }

    /// Draw a word for the current team and lay out a fresh grid
    ///
    /// # Errors
    /// Returns `GameError::ExhaustedDictionary` when no word is left.
    pub fn setup_word(&mut self) -> Result<()> {
        let team = self.turn.team();
        self.session.activate(team);
        self.events.push(GameEvent::TeamActivated(team));

        let secret = match self.words.select_word(self.session.len()) {
            Ok(secret) => secret,
            Err(e) => {
                warn!(error = %e, "Cannot start a new round");
                self.session.deactivate(team);
                self.events.push(GameEvent::TeamDeactivated(team));
                self.phase = Phase::Exhausted;
                self.events.push(GameEvent::GameOver);
                return Err(e);
            }
        };

        info!(team, word_len = secret.len(), "Round started");
        self.events.push(GameEvent::RoundStarted {
            team,
            word_len: secret.len(),
            max_attempts: self.turn.max_attempts(),
        });
        let changed = self.turn.start_round(secret);
        self.emit_slots(changed);
        self.phase = Phase::Playing;
        Ok(())
    }

    fn type_letter(&mut self, ch: char) {
        if let Some(changed) = self.turn.type_letter(ch) {
            self.emit_slots(changed);
        }
    }

    fn backspace(&mut self) {
        if let Some(changed) = self.turn.backspace() {
            self.emit_slots(changed);
        }
    }

    /// Evaluate the current row and decide what happens next
    fn submit(&mut self, now: Instant) -> Result<SubmitOutcome> {
        let Some(secret) = self.turn.secret().cloned() else {
            return Err(GameError::InvalidGuessLength {
                expected: 0,
                actual: self.turn.letter(),
            });
        };

        let cleared = self.turn.clear_cursor();
        self.emit_slots(cleared);

        let guess = self.turn.guess();
        let feedback = Feedback::evaluate(&secret, &guess)?;
        let changed = self.turn.apply_feedback(&feedback);
        self.emit_slots(changed);

        let attempt = self.turn.attempt();
        let team = self.turn.team();
        let match_found = self.turn.row_full() && guess.as_slice() == secret.letters();
        debug!(
            attempt,
            team,
            correct = feedback.count_correct(),
            misplaced = feedback.count_misplaced(),
            "Guess submitted"
        );

        if match_found {
            info!(attempt, team, "Word found");
            self.events.push(GameEvent::Sound(Cue::Victory));
            self.events.push(GameEvent::RoundShine(attempt));
            self.phase = Phase::Celebrating {
                due: now + self.pauses.victory,
            };
            Ok(SubmitOutcome::Found { attempt })
        } else if self.turn.is_last_attempt() {
            info!(attempt, team, "Attempts exhausted");
            self.events.push(GameEvent::Sound(Cue::Loss));
            let revealed = self.turn.reveal();
            self.emit_slots(revealed);
            self.events.push(GameEvent::AttemptRevealed {
                attempt,
                word: secret,
            });
            self.phase = Phase::RoundEnding {
                due: now + self.pauses.round_end,
            };
            Ok(SubmitOutcome::Lost)
        } else {
            let changed = self.turn.advance_attempt();
            self.emit_slots(changed);
            Ok(SubmitOutcome::NextAttempt { feedback })
        }
    }

    fn award_points(&mut self) {
        let team = self.turn.team();
        let points = self.scoring.points(self.turn.attempt());
        let score = self.session.award(team, points);
        info!(team, points, score, "Points awarded");
        self.events.push(GameEvent::TeamScored { team, score });
    }

    /// Hand over to the next team
    fn end_round(&mut self) -> Result<()> {
        let team = self.turn.team();
        self.session.deactivate(team);
        self.events.push(GameEvent::TeamDeactivated(team));

        let next = self.session.next_index(team);
        debug!(from = team, to = next, "Rotating teams");
        self.turn.set_team(next);
        self.setup_word()
    }

    fn emit_slots(&mut self, positions: impl IntoIterator<Item = Position>) {
        for position in positions {
            if let Some(&slot) = self.turn.slot(position) {
                self.events.push(GameEvent::SlotChanged { position, slot });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use std::collections::VecDeque;

    /// Hands out words in a fixed order
    struct Scripted(VecDeque<&'static str>);

    impl WordSource for Scripted {
        fn select_word(&mut self, team_count: usize) -> Result<SecretWord> {
            let word = self
                .0
                .pop_front()
                .ok_or(GameError::ExhaustedDictionary { team_count })?;
            Ok(SecretWord::new(word)?)
        }
    }

    fn controller(words: &[&'static str], teams: usize) -> GameController<Scripted> {
        GameController::new(Scripted(words.iter().copied().collect()), teams).unwrap()
    }

    fn press(controller: &mut GameController<Scripted>, key: Key, now: Instant) {
        controller.handle_input(InputEvent::press(key), now).unwrap();
    }

    fn play_word(controller: &mut GameController<Scripted>, word: &str, now: Instant) {
        for ch in word.chars() {
            press(controller, Key::Letter(ch), now);
        }
        press(controller, Key::Submit, now);
    }

    #[test]
    fn first_input_starts_round_and_is_consumed() {
        let now = Instant::now();
        let mut game = controller(&["LUTINS"], 2);
        assert_eq!(game.phase(), Phase::Idle);

        press(&mut game, Key::Letter('L'), now);

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.turn().letter(), 0);
        assert_eq!(game.session().active().map(|t| t.index()), Some(0));

        let events = game.take_events();
        assert_eq!(events[0], GameEvent::TeamActivated(0));
        assert!(matches!(
            events[1],
            GameEvent::RoundStarted { team: 0, word_len: 6, max_attempts: 6 }
        ));
    }

    #[test]
    fn repeated_keys_are_ignored_except_backspace() {
        let now = Instant::now();
        let mut game = controller(&["LUTINS"], 1);
        press(&mut game, Key::Submit, now);

        game.handle_input(InputEvent::repeat(Key::Letter('A')), now)
            .unwrap();
        assert_eq!(game.turn().letter(), 0);

        press(&mut game, Key::Letter('A'), now);
        press(&mut game, Key::Letter('B'), now);
        game.handle_input(InputEvent::repeat(Key::Backspace), now)
            .unwrap();
        assert_eq!(game.turn().letter(), 1);

        game.handle_input(InputEvent::repeat(Key::Submit), now).unwrap();
        assert_eq!(game.turn().attempt(), 0);
    }

    #[test]
    fn win_on_first_attempt_scores_sixty_after_pauses() {
        let start = Instant::now();
        let mut game = controller(&["LUTINS", "PASTIS"], 2);
        press(&mut game, Key::Submit, start);
        game.take_events();

        play_word(&mut game, "LUTINS", start);
        assert!(matches!(game.phase(), Phase::Celebrating { .. }));
        let events = game.take_events();
        assert!(events.contains(&GameEvent::Sound(Cue::Victory)));
        assert!(events.contains(&GameEvent::RoundShine(0)));

        // Not due yet: no score
        game.tick(start + Duration::from_millis(50)).unwrap();
        assert_eq!(game.session().teams()[0].score(), 0);

        let scored_at = start + Duration::from_millis(100);
        game.tick(scored_at).unwrap();
        assert_eq!(game.session().teams()[0].score(), 60);
        assert_eq!(
            game.take_events(),
            vec![GameEvent::TeamScored { team: 0, score: 60 }]
        );

        game.tick(scored_at + Duration::from_millis(2999)).unwrap();
        assert!(game.is_pending());

        game.tick(scored_at + Duration::from_millis(3000)).unwrap();
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.turn().team(), 1);
        assert_eq!(game.turn().secret().map(SecretWord::text), Some("PASTIS"));
        assert_eq!(game.session().active().map(|t| t.index()), Some(1));
    }

    #[test]
    fn input_during_pause_is_dropped() {
        let now = Instant::now();
        let mut game = controller(&["LUTINS", "PASTIS"], 2);
        press(&mut game, Key::Submit, now);
        play_word(&mut game, "LUTINS", now);
        game.take_events();

        press(&mut game, Key::Letter('P'), now);
        press(&mut game, Key::Submit, now);

        assert!(game.take_events().is_empty());
        assert!(matches!(game.phase(), Phase::Celebrating { .. }));
    }

    #[test]
    fn next_attempt_after_miss() {
        let now = Instant::now();
        let mut game = controller(&["LUTINS"], 1);
        press(&mut game, Key::Submit, now);

        play_word(&mut game, "LAPINS", now);

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.turn().attempt(), 1);
        assert_eq!(game.turn().letter(), 0);
        assert!(game.turn().grid()[1][0].cursor);
    }

    #[test]
    fn exhausted_dictionary_is_terminal() {
        let now = Instant::now();
        let mut game = controller(&[], 2);

        let result = game.handle_input(InputEvent::press(Key::Submit), now);
        assert_eq!(
            result,
            Err(GameError::ExhaustedDictionary { team_count: 2 })
        );
        assert_eq!(game.phase(), Phase::Exhausted);
        assert!(game.take_events().contains(&GameEvent::GameOver));
        assert!(game.session().active().is_none());

        press(&mut game, Key::Letter('A'), now);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn zero_teams_rejected() {
        assert!(matches!(
            GameController::new(Scripted(VecDeque::new()), 0),
            Err(GameError::NoTeams)
        ));
    }
}
