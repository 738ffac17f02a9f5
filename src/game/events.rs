//! Input events consumed by the controller and output events it emits
//!
//! Front ends translate their own key events into [`InputEvent`] and forward
//! every drained [`GameEvent`] to their [`RenderSink`] and [`AudioSink`].

use super::turn::{LetterSlot, Position};
use crate::core::{SecretWord, normalize_letter};

/// A normalized key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Uppercase ASCII letter, accents already folded
    Letter(char),
    Backspace,
    Submit,
}

impl Key {
    /// Normalize a typed character into a letter key
    ///
    /// # Examples
    /// ```
    /// use motus::game::Key;
    ///
    /// assert_eq!(Key::from_char('é'), Some(Key::Letter('E')));
    /// assert_eq!(Key::from_char('!'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        normalize_letter(ch).map(Self::Letter)
    }
}

/// One key event as delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    /// Generated by the keyboard's auto-repeat
    pub repeat: bool,
}

impl InputEvent {
    #[must_use]
    pub const fn press(key: Key) -> Self {
        Self { key, repeat: false }
    }

    #[must_use]
    pub const fn repeat(key: Key) -> Self {
        Self { key, repeat: true }
    }
}

/// Sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Victory,
    Loss,
}

impl Cue {
    /// Name of the sound asset
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Victory => "victory",
            Self::Loss => "loose",
        }
    }
}

/// Everything the controller tells its collaborators, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted {
        team: usize,
        word_len: usize,
        max_attempts: usize,
    },
    SlotChanged {
        position: Position,
        slot: LetterSlot,
    },
    AttemptRevealed {
        attempt: usize,
        word: SecretWord,
    },
    TeamActivated(usize),
    TeamDeactivated(usize),
    TeamScored {
        team: usize,
        score: u32,
    },
    RoundShine(usize),
    Sound(Cue),
    /// No more words: the game cannot continue
    GameOver,
}

/// Receives display updates
pub trait RenderSink {
    fn on_round_started(&mut self, team: usize, word_len: usize, max_attempts: usize);
    fn on_slot_changed(&mut self, position: Position, slot: &LetterSlot);
    fn on_attempt_revealed(&mut self, attempt: usize, word: &SecretWord);
    fn on_team_activated(&mut self, team: usize);
    fn on_team_deactivated(&mut self, team: usize);
    fn on_team_scored(&mut self, team: usize, score: u32);
    fn on_round_shine(&mut self, attempt: usize);
    fn on_game_over(&mut self);
}

/// Plays fire-and-forget sound cues
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

impl GameEvent {
    /// Route the event to the matching collaborator
    pub fn dispatch<R, A>(&self, render: &mut R, audio: &mut A)
    where
        R: RenderSink + ?Sized,
        A: AudioSink + ?Sized,
    {
        match self {
            Self::RoundStarted {
                team,
                word_len,
                max_attempts,
            } => render.on_round_started(*team, *word_len, *max_attempts),
            Self::SlotChanged { position, slot } => render.on_slot_changed(*position, slot),
            Self::AttemptRevealed { attempt, word } => render.on_attempt_revealed(*attempt, word),
            Self::TeamActivated(team) => render.on_team_activated(*team),
            Self::TeamDeactivated(team) => render.on_team_deactivated(*team),
            Self::TeamScored { team, score } => render.on_team_scored(*team, *score),
            Self::RoundShine(attempt) => render.on_round_shine(*attempt),
            Self::Sound(cue) => audio.play(*cue),
            Self::GameOver => render.on_game_over(),
        }
    }
}
