//! Game state machine
//!
//! Turn progression, scoring and team rotation, driven by key events.

pub mod controller;
pub mod events;
mod scoring;
mod team;
pub mod turn;

pub use controller::{GameController, Pauses, Phase, SubmitOutcome};
pub use events::{AudioSink, Cue, GameEvent, InputEvent, Key, RenderSink};
pub use scoring::ScoringPolicy;
pub use team::{GameSession, Team};
pub use turn::{LetterSlot, PLACEHOLDER, Position, TurnState};
