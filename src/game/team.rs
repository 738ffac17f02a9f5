//! Teams and the session aggregate that owns them

use crate::error::{GameError, Result};

/// One competing team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    index: usize,
    score: u32,
    active: bool,
}

impl Team {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            score: 0,
            active: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// All teams of one game session
///
/// Only the game controller mutates a session; front ends read it for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    teams: Vec<Team>,
}

impl GameSession {
    /// Create `team_count` teams with zero score, none active
    ///
    /// # Errors
    /// Returns `GameError::NoTeams` if `team_count` is zero.
    pub fn new(team_count: usize) -> Result<Self> {
        if team_count == 0 {
            return Err(GameError::NoTeams);
        }
        Ok(Self {
            teams: (0..team_count).map(Team::new).collect(),
        })
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Never true: a session always has at least one team
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// The currently active team, if any
    #[must_use]
    pub fn active(&self) -> Option<&Team> {
        self.teams.iter().find(|team| team.active)
    }

    /// Team following `index` in round-robin order
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.teams.len()
    }

    /// Make `index` the only active team
    pub(crate) fn activate(&mut self, index: usize) {
        for team in &mut self.teams {
            team.active = team.index == index;
        }
    }

    pub(crate) fn deactivate(&mut self, index: usize) {
        if let Some(team) = self.teams.get_mut(index) {
            team.active = false;
        }
    }

    /// Add points to a team, returning its new score
    pub(crate) fn award(&mut self, index: usize, points: u32) -> u32 {
        self.teams.get_mut(index).map_or(0, |team| {
            team.score = team.score.saturating_add(points);
            team.score
        })
    }
}
