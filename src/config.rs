//! Game configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `MOTUS_*` environment variables. Command-line flags are applied last by the
//! binary.

use crate::error::GameError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Rows available to find a word
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Points per unused attempt on success
pub const DEFAULT_POINTS_PER_ATTEMPT: u32 = 10;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "motus.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub teams: usize,
    pub max_attempts: usize,
    pub points_per_attempt: u32,
    /// Pause between the victory cue and the score update
    pub victory_pause_ms: u64,
    /// Pause between the end of a round and the next team's word
    pub round_end_pause_ms: u64,
    /// Fixed seed for word selection
    pub seed: Option<u64>,
    /// Word list file; the embedded dictionary is used when unset
    pub dictionary: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            teams: 2,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            points_per_attempt: DEFAULT_POINTS_PER_ATTEMPT,
            victory_pause_ms: 100,
            round_end_pause_ms: 3000,
            seed: None,
            dictionary: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Load configuration from `path` (or `motus.toml` if present) and the environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    /// Returns an error if a source cannot be read or parsed, or if the
    /// resulting settings are invalid.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`GameConfig::load`], reading `MOTUS_*` variables from `env`
    /// instead of the process environment when it is given
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("MOTUS").source(env))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings can run a game
    ///
    /// # Errors
    /// Returns `GameError::NoTeams` or `GameError::InvalidConfig`.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.teams == 0 {
            return Err(GameError::NoTeams);
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(self.log_filter()) {
            return Err(GameError::InvalidConfig(format!(
                "invalid log_level {:?}: {e}",
                self.log_level
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn victory_pause(&self) -> Duration {
        Duration::from_millis(self.victory_pause_ms)
    }

    #[must_use]
    pub const fn round_end_pause(&self) -> Duration {
        Duration::from_millis(self.round_end_pause_ms)
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`
    #[must_use]
    pub fn log_filter(&self) -> String {
        format!("motus={}", self.log_level)
    }
}
