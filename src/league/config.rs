//! League policy configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::DEFAULT_PLAYERS_PER_TEAM;
use super::error::{EngineError, Result};
use super::invite::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH};

/// Policy values the rule checks are parameterised by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Players each team drafts
    #[serde(default = "default_players_per_team")]
    pub players_per_team: u32,

    /// Upper bound on active roster slots
    #[serde(default = "default_max_roster_size")]
    pub max_roster_size: usize,

    /// Removal floor for active roster slots
    #[serde(default)]
    pub min_roster_size: usize,

    /// Reverse pick order every even round
    #[serde(default = "default_true")]
    pub snake_draft: bool,

    /// Length of generated invitation codes
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    #[serde(default = "default_true")]
    pub trading_enabled: bool,

    /// Completed trades allowed per team
    #[serde(default = "default_max_trades")]
    pub max_trades: u32,

    /// No trades after this instant
    #[serde(default)]
    pub trade_deadline: Option<DateTime<Utc>>,
}

fn default_players_per_team() -> u32 {
    DEFAULT_PLAYERS_PER_TEAM
}

fn default_max_roster_size() -> usize {
    15
}

fn default_true() -> bool {
    true
}

fn default_code_length() -> usize {
    DEFAULT_CODE_LENGTH
}

fn default_max_trades() -> u32 {
    10
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            players_per_team: default_players_per_team(),
            max_roster_size: default_max_roster_size(),
            min_roster_size: 0,
            snake_draft: true,
            code_length: default_code_length(),
            trading_enabled: true,
            max_trades: default_max_trades(),
            trade_deadline: None,
        }
    }
}

impl LeagueConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations no game could run under.
    pub fn validate(&self) -> Result<()> {
        if self.players_per_team == 0 {
            return Err(invalid("players_per_team must be at least 1"));
        }

        if self.min_roster_size >= self.max_roster_size {
            return Err(invalid(format!(
                "min_roster_size ({}) must be below max_roster_size ({})",
                self.min_roster_size, self.max_roster_size
            )));
        }

        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&self.code_length) {
            return Err(invalid(format!(
                "code_length must be between {} and {}",
                MIN_CODE_LENGTH, MAX_CODE_LENGTH
            )));
        }

        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> EngineError {
    let reason = reason.into();
    tracing::warn!(%reason, "invalid league config");
    EngineError::InvalidConfig(reason)
}
