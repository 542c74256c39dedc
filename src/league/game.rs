//! Game lifecycle.
//!
//! # State Diagram
//!
//! ```text
//! ┌──────────┐ start_draft ┌──────────┐ complete_draft ┌────────┐ finish ┌──────────┐
//! │ CREATING │────────────▶│ DRAFTING │───────────────▶│ ACTIVE │───────▶│ FINISHED │
//! └────┬─────┘             └────┬─────┘                └────────┘        └──────────┘
//!      │ cancel                 │ cancel
//!      ▼                        ▼
//! ┌───────────────────────────────┐
//! │           CANCELLED           │
//! └───────────────────────────────┘
//! ```
//!
//! The checks only decide; the caller persists the returned phase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::outcome::TransitionResult;

/// Minimum total participants (creator included) before a draft can start.
pub const MIN_PARTICIPANTS_TO_DRAFT: usize = 2;

/// High-level phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Accepting participants
    #[default]
    Creating,
    /// Draft underway
    Drafting,
    /// Season in play
    Active,
    /// Completed normally
    Finished,
    /// Abandoned before completion
    Cancelled,
}

impl GamePhase {
    pub const ALL: [GamePhase; 5] = [
        Self::Creating,
        Self::Drafting,
        Self::Active,
        Self::Finished,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Drafting => "DRAFTING",
            Self::Active => "ACTIVE",
            Self::Finished => "FINISHED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Check if game is terminal (cannot change).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }

    /// Check if new participants may still join.
    pub fn accepts_participants(&self) -> bool {
        matches!(self, Self::Creating)
    }

    /// `CREATING → DRAFTING`, once at least two participants are in.
    pub fn can_start_draft(self, total_participants: usize) -> TransitionResult<GamePhase> {
        if self != Self::Creating {
            return self.reject(format!(
                "Game must be in CREATING phase to start the draft (current: {})",
                self
            ));
        }

        if total_participants < MIN_PARTICIPANTS_TO_DRAFT {
            return self.reject(format!(
                "Game needs at least {} participants to start the draft (has {})",
                MIN_PARTICIPANTS_TO_DRAFT, total_participants
            ));
        }

        TransitionResult::allow(Self::Drafting)
    }

    /// `DRAFTING → ACTIVE`.
    pub fn can_complete_draft(self) -> TransitionResult<GamePhase> {
        match self {
            Self::Drafting => TransitionResult::allow(Self::Active),
            Self::Creating | Self::Active | Self::Finished | Self::Cancelled => self.reject(
                format!(
                    "Game must be in DRAFTING phase to complete the draft (current: {})",
                    self
                ),
            ),
        }
    }

    /// `ACTIVE → FINISHED`.
    pub fn can_finish_game(self) -> TransitionResult<GamePhase> {
        match self {
            Self::Active => TransitionResult::allow(Self::Finished),
            Self::Creating | Self::Drafting | Self::Finished | Self::Cancelled => self.reject(
                format!("Game must be in ACTIVE phase to finish (current: {})", self),
            ),
        }
    }

    /// `CREATING | DRAFTING → CANCELLED`.
    pub fn can_cancel_game(self) -> TransitionResult<GamePhase> {
        match self {
            Self::Creating | Self::Drafting => TransitionResult::allow(Self::Cancelled),
            Self::Finished => self.reject("Game is already finished"),
            Self::Cancelled => self.reject("Game is already cancelled"),
            Self::Active => self.reject(
                "Game can only be cancelled while in CREATING or DRAFTING phase (current: ACTIVE)",
            ),
        }
    }

    fn reject(self, reason: impl Into<String>) -> TransitionResult<GamePhase> {
        let reason = reason.into();
        tracing::debug!(phase = %self, %reason, "game transition rejected");
        TransitionResult::reject(reason)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GamePhase {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownStatus {
                kind: "game phase",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_start_draft() {
        let result = GamePhase::Creating.can_start_draft(2);
        assert!(result.is_allowed());
        assert_eq!(result.new_state(), Some(&GamePhase::Drafting));
    }

    #[test]
    fn test_start_draft_needs_two_participants() {
        let result = GamePhase::Creating.can_start_draft(1);
        assert!(!result.is_allowed());
        assert!(result
            .error_message()
            .unwrap()
            .contains("needs at least 2 participants"));
    }

    #[test]
    fn test_start_draft_phase_checked_first() {
        // Wrong phase wins even when the count is also too low
        let result = GamePhase::Active.can_start_draft(0);
        assert!(result.error_message().unwrap().contains("must be in CREATING"));
    }

    #[test]
    fn test_forward_path() {
        let drafting = GamePhase::Creating.can_start_draft(4).into_result().unwrap();
        let active = drafting.can_complete_draft().into_result().unwrap();
        let finished = active.can_finish_game().into_result().unwrap();
        assert_eq!(finished, GamePhase::Finished);
        assert!(finished.is_terminal());
    }

    #[test]
    fn test_out_of_order_transitions() {
        assert!(!GamePhase::Creating.can_complete_draft().is_allowed());
        assert!(!GamePhase::Drafting.can_finish_game().is_allowed());
        assert!(!GamePhase::Finished.can_finish_game().is_allowed());
    }

    #[test]
    fn test_cancel() {
        assert_eq!(
            GamePhase::Creating.can_cancel_game().new_state(),
            Some(&GamePhase::Cancelled)
        );
        assert_eq!(
            GamePhase::Drafting.can_cancel_game().new_state(),
            Some(&GamePhase::Cancelled)
        );
        assert!(!GamePhase::Active.can_cancel_game().is_allowed());

        let finished = GamePhase::Finished.can_cancel_game();
        assert!(finished.error_message().unwrap().contains("already finished"));

        let cancelled = GamePhase::Cancelled.can_cancel_game();
        assert!(cancelled.error_message().unwrap().contains("already cancelled"));
    }

    #[test]
    fn test_string_mapping() {
        assert_eq!(GamePhase::Drafting.to_string(), "DRAFTING");
        assert_eq!("active".parse::<GamePhase>().unwrap(), GamePhase::Active);
        assert!("started".parse::<GamePhase>().is_err());
        assert_eq!(
            serde_json::to_string(&GamePhase::Cancelled).unwrap(),
            "\"CANCELLED\""
        );
    }
}
