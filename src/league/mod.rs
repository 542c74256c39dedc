//! League workflow rules.
//!
//! This module provides the decision components:
//!
//! - `game` - Game phase state machine
//! - `draft` - Draft turn arithmetic (snake or straight order)
//! - `draft_status` - Draft run state machine
//! - `participant` - Game creation and admission
//! - `roster` - Roster add/remove and position rules
//! - `trade` - Trade proposals, gating and state machine
//! - `invite` - Invitation code generation and format checks
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Orchestrator (caller)                         │
//! │   load snapshot ──▶ ask a component ──▶ persist new state        │
//! └───────┬──────────────────┬──────────────────────┬────────────────┘
//!         │                  │                      │
//!         ▼                  ▼                      ▼
//! ┌───────────────┐  ┌───────────────┐  ┌──────────────────────────┐
//! │ GamePhase     │  │ draft::*      │  │ participant / roster /   │
//! │ DraftStatus   │  │ PickPosition  │  │ trade validators         │
//! │ TradeStatus   │  │               │  │                          │
//! └───────────────┘  └───────────────┘  └──────────────────────────┘
//!         │                  │                      │
//!         └──────────────────┴──────────┬───────────┘
//!                                       ▼
//!                     ValidationResult / TransitionResult
//! ```
//!
//! Components never call each other. [`LeagueRules`] only binds the
//! policy values of a [`LeagueConfig`] to the free functions.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;

pub mod config;
pub mod draft;
pub mod draft_status;
pub mod error;
pub mod game;
pub mod invite;
pub mod outcome;
pub mod participant;
pub mod roster;
pub mod trade;


// Re-export commonly used types
pub use config::LeagueConfig;
pub use draft::{PickPosition, DEFAULT_PLAYERS_PER_TEAM};
pub use draft_status::DraftStatus;
pub use error::{EngineError, Result};
pub use game::{GamePhase, MIN_PARTICIPANTS_TO_DRAFT};
pub use invite::{InvitationCodeGenerator, CODE_ALPHABET, DEFAULT_CODE_LENGTH};
pub use outcome::{TransitionResult, ValidationResult};
pub use participant::{MAX_PARTICIPANTS, MIN_PARTICIPANTS};
pub use trade::TradeStatus;

/// Rule checks bound to one league's configuration.
///
/// This is an optional convenience wrapper. The component functions can
/// be called directly with explicit policy values.
#[derive(Debug, Clone, Default)]
pub struct LeagueRules {
    config: LeagueConfig,
}

impl LeagueRules {
    /// Bind a validated config.
    pub fn new(config: LeagueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    /// Draft rounds for `participant_count` teams.
    pub fn total_rounds(&self, participant_count: u32) -> Result<u32> {
        draft::calculate_total_rounds(participant_count, self.config.players_per_team)
    }

    /// Seat index on the clock, using the configured draft order.
    pub fn participant_for_pick(
        &self,
        pick: u32,
        round: u32,
        participant_count: u32,
    ) -> Result<usize> {
        draft::participant_for_pick(pick, round, participant_count, self.config.snake_draft)
    }

    pub fn can_add_player<Id: Eq + Hash>(
        &self,
        active_player_ids: &HashSet<Id>,
        candidate_player_id: Option<&Id>,
        occupied_positions: &HashSet<i32>,
        requested_position: i32,
    ) -> ValidationResult {
        roster::can_add_player(
            active_player_ids,
            candidate_player_id,
            occupied_positions,
            requested_position,
            self.config.max_roster_size,
        )
    }

    pub fn can_remove_player<Id: Eq + Hash>(
        &self,
        active_player_ids: &HashSet<Id>,
        player_id: Option<&Id>,
    ) -> ValidationResult {
        roster::can_remove_player(active_player_ids, player_id, self.config.min_roster_size)
    }

    /// Trade gating at `now` for a team with `current_trade_count` trades.
    pub fn can_trade(&self, current_trade_count: u32, now: DateTime<Utc>) -> ValidationResult {
        trade::can_trade(
            self.config.trading_enabled,
            self.config.trade_deadline,
            now,
            current_trade_count,
            self.config.max_trades,
        )
    }

    /// Fresh OS-seeded code generator with the configured length.
    pub fn code_generator(&self) -> Result<InvitationCodeGenerator<StdRng>> {
        InvitationCodeGenerator::from_os_rng(self.config.code_length)
    }
}
