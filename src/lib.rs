//! League Engine Library
//!
//! This crate provides the workflow rules for a fantasy league: who may join
//! a game, whose turn it is in the draft, which phase and status changes are
//! legal, what a roster may contain, and whether a trade can go ahead.
//!
//! # Overview
//!
//! - **Game Lifecycle** - `CREATING → DRAFTING → ACTIVE → FINISHED`, with
//!   cancellation before the season starts.
//!
//! - **Draft** - Round/pick arithmetic for snake or straight order, plus the
//!   draft run state machine.
//!
//! - **Participants & Rosters** - Admission, capacity and position checks.
//!
//! - **Trades** - Proposal validation, league gating and the proposal state
//!   machine.
//!
//! - **Invitation Codes** - Seedable generation and format checks.
//!
//! # Design Principles
//!
//! 1. **Decisions, not effects** - Every check returns a value; the caller
//!    persists whatever state it allows.
//!
//! 2. **Rejections are values** - Broken business rules come back as
//!    `ValidationResult`/`TransitionResult`. Only bad arguments are `Err`.
//!
//! 3. **No I/O** - No database, network or clock access. "Now" is passed in.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use league_engine::league::{
//!     draft, participant, DraftStatus, GamePhase, InvitationCodeGenerator,
//! };
//!
//! let creator = 1u64;
//! let joined: HashSet<u64> = HashSet::new();
//!
//! assert!(participant::validate_game_creation(Some("Cup"), Some(&creator), 10).is_valid());
//! assert!(participant::can_add_participant(GamePhase::Creating, 1, 10, &2, &creator, &joined).is_valid());
//!
//! let phase = GamePhase::Creating.can_start_draft(2).into_result().unwrap();
//! assert_eq!(phase, GamePhase::Drafting);
//!
//! let rounds = draft::calculate_total_rounds(2, 3).unwrap();
//! let next = draft::next_pick(1, 2, 2).unwrap();
//! assert_eq!(draft::participant_for_position(next, 2, true).unwrap(), 1);
//! assert!(!draft::is_draft_complete(next.round(), rounds));
//!
//! assert!(!DraftStatus::Active.can_finish(false).is_allowed());
//!
//! let mut codes = InvitationCodeGenerator::seeded(7, 8).unwrap();
//! assert!(InvitationCodeGenerator::is_valid_format(&codes.generate()));
//! ```

pub mod league;

// Re-export everything from league module at crate root
pub use league::*;
