//! Draft turn arithmetic.
//!
//! Rounds and picks are 1-based. Participants are addressed by their
//! 0-based seat index in draft order. A draft with `n` participants and
//! `r` rounds is complete once the position reaches round `r + 1`.
//!
//! In a snake draft the order reverses every even round:
//!
//! ```text
//! round 1:  0 → 1 → 2 → 3
//! round 2:  3 → 2 → 1 → 0
//! round 3:  0 → 1 → 2 → 3
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Roster spots filled per team when no policy overrides it.
pub const DEFAULT_PLAYERS_PER_TEAM: u32 = 3;

/// A round/pick pair, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickPosition {
    round: u32,
    pick: u32,
}

impl PickPosition {
    pub fn new(round: u32, pick: u32) -> Result<Self> {
        if round < 1 || pick < 1 {
            tracing::warn!(round, pick, "rejected pick position");
            return Err(EngineError::InvalidPickPosition { round, pick });
        }
        Ok(Self { round, pick })
    }

    /// Round 1, pick 1.
    pub fn first() -> Self {
        Self { round: 1, pick: 1 }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn pick(&self) -> u32 {
        self.pick
    }

    /// Position after this one.
    pub fn next(&self, participant_count: u32) -> Result<Self> {
        next_pick(self.round, self.pick, participant_count)
    }

    /// Absolute 1-based pick number across all rounds.
    pub fn overall_pick(&self, participant_count: u32) -> u64 {
        u64::from(self.round - 1) * u64::from(participant_count) + u64::from(self.pick)
    }

    pub fn is_complete(&self, total_rounds: u32) -> bool {
        is_draft_complete(self.round, total_rounds)
    }
}

/// Number of draft rounds for a game.
///
/// Kept as `ceil(participants * players_per_team / participants)`; with whole
/// numbers this always equals `players_per_team`.
pub fn calculate_total_rounds(participant_count: u32, players_per_team: u32) -> Result<u32> {
    ensure_participants(participant_count)?;

    let slots = u64::from(participant_count) * u64::from(players_per_team);
    let rounds = slots.div_ceil(u64::from(participant_count));
    // rounds <= players_per_team, so it always fits back into u32
    Ok(rounds as u32)
}

/// [`calculate_total_rounds`] with [`DEFAULT_PLAYERS_PER_TEAM`].
pub fn calculate_default_total_rounds(participant_count: u32) -> Result<u32> {
    calculate_total_rounds(participant_count, DEFAULT_PLAYERS_PER_TEAM)
}

/// Advance one pick, wrapping to the next round after the last participant.
pub fn next_pick(round: u32, pick: u32, participant_count: u32) -> Result<PickPosition> {
    ensure_participants(participant_count)?;
    let current = PickPosition::new(round, pick)?;

    if current.pick >= participant_count {
        let Some(round) = current.round.checked_add(1) else {
            tracing::warn!(round = current.round, "draft round counter exhausted");
            return Err(EngineError::RoundOverflow(current.round));
        };
        Ok(PickPosition { round, pick: 1 })
    } else {
        Ok(PickPosition {
            round: current.round,
            pick: current.pick + 1,
        })
    }
}

pub fn is_draft_complete(round: u32, total_rounds: u32) -> bool {
    round > total_rounds
}

/// Picks left in the draft, counting the current one.
pub fn remaining_picks(round: u32, pick: u32, total_rounds: u32, participant_count: u32) -> u64 {
    if is_draft_complete(round, total_rounds) {
        return 0;
    }

    // u32 * u32 fits in u64 but not in i64; i128 keeps the subtraction signed
    let n = i128::from(participant_count);
    let total = i128::from(total_rounds) * n;
    let made = (i128::from(round) - 1) * n + i128::from(pick);

    (total - made + 1).max(0) as u64
}

/// Seat index (0-based) that owns `pick` in `round`.
pub fn participant_for_pick(
    pick: u32,
    round: u32,
    participant_count: u32,
    snake: bool,
) -> Result<usize> {
    if pick < 1 || pick > participant_count {
        tracing::warn!(pick, participant_count, "pick outside participant range");
        return Err(EngineError::PickOutOfRange {
            pick,
            participant_count,
        });
    }
    if round < 1 {
        tracing::warn!(round, pick, "round must be 1-based");
        return Err(EngineError::InvalidPickPosition { round, pick });
    }

    let index = if snake && round % 2 == 0 {
        participant_count - pick
    } else {
        pick - 1
    };

    Ok(index as usize)
}

/// [`participant_for_pick`] for a [`PickPosition`].
pub fn participant_for_position(
    position: PickPosition,
    participant_count: u32,
    snake: bool,
) -> Result<usize> {
    participant_for_pick(position.pick, position.round, participant_count, snake)
}

fn ensure_participants(participant_count: u32) -> Result<()> {
    if participant_count == 0 {
        tracing::warn!("draft arithmetic called with zero participants");
        return Err(EngineError::InvalidParticipantCount(participant_count));
    }
    Ok(())
}
