//! Roster composition rules.
//!
//! Only active slots are considered. Soft-removed (historical) slots are
//! filtered out by the caller before any check here.
//!
//! Positions are 1-based and must be unique among active slots, but need
//! not be contiguous.

use std::collections::HashSet;
use std::hash::Hash;

use super::outcome::ValidationResult;

/// Check whether `candidate_player_id` may join the roster at `requested_position`.
///
/// Rules are applied in order: missing id, duplicate player, capacity,
/// position range, position taken.
pub fn can_add_player<Id: Eq + Hash>(
    active_player_ids: &HashSet<Id>,
    candidate_player_id: Option<&Id>,
    occupied_positions: &HashSet<i32>,
    requested_position: i32,
    max_roster_size: usize,
) -> ValidationResult {
    let Some(candidate) = candidate_player_id else {
        return reject("Player must be specified");
    };

    if active_player_ids.contains(candidate) {
        return reject("Player is already on the team");
    }

    if active_player_ids.len() >= max_roster_size {
        return reject(format!(
            "Team is full ({}/{})",
            active_player_ids.len(),
            max_roster_size
        ));
    }

    if !is_valid_position(requested_position, active_player_ids.len()) {
        return reject(format!(
            "Position {} is out of range (1..={})",
            requested_position,
            active_player_ids.len() + 1
        ));
    }

    if occupied_positions.contains(&requested_position) {
        return reject(format!("Position {} is already taken", requested_position));
    }

    ValidationResult::success()
}

/// Check that every position is set, positive and unique.
pub fn validate_unique_positions(positions: &[Option<i32>]) -> ValidationResult {
    let mut seen = HashSet::with_capacity(positions.len());

    for position in positions {
        match position {
            Some(p) if *p > 0 => {
                if !seen.insert(*p) {
                    return reject(format!("Duplicate position {}", p));
                }
            }
            _ => return reject("Positions must be positive"),
        }
    }

    ValidationResult::success()
}

/// Slot after the highest occupied one, or 1 for an empty roster.
pub fn next_available_position(occupied_positions: &HashSet<i32>) -> i32 {
    occupied_positions
        .iter()
        .max()
        .map_or(1, |highest| highest + 1)
}

/// Check whether `player_id` may leave the roster.
///
/// Removal is refused when the remaining roster would be at or below
/// `minimum_roster_size`.
pub fn can_remove_player<Id: Eq + Hash>(
    active_player_ids: &HashSet<Id>,
    player_id: Option<&Id>,
    minimum_roster_size: usize,
) -> ValidationResult {
    let Some(player) = player_id else {
        return reject("Player must be specified");
    };

    if !active_player_ids.contains(player) {
        return reject("Player is not on the team");
    }

    let remaining = active_player_ids.len() - 1;
    if remaining <= minimum_roster_size {
        return reject(format!(
            "Cannot remove player: roster would drop to the minimum of {}",
            minimum_roster_size
        ));
    }

    ValidationResult::success()
}

/// A position may fill any existing slot or the next new one.
pub fn is_valid_position(position: i32, current_roster_size: usize) -> bool {
    position >= 1 && (position as i64) <= current_roster_size as i64 + 1
}

fn reject(reason: impl Into<String>) -> ValidationResult {
    let reason = reason.into();
    tracing::debug!(%reason, "roster rule rejected");
    ValidationResult::failure(reason)
}
