//! Game creation and participant admission.
//!
//! The creator is always a participant but is tracked separately from the
//! explicit participant list, so counts here are "creator plus others".

use std::collections::HashSet;
use std::hash::Hash;

use super::game::GamePhase;
use super::outcome::ValidationResult;

/// Smallest allowed game size.
pub const MIN_PARTICIPANTS: usize = 2;

/// Largest allowed game size.
pub const MAX_PARTICIPANTS: usize = 50;

/// Check the inputs for a new game.
///
/// Rules are applied in order: name, creator, size.
pub fn validate_game_creation<Id>(
    name: Option<&str>,
    creator_id: Option<&Id>,
    max_participants: usize,
) -> ValidationResult {
    if name.map_or(true, |n| n.trim().is_empty()) {
        return reject("Game name is required");
    }

    if creator_id.is_none() {
        return reject("Creator is required");
    }

    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&max_participants) {
        return reject(format!(
            "Max participants must be between {} and {} (got {})",
            MIN_PARTICIPANTS, MAX_PARTICIPANTS, max_participants
        ));
    }

    ValidationResult::success()
}

/// Check whether `candidate_id` may join the game.
///
/// `current_total` includes the creator. Rules are applied in order:
/// phase, creator, duplicate, capacity.
pub fn can_add_participant<Id: Eq + Hash>(
    phase: GamePhase,
    current_total: usize,
    max_participants: usize,
    candidate_id: &Id,
    creator_id: &Id,
    existing_participant_ids: &HashSet<Id>,
) -> ValidationResult {
    if !phase.accepts_participants() {
        return reject(format!("Game has already started (phase: {})", phase));
    }

    if candidate_id == creator_id {
        return reject("Creator is already part of the game");
    }

    if existing_participant_ids.contains(candidate_id) {
        return reject("User is already a participant");
    }

    if current_total >= max_participants {
        return reject(format!(
            "Game is full ({}/{})",
            current_total, max_participants
        ));
    }

    ValidationResult::success()
}

/// Total participants, adding the creator unless already listed.
pub fn calculate_total_participants(
    explicit_participant_count: usize,
    creator_already_in_list: bool,
) -> usize {
    if creator_already_in_list {
        explicit_participant_count
    } else {
        explicit_participant_count + 1
    }
}

/// Open seats left in the game.
pub fn calculate_available_spots(max_participants: usize, total_participants: usize) -> usize {
    max_participants.saturating_sub(total_participants)
}

fn reject(reason: impl Into<String>) -> ValidationResult {
    let reason = reason.into();
    tracing::debug!(%reason, "participant rule rejected");
    ValidationResult::failure(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CREATOR: i64 = 1;

    fn msg(result: &ValidationResult) -> &str {
        result.error_message().unwrap_or_default()
    }

    #[test]
    fn test_game_creation_valid() {
        assert!(validate_game_creation(Some("Cup"), Some(&CREATOR), 10).is_valid());
        assert!(validate_game_creation(Some("Cup"), Some(&CREATOR), 2).is_valid());
        assert!(validate_game_creation(Some("Cup"), Some(&CREATOR), 50).is_valid());
    }

    #[test]
    fn test_game_creation_rule_order() {
        let result = validate_game_creation::<i64>(None, None, 0);
        assert!(msg(&result).contains("name"));

        let result = validate_game_creation::<i64>(Some("   "), None, 0);
        assert!(msg(&result).contains("name"));

        let result = validate_game_creation::<i64>(Some("Cup"), None, 0);
        assert!(msg(&result).contains("Creator"));

        let result = validate_game_creation(Some("Cup"), Some(&CREATOR), 1);
        assert!(msg(&result).contains("between 2 and 50"));

        let result = validate_game_creation(Some("Cup"), Some(&CREATOR), 51);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_same_limit_feeds_creation_and_admission() {
        let max_participants = MAX_PARTICIPANTS;
        assert!(validate_game_creation(Some("Cup"), Some(&CREATOR), max_participants).is_valid());

        let result = can_add_participant(
            GamePhase::Creating,
            max_participants,
            max_participants,
            &7,
            &CREATOR,
            &HashSet::new(),
        );
        assert!(msg(&result).contains("full"));
    }

    #[test]
    fn test_add_participant() {
        let existing = HashSet::from([2i64]);
        let result = can_add_participant(GamePhase::Creating, 2, 10, &3, &CREATOR, &existing);
        assert!(result.is_valid());
    }

    #[test]
    fn test_add_participant_after_start() {
        let result = can_add_participant(
            GamePhase::Drafting,
            2,
            10,
            &3,
            &CREATOR,
            &HashSet::new(),
        );
        assert!(msg(&result).contains("already started"));
    }

    #[test]
    fn test_add_participant_creator() {
        let result = can_add_participant(
            GamePhase::Creating,
            1,
            10,
            &CREATOR,
            &CREATOR,
            &HashSet::new(),
        );
        assert!(msg(&result).starts_with("Creator"));
    }

    #[test]
    fn test_add_participant_duplicate_before_full() {
        // Duplicate is reported even when the game is also full
        let existing = HashSet::from([2i64]);
        let result = can_add_participant(GamePhase::Creating, 2, 2, &2, &CREATOR, &existing);
        assert!(msg(&result).contains("already a participant"));
    }

    #[test]
    fn test_add_participant_full() {
        let existing = HashSet::from([2i64]);
        let result = can_add_participant(GamePhase::Creating, 2, 2, &3, &CREATOR, &existing);
        assert!(msg(&result).contains("full"));
    }

    #[test]
    fn test_total_participants() {
        assert_eq!(calculate_total_participants(3, false), 4);
        assert_eq!(calculate_total_participants(3, true), 3);
        assert_eq!(calculate_total_participants(0, false), 1);
    }

    #[test]
    fn test_available_spots() {
        assert_eq!(calculate_available_spots(10, 4), 6);
        assert_eq!(calculate_available_spots(4, 4), 0);
        assert_eq!(calculate_available_spots(4, 6), 0);
    }
}
