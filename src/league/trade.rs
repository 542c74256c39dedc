//! Trade proposals.
//!
//! Covers proposal validation, league-level trade gating and the proposal
//! state machine:
//!
//! ```text
//!              ┌──▶ ACCEPTED
//!              ├──▶ REJECTED
//! PENDING ─────┼──▶ CANCELLED
//!              └──▶ COUNTERED
//! ```
//!
//! A countered proposal is not terminal: the counter-offer is a new
//! proposal that starts again at `PENDING`.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::outcome::{TransitionResult, ValidationResult};

/// Status of a trade proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Awaiting a response
    #[default]
    Pending,
    Accepted,
    Rejected,
    /// Withdrawn by the proposer
    Cancelled,
    /// Answered with a counter-offer
    Countered,
}

impl TradeStatus {
    pub const ALL: [TradeStatus; 5] = [
        Self::Pending,
        Self::Accepted,
        Self::Rejected,
        Self::Cancelled,
        Self::Countered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Cancelled => "CANCELLED",
            Self::Countered => "COUNTERED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Accepted | Self::Rejected | Self::Cancelled => true,
            Self::Pending | Self::Countered => false,
        }
    }

    pub fn can_accept(self) -> TransitionResult<TradeStatus> {
        self.from_pending(Self::Accepted, "accept")
    }

    pub fn can_reject(self) -> TransitionResult<TradeStatus> {
        self.from_pending(Self::Rejected, "reject")
    }

    pub fn can_cancel(self) -> TransitionResult<TradeStatus> {
        self.from_pending(Self::Cancelled, "cancel")
    }

    pub fn can_counter(self) -> TransitionResult<TradeStatus> {
        self.from_pending(Self::Countered, "counter")
    }

    fn from_pending(self, target: TradeStatus, action: &str) -> TransitionResult<TradeStatus> {
        match self {
            Self::Pending => TransitionResult::allow(target),
            Self::Accepted | Self::Rejected | Self::Cancelled | Self::Countered => {
                let reason = format!("Trade must be PENDING to {} (current: {})", action, self);
                tracing::debug!(status = %self, %reason, "trade transition rejected");
                TransitionResult::reject(reason)
            }
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownStatus {
                kind: "trade status",
                value: s.to_string(),
            })
    }
}

/// Check a proposal against both rosters.
///
/// Rules are applied in order: teams present, teams differ, offer non-empty,
/// request non-empty, offer owned by source, request owned by target,
/// offer and request disjoint.
pub fn validate_trade_proposal<TeamId, PlayerId>(
    from_team_id: Option<&TeamId>,
    to_team_id: Option<&TeamId>,
    offered_player_ids: &HashSet<PlayerId>,
    requested_player_ids: &HashSet<PlayerId>,
    source_roster_ids: &HashSet<PlayerId>,
    target_roster_ids: &HashSet<PlayerId>,
) -> ValidationResult
where
    TeamId: Eq,
    PlayerId: Eq + Hash,
{
    let (Some(from), Some(to)) = (from_team_id, to_team_id) else {
        return reject("Both teams must be specified");
    };

    if from == to {
        return reject("Cannot trade with the same team");
    }

    if offered_player_ids.is_empty() {
        return reject("Trade must offer at least one player");
    }

    if requested_player_ids.is_empty() {
        return reject("Trade must request at least one player");
    }

    if !offered_player_ids.is_subset(source_roster_ids) {
        return reject("Offered players must belong to the source team");
    }

    if !requested_player_ids.is_subset(target_roster_ids) {
        return reject("Requested players must belong to the target team");
    }

    if !offered_player_ids.is_disjoint(requested_player_ids) {
        return reject("A player cannot be both offered and requested");
    }

    ValidationResult::success()
}

/// Check league-level trade gating at `now`.
///
/// Rules are applied in order: trading enabled, deadline, trade limit.
pub fn can_trade(
    trading_enabled: bool,
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    current_trade_count: u32,
    max_trades: u32,
) -> ValidationResult {
    if !trading_enabled {
        return reject("Trading is not enabled for this game");
    }

    if let Some(deadline) = deadline {
        if now > deadline {
            return reject(format!("Trade deadline passed at {}", deadline.to_rfc3339()));
        }
    }

    if current_trade_count >= max_trades {
        return reject(format!(
            "Trade limit reached ({}/{})",
            current_trade_count, max_trades
        ));
    }

    ValidationResult::success()
}

fn reject(reason: impl Into<String>) -> ValidationResult {
    let reason = reason.into();
    tracing::debug!(%reason, "trade rule rejected");
    ValidationResult::failure(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    const TEAM_A: i64 = 1;
    const TEAM_B: i64 = 2;

    fn ids(values: &[u32]) -> HashSet<u32> {
        values.iter().copied().collect()
    }

    fn msg(result: &ValidationResult) -> &str {
        result.error_message().unwrap_or_default()
    }

    #[test]
    fn test_valid_proposal() {
        let result = validate_trade_proposal(
            Some(&TEAM_A),
            Some(&TEAM_B),
            &ids(&[1]),
            &ids(&[20, 21]),
            &ids(&[1, 2, 3]),
            &ids(&[20, 21, 22]),
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_proposal_rule_order() {
        let empty = ids(&[]);
        let source = ids(&[1, 2]);
        let target = ids(&[20]);

        let result =
            validate_trade_proposal(None, Some(&TEAM_B), &empty, &empty, &source, &target);
        assert!(msg(&result).contains("specified"));

        let result =
            validate_trade_proposal(Some(&TEAM_A), Some(&TEAM_A), &empty, &empty, &source, &target);
        assert!(msg(&result).contains("same team"));

        let result =
            validate_trade_proposal(Some(&TEAM_A), Some(&TEAM_B), &empty, &empty, &source, &target);
        assert!(msg(&result).contains("offer"));

        let result = validate_trade_proposal(
            Some(&TEAM_A),
            Some(&TEAM_B),
            &ids(&[1]),
            &empty,
            &source,
            &target,
        );
        assert!(msg(&result).contains("request"));

        let result = validate_trade_proposal(
            Some(&TEAM_A),
            Some(&TEAM_B),
            &ids(&[9]),
            &ids(&[20]),
            &source,
            &target,
        );
        assert!(msg(&result).contains("source team"));

        let result = validate_trade_proposal(
            Some(&TEAM_A),
            Some(&TEAM_B),
            &ids(&[1]),
            &ids(&[2]),
            &source,
            &target,
        );
        assert!(msg(&result).contains("target team"));
    }

    #[test]
    fn test_proposal_overlap() {
        let shared = ids(&[5]);
        let result =
            validate_trade_proposal(Some(&TEAM_A), Some(&TEAM_B), &shared, &shared, &shared, &shared);
        assert!(msg(&result).contains("both offered and requested"));
    }

    #[test]
    fn test_can_trade() {
        let now = Utc::now();
        assert!(can_trade(true, None, now, 0, 3).is_valid());
        assert!(can_trade(true, Some(now + Duration::days(1)), now, 2, 3).is_valid());
        // The deadline instant itself is still open
        assert!(can_trade(true, Some(now), now, 0, 3).is_valid());
    }

    #[test]
    fn test_can_trade_rules() {
        let now = Utc::now();
        let past = now - Duration::hours(1);

        let result = can_trade(false, Some(past), now, 5, 3);
        assert!(msg(&result).contains("not enabled"));

        let result = can_trade(true, Some(past), now, 5, 3);
        assert!(msg(&result).contains("deadline"));

        let result = can_trade(true, None, now, 3, 3);
        assert!(msg(&result).contains("limit"));
    }

    #[test]
    fn test_transitions_from_pending() {
        assert_eq!(
            TradeStatus::Pending.can_accept().new_state(),
            Some(&TradeStatus::Accepted)
        );
        assert_eq!(
            TradeStatus::Pending.can_reject().new_state(),
            Some(&TradeStatus::Rejected)
        );
        assert_eq!(
            TradeStatus::Pending.can_cancel().new_state(),
            Some(&TradeStatus::Cancelled)
        );
        assert_eq!(
            TradeStatus::Pending.can_counter().new_state(),
            Some(&TradeStatus::Countered)
        );
    }

    #[test]
    fn test_transitions_require_pending() {
        for status in TradeStatus::ALL
            .into_iter()
            .filter(|s| *s != TradeStatus::Pending)
        {
            for result in [
                status.can_accept(),
                status.can_reject(),
                status.can_cancel(),
                status.can_counter(),
            ] {
                assert!(!result.is_allowed());
                assert!(result.error_message().unwrap().contains("PENDING"));
            }
        }
    }

    #[test]
    fn test_terminal() {
        assert!(TradeStatus::Accepted.is_terminal());
        assert!(TradeStatus::Rejected.is_terminal());
        assert!(TradeStatus::Cancelled.is_terminal());
        assert!(!TradeStatus::Pending.is_terminal());
        assert!(!TradeStatus::Countered.is_terminal());
    }

    #[test]
    fn test_string_mapping() {
        assert_eq!("Countered".parse::<TradeStatus>().unwrap(), TradeStatus::Countered);
        assert!("open".parse::<TradeStatus>().is_err());
    }
}
