//! Draft run state machine.
//!
//! # State Diagram
//!
//! ```text
//! ┌─────────┐ start ┌────────┐ finish (all picks made) ┌──────────┐
//! │ PENDING │──────▶│ ACTIVE │────────────────────────▶│ FINISHED │
//! └─────────┘       └───┬────┘                         └──────────┘
//!                 pause │  ▲ resume        ▲
//!                       ▼  │               │ finish
//!                   ┌────────┐     ┌─────────────┐
//!                   │ PAUSED │◀────│ IN_PROGRESS │
//!                   └────────┘pause└─────────────┘
//!
//! Any non-terminal state ──cancel──▶ CANCELLED
//! ```
//!
//! `IN_PROGRESS` is accepted as an alias of `ACTIVE` for records written by
//! older services; nothing here transitions into it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::outcome::TransitionResult;

/// Run state of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftStatus {
    /// Created, waiting to start
    #[default]
    Pending,
    /// Accepting picks
    Active,
    /// Accepting picks (legacy name)
    InProgress,
    /// Temporarily halted
    Paused,
    /// All picks made
    Finished,
    /// Abandoned
    Cancelled,
}

impl DraftStatus {
    pub const ALL: [DraftStatus; 6] = [
        Self::Pending,
        Self::Active,
        Self::InProgress,
        Self::Paused,
        Self::Finished,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::InProgress => "IN_PROGRESS",
            Self::Paused => "PAUSED",
            Self::Finished => "FINISHED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Check if draft is terminal (cannot change).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }

    /// Check if picks may be submitted.
    pub fn allows_picks(&self) -> bool {
        matches!(self, Self::Active | Self::InProgress)
    }

    pub fn can_start(self) -> TransitionResult<DraftStatus> {
        match self {
            Self::Pending => TransitionResult::allow(Self::Active),
            Self::Active | Self::InProgress | Self::Paused | Self::Finished | Self::Cancelled => {
                self.reject(format!(
                    "Draft must be PENDING to start (current: {})",
                    self
                ))
            }
        }
    }

    pub fn can_pause(self) -> TransitionResult<DraftStatus> {
        match self {
            Self::Active | Self::InProgress => TransitionResult::allow(Self::Paused),
            Self::Pending | Self::Paused | Self::Finished | Self::Cancelled => self.reject(
                format!("Draft must be ACTIVE to pause (current: {})", self),
            ),
        }
    }

    pub fn can_resume(self) -> TransitionResult<DraftStatus> {
        match self {
            Self::Paused => TransitionResult::allow(Self::Active),
            Self::Pending | Self::Active | Self::InProgress | Self::Finished | Self::Cancelled => {
                self.reject(format!(
                    "Draft must be PAUSED to resume (current: {})",
                    self
                ))
            }
        }
    }

    /// Outstanding picks are reported before a wrong status.
    pub fn can_finish(self, all_picks_complete: bool) -> TransitionResult<DraftStatus> {
        if !all_picks_complete {
            return self.reject("Cannot finish draft: picks remaining");
        }

        match self {
            Self::Active | Self::InProgress => TransitionResult::allow(Self::Finished),
            Self::Pending | Self::Paused | Self::Finished | Self::Cancelled => self.reject(
                format!("Draft must be ACTIVE to finish (current: {})", self),
            ),
        }
    }

    pub fn can_cancel(self) -> TransitionResult<DraftStatus> {
        match self {
            Self::Pending | Self::Active | Self::InProgress | Self::Paused => {
                TransitionResult::allow(Self::Cancelled)
            }
            Self::Finished => self.reject("Draft is already finished"),
            Self::Cancelled => self.reject("Draft is already cancelled"),
        }
    }

    fn reject(self, reason: impl Into<String>) -> TransitionResult<DraftStatus> {
        let reason = reason.into();
        tracing::debug!(status = %self, %reason, "draft transition rejected");
        TransitionResult::reject(reason)
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownStatus {
                kind: "draft status",
                value: s.to_string(),
            })
    }
}
