//! Argument errors.
//!
//! These are raised when a caller violates a precondition (zero participants,
//! an out-of-range code length). Business-rule rejections are never errors;
//! they come back as [`ValidationResult`](super::ValidationResult) or
//! [`TransitionResult`](super::TransitionResult).

use thiserror::Error;

/// Result alias for engine operations that can fail on bad arguments.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Invalid-argument failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invitation code length outside the supported range
    #[error("Invitation code length must be between {min} and {max}, got {length}")]
    InvalidCodeLength { length: usize, min: usize, max: usize },

    /// Participant count must be at least one
    #[error("Participant count must be positive, got {0}")]
    InvalidParticipantCount(u32),

    /// Round and pick are both 1-based
    #[error("Round and pick must be at least 1, got round {round} pick {pick}")]
    InvalidPickPosition { round: u32, pick: u32 },

    /// Advancing past the last representable round
    #[error("Round {0} is the last representable round")]
    RoundOverflow(u32),

    /// Pick number beyond the number of participants
    #[error("Pick {pick} is outside 1..={participant_count}")]
    PickOutOfRange { pick: u32, participant_count: u32 },

    /// Status string that does not name a known state
    #[error("Unknown {kind} '{value}'")]
    UnknownStatus { kind: &'static str, value: String },

    /// Config values that cannot work together
    #[error("Invalid league config: {0}")]
    InvalidConfig(String),

    /// Config document could not be parsed
    #[error("Failed to parse league config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
