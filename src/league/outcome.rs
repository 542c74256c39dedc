//! Decision values returned by the rule checks.

use serde::Serialize;

/// Result of a validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub error_message: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result.
    pub fn success() -> Self {
        Self {
            valid: true,
            error_message: None,
        }
    }

    /// Create a failed validation result.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            error_message: Some(reason.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Result of a state transition attempt.
///
/// `new_state` is set exactly when `allowed` is true; the caller is
/// responsible for persisting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionResult<S> {
    pub allowed: bool,
    pub new_state: Option<S>,
    pub error_message: Option<String>,
}

impl<S> TransitionResult<S> {
    pub fn allow(new_state: S) -> Self {
        Self {
            allowed: true,
            new_state: Some(new_state),
            error_message: None,
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            new_state: None,
            error_message: Some(reason.into()),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn new_state(&self) -> Option<&S> {
        self.new_state.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Convert into a `Result` carrying the new state or the rejection reason.
    pub fn into_result(self) -> std::result::Result<S, String> {
        match (self.new_state, self.error_message) {
            (Some(state), _) => Ok(state),
            (None, Some(reason)) => Err(reason),
            (None, None) => Err("Transition rejected".to_string()),
        }
    }
}
