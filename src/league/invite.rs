//! Invitation codes for joining private games.
//!
//! The generator draws from an injected [`Rng`], so tests can seed it and get
//! a reproducible sequence. Codes are not checked for uniqueness here; the
//! caller retries on a persistence conflict.
//!
//! `generate` takes `&mut self`. To share one generator between threads, wrap
//! it in a `Mutex` or give each caller its own instance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::{EngineError, Result};

/// Characters a code is drawn from.
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DEFAULT_CODE_LENGTH: usize = 8;
pub const MIN_CODE_LENGTH: usize = 4;
pub const MAX_CODE_LENGTH: usize = 20;

/// Generates uppercase alphanumeric join codes.
#[derive(Debug, Clone)]
pub struct InvitationCodeGenerator<R = StdRng> {
    rng: R,
    length: usize,
}

impl<R: Rng> InvitationCodeGenerator<R> {
    /// Create a generator producing codes of `length` characters.
    pub fn new(rng: R, length: usize) -> Result<Self> {
        if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
            tracing::warn!(length, "rejected invitation code length");
            return Err(EngineError::InvalidCodeLength {
                length,
                min: MIN_CODE_LENGTH,
                max: MAX_CODE_LENGTH,
            });
        }
        Ok(Self { rng, length })
    }

    pub fn with_default_length(rng: R) -> Self {
        Self {
            rng,
            length: DEFAULT_CODE_LENGTH,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Draw a new code.
    pub fn generate(&mut self) -> String {
        (0..self.length)
            .map(|_| {
                let idx = self.rng.random_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect()
    }
}

impl InvitationCodeGenerator<StdRng> {
    /// Deterministic generator, mainly for tests and replays.
    pub fn seeded(seed: u64, length: usize) -> Result<Self> {
        Self::new(StdRng::seed_from_u64(seed), length)
    }

    /// Generator backed by OS entropy.
    pub fn from_os_rng(length: usize) -> Result<Self> {
        Self::new(StdRng::from_os_rng(), length)
    }

    /// See [`is_valid_format`].
    pub fn is_valid_format(code: &str) -> bool {
        is_valid_format(code)
    }
}

/// Structural check only; says nothing about whether the code exists.
pub fn is_valid_format(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Trim and uppercase a code typed by a user.
pub fn normalize_code(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}
