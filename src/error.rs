//! Error types for the game engine
//!
//! [`GameError`] covers every failure a session operation can report.
//! Input-shaping problems (row not full, invalid letter) never appear here:
//! sessions absorb them as no-ops.

use crate::core::WordError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Session id not found, expired, or evicted
    #[error("unknown session")]
    UnknownSession,

    /// Mutating operation on a won or lost session
    #[error("session finished")]
    SessionFinished,

    /// Guess rejected by the dictionary; no attempt consumed
    #[error("invalid word: {0}")]
    InvalidWord(String),

    #[error("unknown dictionary: {0}")]
    UnknownDictionary(String),

    /// Two words of different lengths reached the evaluator
    #[error(transparent)]
    Word(#[from] WordError),
}

impl GameError {
    /// Whether the caller can keep playing the same session after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidWord(_))
    }
}
