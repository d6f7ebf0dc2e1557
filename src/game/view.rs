//! Public views of sessions
//!
//! Everything returned to a caller goes through these types, which is what
//! keeps the target word private: it only appears as `word` after a loss.

use super::board::Board;
use super::session::{GameSession, GameState, OwnerId, SessionId, SubmitOutcome};
use crate::core::{KeyboardStatus, Pattern};
use crate::error::GameError;
use serde::Serialize;

/// Reply to `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub id: SessionId,
    pub total_attempts: usize,
    pub word_length: usize,
}

/// Reply to `submit`
///
/// Serializes to exactly one of `{result}`, `{result, won: true}`,
/// `{result, finished: true, word}`, `{error}` or, for a submit of a
/// partially typed row, `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Pattern>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub won: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    /// Nothing happened: the row was not full yet
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn error(error: &GameError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self == &Self::default()
    }
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome.state {
            GameState::Active => Self {
                result: Some(outcome.pattern),
                ..Self::default()
            },
            GameState::Won => Self {
                result: Some(outcome.pattern),
                won: true,
                ..Self::default()
            },
            GameState::Lost => Self {
                result: Some(outcome.pattern),
                finished: true,
                word: outcome.revealed_word,
                ..Self::default()
            },
        }
    }
}

/// Full public snapshot of a session, for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: SessionId,
    pub dictionary_id: String,
    pub word_length: usize,
    pub total_attempts: usize,
    pub current_attempt: usize,
    pub state: GameState,
    pub finished: bool,
    pub won: bool,
    pub board: Board,
    pub keyboard: KeyboardStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revealed_word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<OwnerId>,
}

impl From<&GameSession> for SessionView {
    fn from(session: &GameSession) -> Self {
        Self {
            id: session.id(),
            dictionary_id: session.dictionary_id().to_string(),
            word_length: session.word_length(),
            total_attempts: session.total_attempts(),
            current_attempt: session.current_attempt(),
            state: session.state(),
            finished: session.is_finished(),
            won: session.is_won(),
            board: session.board().clone(),
            keyboard: session.keyboard().clone(),
            revealed_word: session.revealed_word().map(str::to_string),
            owner_id: session.owner().cloned(),
        }
    }
}
