//! Game session state machine
//!
//! A session starts `Active` and ends `Won` or `Lost`. Typing operations
//! absorb bad input silently; submitting consults the dictionary and either
//! rejects the guess without touching state or consumes one attempt.

use super::board::{Board, Row};
use crate::core::{KeyboardStatus, Pattern, Word, normalize_letter};
use crate::error::GameError;
use crate::wordlists::DictionaryProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Opaque, unguessable session identifier (random UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = GameError;

    /// Anything that is not a UUID cannot name a live session
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| GameError::UnknownSession)
    }
}

/// Opaque identity supplied by an external identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Active,
    Won,
    Lost,
}

/// Result of applying one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub pattern: Pattern,
    pub state: GameState,
    /// Target word, only after a loss
    pub revealed_word: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    target: Word,
    dictionary_id: String,
    total_attempts: usize,
    current_attempt: usize,
    board: Board,
    keyboard: KeyboardStatus,
    finished: bool,
    won: bool,
    revealed_word: Option<String>,
    owner: Option<OwnerId>,
}

impl GameSession {
    /// Create an active session; `total_attempts` is clamped to at least 1
    #[must_use]
    pub fn new(
        id: SessionId,
        dictionary_id: impl Into<String>,
        target: Word,
        total_attempts: usize,
        owner: Option<OwnerId>,
    ) -> Self {
        let total_attempts = total_attempts.max(1);
        Self {
            id,
            board: Board::new(total_attempts, target.len()),
            target,
            dictionary_id: dictionary_id.into(),
            total_attempts,
            current_attempt: 0,
            keyboard: KeyboardStatus::new(),
            finished: false,
            won: false,
            revealed_word: None,
            owner,
        }
    }

    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn dictionary_id(&self) -> &str {
        &self.dictionary_id
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        self.revealed_word.as_deref()
    }

    #[must_use]
    pub const fn owner(&self) -> Option<&OwnerId> {
        self.owner.as_ref()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        match (self.finished, self.won) {
            (false, _) => GameState::Active,
            (true, true) => GameState::Won,
            (true, false) => GameState::Lost,
        }
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.finished {
            Err(GameError::SessionFinished)
        } else {
            Ok(())
        }
    }

    /// Type a letter into the current row
    ///
    /// Non-letters and typing into a full row are ignored.
    ///
    /// # Errors
    /// `GameError::SessionFinished` once the game is over.
    pub fn add_letter(&mut self, letter: char) -> Result<(), GameError> {
        self.ensure_active()?;
        if let Some(letter) = normalize_letter(letter)
            && let Some(row) = self.board.row_mut(self.current_attempt)
        {
            row.push_letter(letter);
        }
        Ok(())
    }

    /// Erase the last typed letter of the current row; no-op on an empty row
    ///
    /// # Errors
    /// `GameError::SessionFinished` once the game is over.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        if let Some(row) = self.board.row_mut(self.current_attempt) {
            row.pop_letter();
        }
        Ok(())
    }

    /// Submit whatever is typed in the current row
    ///
    /// Returns `Ok(None)` without touching anything if the row is not full.
    ///
    /// # Errors
    /// `GameError::SessionFinished` once the game is over,
    /// `GameError::InvalidWord` if the dictionary rejects the guess (the row
    /// stays as typed and no attempt is consumed).
    pub fn submit(
        &mut self,
        dictionary: &dyn DictionaryProvider,
    ) -> Result<Option<SubmitOutcome>, GameError> {
        self.ensure_active()?;
        let Some(typed) = self
            .board
            .row(self.current_attempt)
            .and_then(Row::guess)
        else {
            return Ok(None);
        };

        let guess = self.validate(&typed, dictionary)?;
        self.apply(&guess).map(Some)
    }

    /// Submit a complete guess, replacing whatever is typed in the current row
    ///
    /// # Errors
    /// Same as [`GameSession::submit`]; a guess of the wrong length or with
    /// non-letters is an `InvalidWord`.
    pub fn submit_guess(
        &mut self,
        guess: &str,
        dictionary: &dyn DictionaryProvider,
    ) -> Result<SubmitOutcome, GameError> {
        self.ensure_active()?;
        let guess = self.validate(guess, dictionary)?;
        if let Some(row) = self.board.row_mut(self.current_attempt) {
            row.fill(&guess);
        }
        self.apply(&guess)
    }

    fn validate(&self, guess: &str, dictionary: &dyn DictionaryProvider) -> Result<Word, GameError> {
        let invalid = || GameError::InvalidWord(guess.trim().to_ascii_uppercase());
        let word = Word::with_length(guess, self.word_length()).map_err(|_| invalid())?;

        if dictionary.is_valid_guess(&self.dictionary_id, &word) {
            Ok(word)
        } else {
            debug!(session_id = %self.id, guess = %word, "guess rejected by dictionary");
            Err(invalid())
        }
    }

    fn apply(&mut self, guess: &Word) -> Result<SubmitOutcome, GameError> {
        let pattern = Pattern::calculate(guess, &self.target)?;

        if let Some(row) = self.board.row_mut(self.current_attempt) {
            row.apply(&pattern);
        }
        self.keyboard.record_pattern(guess, &pattern);

        if pattern.is_perfect() {
            self.won = true;
            self.finished = true;
        } else if self.current_attempt + 1 == self.total_attempts {
            self.finished = true;
            self.revealed_word = Some(self.target.text().to_string());
        } else {
            self.current_attempt += 1;
        }

        debug!(
            session_id = %self.id,
            attempt = self.current_attempt,
            result = %pattern,
            state = ?self.state(),
            "guess applied"
        );

        Ok(SubmitOutcome {
            pattern,
            state: self.state(),
            revealed_word: self.revealed_word.clone(),
        })
    }
}
