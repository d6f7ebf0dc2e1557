//! Game service façade
//!
//! The only entry point front-ends use. Every mutation goes through
//! [`SessionStore::with_lock`], so two requests for the same session never
//! interleave while requests for different sessions run side by side.

use super::session::{GameSession, GameState, OwnerId, SessionId};
use super::store::SessionStore;
use super::view::{SessionView, StartResponse, SubmitResponse};
use crate::config::GameConfig;
use crate::core::WordError;
use crate::error::GameError;
use crate::wordlists::{DictionaryInfo, DictionaryProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct GameService {
    store: Arc<SessionStore>,
    dictionaries: Arc<dyn DictionaryProvider>,
    total_attempts: usize,
    default_dictionary: String,
}

impl GameService {
    #[must_use]
    pub fn new(
        store: Arc<SessionStore>,
        dictionaries: Arc<dyn DictionaryProvider>,
        config: &GameConfig,
    ) -> Self {
        Self {
            store,
            dictionaries,
            total_attempts: config.total_attempts.max(1),
            default_dictionary: config.default_dictionary.clone(),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    #[must_use]
    pub fn default_dictionary(&self) -> &str {
        &self.default_dictionary
    }

    /// Deal a new game from `dictionary_id` (blank means the default)
    ///
    /// # Errors
    /// `GameError::UnknownDictionary` if the dictionary does not exist or has
    /// no target words, `GameError::Word` if the dealt word does not have the
    /// dictionary's declared length.
    pub fn start(
        &self,
        dictionary_id: &str,
        owner: Option<OwnerId>,
    ) -> Result<StartResponse, GameError> {
        let dictionary_id = match dictionary_id.trim() {
            "" => self.default_dictionary.as_str(),
            id => id,
        };
        let word_length = self.dictionaries.word_length(dictionary_id)?;
        let target = self.dictionaries.pick_target_word(dictionary_id)?;
        if target.len() != word_length {
            warn!(
                dictionary = dictionary_id,
                expected = word_length,
                actual = target.len(),
                "dictionary dealt a word of the wrong length"
            );
            return Err(WordError::LengthMismatch {
                expected: word_length,
                actual: target.len(),
            }
            .into());
        }
        let total_attempts = self.total_attempts;

        let id = self.store.create(|id| {
            GameSession::new(id, dictionary_id, target, total_attempts, owner)
        });
        info!(session_id = %id, dictionary = dictionary_id, "game started");

        Ok(StartResponse {
            id,
            total_attempts,
            word_length,
        })
    }

    /// # Errors
    /// `GameError::UnknownSession` or `GameError::SessionFinished`.
    pub fn add_letter(&self, id: SessionId, letter: char) -> Result<SessionView, GameError> {
        self.store.with_lock(id, |session| {
            session.add_letter(letter)?;
            Ok(SessionView::from(&*session))
        })
    }

    /// # Errors
    /// `GameError::UnknownSession` or `GameError::SessionFinished`.
    pub fn delete_letter(&self, id: SessionId) -> Result<SessionView, GameError> {
        self.store.with_lock(id, |session| {
            session.delete_letter()?;
            Ok(SessionView::from(&*session))
        })
    }

    /// Submit a complete guess, replacing whatever was typed
    ///
    /// # Errors
    /// `GameError::UnknownSession`, `GameError::SessionFinished`, or
    /// `GameError::InvalidWord` (nothing consumed).
    pub fn submit(&self, id: SessionId, guess: &str) -> Result<SubmitResponse, GameError> {
        let outcome = self
            .store
            .with_lock(id, |session| {
                session.submit_guess(guess, self.dictionaries.as_ref())
            })
            .inspect_err(|e| log_rejection(id, e))?;

        log_outcome(id, &outcome.pattern.to_string(), outcome.state);
        Ok(outcome.into())
    }

    /// Submit whatever is typed in the current row
    ///
    /// A row that is not full yet gives [`SubmitResponse::pending`].
    ///
    /// # Errors
    /// Same as [`GameService::submit`].
    pub fn submit_row(&self, id: SessionId) -> Result<SubmitResponse, GameError> {
        let outcome = self
            .store
            .with_lock(id, |session| session.submit(self.dictionaries.as_ref()))
            .inspect_err(|e| log_rejection(id, e))?;

        Ok(match outcome {
            Some(outcome) => {
                log_outcome(id, &outcome.pattern.to_string(), outcome.state);
                outcome.into()
            }
            None => SubmitResponse::pending(),
        })
    }

    /// # Errors
    /// `GameError::UnknownSession` if the id is not live.
    pub fn view(&self, id: SessionId) -> Result<SessionView, GameError> {
        self.store.get(id).map(|session| SessionView::from(&session))
    }

    /// Drop a session before it expires
    ///
    /// # Errors
    /// `GameError::UnknownSession` if the id is not live.
    pub fn abandon(&self, id: SessionId) -> Result<(), GameError> {
        if self.store.evict(id) {
            info!(session_id = %id, "game abandoned");
            Ok(())
        } else {
            Err(GameError::UnknownSession)
        }
    }

    #[must_use]
    pub fn dictionaries(&self) -> Vec<DictionaryInfo> {
        self.dictionaries.dictionaries()
    }

    pub fn sweep_expired(&self) -> usize {
        self.store.sweep_expired()
    }
}

fn log_rejection(id: SessionId, error: &GameError) {
    match error {
        GameError::InvalidWord(word) => debug!(session_id = %id, %word, "invalid word"),
        other => warn!(session_id = %id, error = %other, "submit rejected"),
    }
}

fn log_outcome(id: SessionId, result: &str, state: GameState) {
    match state {
        GameState::Active => debug!(session_id = %id, result, "guess evaluated"),
        GameState::Won => info!(session_id = %id, result, "game won"),
        GameState::Lost => info!(session_id = %id, result, "game lost"),
    }
}
