//! Used-letter status aggregated across a session's guesses
//!
//! Statuses are ordered `Wrong < Present < Correct`, and recording only ever
//! keeps the maximum, so a letter can be elevated but never demoted.

use super::{LetterResult, Pattern, Word};
use serde::Serialize;
use std::collections::BTreeMap;

/// Best-known status of a letter on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    /// Used, but not in the target
    Wrong,
    Present,
    Correct,
}

impl From<LetterResult> for KeyStatus {
    fn from(result: LetterResult) -> Self {
        match result {
            LetterResult::Absent => Self::Wrong,
            LetterResult::Present => Self::Present,
            LetterResult::Correct => Self::Correct,
        }
    }
}

/// Per-session keyboard status map
///
/// Only letters that have appeared in a submitted guess are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyboardStatus {
    keys: BTreeMap<char, KeyStatus>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one tile's outcome
    ///
    /// Order of calls does not matter: the result is the best status ever
    /// recorded for the letter.
    pub fn record(&mut self, letter: char, result: LetterResult) {
        let incoming = KeyStatus::from(result);
        self.keys
            .entry(letter.to_ascii_uppercase())
            .and_modify(|status| *status = (*status).max(incoming))
            .or_insert(incoming);
    }

    /// Apply every tile of a submitted row
    pub fn record_pattern(&mut self, word: &Word, pattern: &Pattern) {
        for (&letter, &result) in word.letters().iter().zip(pattern.results()) {
            self.record(char::from(letter), result);
        }
    }

    #[must_use]
    pub fn status(&self, letter: char) -> Option<KeyStatus> {
        self.keys.get(&letter.to_ascii_uppercase()).copied()
    }

    /// Letters with the given status, alphabetical
    pub fn letters_with(&self, status: KeyStatus) -> impl Iterator<Item = char> + '_ {
        self.keys
            .iter()
            .filter(move |&(_, &s)| s == status)
            .map(|(&letter, _)| letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, KeyStatus)> + '_ {
        self.keys.iter().map(|(&letter, &status)| (letter, status))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
