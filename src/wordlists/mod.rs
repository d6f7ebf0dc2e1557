//! Dictionaries
//!
//! The game engine never reads word lists directly; it asks a
//! [`DictionaryProvider`] for target words and guess validity. [`Catalog`] is
//! the provider used by the binary, backed by word lists embedded at build
//! time plus any loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{EN_US_5_ALLOWED, EN_US_5_ANSWERS, NERDY_ALLOWED, NERDY_ANSWERS};

use crate::core::{Word, WordError};
use crate::error::GameError;
use loader::words_from_slice;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::warn;

/// Id of the dictionary used when none is requested
pub const DEFAULT_DICTIONARY: &str = "en-us-5";

/// Source of target words and guess validity, keyed by dictionary id
pub trait DictionaryProvider: Send + Sync {
    /// Length of every word in the dictionary
    ///
    /// # Errors
    /// `GameError::UnknownDictionary` if the id is not known.
    fn word_length(&self, dictionary_id: &str) -> Result<usize, GameError>;

    /// Pick a target word for a new session
    ///
    /// # Errors
    /// `GameError::UnknownDictionary` if the id is not known.
    fn pick_target_word(&self, dictionary_id: &str) -> Result<Word, GameError>;

    /// Whether `word` is an acceptable guess; unknown dictionaries accept nothing
    fn is_valid_guess(&self, dictionary_id: &str, word: &Word) -> bool;

    /// Metadata for every dictionary, for menus and listings
    fn dictionaries(&self) -> Vec<DictionaryInfo>;
}

/// Public description of a dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub word_length: usize,
    pub word_count: usize,
}

/// One dictionary: target words plus the wider set of accepted guesses
#[derive(Debug, Clone)]
pub struct WordList {
    id: String,
    name: String,
    description: String,
    word_length: usize,
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl WordList {
    /// Build a word list; every answer is also an allowed guess
    ///
    /// # Errors
    /// `WordError::Empty` if there are no answers, `WordError::LengthMismatch`
    /// if any word differs in length from the first answer.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        answers: Vec<Word>,
        extra_allowed: Vec<Word>,
    ) -> Result<Self, WordError> {
        let word_length = answers.first().ok_or(WordError::Empty)?.len();

        if let Some(bad) = answers
            .iter()
            .chain(&extra_allowed)
            .find(|w| w.len() != word_length)
        {
            return Err(WordError::LengthMismatch {
                expected: word_length,
                actual: bad.len(),
            });
        }

        let allowed = answers.iter().chain(&extra_allowed).cloned().collect();

        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            word_length,
            answers,
            allowed,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words that can be dealt as targets
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    #[must_use]
    pub fn info(&self) -> DictionaryInfo {
        DictionaryInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            word_length: self.word_length,
            word_count: self.allowed.len(),
        }
    }
}

type EmbeddedList = (
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

const EMBEDDED: &[EmbeddedList] = &[
    (
        "en-us-5",
        "English",
        "Standard English words",
        EN_US_5_ANSWERS,
        EN_US_5_ALLOWED,
    ),
    (
        "nerdy",
        "Nerdy",
        "Tech & science terms",
        NERDY_ANSWERS,
        NERDY_ALLOWED,
    ),
];

/// Dictionary provider holding any number of word lists
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lists: FxHashMap<String, WordList>,
    order: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the dictionaries compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut catalog = Self::new();
        for &(id, name, description, answers, allowed) in EMBEDDED {
            match WordList::new(
                id,
                name,
                description,
                words_from_slice(answers),
                words_from_slice(allowed),
            ) {
                Ok(list) => catalog.insert(list),
                Err(e) => warn!(dictionary = id, error = %e, "skipping embedded dictionary"),
            }
        }
        catalog
    }

    /// Add a word list, replacing any list with the same id
    pub fn insert(&mut self, list: WordList) {
        let id = list.id().to_string();
        if self.lists.insert(id.clone(), list).is_none() {
            self.order.push(id);
        }
    }

    #[must_use]
    pub fn get(&self, dictionary_id: &str) -> Option<&WordList> {
        self.lists.get(dictionary_id)
    }

    fn require(&self, dictionary_id: &str) -> Result<&WordList, GameError> {
        self.get(dictionary_id)
            .ok_or_else(|| GameError::UnknownDictionary(dictionary_id.to_string()))
    }
}

impl DictionaryProvider for Catalog {
    fn word_length(&self, dictionary_id: &str) -> Result<usize, GameError> {
        Ok(self.require(dictionary_id)?.word_length())
    }

    fn pick_target_word(&self, dictionary_id: &str) -> Result<Word, GameError> {
        self.require(dictionary_id)?
            .answers()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| GameError::UnknownDictionary(dictionary_id.to_string()))
    }

    fn is_valid_guess(&self, dictionary_id: &str, word: &Word) -> bool {
        self.get(dictionary_id).is_some_and(|list| list.contains(word))
    }

    fn dictionaries(&self) -> Vec<DictionaryInfo> {
        self.order
            .iter()
            .filter_map(|id| self.lists.get(id))
            .map(WordList::info)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn embedded_lists_are_well_formed() {
        for &(id, _, _, answers, allowed) in EMBEDDED {
            for &text in answers.iter().chain(allowed) {
                assert_eq!(text.len(), 5, "'{text}' in {id} is not 5 letters");
                assert!(
                    text.chars().all(|c| c.is_ascii_uppercase()),
                    "'{text}' in {id} is not uppercase"
                );
            }
        }
    }

    #[test]
    fn embedded_catalog_has_default_dictionary() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.word_length(DEFAULT_DICTIONARY), Ok(5));
        assert!(catalog.get("nerdy").is_some());

        let ids: Vec<String> = catalog.dictionaries().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, ["en-us-5", "nerdy"]);
    }

    #[test]
    fn picked_targets_come_from_answers() {
        let catalog = Catalog::embedded();
        let list = catalog.get(DEFAULT_DICTIONARY).unwrap();
        for _ in 0..20 {
            let target = catalog.pick_target_word(DEFAULT_DICTIONARY).unwrap();
            assert!(list.answers().contains(&target));
            assert!(catalog.is_valid_guess(DEFAULT_DICTIONARY, &target));
        }
    }

    #[test]
    fn allowed_only_words_are_valid_guesses() {
        let catalog = Catalog::embedded();
        assert!(catalog.is_valid_guess(DEFAULT_DICTIONARY, &word("salet")));
        assert!(
            !catalog
                .get(DEFAULT_DICTIONARY)
                .unwrap()
                .answers()
                .contains(&word("salet"))
        );
        assert!(!catalog.is_valid_guess(DEFAULT_DICTIONARY, &word("zzzzz")));
    }

    #[test]
    fn unknown_dictionary_is_reported() {
        let catalog = Catalog::embedded();
        assert_eq!(
            catalog.word_length("klingon"),
            Err(GameError::UnknownDictionary("klingon".to_string()))
        );
        assert!(catalog.pick_target_word("klingon").is_err());
        assert!(!catalog.is_valid_guess("klingon", &word("crane")));
    }

    #[test]
    fn word_list_rejects_mixed_lengths_and_empty() {
        assert_eq!(
            WordList::new("x", "X", "", vec![], vec![]).unwrap_err(),
            WordError::Empty
        );
        assert_eq!(
            WordList::new("x", "X", "", vec![word("crane")], vec![word("cranes")]).unwrap_err(),
            WordError::LengthMismatch {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn insert_replaces_same_id_and_keeps_order() {
        let mut catalog = Catalog::new();
        catalog.insert(WordList::new("a", "A", "", vec![word("pie")], vec![]).unwrap());
        catalog.insert(WordList::new("b", "B", "", vec![word("crane")], vec![]).unwrap());
        catalog.insert(WordList::new("a", "A2", "", vec![word("tart")], vec![]).unwrap());

        let infos = catalog.dictionaries();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].name, "A2");
        assert_eq!(infos[0].word_length, 4);
        assert_eq!(infos[1].id, "b");
    }

    #[test]
    fn info_counts_allowed_words() {
        let list = WordList::new(
            "tiny",
            "Tiny",
            "test",
            vec![word("crane"), word("slate")],
            vec![word("salet"), word("crane")],
        )
        .unwrap();
        let info = list.info();
        assert_eq!(info.word_count, 3);
        assert_eq!(info.word_length, 5);
    }
}
