//! Guess selection strategies

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;

/// Picks the next guess from the words still consistent with the feedback
pub trait Strategy: Sync {
    /// Returns `None` only if `candidates` is empty
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word>;
}

/// Runtime choice of strategy with static dispatch
pub enum StrategyType {
    Frequency(LetterFrequencyStrategy),
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// "random" picks any candidate; anything else means letter frequency
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(LetterFrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Prefers the candidate whose distinct letters are most common among the
/// remaining candidates; ties go to the earliest word
pub struct LetterFrequencyStrategy;

impl Strategy for LetterFrequencyStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        let mut frequency: FxHashMap<u8, usize> = FxHashMap::default();
        for word in candidates {
            for letter in distinct_letters(word) {
                *frequency.entry(letter).or_insert(0) += 1;
            }
        }

        let score = |word: &Word| -> usize {
            distinct_letters(word)
                .map(|letter| frequency.get(&letter).copied().unwrap_or(0))
                .sum()
        };

        let mut best: Option<(&'a Word, usize)> = None;
        for &word in candidates {
            let s = score(word);
            if best.is_none_or(|(_, top)| s > top) {
                best = Some((word, s));
            }
        }
        best.map(|(word, _)| word)
    }
}

fn distinct_letters(word: &Word) -> impl Iterator<Item = u8> + '_ {
    let letters = word.letters();
    letters
        .iter()
        .enumerate()
        .filter(|&(i, letter)| !letters[..i].contains(letter))
        .map(|(_, &letter)| letter)
}

/// Uniformly random candidate
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        candidates.choose(&mut rand::rng()).copied()
    }
}
