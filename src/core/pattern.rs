//! Wordle feedback pattern calculation and representation
//!
//! A pattern holds one [`LetterResult`] per position. On the wire each
//! position is a single digit:
//! - 0 = Absent (letter not in word, after accounting for duplicates)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)

use super::{Word, WordError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    /// Wire digit for this result
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Correct => '2',
        }
    }

    /// Parse a wire digit or a G/Y/- style marker
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '2' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            '1' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            '0' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<LetterResult>);

impl Pattern {
    /// The all-correct pattern for a word of `len` letters
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![LetterResult::Correct; len])
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (correct) and remove them from the
    ///    available pool
    /// 2. Second pass, left to right: mark present-but-wrong-position from the
    ///    remaining pool; once a letter's pool is exhausted, later copies stay
    ///    absent
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_sessions::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer).unwrap();
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(pattern.to_string(), "00202");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, WordError> {
        if guess.len() != answer.len() {
            return Err(WordError::LengthMismatch {
                expected: answer.len(),
                actual: guess.len(),
            });
        }

        let mut result = vec![LetterResult::Absent; answer.len()];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (slot, (&g, &a)) in result
            .iter_mut()
            .zip(guess.letters().iter().zip(answer.letters()))
        {
            if g == a {
                *slot = LetterResult::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (slot, &g) in result.iter_mut().zip(guess.letters()) {
            if *slot == LetterResult::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(&g)
                && *count > 0
            {
                *slot = LetterResult::Present;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Per-position results, left to right
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all correct)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Count the number of correct feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&r| r == LetterResult::Correct)
            .count()
    }

    /// Count the number of present feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&r| r == LetterResult::Present)
            .count()
    }

    /// Parse a pattern from a string like "21002", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_sessions::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::from_str("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let results: Option<Vec<LetterResult>> = s.chars().map(LetterResult::from_char).collect();
        results.filter(|r| !r.is_empty()).map(Self)
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_sessions::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.0 {
            write!(f, "{}", r.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap()).unwrap()
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = calc("abcde", "fghij");
        assert_eq!(pattern.to_string(), "00000");
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_all_correct() {
        let pattern = calc("crane", "crane");
        assert_eq!(pattern, Pattern::perfect(5));
        assert!(pattern.is_perfect());
        assert_eq!(pattern.count_correct(), 5);
    }

    #[test]
    fn pattern_duplicate_letters_in_guess_against_double_target() {
        // target SPEED, guess ERASE
        // E(present) R(absent) A(absent) S(present) E(present)
        // SPEED has two E's, neither at positions 0 or 4, so both guessed E's are present
        let pattern = calc("erase", "speed");
        assert_eq!(pattern.to_string(), "10011");
        assert_eq!(pattern.count_present(), 3);
    }

    #[test]
    fn pattern_duplicate_letters_inverse() {
        // target ERASE, guess SPEED
        // S(present) P(absent) E(present) E(present) D(absent)
        let pattern = calc("speed", "erase");
        assert_eq!(pattern.to_string(), "10110");
    }

    #[test]
    fn pattern_correct_takes_priority_over_present() {
        // target FLOOR, guess ROBOT
        // R(present) O(present) B(absent) O(correct) T(absent)
        let pattern = calc("robot", "floor");
        assert_eq!(pattern.to_string(), "11020");
    }

    #[test]
    fn pattern_extra_copies_are_absent_left_to_right() {
        // target ABBEY has one E; guess EERIE has three.
        // Only the left-most E beyond exact matches is present.
        let pattern = calc("eerie", "abbey");
        assert_eq!(pattern.to_string(), "10000");

        // target CREPE: the exact E match is counted before the loose one
        let pattern = calc("speed", "crepe");
        // S(absent) P(present) E(correct) E(present) D(absent)
        assert_eq!(pattern.to_string(), "01210");
    }

    #[test]
    fn pattern_exact_match_consumes_before_loose_match() {
        // target CRATE has one E at position 4; guess EERIE has E at 0, 1 and 4
        let pattern = calc("eerie", "crate");
        // E(absent) E(absent) R(present) I(absent) E(correct)
        assert_eq!(pattern.to_string(), "00102");
    }

    #[test]
    fn pattern_never_marks_more_than_available() {
        let target = Word::new("llama").unwrap();
        let guess = Word::new("lolly").unwrap();
        let pattern = Pattern::calculate(&guess, &target).unwrap();
        let marked_l = guess
            .letters()
            .iter()
            .zip(pattern.results())
            .filter(|(l, r)| **l == b'L' && **r != LetterResult::Absent)
            .count();
        assert_eq!(marked_l, 2);
        assert_eq!(pattern.to_string(), "20100");
    }

    #[test]
    fn pattern_length_mismatch_is_rejected() {
        let result = Pattern::calculate(&Word::new("cranes").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(
            result,
            Err(WordError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn pattern_is_deterministic_and_sized() {
        for (guess, answer) in [("crate", "crane"), ("erase", "speed"), ("pie", "eye")] {
            let first = calc(guess, answer);
            let second = calc(guess, answer);
            assert_eq!(first, second);
            assert_eq!(first.len(), answer.len());
        }
    }

    #[test]
    fn pattern_other_lengths() {
        assert_eq!(calc("pie", "eye").to_string(), "002");
        assert_eq!(calc("banana", "ananas").to_string(), "011111");
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();
        let p4 = Pattern::from_str("21200").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        assert_eq!(p1.to_string(), "21200");
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
        assert!("213".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_serializes_as_code_string() {
        let pattern = calc("crate", "crane");
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, "\"22202\"");
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn long_words_with_many_repeats() {
        let word = Word::new("a".repeat(256)).unwrap();
        let pattern = Pattern::calculate(&word, &word).unwrap();
        assert!(pattern.is_perfect());
        assert_eq!(pattern.count_correct(), 256);

        let mut shifted = "b".to_string();
        shifted.push_str(&"a".repeat(299));
        let answer = Word::new("a".repeat(300)).unwrap();
        let pattern = Pattern::calculate(&Word::new(shifted).unwrap(), &answer).unwrap();
        assert_eq!(pattern.count_correct(), 299);
        assert_eq!(pattern.count_present(), 0);
    }
}
