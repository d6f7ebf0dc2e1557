//! Candidate-filtering player

use super::strategy::Strategy;
use crate::core::{Pattern, Word};

/// Guesses only words that would have produced every pattern seen so far
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    answer_words: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    pub const fn new(strategy: S, answer_words: &'a [Word]) -> Self {
        Self {
            strategy,
            answer_words,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Next guess given the `(guess, pattern)` history, or `None` once no
    /// answer fits the feedback
    pub fn next_guess(&self, history: &[(Word, Pattern)]) -> Option<&'a Word> {
        let candidates = self.candidates(history);
        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.strategy.select_guess(&candidates),
        }
    }

    /// Answer words consistent with the whole history
    pub fn candidates(&self, history: &[(Word, Pattern)]) -> Vec<&'a Word> {
        self.answer_words
            .iter()
            .filter(|&candidate| {
                history.iter().all(|(guess, observed)| {
                    Pattern::calculate(guess, candidate).is_ok_and(|p| p == *observed)
                })
            })
            .collect()
    }

    pub fn count_candidates(&self, history: &[(Word, Pattern)]) -> usize {
        self.candidates(history).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::LetterFrequencyStrategy;

    fn answer_words() -> Vec<Word> {
        ["irate", "crate", "grate", "slate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    fn feedback(guess: &str, answer: &str) -> (Word, Pattern) {
        let guess = Word::new(guess).unwrap();
        let pattern = Pattern::calculate(&guess, &Word::new(answer).unwrap()).unwrap();
        (guess, pattern)
    }

    #[test]
    fn empty_history_keeps_everything() {
        let answers = answer_words();
        let solver = Solver::new(LetterFrequencyStrategy, &answers);
        assert_eq!(solver.count_candidates(&[]), 4);
        assert!(solver.next_guess(&[]).is_some());
    }

    #[test]
    fn feedback_narrows_candidates() {
        let answers = answer_words();
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let history = vec![feedback("crane", "grate")];
        let remaining: Vec<&str> = solver
            .candidates(&history)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(remaining, ["IRATE", "GRATE"]);
    }

    #[test]
    fn single_candidate_is_guessed() {
        let answers = answer_words();
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let history = vec![feedback("crane", "slate")];
        assert_eq!(solver.next_guess(&history).unwrap().text(), "SLATE");
    }

    #[test]
    fn impossible_feedback_gives_none() {
        let answers = answer_words();
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let history = vec![(Word::new("zzzzz").unwrap(), Pattern::perfect(5))];
        assert!(solver.next_guess(&history).is_none());
        assert_eq!(solver.count_candidates(&history), 0);
    }

    #[test]
    fn mismatched_lengths_never_match() {
        let answers = answer_words();
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let history = vec![(Word::new("pie").unwrap(), Pattern::perfect(3))];
        assert_eq!(solver.count_candidates(&history), 0);
    }
}
