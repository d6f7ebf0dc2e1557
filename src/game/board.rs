//! Board, rows and tiles

use crate::core::{LetterResult, Pattern, Word};
use serde::Serialize;

/// One board cell
///
/// `result` stays `None` until the row is submitted and never changes after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub letter: Option<char>,
    pub result: Option<LetterResult>,
}

/// A row of tiles; filled tiles are always contiguous from the start
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    tiles: Vec<Tile>,
}

impl Row {
    fn new(word_length: usize) -> Self {
        Self {
            tiles: vec![Tile::default(); word_length],
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of filled tiles
    #[must_use]
    pub fn filled(&self) -> usize {
        self.tiles.iter().take_while(|t| t.letter.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.tiles.iter().any(|t| t.result.is_some())
    }

    /// Fill the first empty tile; returns false if the row is full
    pub(crate) fn push_letter(&mut self, letter: char) -> bool {
        match self.tiles.iter_mut().find(|t| t.letter.is_none()) {
            Some(tile) => {
                tile.letter = Some(letter);
                true
            }
            None => false,
        }
    }

    /// Clear the last filled tile
    pub(crate) fn pop_letter(&mut self) -> Option<char> {
        let last = self.filled().checked_sub(1)?;
        self.tiles[last].letter.take()
    }

    /// Replace the typed letters with `word`
    pub(crate) fn fill(&mut self, word: &Word) {
        for (tile, &letter) in self.tiles.iter_mut().zip(word.letters()) {
            tile.letter = Some(char::from(letter));
        }
    }

    /// The typed letters as a string, if the row is full
    #[must_use]
    pub fn guess(&self) -> Option<String> {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    pub(crate) fn apply(&mut self, pattern: &Pattern) {
        for (tile, &result) in self.tiles.iter_mut().zip(pattern.results()) {
            tile.result = Some(result);
        }
    }
}

/// Fixed grid of `total_attempts` rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    #[must_use]
    pub fn new(total_attempts: usize, word_length: usize) -> Self {
        Self {
            rows: (0..total_attempts).map(|_| Row::new(word_length)).collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6, 5);
        assert_eq!(board.rows().len(), 6);
        assert!(board.rows().iter().all(|r| r.tiles().len() == 5));
        assert!(board.rows().iter().all(Row::is_empty));
        assert!(board.row(6).is_none());
    }

    #[test]
    fn push_and_pop_stay_contiguous() {
        let mut row = Row::new(3);
        assert!(row.push_letter('A'));
        assert!(row.push_letter('B'));
        assert_eq!(row.filled(), 2);
        assert_eq!(row.pop_letter(), Some('B'));
        assert!(row.push_letter('C'));
        assert!(row.push_letter('D'));
        assert!(row.is_full());
        assert!(!row.push_letter('E'));
        assert_eq!(row.guess().as_deref(), Some("ACD"));
    }

    #[test]
    fn pop_on_empty_row_is_noop() {
        let mut row = Row::new(3);
        assert_eq!(row.pop_letter(), None);
        assert!(row.is_empty());
    }

    #[test]
    fn guess_requires_full_row() {
        let mut row = Row::new(3);
        row.push_letter('A');
        assert_eq!(row.guess(), None);
    }

    #[test]
    fn fill_and_apply() {
        let mut row = Row::new(5);
        row.push_letter('X');
        row.fill(&Word::new("crate").unwrap());
        assert_eq!(row.guess().as_deref(), Some("CRATE"));
        assert!(!row.is_submitted());

        row.apply(&Pattern::from_str("22202").unwrap());
        assert!(row.is_submitted());
        assert_eq!(row.tiles()[3].result, Some(LetterResult::Absent));
        assert_eq!(row.tiles()[4].result, Some(LetterResult::Correct));
    }

    #[test]
    fn tile_serializes_with_nulls() {
        let json = serde_json::to_string(&Tile::default()).unwrap();
        assert_eq!(json, r#"{"letter":null,"result":null}"#);
    }
}
