//! Core domain types for Wordle
//!
//! Words, the duplicate-aware feedback evaluator and keyboard status
//! aggregation. Everything here is pure: no sessions, no locking, no I/O.

mod keyboard;
mod pattern;
mod word;

pub use keyboard::{KeyStatus, KeyboardStatus};
pub use pattern::{LetterResult, Pattern};
pub use word::{Word, WordError, normalize_letter};
