//! Self-play guessing
//!
//! Players used by the `simulate` command. They only ever guess words that
//! are still consistent with every pattern seen so far.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{LetterFrequencyStrategy, RandomStrategy, Strategy, StrategyType};
