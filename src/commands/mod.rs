//! Command implementations

pub mod serve;
pub mod simple;
pub mod simulate;

pub use serve::{ServeSummary, run_serve};
pub use simple::run_simple;
pub use simulate::{GameRecord, SimulationResult, play_one, progress_bar, run_simulation};
