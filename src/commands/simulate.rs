//! Self-play simulation
//!
//! Plays many games in parallel against one [`GameService`], each through the
//! same start/submit calls a real client makes.

use crate::core::{Pattern, Word};
use crate::error::GameError;
use crate::game::{GameService, SessionId};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub target: Option<String>,
    pub guesses: Vec<String>,
    pub won: bool,
}

/// Aggregate over all simulated games
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub dictionary: String,
    pub strategy: String,
    pub games: usize,
    pub wins: usize,
    /// Wins keyed by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn losses(&self) -> usize {
        self.games - self.wins
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        let total: usize = self.distribution.iter().map(|(g, n)| g * n).sum();
        if self.wins == 0 {
            0.0
        } else {
            total as f64 / self.wins as f64
        }
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 { self.games as f64 / secs } else { 0.0 }
    }
}

/// Progress bar for `games` simulated games
#[must_use]
pub fn progress_bar(games: usize) -> ProgressBar {
    let pb = ProgressBar::new(games as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(
        |_| ProgressStyle::default_bar(),
        |style| style.progress_chars("█▓▒░"),
    );
    pb.set_style(style);
    pb
}

/// Play `games` games from `dictionary`
///
/// `solver` should be built over the dictionary's target words so its
/// candidate set matches what the service can deal.
///
/// # Errors
/// Fails on the first service error, e.g. an unknown dictionary.
pub fn run_simulation<S: Strategy>(
    service: &GameService,
    solver: &Solver<'_, S>,
    dictionary: &str,
    strategy_name: &str,
    games: usize,
    progress: &ProgressBar,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();

    let records = (0..games)
        .into_par_iter()
        .map(|_| {
            let record = play_one(service, solver, dictionary);
            progress.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    progress.finish_with_message("Complete!");

    let mut distribution = BTreeMap::new();
    let mut failed_words = Vec::new();
    for record in &records {
        if record.won {
            *distribution.entry(record.guesses.len()).or_insert(0) += 1;
        } else if let Some(target) = &record.target {
            failed_words.push(target.clone());
        }
    }
    failed_words.sort();
    failed_words.dedup();

    let result = SimulationResult {
        dictionary: dictionary.to_string(),
        strategy: strategy_name.to_string(),
        games,
        wins: records.iter().filter(|r| r.won).count(),
        distribution,
        failed_words,
        duration: start.elapsed(),
    };
    info!(
        games,
        wins = result.wins,
        average = result.average_guesses(),
        "simulation finished"
    );
    Ok(result)
}

/// Play a single game to the end, then drop the session
///
/// The session is dropped even when the game fails part way.
///
/// # Errors
/// Any service error other than the game ending normally.
pub fn play_one<S: Strategy>(
    service: &GameService,
    solver: &Solver<'_, S>,
    dictionary: &str,
) -> Result<GameRecord, GameError> {
    let id = service.start(dictionary, None)?.id;
    let played = play_session(service, solver, id);
    let abandoned = service.abandon(id);
    let record = played?;
    abandoned?;
    Ok(record)
}

fn play_session<S: Strategy>(
    service: &GameService,
    solver: &Solver<'_, S>,
    id: SessionId,
) -> Result<GameRecord, GameError> {
    let mut history: Vec<(Word, Pattern)> = Vec::new();
    let mut record = GameRecord {
        target: None,
        guesses: Vec::new(),
        won: false,
    };

    while let Some(guess) = solver.next_guess(&history) {
        let response = service.submit(id, guess.text())?;
        record.guesses.push(guess.text().to_string());

        let Some(pattern) = response.result else {
            break;
        };
        if response.won {
            record.won = true;
            record.target = Some(guess.text().to_string());
            break;
        }
        if response.finished {
            record.target = response.word;
            break;
        }
        history.push((guess.clone(), pattern));
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::SessionStore;
    use crate::solver::LetterFrequencyStrategy;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{Catalog, WordList};
    use std::sync::Arc;

    const ANSWERS: &[&str] = &["CRANE", "CRATE", "SLATE", "IRATE", "GRATE", "TRACE"];

    fn service(attempts: usize) -> GameService {
        let mut catalog = Catalog::new();
        catalog.insert(
            WordList::new("sim", "Sim", "", words_from_slice(ANSWERS), vec![]).unwrap(),
        );
        GameService::new(
            Arc::new(SessionStore::new(Duration::from_secs(60))),
            Arc::new(catalog),
            &GameConfig {
                total_attempts: attempts,
                ..GameConfig::default()
            },
        )
    }

    #[test]
    fn every_game_is_won_with_enough_attempts() {
        let service = service(6);
        let answers = words_from_slice(ANSWERS);
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let result =
            run_simulation(&service, &solver, "sim", "frequency", 40, &ProgressBar::hidden())
                .unwrap();

        assert_eq!(result.games, 40);
        assert_eq!(result.wins, 40);
        assert_eq!(result.losses(), 0);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.distribution.values().sum::<usize>(), 40);
        assert!(result.average_guesses() >= 1.0);
        assert!(result.average_guesses() <= 6.0);
        assert!(service.store().is_empty());
    }

    #[test]
    fn single_attempt_wins_only_on_first_guess() {
        let service = service(1);
        let answers = words_from_slice(ANSWERS);
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let result =
            run_simulation(&service, &solver, "sim", "frequency", 30, &ProgressBar::hidden())
                .unwrap();

        // Only the opener's own target can be won in one guess
        assert!(result.distribution.keys().all(|&guesses| guesses == 1));
        assert_eq!(result.wins + result.losses(), 30);
        for word in &result.failed_words {
            assert!(ANSWERS.contains(&word.as_str()));
        }
    }

    #[test]
    fn lost_games_record_the_revealed_word() {
        let service = service(1);
        let answers = words_from_slice(ANSWERS);
        let solver = Solver::new(LetterFrequencyStrategy, &answers);
        let opener = solver.next_guess(&[]).unwrap().text().to_string();

        for _ in 0..20 {
            let record = play_one(&service, &solver, "sim").unwrap();
            assert_eq!(record.guesses, [opener.clone()]);
            let target = record.target.unwrap();
            assert_eq!(record.won, target == opener);
        }
    }

    #[test]
    fn failed_game_still_drops_its_session() {
        let service = service(6);
        let outsiders = words_from_slice(&["ZESTY"]);
        let solver = Solver::new(LetterFrequencyStrategy, &outsiders);

        let err = play_one(&service, &solver, "sim").unwrap_err();
        assert_eq!(err, GameError::InvalidWord("ZESTY".to_string()));
        assert!(service.store().is_empty());
    }

    #[test]
    fn unknown_dictionary_fails() {
        let service = service(6);
        let answers = words_from_slice(ANSWERS);
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let err = run_simulation(&service, &solver, "nope", "frequency", 3, &ProgressBar::hidden())
            .unwrap_err();
        assert_eq!(err, GameError::UnknownDictionary("nope".to_string()));
    }

    #[test]
    fn empty_run() {
        let service = service(6);
        let answers = words_from_slice(ANSWERS);
        let solver = Solver::new(LetterFrequencyStrategy, &answers);

        let result =
            run_simulation(&service, &solver, "sim", "frequency", 0, &ProgressBar::hidden())
                .unwrap();
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_guesses().abs() < f64::EPSILON);
    }
}
