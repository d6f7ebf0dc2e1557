//! Simple line-based play
//!
//! Text client without the TUI: type a guess per line, get coloured feedback.

use crate::error::GameError;
use crate::game::{GameService, SessionId, SubmitResponse};
use crate::output::formatters::{colored_guess, keyboard_rows, pattern_row};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the line-based client until `quit` or end of input
///
/// Commands: a word submits a guess, `new` deals a fresh game, `keys` shows
/// the keyboard, an empty line starts a new game once the current one is
/// over, `quit` exits.
///
/// # Errors
/// Returns an error on I/O failure or if no game can be dealt from
/// `dictionary`.
pub fn run_simple(
    service: &GameService,
    dictionary: &str,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "\n{}", "Wordle - line mode".bright_cyan().bold())?;
    writeln!(
        out,
        "Type a guess and press Enter. Commands: 'new', 'keys', 'quit'\n"
    )?;

    let mut game = Game::start(service, dictionary, &mut out)?;
    game.prompt(service, &mut out)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let command = line.trim().to_ascii_lowercase();

        match command.as_str() {
            "quit" | "q" | "exit" => {
                let _ = service.abandon(game.id);
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                let _ = service.abandon(game.id);
                game = Game::start(service, dictionary, &mut out)?;
            }
            "keys" | "k" => {
                if game.show_keys(service, &mut out)? {
                    game = Game::start(service, dictionary, &mut out)?;
                }
            }
            "" if game.over => {
                let _ = service.abandon(game.id);
                game = Game::start(service, dictionary, &mut out)?;
            }
            "" => {}
            guess => {
                if game.guess(service, guess, &mut out)? {
                    game = Game::start(service, dictionary, &mut out)?;
                }
            }
        }
        game.prompt(service, &mut out)?;
    }

    let _ = service.abandon(game.id);
    Ok(())
}

struct Game {
    id: SessionId,
    total_attempts: usize,
    over: bool,
}

impl Game {
    fn start(service: &GameService, dictionary: &str, out: &mut impl Write) -> Result<Self> {
        let started = service
            .start(dictionary, None)
            .with_context(|| format!("cannot start a game from '{dictionary}'"))?;
        writeln!(
            out,
            "🔄 New game: {} letters, {} attempts",
            started.word_length, started.total_attempts
        )?;
        Ok(Self {
            id: started.id,
            total_attempts: started.total_attempts,
            over: false,
        })
    }

    fn prompt(&self, service: &GameService, out: &mut impl Write) -> Result<()> {
        if self.over {
            write!(out, "Press Enter for a new game or type 'quit': ")?;
        } else {
            let attempt = service.view(self.id).map_or(0, |v| v.current_attempt);
            write!(out, "Guess {}/{}: ", attempt + 1, self.total_attempts)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Returns true if the session expired and a new one is needed
    fn show_keys(&self, service: &GameService, out: &mut impl Write) -> Result<bool> {
        match service.view(self.id) {
            Ok(view) => {
                for row in keyboard_rows(&view.keyboard) {
                    writeln!(out, "  {row}")?;
                }
                Ok(false)
            }
            Err(GameError::UnknownSession) => {
                writeln!(out, "{}", "Session expired, dealing a new game.".yellow())?;
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns true if the session expired and a new one is needed
    fn guess(&mut self, service: &GameService, guess: &str, out: &mut impl Write) -> Result<bool> {
        match service.submit(self.id, guess) {
            Ok(response) => {
                self.report(&guess.to_ascii_uppercase(), &response, out)?;
                Ok(false)
            }
            Err(GameError::InvalidWord(word)) => {
                writeln!(out, "{}", format!("❌ Not in word list: {word}").red())?;
                Ok(false)
            }
            Err(GameError::SessionFinished) => {
                self.over = true;
                writeln!(out, "This game is over.")?;
                Ok(false)
            }
            Err(GameError::UnknownSession) => {
                writeln!(out, "{}", "Session expired, dealing a new game.".yellow())?;
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn report(&mut self, guess: &str, response: &SubmitResponse, out: &mut impl Write) -> Result<()> {
        let Some(pattern) = &response.result else {
            return Ok(());
        };
        writeln!(out, "  {}   {}", colored_guess(guess, pattern), pattern_row(guess, pattern))?;

        if response.won {
            self.over = true;
            writeln!(out, "\n{}\n", "🎉 Solved!".bright_green().bold())?;
        } else if response.finished {
            self.over = true;
            let word = response.word.as_deref().unwrap_or("?");
            writeln!(out, "\n💀 Out of attempts. The word was {word}\n")?;
        }
        Ok(())
    }
}
