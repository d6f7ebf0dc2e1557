//! TUI application state and logic

use crate::error::GameError;
use crate::game::{GameService, SessionView, SubmitResponse};
use crate::wordlists::DictionaryInfo;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
///
/// Holds a view of the current session, never the session itself; every
/// keystroke goes through the service.
pub struct App<'a> {
    service: &'a GameService,
    pub dictionaries: Vec<DictionaryInfo>,
    pub dictionary_index: usize,
    pub view: SessionView,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Deal the first game from `dictionary`
    ///
    /// # Errors
    /// `GameError::UnknownDictionary` if no game can be dealt.
    pub fn new(service: &'a GameService, dictionary: &str) -> Result<Self, GameError> {
        let dictionaries = service.dictionaries();
        let dictionary_index = dictionaries
            .iter()
            .position(|d| d.id == dictionary)
            .unwrap_or(0);
        let started = service.start(dictionary, None)?;
        let view = service.view(started.id)?;

        let mut app = Self {
            service,
            dictionaries,
            dictionary_index,
            view,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type letters, Enter to submit, Backspace to erase.",
            MessageStyle::Info,
        );
        app.add_message("Tab switches dictionary, Esc quits.", MessageStyle::Info);
        Ok(app)
    }

    #[must_use]
    pub fn dictionary_name(&self) -> &str {
        self.dictionaries
            .get(self.dictionary_index)
            .map_or(self.view.dictionary_id.as_str(), |d| d.name.as_str())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only key presses (Windows also reports releases)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.next_dictionary(),
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Enter => self.enter(),
            _ => {}
        }
    }

    fn type_letter(&mut self, letter: char) {
        if self.view.finished {
            return;
        }
        let result = self.service.add_letter(self.view.id, letter);
        self.apply_view(result);
    }

    fn delete_letter(&mut self) {
        if self.view.finished {
            return;
        }
        let result = self.service.delete_letter(self.view.id);
        self.apply_view(result);
    }

    fn enter(&mut self) {
        if self.view.finished {
            self.new_game();
            return;
        }

        match self.service.submit_row(self.view.id) {
            Ok(response) if response.is_pending() => {
                let length = self.view.word_length;
                self.add_message(&format!("Need {length} letters"), MessageStyle::Error);
            }
            Ok(response) => {
                self.refresh();
                self.record_outcome(&response);
            }
            Err(GameError::InvalidWord(word)) => {
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            Err(e) => self.recover(&e),
        }
    }

    fn record_outcome(&mut self, response: &SubmitResponse) {
        let guesses = self.view.current_attempt + 1;
        if response.won {
            let celebration = match guesses {
                1 => "🎯 HOLE IN ONE!",
                2 => "🔥 MAGNIFICENT! Two guesses!",
                3 => "✨ SPLENDID! Three guesses!",
                4 => "👏 GREAT JOB! Four guesses!",
                5 => "🎉 NICE WORK! Five guesses!",
                _ => "😅 PHEW! Got it!",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press Enter for a new game.", MessageStyle::Info);
        } else if response.finished {
            let word = response.word.as_deref().unwrap_or("?");
            self.add_message(&format!("The word was {word}"), MessageStyle::Error);
            self.add_message("Press Enter for a new game.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        let _ = self.service.abandon(self.view.id);
        let dictionary = self
            .dictionaries
            .get(self.dictionary_index)
            .map_or_else(|| self.view.dictionary_id.clone(), |d| d.id.clone());

        match self
            .service
            .start(&dictionary, None)
            .and_then(|started| self.service.view(started.id))
        {
            Ok(view) => {
                info!(session_id = %view.id, dictionary = %dictionary, "new game from terminal");
                self.view = view;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn next_dictionary(&mut self) {
        if self.dictionaries.len() < 2 {
            return;
        }
        self.dictionary_index = (self.dictionary_index + 1) % self.dictionaries.len();
        let name = self.dictionary_name().to_string();
        self.add_message(&format!("Dictionary: {name}"), MessageStyle::Info);
        self.new_game();
    }

    fn apply_view(&mut self, result: Result<SessionView, GameError>) {
        match result {
            Ok(view) => self.view = view,
            Err(e) => self.recover(&e),
        }
    }

    fn refresh(&mut self) {
        let result = self.service.view(self.view.id);
        self.apply_view(result);
    }

    /// Session vanished or ended underneath us
    fn recover(&mut self, error: &GameError) {
        debug!(error = %error, "terminal session error");
        match error {
            GameError::UnknownSession => {
                self.add_message("Session expired.", MessageStyle::Error);
                self.new_game();
            }
            GameError::SessionFinished => self.refresh(),
            other => self.add_message(&other.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Drop the live session on exit
    pub fn close(&self) {
        let _ = self.service.abandon(self.view.id);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    app.close();
    Ok(())
}
