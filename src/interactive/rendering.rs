//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{KeyStatus, LetterResult};
use crate::game::{GameState, Row, Tile};
use crate::output::formatters::QWERTY_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🟩 WORDLE · {} 🟩", app.dictionary_name());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let view = &app.view;
    let mut lines = vec![Line::from("")];
    for (index, row) in view.board.rows().iter().enumerate() {
        let active = !view.finished && index == view.current_attempt;
        lines.push(board_row(row, active));
        lines.push(Line::from(""));
    }

    let (title, color) = match view.state {
        GameState::Active => (" Board ".to_string(), Color::White),
        GameState::Won => (" Solved! ".to_string(), Color::Green),
        GameState::Lost => (
            format!(
                " The word was {} ",
                view.revealed_word.as_deref().unwrap_or("?")
            ),
            Color::Red,
        ),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(color)),
    );
    f.render_widget(board, area);
}

fn board_row(row: &Row, active: bool) -> Line<'static> {
    let spans: Vec<Span> = row
        .tiles()
        .iter()
        .flat_map(|tile| [tile_span(tile, active), Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn tile_span(tile: &Tile, active: bool) -> Span<'static> {
    let letter = tile.letter.unwrap_or(if active { '_' } else { '·' });
    let style = match tile.result {
        Some(result) => result_style(result),
        None if tile.letter.is_some() => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(format!(" {letter} "), style)
}

fn result_style(result: LetterResult) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match result {
        LetterResult::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterResult::Present => base.fg(Color::Black).bg(Color::Yellow),
        LetterResult::Absent => base.fg(Color::White).bg(Color::DarkGray),
    }
}

fn key_style(status: Option<KeyStatus>) -> Style {
    match status {
        Some(KeyStatus::Correct) => result_style(LetterResult::Correct),
        Some(KeyStatus::Present) => result_style(LetterResult::Present),
        Some(KeyStatus::Wrong) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    for row in QWERTY_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|letter| {
                [
                    Span::styled(
                        format!(" {letter} "),
                        key_style(app.view.keyboard.status(letter)),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let view = &app.view;
    let attempt_text = if view.finished {
        "Game over".to_string()
    } else {
        format!(
            "Attempt {}/{}",
            view.current_attempt + 1,
            view.total_attempts
        )
    };
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if view.finished {
        "Enter: New Game | Tab: Dictionary | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Erase | Tab: Dictionary | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
