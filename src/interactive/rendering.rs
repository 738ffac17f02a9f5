//! TUI rendering with ratatui
//!
//! Letter grid, team scores and messages.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::{LetterSlot, Phase};
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
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - teams on the left, grid on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // Teams and messages
            Constraint::Percentage(75), // Grid
        ])
        .split(chunks[1]);

    render_side_panel(f, app, main_chunks[0]);
    render_grid(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("M O T U S")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(header, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Teams
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_teams(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_teams(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let style = if team.active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if team.active { "▶" } else { " " };
            ListItem::new(format!("{marker} Team {}  {:>4} pts", i + 1, team.score)).style(style)
        })
        .collect();

    let teams = List::new(items).block(
        Block::default()
            .title(" Teams ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(teams, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

/// Colors of a letter cell
fn slot_style(slot: &LetterSlot, shining: bool) -> Style {
    let style = match slot.verdict {
        Verdict::Correct => Style::default().fg(Color::White).bg(Color::Red),
        Verdict::Misplaced => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent | Verdict::Unknown => Style::default().fg(Color::White).bg(Color::Blue),
    }
    .add_modifier(Modifier::BOLD);

    if slot.cursor {
        style.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED)
    } else if shining {
        style.add_modifier(Modifier::SLOW_BLINK)
    } else {
        style
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.grid.is_empty() {
        vec![Line::from("Press any key to start")]
    } else {
        app.grid
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                let shining = app.shining == Some(i);
                let cells: Vec<Span> = row
                    .iter()
                    .flat_map(|slot| {
                        [
                            Span::styled(format!(" {} ", slot.letter), slot_style(slot, shining)),
                            Span::raw(" "),
                        ]
                    })
                    .collect();
                [Line::from(cells), Line::from("")]
            })
            .collect()
    };

    let title = format!(
        " Team {} · {} letters · {} attempts ",
        app.current_team + 1,
        app.word_len,
        app.max_attempts
    );
    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    f.render_widget(grid, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let phase_text = match app.phase {
        Phase::Idle => "Waiting",
        Phase::Playing => "Playing",
        Phase::Celebrating { .. } => "Found!",
        Phase::RoundEnding { .. } => "Next team...",
        Phase::Exhausted => "Game over",
    };
    let phase = Paragraph::new(format!("Phase: {phase_text}")).alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Found: {}",
        app.stats.rounds_played, app.stats.rounds_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game_over {
        "q/Esc: Quit"
    } else {
        "Letters: Type | Enter: Submit | ⌫: Erase | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn slot_style_highlights_cursor() {
        let slot = LetterSlot {
            cursor: true,
            ..LetterSlot::default()
        };
        let style = slot_style(&slot, false);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn slot_style_follows_verdict() {
        let slot = LetterSlot {
            letter: 'A',
            verdict: Verdict::Misplaced,
            cursor: false,
        };
        assert_eq!(slot_style(&slot, false).bg, Some(Color::Yellow));
    }

    #[test]
    fn ui_renders_without_panicking() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(3, 6);
        app.grid = vec![vec![LetterSlot::default(); 6]; 6];
        app.word_len = 6;

        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
