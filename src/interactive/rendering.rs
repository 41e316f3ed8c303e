//! TUI rendering with ratatui
//!
//! Board tiles, keyboard hints, banners and statistics.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, MAX_GUESSES, WORD_LENGTH};
use crate::game::{GamePhase, KeyValueStore, Stats};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::wordlists::SolutionSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, P: SolutionSource>(f: &mut Frame, app: &App<S, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + side panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

/// Colours for a tile or key with the given status
fn status_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_board<S: KeyValueStore, P: SolutionSource>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let game = app.session.game();
    let current_row = game.board().next_empty_slot();

    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for (i, row) in game.board().rows().iter().enumerate() {
        let spans: Vec<Span> = match row {
            Some(guess) => guess
                .iter()
                .map(|r| Span::styled(format!(" {} ", r.letter), status_style(Some(r.status))))
                .collect(),
            None if Some(i) == current_row && game.phase() == GamePhase::Playing => {
                let typed: Vec<char> = game.buffer().chars().collect();
                (0..WORD_LENGTH)
                    .map(|pos| {
                        typed.get(pos).map_or_else(
                            || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                            |c| {
                                Span::styled(
                                    format!(" {c} "),
                                    Style::default()
                                        .fg(Color::White)
                                        .add_modifier(Modifier::BOLD),
                                )
                            },
                        )
                    })
                    .collect()
            }
            None => (0..WORD_LENGTH)
                .map(|_| Span::styled(" · ", Style::default().fg(Color::DarkGray)))
                .collect(),
        };

        let mut with_gaps = Vec::with_capacity(spans.len() * 2);
        for span in spans {
            with_gaps.push(span);
            with_gaps.push(Span::raw(" "));
        }
        lines.push(Line::from(with_gaps));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<S: KeyValueStore, P: SolutionSource>(
    f: &mut Frame,
    app: &App<S, P>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Result banner
            Constraint::Length(8), // Stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_banner(f, app, chunks[0]);
    render_stats(f, app.session.tracker().stats(), chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_banner<S: KeyValueStore, P: SolutionSource>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let game = app.session.game();
    let (text, color) = match game.phase() {
        GamePhase::Won => ("🎉 You won!".to_string(), Color::Green),
        GamePhase::Lost => (format!("💀 The word was {}", game.solution()), Color::Red),
        GamePhase::Playing => (
            format!("Guess {} of {MAX_GUESSES}", game.board().len() + 1),
            Color::Yellow,
        ),
    };

    let banner = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(banner, area);
}

fn render_stats(f: &mut Frame, stats: &Stats, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let content = vec![
        Line::from(format!("Played:         {}", stats.games_played)),
        Line::from(format!("Wins:           {}", stats.games_won)),
        Line::from(format!("Current Streak: {}", stats.current_streak)),
        Line::from(format!("Max Streak:     {}", stats.max_streak)),
    ];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, chunks[0]);

    #[allow(clippy::cast_sign_loss)]
    let percent = stats.win_rate().round().clamp(0.0, 100.0) as u16;
    let gauge = Gauge::default()
        .block(Block::default().title(" Win Rate ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent);
    f.render_widget(gauge, chunks[1]);
}

fn render_messages<S: KeyValueStore, P: SolutionSource>(
    f: &mut Frame,
    app: &App<S, P>,
    area: Rect,
) {
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

fn render_keyboard<S: KeyValueStore, P: SolutionSource>(
    f: &mut Frame,
    app: &App<S, P>,
    area: Rect,
) {
    let keys = app.session.game().key_statuses();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(format!(" {letter} "), status_style(keys.get(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status<S: KeyValueStore, P: SolutionSource>(f: &mut Frame, app: &App<S, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mode_text = format!("Phase: {}", app.phase());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help_text = if app.phase().is_over() {
        "n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{MemoryStore, Session, StatsTracker};
    use crate::wordlists::RandomPicker;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App<MemoryStore, RandomPicker>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App<MemoryStore, RandomPicker> {
        let session = Session::new(
            Word::new("crane").unwrap(),
            StatsTracker::load(MemoryStore::new()),
        );
        let picker = RandomPicker::seeded(words_from_slice(&["slate"]), 3).unwrap();
        App::new(session, picker)
    }

    #[test]
    fn renders_title_keyboard_and_stats() {
        let screen = rendered(&app());
        assert!(screen.contains("WORDLE"));
        assert!(screen.contains(" Q "));
        assert!(screen.contains("Played:"));
        assert!(screen.contains("Guess 1 of 6"));
    }

    #[test]
    fn renders_loss_banner_with_solution() {
        let mut app = app();
        for _ in 0..MAX_GUESSES {
            app.session.submit_guess("pious").unwrap();
        }
        let screen = rendered(&app);
        assert!(screen.contains("The word was CRANE"));
        assert!(screen.contains("Phase: lost"));
    }
}
