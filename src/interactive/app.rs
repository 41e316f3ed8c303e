//! TUI application state and logic

use crate::game::{GamePhase, InputEvent, KeyValueStore, RoundOutcome, Session};
use crate::wordlists::SolutionSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S, P> {
    pub session: Session<S>,
    pub source: P,
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

impl<S: KeyValueStore, P: SolutionSource> App<S, P> {
    #[must_use]
    pub fn new(session: Session<S>, source: P) -> Self {
        Self {
            session,
            source,
            messages: vec![Message {
                text: "Guess the five-letter word in six tries.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Translate one key press into game input
    ///
    /// # Errors
    ///
    /// Returns an error if the stats cannot be saved.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let chorded = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            // Other Ctrl/Alt chords are not typing
            KeyCode::Char(_) if chorded => {}
            KeyCode::Char('n' | 'N') if self.session.game().phase().is_over() => self.new_game(),
            KeyCode::Char('q' | 'Q') if self.session.game().phase().is_over() => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.session.handle(InputEvent::KeyPress(c))?;
            }
            KeyCode::Backspace => {
                self.session.handle(InputEvent::Backspace)?;
            }
            KeyCode::Enter => self.submit()?,
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        if self.session.game().phase().is_over() {
            return Ok(());
        }
        if self.session.game().buffer().len() < crate::core::WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return Ok(());
        }

        match self.session.handle(InputEvent::Enter)? {
            Some(RoundOutcome::Won) => {
                let celebration = match self.session.game().board().len() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Some(RoundOutcome::Lost) => {
                let text = format!("The word was {}", self.session.game().solution());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Some(RoundOutcome::Continue) | None => {}
        }
        Ok(())
    }

    pub fn new_game(&mut self) {
        let solution = self.source.pick_random_word();
        self.session.new_round(solution);
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.session.game().phase()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the stats cannot be saved.
pub fn run_tui<S: KeyValueStore, P: SolutionSource>(app: App<S, P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, P>(terminal: &mut Terminal<B>, mut app: App<S, P>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    P: SolutionSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
