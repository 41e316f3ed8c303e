//! Wordle
//!
//! A terminal Wordle: a hidden five-letter word, six guesses scored letter by
//! letter, and play statistics that persist between sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GamePhase, MemoryStore, Session, StatsTracker};
//!
//! let tracker = StatsTracker::load(MemoryStore::new());
//! let mut session = Session::new(Word::new("crane").unwrap(), tracker);
//!
//! session.submit_guess("trace").unwrap();
//! session.submit_guess("crane").unwrap();
//! assert_eq!(session.game().phase(), GamePhase::Won);
//! assert_eq!(session.tracker().stats().games_won, 1);
//! ```

// Core domain types
pub mod core;

// Round state machine and statistics
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
