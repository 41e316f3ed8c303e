//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and total over validated words.

mod feedback;
mod keys;
mod word;

pub use feedback::{EvaluatedGuess, LetterResult, LetterStatus, evaluate};
pub use keys::KeyStatusMap;
pub use word::{Word, WordError};

/// Number of letters in every solution and guess
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a round allows
pub const MAX_GUESSES: usize = 6;
