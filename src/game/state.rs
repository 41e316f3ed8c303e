//! Round state machine
//!
//! A [`Game`] owns the solution, the board, the phase and the in-progress
//! guess buffer. Phases move `Playing -> Playing`, `Playing -> Won` or
//! `Playing -> Lost`; `Won` and `Lost` are terminal.

use super::Board;
use crate::core::{EvaluatedGuess, KeyStatusMap, MAX_GUESSES, WORD_LENGTH, Word, WordError};
use log::debug;
use std::fmt;

/// Macro-state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    /// Check if the round has ended
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// What an accepted guess did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Guess recorded, round still in progress
    Continue,
    /// Guess matched the solution
    Won,
    /// Last row used without a match
    Lost,
}

/// Reasons a submission is refused
///
/// A refused submission never changes the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    GameOver,
    BoardFull,
    LengthMismatch { expected: usize, found: usize },
    InvalidCharacters,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The round is already over"),
            Self::BoardFull => write!(f, "No empty row left on the board"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "Guess must be {expected} letters, got {found}")
            }
            Self::InvalidCharacters => write!(f, "Guess may only contain letters A-Z"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(found) => Self::LengthMismatch {
                expected: WORD_LENGTH,
                found,
            },
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// A single round of Wordle
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    board: Board,
    phase: GamePhase,
    buffer: String,
    keys: KeyStatusMap,
}

impl Game {
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            board: Board::new(),
            phase: GamePhase::Playing,
            buffer: String::with_capacity(WORD_LENGTH),
            keys: KeyStatusMap::new(),
        }
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Letters typed for the next guess, uppercase
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn key_statuses(&self) -> &KeyStatusMap {
        &self.keys
    }

    /// Append a letter to the in-progress guess
    ///
    /// Accepted only while playing, with room in the buffer, for a single
    /// ASCII letter. Returns whether the buffer changed.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.phase.is_over()
            || self.buffer.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.buffer.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last letter of the in-progress guess
    pub fn pop_letter(&mut self) -> bool {
        if self.phase.is_over() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Submit the in-progress guess
    ///
    /// # Errors
    /// Returns `GuessError::LengthMismatch` unless the buffer is full, and
    /// otherwise whatever [`Game::submit_guess`] returns.
    pub fn submit_buffer(&mut self) -> Result<RoundOutcome, GuessError> {
        if self.phase.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.buffer.len() != WORD_LENGTH {
            return Err(GuessError::LengthMismatch {
                expected: WORD_LENGTH,
                found: self.buffer.len(),
            });
        }
        let guess = self.buffer.clone();
        self.submit_guess(&guess)
    }

    /// Score a guess, record it on the board and advance the phase
    ///
    /// The guess is upper-cased before scoring. It must be exactly five
    /// letters; callers that feed raw input are expected to check the length
    /// first, but a wrong length is refused here too.
    ///
    /// # Errors
    /// Refuses the guess, leaving the game untouched, when the round is over,
    /// the board is full, or the guess is not five ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, GamePhase, RoundOutcome};
    ///
    /// let mut game = Game::new(Word::new("crane").unwrap());
    /// assert_eq!(game.submit_guess("trace"), Ok(RoundOutcome::Continue));
    /// assert_eq!(game.submit_guess("Crane"), Ok(RoundOutcome::Won));
    /// assert_eq!(game.phase(), GamePhase::Won);
    /// ```
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<RoundOutcome, GuessError> {
        if self.phase.is_over() {
            return Err(GuessError::GameOver);
        }
        let Some(row) = self.board.next_empty_slot() else {
            return Err(GuessError::BoardFull);
        };
        let guess = Word::new(raw_guess)?;

        let evaluated = EvaluatedGuess::evaluate(&guess, &self.solution);
        self.keys.apply(&evaluated);
        self.board.place(evaluated);
        self.buffer.clear();

        let outcome = if guess == self.solution {
            self.phase = GamePhase::Won;
            RoundOutcome::Won
        } else if row == MAX_GUESSES - 1 {
            self.phase = GamePhase::Lost;
            RoundOutcome::Lost
        } else {
            RoundOutcome::Continue
        };

        debug!("guess {guess} in row {} -> {outcome:?}", row + 1);
        Ok(outcome)
    }
}
