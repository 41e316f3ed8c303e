//! The six-row board of evaluated guesses

use crate::core::{EvaluatedGuess, MAX_GUESSES};

/// Fixed-capacity, append-only sequence of guess rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    slots: [Option<EvaluatedGuess>; MAX_GUESSES],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the row the next guess will occupy
    ///
    /// Derived from the slots on every call rather than stored.
    #[must_use]
    pub fn next_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// All rows, played or not
    #[must_use]
    pub const fn rows(&self) -> &[Option<EvaluatedGuess>; MAX_GUESSES] {
        &self.slots
    }

    /// Played rows, in order
    pub fn filled(&self) -> impl Iterator<Item = &EvaluatedGuess> {
        self.slots.iter().flatten()
    }

    /// Number of played rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.filled().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots[0].is_none()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.next_empty_slot().is_none()
    }

    /// Write a guess into the next empty row, returning its index
    pub(crate) fn place(&mut self, guess: EvaluatedGuess) -> Option<usize> {
        let index = self.next_empty_slot()?;
        self.slots[index] = Some(guess);
        Some(index)
    }
}
