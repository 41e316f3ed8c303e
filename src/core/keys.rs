//! Keyboard hinting: the best status seen so far for every letter

use super::{EvaluatedGuess, LetterStatus};

const ALPHABET_SIZE: usize = 26;

/// Per-letter display status for the on-screen keyboard
///
/// A letter's status only ever moves up `unset < absent < present < correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStatusMap {
    statuses: [Option<LetterStatus>; ALPHABET_SIZE],
}

impl KeyStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for `letter`, case-insensitive
    ///
    /// Returns `None` for letters never guessed and for non-letters.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        slot(letter).and_then(|i| self.statuses[i])
    }

    /// Fold one evaluated guess into a copy of this map
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{EvaluatedGuess, KeyStatusMap, LetterStatus, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let first = EvaluatedGuess::evaluate(&Word::new("react").unwrap(), &solution);
    /// let second = EvaluatedGuess::evaluate(&Word::new("pious").unwrap(), &solution);
    ///
    /// let keys = KeyStatusMap::new().updated(&first).updated(&second);
    /// assert_eq!(keys.get('R'), Some(LetterStatus::Present));
    /// assert_eq!(keys.get('P'), Some(LetterStatus::Absent));
    /// assert_eq!(keys.get('Z'), None);
    /// ```
    #[must_use]
    pub fn updated(mut self, guess: &EvaluatedGuess) -> Self {
        self.apply(guess);
        self
    }

    /// Fold one evaluated guess into this map in place
    pub fn apply(&mut self, guess: &EvaluatedGuess) {
        for result in guess.iter() {
            let Some(i) = slot(result.letter) else {
                continue;
            };
            let current = self.statuses[i];
            let keep = match current {
                Some(LetterStatus::Correct) => true,
                Some(LetterStatus::Present) => result.status != LetterStatus::Correct,
                Some(LetterStatus::Absent) | None => false,
            };
            if !keep {
                self.statuses[i] = Some(result.status);
            }
        }
    }

    /// Letters with a recorded status, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .filter_map(|(i, status)| status.map(|s| (char::from(b'A' + i as u8), s)))
    }
}

fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| (letter.to_ascii_uppercase() as u8 - b'A') as usize)
}
