//! Letter-by-letter scoring of a guess against the solution
//!
//! Each guess letter receives one of three statuses:
//! - Absent (letter not available in the solution)
//! - Present (letter in the solution, wrong position)
//! - Correct (letter in the correct position)
//!
//! Each solution letter can satisfy at most one guess position, so duplicate
//! letters in a guess are never over-counted.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Status of one scored letter
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// One guess letter paired with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
}

/// A fully scored guess, one result per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluatedGuess {
    results: [LetterResult; WORD_LENGTH],
}

impl EvaluatedGuess {
    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as correct and consume
    ///    those solution positions
    /// 2. Second pass: for every other guess position, left to right, take
    ///    the first unconsumed solution position holding the same letter
    ///    (present) or mark the letter absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{EvaluatedGuess, LetterStatus, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    /// let scored = EvaluatedGuess::evaluate(&guess, &solution);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(scored.to_emoji(), "⬜⬜🟩⬜🟩");
    /// assert_eq!(scored.results()[2].status, LetterStatus::Correct);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let guess_letters = guess.letters();
        let solution_letters = solution.letters();

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        // First pass: exact matches
        // Allow: index needed to read both words and set statuses[i]/consumed[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_letters[i] == solution_letters[i] {
                statuses[i] = LetterStatus::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: misplaced letters, earlier guess positions first
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            let matched = (0..WORD_LENGTH)
                .find(|&j| !consumed[j] && solution_letters[j] == guess_letters[i]);
            if let Some(j) = matched {
                statuses[i] = LetterStatus::Present;
                consumed[j] = true;
            }
        }

        let results = std::array::from_fn(|i| LetterResult {
            letter: char::from(guess_letters[i]),
            status: statuses[i],
        });

        Self { results }
    }

    /// Build an evaluated guess from a word and a feedback string like
    /// "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Returns `None` unless the feedback has exactly one valid symbol per
    /// letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{EvaluatedGuess, Word};
    ///
    /// let word = Word::new("trace").unwrap();
    /// let a = EvaluatedGuess::from_feedback(&word, "-GGYG").unwrap();
    /// let b = EvaluatedGuess::from_feedback(&word, "⬜🟩🟩🟨🟩").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn from_feedback(word: &Word, feedback: &str) -> Option<Self> {
        let symbols: Vec<char> = feedback.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return None;
        }

        let mut results = [LetterResult {
            letter: ' ',
            status: LetterStatus::Absent,
        }; WORD_LENGTH];
        for (i, (&letter, &symbol)) in word.letters().iter().zip(&symbols).enumerate() {
            results[i] = LetterResult {
                letter: char::from(letter),
                status: LetterStatus::from_symbol(symbol)?,
            };
        }

        Some(Self { results })
    }

    /// Per-position results, in guess order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.results
    }

    /// Iterate over the per-position results
    pub fn iter(&self) -> impl Iterator<Item = &LetterResult> {
        self.results.iter()
    }

    /// Per-position statuses, in guess order
    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LENGTH] {
        self.results.map(|r| r.status)
    }

    /// The guessed word as an uppercase string
    #[must_use]
    pub fn word(&self) -> String {
        self.results.iter().map(|r| r.letter).collect()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.results.iter().all(|r| r.status == LetterStatus::Correct)
    }

    /// Count the letters with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.results.iter().map(|r| r.status.emoji()).collect()
    }
}

impl<'a> IntoIterator for &'a EvaluatedGuess {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl fmt::Display for EvaluatedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_emoji())
    }
}

/// Score `guess` against `solution`
///
/// Shorthand for [`EvaluatedGuess::evaluate`].
#[must_use]
pub fn evaluate(guess: &Word, solution: &Word) -> EvaluatedGuess {
    EvaluatedGuess::evaluate(guess, solution)
}
