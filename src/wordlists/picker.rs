//! Random solution selection

use crate::core::Word;
use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Supplies the solution for each new round
pub trait SolutionSource {
    /// Pick one solution word
    fn pick_random_word(&mut self) -> Word;
}

/// Uniform random choice from a fixed word list
#[derive(Debug, Clone)]
pub struct RandomPicker {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Picker with a fixed seed, for reproducible rounds
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn seeded(words: Vec<Word>, seed: u64) -> Result<Self> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Result<Self> {
        if words.is_empty() {
            bail!("word list contains no valid five-letter words");
        }
        Ok(Self { words, rng })
    }
}

impl SolutionSource for RandomPicker {
    fn pick_random_word(&mut self) -> Word {
        // Non-empty by construction
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| self.words[0].clone())
    }
}
