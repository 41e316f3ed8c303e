//! Score one guess against a given solution

use crate::core::{EvaluatedGuess, Word};
use anyhow::{Context, Result};

/// Validate both words and score `guess` against `solution`
///
/// # Errors
///
/// Returns an error naming whichever word is not five ASCII letters.
///
/// # Examples
/// ```
/// use wordle_game::commands::evaluate_pair;
///
/// let scored = evaluate_pair("erase", "speed").unwrap();
/// assert_eq!(scored.to_emoji(), "🟨⬜⬜🟨🟨");
/// ```
pub fn evaluate_pair(guess: &str, solution: &str) -> Result<EvaluatedGuess> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let solution =
        Word::new(solution).with_context(|| format!("invalid solution {solution:?}"))?;
    Ok(EvaluatedGuess::evaluate(&guess, &solution))
}
