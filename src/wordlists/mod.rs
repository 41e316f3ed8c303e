//! Word lists and solution selection
//!
//! Provides the embedded answer list and the random source that picks a
//! round's solution from it.

mod embedded;
pub mod loader;
mod picker;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use picker::{RandomPicker, SolutionSource};
