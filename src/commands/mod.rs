//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::evaluate_pair;
pub use simple::{play_lines, run_simple};
