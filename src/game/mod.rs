//! Game state: rounds, sessions and persistent statistics
//!
//! Everything here is single-threaded and runs to completion per input event.

mod board;
mod session;
mod state;
mod stats;
mod store;

pub use board::Board;
pub use session::{InputEvent, Session, Submission};
pub use state::{Game, GamePhase, GuessError, RoundOutcome};
pub use stats::{STATS_KEY, Stats, StatsTracker};
pub use store::{FileStore, KeyValueStore, MemoryStore};
