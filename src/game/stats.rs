//! Play statistics and their persistence
//!
//! The record is stored as JSON under [`STATS_KEY`]:
//!
//! ```json
//! {"gamesPlayed":2,"gamesWon":1,"currentStreak":0,"maxStreak":1}
//! ```

use super::{KeyValueStore, RoundOutcome};
use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Storage key of the stats record
pub const STATS_KEY: &str = "stats";

/// Aggregate play statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl Stats {
    /// Fold one accepted submission into the record
    ///
    /// `games_played` grows on every accepted guess, not once per round; only
    /// a win or a final-row loss touches the win and streak counters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{RoundOutcome, Stats};
    ///
    /// let stats = Stats::default().record_round(RoundOutcome::Won);
    /// assert_eq!(stats.games_won, 1);
    /// assert_eq!(stats.max_streak, 1);
    /// ```
    #[must_use]
    pub fn record_round(self, outcome: RoundOutcome) -> Self {
        let mut next = Self {
            games_played: self.games_played.saturating_add(1),
            ..self
        };

        // Counters stop at u32::MAX rather than wrapping
        match outcome {
            RoundOutcome::Won => {
                next.games_won = next.games_won.saturating_add(1);
                next.current_streak = next.current_streak.saturating_add(1);
                next.max_streak = next.max_streak.max(next.current_streak);
            }
            RoundOutcome::Lost => next.current_streak = 0,
            RoundOutcome::Continue => {}
        }

        next
    }

    /// Won share of played, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }

    /// Check `games_won <= games_played` and `current_streak <= max_streak`
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.games_won <= self.games_played && self.current_streak <= self.max_streak
    }
}

/// Owns the stats record and the only write path to storage
#[derive(Debug)]
pub struct StatsTracker<S> {
    stats: Stats,
    store: S,
}

impl<S: KeyValueStore> StatsTracker<S> {
    /// Load the persisted record, falling back to zeroed stats
    ///
    /// A missing, unparsable or inconsistent record is treated as absent.
    pub fn load(store: S) -> Self {
        let stats = store
            .get(STATS_KEY)
            .and_then(|raw| match serde_json::from_str::<Stats>(&raw) {
                Ok(stats) if stats.is_consistent() => Some(stats),
                Ok(stats) => {
                    warn!("ignoring inconsistent stats record {stats:?}");
                    None
                }
                Err(e) => {
                    warn!("ignoring unreadable stats record: {e}");
                    None
                }
            })
            .unwrap_or_default();

        Self { stats, store }
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Apply one accepted submission and persist the result
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written; the in-memory
    /// stats are still updated.
    pub fn record(&mut self, outcome: RoundOutcome) -> Result<&Stats> {
        self.stats = self.stats.record_round(outcome);
        if outcome != RoundOutcome::Continue {
            info!(
                "round {outcome:?}: played {}, won {}, streak {} (max {})",
                self.stats.games_played,
                self.stats.games_won,
                self.stats.current_streak,
                self.stats.max_streak
            );
        }
        self.persist()?;
        Ok(&self.stats)
    }

    /// Zero the record and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn reset(&mut self) -> Result<()> {
        self.stats = Stats::default();
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.stats).context("failed to encode stats")?;
        self.store
            .set(STATS_KEY, &json)
            .context("failed to save stats")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MemoryStore;
    use std::io;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn stats(played: u32, won: u32, current: u32, max: u32) -> Stats {
        Stats {
            games_played: played,
            games_won: won,
            current_streak: current,
            max_streak: max,
        }
    }

    #[test]
    fn win_from_default() {
        let after = Stats::default().record_round(RoundOutcome::Won);
        assert_eq!(after, stats(1, 1, 1, 1));
    }

    #[test]
    fn win_then_loss() {
        let after = Stats::default()
            .record_round(RoundOutcome::Won)
            .record_round(RoundOutcome::Lost);
        assert_eq!(after, stats(2, 1, 0, 1));
    }

    #[test]
    fn continuing_guess_only_counts_as_played() {
        // Every accepted guess bumps games_played, even mid-round
        let after = stats(3, 2, 2, 2).record_round(RoundOutcome::Continue);
        assert_eq!(after, stats(4, 2, 2, 2));
    }

    #[test]
    fn streak_keeps_previous_max() {
        let after = stats(10, 5, 0, 4)
            .record_round(RoundOutcome::Won)
            .record_round(RoundOutcome::Won);
        assert_eq!(after, stats(12, 7, 2, 4));

        let after = stats(10, 5, 4, 4).record_round(RoundOutcome::Won);
        assert_eq!(after.max_streak, 5);
    }

    #[test]
    fn record_round_preserves_invariants() {
        let outcomes = [
            RoundOutcome::Continue,
            RoundOutcome::Won,
            RoundOutcome::Won,
            RoundOutcome::Lost,
            RoundOutcome::Continue,
            RoundOutcome::Won,
        ];
        let mut current = Stats::default();
        for outcome in outcomes {
            current = current.record_round(outcome);
            assert!(current.is_consistent(), "{current:?}");
        }
    }

    #[test]
    fn counters_saturate_at_max() {
        let full = stats(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        for outcome in [RoundOutcome::Continue, RoundOutcome::Won, RoundOutcome::Lost] {
            let after = full.record_round(outcome);
            assert_eq!(after.games_played, u32::MAX);
            assert!(after.is_consistent(), "{after:?}");
        }
    }

    #[test]
    fn record_on_saturated_record_keeps_invariants() {
        let store = MemoryStore::with_entry(
            STATS_KEY,
            r#"{"gamesPlayed":4294967295,"gamesWon":3,"currentStreak":1,"maxStreak":2}"#,
        );
        let mut tracker = StatsTracker::load(store);
        assert_eq!(tracker.stats(), &stats(u32::MAX, 3, 1, 2));

        tracker.record(RoundOutcome::Continue).unwrap();
        assert_eq!(tracker.stats(), &stats(u32::MAX, 3, 1, 2));

        tracker.record(RoundOutcome::Won).unwrap();
        assert_eq!(tracker.stats(), &stats(u32::MAX, 4, 2, 2));
        assert!(tracker.stats().is_consistent());
    }

    #[test]
    fn win_rate() {
        assert!((Stats::default().win_rate() - 0.0).abs() < f64::EPSILON);
        assert!((stats(4, 1, 0, 1).win_rate() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = serde_json::to_string(&stats(2, 1, 0, 1)).unwrap();
        assert_eq!(
            json,
            r#"{"gamesPlayed":2,"gamesWon":1,"currentStreak":0,"maxStreak":1}"#
        );
    }

    #[test]
    fn load_missing_record_is_default() {
        let tracker = StatsTracker::load(MemoryStore::new());
        assert_eq!(tracker.stats(), &Stats::default());
    }

    #[test]
    fn load_existing_record() {
        let store = MemoryStore::with_entry(
            STATS_KEY,
            r#"{"gamesPlayed":7,"gamesWon":3,"currentStreak":1,"maxStreak":2}"#,
        );
        let tracker = StatsTracker::load(store);
        assert_eq!(tracker.stats(), &stats(7, 3, 1, 2));
    }

    #[test]
    fn load_corrupt_record_is_default() {
        for raw in [
            "not json",
            "null",
            r#"{"gamesPlayed":1}"#,
            r#"{"gamesPlayed":-1,"gamesWon":0,"currentStreak":0,"maxStreak":0}"#,
        ] {
            let tracker = StatsTracker::load(MemoryStore::with_entry(STATS_KEY, raw));
            assert_eq!(tracker.stats(), &Stats::default(), "input {raw}");
        }
    }

    #[test]
    fn load_inconsistent_record_is_default() {
        let store = MemoryStore::with_entry(
            STATS_KEY,
            r#"{"gamesPlayed":1,"gamesWon":5,"currentStreak":0,"maxStreak":0}"#,
        );
        assert_eq!(StatsTracker::load(store).stats(), &Stats::default());
    }

    #[test]
    fn record_persists_every_call() {
        let mut tracker = StatsTracker::load(MemoryStore::new());

        tracker.record(RoundOutcome::Continue).unwrap();
        let saved: Stats =
            serde_json::from_str(&tracker.store().get(STATS_KEY).unwrap()).unwrap();
        assert_eq!(saved, stats(1, 0, 0, 0));

        tracker.record(RoundOutcome::Won).unwrap();
        let saved: Stats =
            serde_json::from_str(&tracker.store().get(STATS_KEY).unwrap()).unwrap();
        assert_eq!(saved, stats(2, 1, 1, 1));
    }

    #[test]
    fn record_reports_write_failure() {
        let mut tracker = StatsTracker::load(ReadOnlyStore);
        let err = tracker.record(RoundOutcome::Won).unwrap_err();
        assert!(err.to_string().contains("failed to save stats"));
        assert_eq!(tracker.stats(), &stats(1, 1, 1, 1));
    }

    #[test]
    fn reset_zeroes_and_persists() {
        let store = MemoryStore::with_entry(
            STATS_KEY,
            r#"{"gamesPlayed":7,"gamesWon":3,"currentStreak":1,"maxStreak":2}"#,
        );
        let mut tracker = StatsTracker::load(store);
        tracker.reset().unwrap();

        assert_eq!(tracker.stats(), &Stats::default());
        let reloaded = StatsTracker::load(tracker.store().clone());
        assert_eq!(reloaded.stats(), &Stats::default());
    }
}
