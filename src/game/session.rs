//! Input routing: one game plus the stats it feeds

use super::{Game, GuessError, KeyValueStore, RoundOutcome, StatsTracker};
use crate::core::Word;
use anyhow::Result;
use log::{debug, info};

/// Input events delivered by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPress(char),
    Backspace,
    Enter,
}

/// Result of a submission that reached the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(RoundOutcome),
    Rejected(GuessError),
}

/// A game wired to its stats tracker
///
/// Every accepted submission is recorded with the tracker exactly once.
#[derive(Debug)]
pub struct Session<S> {
    game: Game,
    tracker: StatsTracker<S>,
}

impl<S: KeyValueStore> Session<S> {
    #[must_use]
    pub fn new(solution: Word, tracker: StatsTracker<S>) -> Self {
        Self {
            game: Game::new(solution),
            tracker,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn tracker(&self) -> &StatsTracker<S> {
        &self.tracker
    }

    /// Route one input event
    ///
    /// Letters and backspace edit the buffer; Enter submits it. A refused
    /// submission is ignored and yields `Ok(None)`, as does any edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the stats record cannot be saved.
    pub fn handle(&mut self, event: InputEvent) -> Result<Option<RoundOutcome>> {
        match event {
            InputEvent::KeyPress(letter) => {
                self.game.push_letter(letter);
                Ok(None)
            }
            InputEvent::Backspace => {
                self.game.pop_letter();
                Ok(None)
            }
            InputEvent::Enter => {
                let result = self.game.submit_buffer();
                match self.settle(result)? {
                    Submission::Accepted(outcome) => Ok(Some(outcome)),
                    Submission::Rejected(_) => Ok(None),
                }
            }
        }
    }

    /// Submit a whole guess, bypassing the buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the stats record cannot be saved.
    pub fn submit_guess(&mut self, raw_guess: &str) -> Result<Submission> {
        let result = self.game.submit_guess(raw_guess);
        self.settle(result)
    }

    /// Start a new round with a fresh solution, keeping the stats
    pub fn new_round(&mut self, solution: Word) {
        info!("starting a new round");
        self.game = Game::new(solution);
    }

    /// Zero the persisted stats
    ///
    /// # Errors
    ///
    /// Returns an error if the stats record cannot be saved.
    pub fn reset_stats(&mut self) -> Result<()> {
        self.tracker.reset()
    }

    fn settle(&mut self, result: Result<RoundOutcome, GuessError>) -> Result<Submission> {
        match result {
            Ok(outcome) => {
                self.tracker.record(outcome)?;
                Ok(Submission::Accepted(outcome))
            }
            Err(err) => {
                debug!("submission refused: {err}");
                Ok(Submission::Rejected(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};
    use crate::game::{GamePhase, MemoryStore, STATS_KEY, Stats};

    fn session(solution: &str) -> Session<MemoryStore> {
        Session::new(
            Word::new(solution).unwrap(),
            StatsTracker::load(MemoryStore::new()),
        )
    }

    fn type_word(session: &mut Session<MemoryStore>, word: &str) -> Option<RoundOutcome> {
        for letter in word.chars() {
            session.handle(InputEvent::KeyPress(letter)).unwrap();
        }
        session.handle(InputEvent::Enter).unwrap()
    }

    #[test]
    fn trace_then_crane_wins() {
        let mut session = session("crane");

        assert_eq!(type_word(&mut session, "trace"), Some(RoundOutcome::Continue));
        let first = session.game().board().filled().next().unwrap();
        assert_eq!(
            first.statuses(),
            [Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(session.tracker().stats().games_played, 1);
        assert_eq!(session.tracker().stats().games_won, 0);
        assert_eq!(session.tracker().stats().current_streak, 0);

        assert_eq!(type_word(&mut session, "crane"), Some(RoundOutcome::Won));
        let second = session.game().board().filled().nth(1).unwrap();
        assert!(second.is_solved());
        assert_eq!(session.game().phase(), GamePhase::Won);

        let stats = session.tracker().stats();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn games_played_counts_guesses_not_rounds() {
        // A six-guess loss records six plays and one reset streak
        let mut session = session("crane");
        for _ in 0..5 {
            type_word(&mut session, "pious");
        }
        assert_eq!(type_word(&mut session, "pious"), Some(RoundOutcome::Lost));

        let stats = session.tracker().stats();
        assert_eq!(stats.games_played, 6);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn enter_with_short_buffer_is_ignored() {
        let mut session = session("crane");
        assert_eq!(type_word(&mut session, "tra"), None);

        assert_eq!(session.game().buffer(), "TRA");
        assert!(session.game().board().is_empty());
        assert_eq!(session.tracker().stats(), &Stats::default());
        assert_eq!(session.tracker().store().get(STATS_KEY), None);
    }

    #[test]
    fn backspace_edits_buffer() {
        let mut session = session("crane");
        session.handle(InputEvent::KeyPress('x')).unwrap();
        session.handle(InputEvent::KeyPress('y')).unwrap();
        session.handle(InputEvent::Backspace).unwrap();
        assert_eq!(session.game().buffer(), "X");
    }

    #[test]
    fn input_after_round_end_is_ignored() {
        let mut session = session("crane");
        type_word(&mut session, "crane");
        let stats = *session.tracker().stats();

        assert_eq!(type_word(&mut session, "slate"), None);
        assert_eq!(
            session.submit_guess("slate").unwrap(),
            Submission::Rejected(GuessError::GameOver)
        );
        assert_eq!(session.game().board().len(), 1);
        assert_eq!(session.game().buffer(), "");
        assert_eq!(session.tracker().stats(), &stats);
    }

    #[test]
    fn submit_guess_persists_stats() {
        let mut session = session("crane");
        assert_eq!(
            session.submit_guess("crane").unwrap(),
            Submission::Accepted(RoundOutcome::Won)
        );

        let saved = session.tracker().store().get(STATS_KEY).unwrap();
        assert_eq!(
            saved,
            r#"{"gamesPlayed":1,"gamesWon":1,"currentStreak":1,"maxStreak":1}"#
        );
    }

    #[test]
    fn new_round_keeps_stats() {
        let mut session = session("crane");
        type_word(&mut session, "crane");

        session.new_round(Word::new("slate").unwrap());
        assert_eq!(session.game().phase(), GamePhase::Playing);
        assert!(session.game().board().is_empty());
        assert_eq!(session.game().key_statuses().iter().count(), 0);

        assert_eq!(type_word(&mut session, "slate"), Some(RoundOutcome::Won));
        let stats = session.tracker().stats();
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn stats_survive_reload() {
        let mut session = session("crane");
        type_word(&mut session, "crane");
        let store = session.tracker().store().clone();

        let reloaded = StatsTracker::load(store);
        assert_eq!(reloaded.stats(), session.tracker().stats());
    }

    #[test]
    fn reset_stats_clears_record() {
        let mut session = session("crane");
        type_word(&mut session, "crane");
        session.reset_stats().unwrap();
        assert_eq!(session.tracker().stats(), &Stats::default());
    }
}
