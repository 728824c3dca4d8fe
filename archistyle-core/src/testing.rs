//! Testing utilities for the guessing game.
//!
//! This module provides tools for integration testing:
//! - `TestHarness` for scripted sessions over the sample catalog
//! - Assertion helpers for verifying session state

use crate::catalog::{sample_catalog, Catalog};
use crate::hints::HintStatus;
use crate::session::{GameSession, GuessOutcome, RoundStatus, SessionConfig};
use crate::store::MemoryStore;

/// Seed used when a harness is not given one.
pub const DEFAULT_SEED: u64 = 0x5eed;

/// Test harness for running game scenarios.
pub struct TestHarness {
    pub session: GameSession,
}

impl TestHarness {
    /// Create a harness over the sample catalog with an empty in-memory store.
    pub fn new() -> Self {
        Self::with_catalog(sample_catalog())
    }

    /// Create a harness over a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::with_store(catalog, MemoryStore::new())
    }

    /// Create a harness with pre-populated persisted state.
    pub fn with_store(catalog: Catalog, store: MemoryStore) -> Self {
        let config = SessionConfig::new().with_seed(DEFAULT_SEED);
        let session = match GameSession::new(catalog, store, config) {
            Ok(session) => session,
            Err(e) => panic!("memory-backed session failed to start: {e}"),
        };
        Self { session }
    }

    /// Canonical name of the current target.
    pub fn target_name(&self) -> String {
        self.session
            .target()
            .map(|t| t.style.name.clone())
            .unwrap_or_default()
    }

    /// Name of some catalog style that is not the current target.
    pub fn wrong_name(&self) -> String {
        let target = self.target_name();
        self.session
            .catalog()
            .iter()
            .find(|s| s.name != target)
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }

    /// Submit a guess and immediately settle its animation.
    pub fn guess(&mut self, text: &str) -> GuessOutcome {
        let outcome = match self.session.submit_guess(text) {
            Ok(outcome) => outcome,
            Err(e) => panic!("guess failed: {e}"),
        };
        if let GuessOutcome::Miss { settle, .. } | GuessOutcome::Won { settle, .. } = &outcome {
            self.session.settle(*settle);
        }
        outcome
    }

    /// Guess the target by its canonical name.
    pub fn guess_target(&mut self) -> GuessOutcome {
        let name = self.target_name();
        self.guess(&name)
    }

    /// Guess a style that is certainly not the target.
    pub fn guess_wrong(&mut self) -> GuessOutcome {
        let name = self.wrong_name();
        self.guess(&name)
    }

    /// Start the next round.
    pub fn next_round(&mut self) -> RoundStatus {
        match self.session.start_round() {
            Ok(status) => status,
            Err(e) => panic!("start_round failed: {e}"),
        }
    }

    /// Statuses of the latest attempt.
    pub fn last_statuses(&self) -> Vec<HintStatus> {
        self.session
            .last_attempt()
            .map(|a| a.hints.iter().map(|h| h.status).collect())
            .unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the round is in the given status.
pub fn assert_status(harness: &TestHarness, expected: RoundStatus) {
    assert_eq!(
        harness.session.status(),
        expected,
        "Expected round status {expected:?}, got {:?}",
        harness.session.status()
    );
}

/// Assert played / won counters.
pub fn assert_games(harness: &TestHarness, played: u32, won: u32) {
    let stats = harness.session.stats();
    assert_eq!(
        (stats.total_games_played, stats.total_games_won),
        (played, won),
        "Expected {played} played / {won} won, got {} / {}",
        stats.total_games_played,
        stats.total_games_won
    );
}

/// Assert current and best streak.
pub fn assert_streak(harness: &TestHarness, current: u32, max: u32) {
    let stats = harness.session.stats();
    assert_eq!(
        (stats.current_streak, stats.max_streak),
        (current, max),
        "Expected streak {current} (max {max}), got {} (max {})",
        stats.current_streak,
        stats.max_streak
    );
}

/// Assert every hint of the latest attempt has the given status.
pub fn assert_all_hints(harness: &TestHarness, status: HintStatus) {
    let statuses = harness.last_statuses();
    assert!(!statuses.is_empty(), "Expected an attempt, found none");
    assert!(
        statuses.iter().all(|s| *s == status),
        "Expected all hints {status:?}, got {statuses:?}"
    );
}
