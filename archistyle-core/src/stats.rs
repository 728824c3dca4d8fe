//! Streak and game counters.

use crate::persist::{keys, load_counter, save_counter};
use crate::store::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};

/// Cumulative player statistics, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Rounds won in a row.
    pub current_streak: u32,
    /// Best streak ever reached.
    pub max_streak: u32,
    pub total_games_played: u32,
    pub total_games_won: u32,
}

impl SessionStats {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            current_streak: load_counter(store, keys::CURRENT_STREAK),
            max_streak: load_counter(store, keys::MAX_STREAK),
            total_games_played: load_counter(store, keys::TOTAL_GAMES_PLAYED),
            total_games_won: load_counter(store, keys::TOTAL_GAMES_WON),
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        save_counter(store, keys::CURRENT_STREAK, self.current_streak)?;
        save_counter(store, keys::MAX_STREAK, self.max_streak)?;
        save_counter(store, keys::TOTAL_GAMES_PLAYED, self.total_games_played)?;
        save_counter(store, keys::TOTAL_GAMES_WON, self.total_games_won)?;
        Ok(())
    }

    /// Count a round as played.
    pub fn record_played(&mut self) {
        self.total_games_played = self.total_games_played.saturating_add(1);
    }

    /// Count a win and extend the streak.
    pub fn record_win(&mut self) {
        self.current_streak = self.current_streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.current_streak);
        self.total_games_won = self.total_games_won.saturating_add(1);
    }

    pub fn break_streak(&mut self) {
        self.current_streak = 0;
    }

    /// Fraction of played rounds that were won, 0.0 when nothing was played.
    pub fn win_rate(&self) -> f64 {
        if self.total_games_played == 0 {
            0.0
        } else {
            self.total_games_won as f64 / self.total_games_played as f64
        }
    }

    /// Zero every counter and drop the persisted keys.
    pub fn reset(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        *self = Self::default();
        for key in [
            keys::CURRENT_STREAK,
            keys::MAX_STREAK,
            keys::TOTAL_GAMES_PLAYED,
            keys::TOTAL_GAMES_WON,
        ] {
            store.remove(key)?;
        }
        Ok(())
    }
}
