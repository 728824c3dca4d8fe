//! Typed access to persisted player progress.
//!
//! Values are stored as strings: counters as decimal integers, sets as JSON
//! arrays. A value that fails to decode is logged and replaced by its default;
//! decode failures never reach the caller.

use crate::store::{KeyValueStore, StoreError};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Persisted key names.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const SEEN_PHOTOS: &str = "seenPhotos";
    pub const CURRENT_STREAK: &str = "currentStreak";
    pub const MAX_STREAK: &str = "maxStreak";
    pub const TOTAL_GAMES_PLAYED: &str = "totalGamesPlayed";
    pub const TOTAL_GAMES_WON: &str = "totalGamesWon";
    pub const ENABLED_STYLES: &str = "enabledStyles";
}

fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted value");
            None
        }
    }
}

/// Load a JSON array of strings. Missing or corrupt values yield an empty set.
pub fn load_string_set(store: &dyn KeyValueStore, key: &str) -> BTreeSet<String> {
    let Some(raw) = read(store, key) else {
        return BTreeSet::new();
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(values) => values.into_iter().collect(),
        Err(e) => {
            tracing::warn!(key, error = %e, "corrupt persisted list, using empty");
            BTreeSet::new()
        }
    }
}

pub fn save_string_set(
    store: &mut dyn KeyValueStore,
    key: &str,
    values: &BTreeSet<String>,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(values)?;
    store.set(key, &json)
}

/// Load a decimal counter. Missing or corrupt values yield zero.
pub fn load_counter(store: &dyn KeyValueStore, key: &str) -> u32 {
    let Some(raw) = read(store, key) else {
        return 0;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "corrupt persisted counter, using 0");
            0
        }
    }
}

pub fn save_counter(store: &mut dyn KeyValueStore, key: &str, value: u32) -> Result<(), StoreError> {
    store.set(key, &value.to_string())
}

// ============================================================================
// Theme
// ============================================================================

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Stored theme, or dark when unset or unrecognized.
    pub fn load(store: &dyn KeyValueStore) -> Theme {
        read(store, keys::THEME)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.set(keys::THEME, self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_string_set_round_trip() {
        let mut store = MemoryStore::new();
        let values: BTreeSet<String> = ["b.jpg", "a.jpg"].iter().map(|s| s.to_string()).collect();

        save_string_set(&mut store, keys::SEEN_PHOTOS, &values).unwrap();
        assert_eq!(
            store.get(keys::SEEN_PHOTOS).unwrap().as_deref(),
            Some(r#"["a.jpg","b.jpg"]"#)
        );
        assert_eq!(load_string_set(&store, keys::SEEN_PHOTOS), values);
    }

    #[test]
    fn test_corrupt_string_set_is_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::SEEN_PHOTOS, "[\"a.jpg\"").unwrap();
        assert!(load_string_set(&store, keys::SEEN_PHOTOS).is_empty());

        store.set(keys::ENABLED_STYLES, "{\"a\": 1}").unwrap();
        assert!(load_string_set(&store, keys::ENABLED_STYLES).is_empty());
    }

    #[test]
    fn test_counters() {
        let mut store = MemoryStore::new();
        assert_eq!(load_counter(&store, keys::MAX_STREAK), 0);

        save_counter(&mut store, keys::MAX_STREAK, 7).unwrap();
        assert_eq!(store.get(keys::MAX_STREAK).unwrap().as_deref(), Some("7"));
        assert_eq!(load_counter(&store, keys::MAX_STREAK), 7);

        store.set(keys::MAX_STREAK, "seven").unwrap();
        assert_eq!(load_counter(&store, keys::MAX_STREAK), 0);

        store.set(keys::MAX_STREAK, "-3").unwrap();
        assert_eq!(load_counter(&store, keys::MAX_STREAK), 0);
    }

    #[test]
    fn test_theme() {
        let mut store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Dark);

        Theme::Light.save(&mut store).unwrap();
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
        assert_eq!(Theme::load(&store), Theme::Light);

        store.set(keys::THEME, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
