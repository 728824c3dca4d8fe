//! Non-repeating draw of round targets.
//!
//! Every photo shown is remembered across sessions. A draw only considers
//! enabled styles that still have unseen photos; when none remain the sampler
//! reports `Draw::Finished` instead of recycling. Within that pool, styles not
//! yet shown in the current cycle are preferred so consecutive rounds spread
//! across the catalog.

use crate::catalog::{Catalog, StyleRecord};
use crate::persist::{keys, load_string_set, save_string_set};
use crate::store::{KeyValueStore, StoreError};
use rand::Rng;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// The style and photo a round asks about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub style: Arc<StyleRecord>,
    pub photo_url: String,
}

/// Result of drawing the next round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw {
    Target(Target),
    /// Every photo of every enabled style has been shown.
    Finished,
}

/// Seen photos, enabled styles and the current cycle.
#[derive(Debug, Clone, Default)]
pub struct RoundSampler {
    seen_photos: BTreeSet<String>,
    enabled_styles: BTreeSet<String>,
    shown_this_cycle: HashSet<String>,
}

impl RoundSampler {
    /// Restore persisted state. The cycle always starts empty.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            seen_photos: load_string_set(store, keys::SEEN_PHOTOS),
            enabled_styles: load_string_set(store, keys::ENABLED_STYLES),
            shown_this_cycle: HashSet::new(),
        }
    }

    pub fn seen_photos(&self) -> &BTreeSet<String> {
        &self.seen_photos
    }

    /// The stored selection; empty means every style.
    pub fn enabled_styles(&self) -> &BTreeSet<String> {
        &self.enabled_styles
    }

    pub fn shown_this_cycle(&self) -> &HashSet<String> {
        &self.shown_this_cycle
    }

    /// Styles the player opted into, or all styles when the selection matches nothing.
    pub fn enabled_pool<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Arc<StyleRecord>> {
        let selected: Vec<_> = catalog
            .iter()
            .filter(|s| self.enabled_styles.contains(&s.name))
            .collect();

        if selected.is_empty() {
            catalog.iter().collect()
        } else {
            selected
        }
    }

    pub fn is_enabled(&self, catalog: &Catalog, name: &str) -> bool {
        self.enabled_pool(catalog).iter().any(|s| s.name == name)
    }

    fn unseen_photos<'a>(&self, style: &'a StyleRecord) -> Vec<&'a String> {
        style
            .photo_urls
            .iter()
            .filter(|url| !self.seen_photos.contains(*url))
            .collect()
    }

    /// Enabled styles that still have at least one unseen photo.
    pub fn eligible_pool<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Arc<StyleRecord>> {
        self.enabled_pool(catalog)
            .into_iter()
            .filter(|s| !self.unseen_photos(s).is_empty())
            .collect()
    }

    /// Unseen photos left across the enabled pool.
    pub fn remaining_photos(&self, catalog: &Catalog) -> usize {
        self.enabled_pool(catalog)
            .iter()
            .map(|s| self.unseen_photos(s).len())
            .sum()
    }

    /// Pick the next target and mark its photo as seen.
    pub fn draw<R: Rng>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
        store: &mut dyn KeyValueStore,
    ) -> Result<Draw, StoreError> {
        let eligible = self.eligible_pool(catalog);
        if eligible.is_empty() {
            tracing::info!(seen = self.seen_photos.len(), "photo pool exhausted");
            return Ok(Draw::Finished);
        }

        let fresh: Vec<_> = eligible
            .iter()
            .copied()
            .filter(|s| !self.shown_this_cycle.contains(&s.name))
            .collect();
        let candidates = if fresh.is_empty() {
            tracing::debug!(styles = eligible.len(), "style cycle complete, starting over");
            self.shown_this_cycle.clear();
            eligible
        } else {
            fresh
        };

        let style = candidates[rng.gen_range(0..candidates.len())];
        let photos = self.unseen_photos(style);
        let photo_url = photos[rng.gen_range(0..photos.len())].clone();

        let mut seen = self.seen_photos.clone();
        seen.insert(photo_url.clone());
        save_string_set(store, keys::SEEN_PHOTOS, &seen)?;
        self.seen_photos = seen;
        self.shown_this_cycle.insert(style.name.clone());

        tracing::debug!(style = %style.name, photo = %photo_url, "drew round target");

        Ok(Draw::Target(Target {
            style: Arc::clone(style),
            photo_url,
        }))
    }

    /// Flip a style in or out of the enabled selection. Returns whether it is now enabled.
    ///
    /// Names that are not in the catalog are ignored. The last enabled style
    /// cannot be disabled, since an empty selection means every style.
    pub fn toggle_style(
        &mut self,
        catalog: &Catalog,
        name: &str,
        store: &mut dyn KeyValueStore,
    ) -> Result<bool, StoreError> {
        if catalog.get(name).is_none() {
            tracing::warn!(style = name, "cannot toggle unknown style");
            return Ok(false);
        }

        let mut selection: BTreeSet<String> = self
            .enabled_pool(catalog)
            .iter()
            .map(|s| s.name.clone())
            .collect();

        if selection.remove(name) {
            if selection.is_empty() {
                tracing::warn!(style = name, "cannot disable the last enabled style");
                return Ok(true);
            }
        } else {
            selection.insert(name.to_string());
        }

        self.set_enabled_styles(selection, store)?;
        Ok(self.is_enabled(catalog, name))
    }

    /// Replace the enabled selection. An empty selection means every style.
    pub fn set_enabled_styles(
        &mut self,
        names: impl IntoIterator<Item = String>,
        store: &mut dyn KeyValueStore,
    ) -> Result<(), StoreError> {
        self.enabled_styles = names.into_iter().collect();
        self.shown_this_cycle
            .retain(|name| self.enabled_styles.is_empty() || self.enabled_styles.contains(name));
        save_string_set(store, keys::ENABLED_STYLES, &self.enabled_styles)
    }

    /// Forget every seen photo and the current cycle. The enabled selection is kept.
    pub fn reset(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        self.seen_photos.clear();
        self.shown_this_cycle.clear();
        store.remove(keys::SEEN_PHOTOS)
    }
}
