//! GameSession - the primary public API for a guessing session.
//!
//! A session owns the catalog, the alias index, the persisted progress and
//! the state of the current round. Every transition is a method call driven
//! by one player event; persisted values are written before the call returns.
//!
//! ```text
//! start_round ──► Playing ──submit_guess (win)──► Won ──┐
//!                    │                                  │
//!                    └──────reveal──────► Revealed ─────┤
//!                                                       ▼
//!                 Finished ◄── pool exhausted ── start_round
//! ```

use crate::alias::{AliasIndex, Resolution};
use crate::catalog::Catalog;
use crate::hints::{compare_attributes, reveal_hints, HintResult, HINT_COUNT};
use crate::persist::Theme;
use crate::sampling::{Draw, RoundSampler, Target};
use crate::stats::SessionStats;
use crate::store::{KeyValueStore, StoreError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors from GameSession operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Configuration for creating a new game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Reveal animation time per hint.
    pub settle_delay_per_hint: Duration,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            seed: None,
            settle_delay_per_hint: Duration::from_millis(300),
        }
    }

    /// Use a deterministic RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-hint animation delay.
    pub fn with_settle_delay_per_hint(mut self, delay: Duration) -> Self {
        self.settle_delay_per_hint = delay;
        self
    }

    /// Total time before an attempt stops animating.
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay_per_hint * HINT_COUNT as u32
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Playing,
    Won,
    Revealed,
    /// No unseen photos remain for the enabled styles.
    Finished,
}

/// One submitted guess and its feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub guess: String,
    pub hints: Vec<HintResult>,
    /// Cosmetic: true until the attempt's settle ticket fires.
    pub animating: bool,
}

/// Handle for clearing an attempt's animation once its delay has passed.
///
/// Tagged with the round it was issued in; settling a ticket from an earlier
/// round does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    round: u64,
}

impl SettleTicket {
    pub fn round(&self) -> u64 {
        self.round
    }
}

/// Why a guess was dropped without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The previous attempt is still animating.
    Animating,
    BlankGuess,
    /// The round is already won, revealed or finished.
    NotPlaying,
    NoTarget,
}

/// Result of submitting a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Ignored(IgnoreReason),
    /// The text matched no style; nothing was recorded.
    Unrecognized { message: String },
    Miss {
        hints: Vec<HintResult>,
        settle: SettleTicket,
    },
    Won {
        hints: Vec<HintResult>,
        settle: SettleTicket,
    },
}

/// A guessing session for one player.
pub struct GameSession {
    catalog: Catalog,
    index: AliasIndex,
    store: Box<dyn KeyValueStore + Send>,
    rng: StdRng,
    config: SessionConfig,

    sampler: RoundSampler,
    stats: SessionStats,
    theme: Theme,

    target: Option<Target>,
    status: RoundStatus,
    guess_text: String,
    attempts: Vec<Attempt>,
    error: Option<String>,
    round: u64,
    /// Whether this round has already been counted as played.
    counted: bool,
}

impl GameSession {
    /// Create a session, restore persisted progress and start the first round.
    pub fn new(
        catalog: Catalog,
        store: impl KeyValueStore + Send + 'static,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let index = AliasIndex::build(&catalog);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let sampler = RoundSampler::load(&store);
        let stats = SessionStats::load(&store);
        let theme = Theme::load(&store);

        tracing::info!(
            styles = catalog.len(),
            seen = sampler.seen_photos().len(),
            played = stats.total_games_played,
            "session restored"
        );

        let mut session = Self {
            catalog,
            index,
            store: Box::new(store),
            rng,
            config,
            sampler,
            stats,
            theme,
            target: None,
            status: RoundStatus::Finished,
            guess_text: String::new(),
            attempts: Vec::new(),
            error: None,
            round: 0,
            counted: false,
        };
        session.begin_round()?;
        Ok(session)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Start a new round once the current one is over.
    ///
    /// Does nothing while a round is still being played, or once the photo
    /// pool is exhausted; only `reset_progress` leaves `Finished`.
    pub fn start_round(&mut self) -> Result<RoundStatus, SessionError> {
        match self.status {
            RoundStatus::Playing if self.target.is_some() => {
                tracing::debug!(round = self.round, "round still in progress");
                return Ok(self.status);
            }
            RoundStatus::Finished => {
                tracing::debug!(round = self.round, "pool exhausted, reset to play again");
                return Ok(self.status);
            }
            _ => {}
        }
        self.begin_round()
    }

    fn begin_round(&mut self) -> Result<RoundStatus, SessionError> {
        let draw = self
            .sampler
            .draw(&self.catalog, &mut self.rng, &mut *self.store)?;

        self.round += 1;
        self.attempts.clear();
        self.guess_text.clear();
        self.error = None;
        self.counted = false;

        match draw {
            Draw::Target(target) => {
                tracing::info!(round = self.round, photo = %target.photo_url, "round started");
                self.target = Some(target);
                self.status = RoundStatus::Playing;
            }
            Draw::Finished => {
                tracing::info!(round = self.round, "no unseen photos left");
                self.target = None;
                self.status = RoundStatus::Finished;
            }
        }

        Ok(self.status)
    }

    /// Update the guess input without submitting it.
    pub fn set_guess_text(&mut self, text: impl Into<String>) {
        self.guess_text = text.into();
    }

    /// Submit the current guess input.
    pub fn submit_current_guess(&mut self) -> Result<GuessOutcome, SessionError> {
        let text = self.guess_text.clone();
        self.submit_guess(&text)
    }

    /// Evaluate a guess against the current target.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, SessionError> {
        self.guess_text = text.to_string();

        if self.is_animating() {
            return Ok(GuessOutcome::Ignored(IgnoreReason::Animating));
        }
        if text.trim().is_empty() {
            return Ok(GuessOutcome::Ignored(IgnoreReason::BlankGuess));
        }
        if self.status != RoundStatus::Playing {
            return Ok(GuessOutcome::Ignored(IgnoreReason::NotPlaying));
        }
        let Some(target) = self.target.as_ref().map(|t| Arc::clone(&t.style)) else {
            return Ok(GuessOutcome::Ignored(IgnoreReason::NoTarget));
        };

        let guessed = match self.index.resolve(text) {
            Resolution::Resolved(style) => style,
            Resolution::Unresolved(raw) => {
                let message = format!(
                    "Стиль «{}» не найден. Попробуйте другое название.",
                    raw.trim()
                );
                tracing::debug!(guess = %raw, "unrecognized guess");
                self.error = Some(message.clone());
                self.guess_text.clear();
                return Ok(GuessOutcome::Unrecognized { message });
            }
        };
        self.error = None;

        let first_attempt = self.attempts.is_empty();
        if !self.counted {
            self.counted = true;
            self.stats.record_played();
        }

        // Synonyms count: any name of the guessed style may match any name of the target.
        let won = !target
            .normalized_names()
            .is_disjoint(&guessed.normalized_names());

        let compared = if won { Arc::clone(&target) } else { guessed };
        let hints = compare_attributes(&target, &Resolution::Resolved(compared));

        self.attempts.push(Attempt {
            guess: text.trim().to_string(),
            hints: hints.clone(),
            animating: true,
        });

        if won {
            self.stats.record_win();
            self.status = RoundStatus::Won;
        } else if first_attempt {
            self.stats.break_streak();
        }
        self.stats.save(&mut *self.store)?;

        tracing::debug!(
            round = self.round,
            guess = %text.trim(),
            won,
            attempts = self.attempts.len(),
            "guess evaluated"
        );

        let settle = SettleTicket { round: self.round };
        Ok(if won {
            GuessOutcome::Won { hints, settle }
        } else {
            GuessOutcome::Miss { hints, settle }
        })
    }

    /// Stop the latest attempt animating and clear the input.
    ///
    /// Returns false when the ticket belongs to an earlier round.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket.round != self.round {
            tracing::debug!(ticket = ticket.round, round = self.round, "stale settle ticket");
            return false;
        }
        if let Some(last) = self.attempts.last_mut() {
            last.animating = false;
        }
        self.guess_text.clear();
        true
    }

    /// Give up on the current round and show the target's attributes.
    ///
    /// Returns `None` unless a round is being played.
    pub fn reveal(&mut self) -> Result<Option<Vec<HintResult>>, SessionError> {
        if self.status != RoundStatus::Playing {
            return Ok(None);
        }
        let Some(target) = self.target.as_ref() else {
            return Ok(None);
        };
        let hints = reveal_hints(&target.style);

        if !self.counted {
            self.counted = true;
            self.stats.record_played();
        }
        self.stats.break_streak();
        self.stats.save(&mut *self.store)?;
        self.status = RoundStatus::Revealed;

        tracing::debug!(round = self.round, "target revealed");
        Ok(Some(hints))
    }

    /// Forget all seen photos and statistics, then start over.
    pub fn reset_progress(&mut self) -> Result<RoundStatus, SessionError> {
        self.sampler.reset(&mut *self.store)?;
        self.stats.reset(&mut *self.store)?;
        tracing::info!("progress reset");
        self.begin_round()
    }

    /// Flip a style in or out of the enabled selection, by name or alias.
    ///
    /// Returns the new state, or `None` when the name matches no style.
    pub fn toggle_style(&mut self, name: &str) -> Result<Option<bool>, SessionError> {
        let Some(style) = self.index.lookup(name).map(Arc::clone) else {
            return Ok(None);
        };
        let enabled = self
            .sampler
            .toggle_style(&self.catalog, &style.name, &mut *self.store)?;
        Ok(Some(enabled))
    }

    /// Replace the enabled selection with canonical style names.
    pub fn set_enabled_styles(
        &mut self,
        names: impl IntoIterator<Item = String>,
    ) -> Result<(), SessionError> {
        self.sampler.set_enabled_styles(names, &mut *self.store)?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), SessionError> {
        self.theme = theme;
        theme.save(&mut *self.store)?;
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn alias_index(&self) -> &AliasIndex {
        &self.index
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    pub fn is_animating(&self) -> bool {
        self.attempts.last().is_some_and(|a| a.animating)
    }

    pub fn guess_text(&self) -> &str {
        &self.guess_text
    }

    /// Message for the last unrecognized guess, cleared by the next valid one.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Monotonic round counter.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn settle_delay(&self) -> Duration {
        self.config.settle_delay()
    }

    pub fn sampler(&self) -> &RoundSampler {
        &self.sampler
    }

    /// Unseen photos left for the enabled styles.
    pub fn remaining_photos(&self) -> usize {
        self.sampler.remaining_photos(&self.catalog)
    }

    pub fn is_style_enabled(&self, name: &str) -> bool {
        self.sampler.is_enabled(&self.catalog, name)
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::hints::HintStatus;
    use crate::persist::keys;
    use crate::store::MemoryStore;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn new_session() -> GameSession {
        GameSession::new(
            sample_catalog(),
            MemoryStore::new(),
            SessionConfig::new().with_seed(17),
        )
        .unwrap()
    }

    /// Memory store whose writes can be switched off from the outside.
    struct FlakyStore {
        inner: MemoryStore,
        failing: Arc<AtomicBool>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(StoreError::Io(std::io::Error::other("disk full")));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    fn target_name(session: &GameSession) -> String {
        session.target().unwrap().style.name.clone()
    }

    fn other_name(session: &GameSession) -> String {
        let target = target_name(session);
        session
            .catalog()
            .iter()
            .find(|s| s.name != target)
            .unwrap()
            .name
            .clone()
    }

    fn settle_last(session: &mut GameSession, outcome: &GuessOutcome) {
        match outcome {
            GuessOutcome::Miss { settle, .. } | GuessOutcome::Won { settle, .. } => {
                assert!(session.settle(*settle));
            }
            other => panic!("expected an evaluated guess, got {other:?}"),
        }
    }

    #[test]
    fn test_new_session_starts_playing() {
        let session = new_session();
        assert_eq!(session.status(), RoundStatus::Playing);
        assert_eq!(session.round(), 1);
        assert!(session.attempts().is_empty());

        let target = session.target().unwrap();
        assert!(session.sampler().seen_photos().contains(&target.photo_url));
    }

    #[test]
    fn test_correct_guess_wins() {
        let mut session = new_session();
        let name = target_name(&session);

        let outcome = session.submit_guess(&name).unwrap();
        let GuessOutcome::Won { hints, .. } = outcome else {
            panic!("expected a win");
        };
        assert!(hints.iter().all(|h| h.status == HintStatus::Correct));
        assert_eq!(session.status(), RoundStatus::Won);
        assert_eq!(session.stats().total_games_played, 1);
        assert_eq!(session.stats().total_games_won, 1);
        assert_eq!(session.stats().current_streak, 1);
        assert_eq!(session.stats().max_streak, 1);
    }

    #[test]
    fn test_alias_guess_wins_once() {
        let mut session = new_session();
        let alias = session.target().unwrap().style.aliases[0].to_uppercase();

        let outcome = session.submit_guess(&format!("  {alias} ")).unwrap();
        assert!(matches!(outcome, GuessOutcome::Won { .. }));
        settle_last(&mut session, &outcome);

        // Further guesses are ignored once the round is won.
        assert_eq!(
            session.submit_guess(&alias).unwrap(),
            GuessOutcome::Ignored(IgnoreReason::NotPlaying)
        );
        assert_eq!(session.stats().total_games_won, 1);
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn test_unrecognized_guess_records_nothing() {
        let mut session = new_session();

        let outcome = session.submit_guess("xyzzy").unwrap();
        assert!(matches!(outcome, GuessOutcome::Unrecognized { .. }));
        assert!(session.error_message().unwrap().contains("xyzzy"));
        assert!(session.attempts().is_empty());
        assert_eq!(session.guess_text(), "");
        assert_eq!(session.stats().total_games_played, 0);
        assert_eq!(session.status(), RoundStatus::Playing);
    }

    #[test]
    fn test_valid_guess_clears_error() {
        let mut session = new_session();
        session.submit_guess("xyzzy").unwrap();
        let other = other_name(&session);
        session.submit_guess(&other).unwrap();
        assert_eq!(session.error_message(), None);
    }

    #[test]
    fn test_blank_guess_is_ignored() {
        let mut session = new_session();
        assert_eq!(
            session.submit_guess("   ").unwrap(),
            GuessOutcome::Ignored(IgnoreReason::BlankGuess)
        );
        assert!(session.attempts().is_empty());
    }

    #[test]
    fn test_guess_ignored_while_animating() {
        let mut session = new_session();
        let other = other_name(&session);

        let outcome = session.submit_guess(&other).unwrap();
        assert!(session.is_animating());
        assert_eq!(session.guess_text(), other);

        assert_eq!(
            session.submit_guess(&other).unwrap(),
            GuessOutcome::Ignored(IgnoreReason::Animating)
        );

        settle_last(&mut session, &outcome);
        assert!(!session.is_animating());
        assert_eq!(session.guess_text(), "");
        assert!(matches!(
            session.submit_guess(&other).unwrap(),
            GuessOutcome::Miss { .. }
        ));
    }

    #[test]
    fn test_first_miss_breaks_streak() {
        let mut session = new_session();
        let name = target_name(&session);
        session.submit_guess(&name).unwrap();
        session.start_round().unwrap();
        assert_eq!(session.stats().current_streak, 1);

        let other = other_name(&session);
        session.submit_guess(&other).unwrap();
        assert_eq!(session.stats().current_streak, 0);
        assert_eq!(session.stats().max_streak, 1);
        assert_eq!(session.stats().total_games_played, 2);
    }

    #[test]
    fn test_played_counts_once_per_round() {
        let mut session = new_session();
        let other = other_name(&session);

        for _ in 0..3 {
            let outcome = session.submit_guess(&other).unwrap();
            settle_last(&mut session, &outcome);
        }
        assert_eq!(session.attempts().len(), 3);
        assert_eq!(session.stats().total_games_played, 1);
    }

    #[test]
    fn test_reveal() {
        let mut session = new_session();
        let name = target_name(&session);
        session.submit_guess(&name).unwrap();
        session.start_round().unwrap();

        let hints = session.reveal().unwrap().unwrap();
        let target = session.target().unwrap();
        assert!(hints.iter().all(|h| h.status == HintStatus::Correct));
        assert_eq!(hints[0].value.as_deref(), Some(target.style.period.as_str()));

        assert_eq!(session.status(), RoundStatus::Revealed);
        assert_eq!(session.stats().current_streak, 0);
        assert_eq!(session.stats().total_games_played, 2);
        assert_eq!(session.stats().total_games_won, 1);

        // Only from playing.
        assert_eq!(session.reveal().unwrap(), None);
    }

    #[test]
    fn test_reveal_after_guess_counts_once() {
        let mut session = new_session();
        let other = other_name(&session);
        session.submit_guess(&other).unwrap();
        session.reveal().unwrap();
        assert_eq!(session.stats().total_games_played, 1);
    }

    #[test]
    fn test_start_round_ignored_while_playing() {
        let mut session = new_session();
        let photo = session.target().unwrap().photo_url.clone();
        session.start_round().unwrap();
        assert_eq!(session.round(), 1);
        assert_eq!(session.target().unwrap().photo_url, photo);
    }

    #[test]
    fn test_stale_settle_is_noop() {
        let mut session = new_session();
        let name = target_name(&session);
        let outcome = session.submit_guess(&name).unwrap();
        let GuessOutcome::Won { settle, .. } = outcome else {
            panic!("expected a win");
        };

        session.start_round().unwrap();
        assert!(!session.settle(settle));
        assert_eq!(settle.round(), 1);
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn test_finished_after_all_photos() {
        let mut session = new_session();
        let total = session.catalog().photo_count();

        for _ in 0..total {
            assert_eq!(session.status(), RoundStatus::Playing);
            session.reveal().unwrap();
            session.start_round().unwrap();
        }

        assert_eq!(session.status(), RoundStatus::Finished);
        assert!(session.target().is_none());
        assert_eq!(
            session.submit_guess("gothic").unwrap(),
            GuessOutcome::Ignored(IgnoreReason::NotPlaying)
        );
        assert_eq!(session.start_round().unwrap(), RoundStatus::Finished);
    }

    #[test]
    fn test_finished_stays_finished_until_reset() {
        let mut session = new_session();
        let keep = session.catalog().styles()[0].name.clone();
        session.set_enabled_styles(vec![keep]).unwrap();
        session.reveal().unwrap();

        while session.start_round().unwrap() == RoundStatus::Playing {
            session.reveal().unwrap();
        }
        let round = session.round();

        session.set_enabled_styles(Vec::new()).unwrap();
        assert!(session.remaining_photos() > 0);
        assert_eq!(session.start_round().unwrap(), RoundStatus::Finished);
        assert_eq!(session.round(), round);

        assert_eq!(session.reset_progress().unwrap(), RoundStatus::Playing);
    }

    #[test]
    fn test_failed_draw_keeps_round_state() {
        let failing = Arc::new(AtomicBool::new(false));
        let store = FlakyStore {
            inner: MemoryStore::new(),
            failing: Arc::clone(&failing),
        };
        let mut session =
            GameSession::new(sample_catalog(), store, SessionConfig::new().with_seed(17)).unwrap();
        let photo = session.target().unwrap().photo_url.clone();
        let seen = session.sampler().seen_photos().len();

        let wrong = other_name(&session);
        let outcome = session.submit_guess(&wrong).unwrap();
        let GuessOutcome::Miss { settle, .. } = outcome else {
            panic!("expected a miss");
        };
        session.reveal().unwrap();

        failing.store(true, Ordering::SeqCst);
        assert!(session.start_round().is_err());

        assert_eq!(session.round(), 1);
        assert_eq!(session.status(), RoundStatus::Revealed);
        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.target().unwrap().photo_url, photo);
        assert_eq!(session.sampler().seen_photos().len(), seen);
        assert!(session.settle(settle));

        failing.store(false, Ordering::SeqCst);
        assert_eq!(session.start_round().unwrap(), RoundStatus::Playing);
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn test_reset_progress() {
        let mut session = new_session();
        let name = target_name(&session);
        session.submit_guess(&name).unwrap();

        let status = session.reset_progress().unwrap();
        assert_eq!(status, RoundStatus::Playing);
        assert_eq!(*session.stats(), SessionStats::default());
        assert_eq!(session.sampler().seen_photos().len(), 1);
        assert_eq!(
            session.remaining_photos(),
            session.catalog().photo_count() - 1
        );
        assert!(session.attempts().is_empty());
        assert_eq!(session.store().get(keys::TOTAL_GAMES_WON).unwrap(), None);
    }

    #[test]
    fn test_toggle_style_by_alias() {
        let mut session = new_session();
        assert_eq!(session.toggle_style("baroque").unwrap(), Some(false));
        assert!(!session.is_style_enabled("Архитектура барокко"));
        assert_eq!(session.toggle_style("Модерн").unwrap(), None);
    }

    #[test]
    fn test_theme_persists() {
        let mut session = new_session();
        assert_eq!(session.theme(), Theme::Dark);
        session.set_theme(Theme::Light).unwrap();
        assert_eq!(Theme::load(session.store()), Theme::Light);
    }

    #[test]
    fn test_settle_delay_scales_with_hints() {
        let config = SessionConfig::new().with_settle_delay_per_hint(Duration::from_millis(100));
        assert_eq!(config.settle_delay(), Duration::from_millis(600));
    }
}
