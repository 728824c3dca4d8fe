//! Architectural style guessing game engine.
//!
//! The player is shown a photo of a building and names its style. Every
//! guess is graded attribute by attribute (period, region, form, materials,
//! decor, idea) as correct, partial or wrong.
//!
//! This crate provides:
//! - Catalog loading and free-text lookup by name or alias
//! - The hint engine comparing a guessed style against the target
//! - Non-repeating photo sampling backed by persisted state
//! - The session state machine with streaks and totals
//!
//! # Quick Start
//!
//! ```ignore
//! use archistyle_core::{Catalog, GameSession, JsonFileStore, SessionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::load("styles.json")?;
//!     let store = JsonFileStore::open("progress.json")?;
//!     let mut session = GameSession::new(catalog, store, SessionConfig::new())?;
//!
//!     let outcome = session.submit_guess("gothic")?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod alias;
pub mod catalog;
pub mod hints;
pub mod persist;
pub mod sampling;
pub mod session;
pub mod stats;
pub mod store;
pub mod testing;

// Primary public API
pub use alias::{AliasIndex, Resolution};
pub use catalog::{sample_catalog, Catalog, CatalogError, HintKey, StyleRecord};
pub use hints::{compare_attributes, HintResult, HintStatus};
pub use persist::Theme;
pub use sampling::{Draw, RoundSampler, Target};
pub use session::{
    Attempt, GameSession, GuessOutcome, IgnoreReason, RoundStatus, SessionConfig, SessionError,
    SettleTicket,
};
pub use stats::SessionStats;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use testing::TestHarness;
