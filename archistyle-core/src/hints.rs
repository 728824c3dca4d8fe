//! Per-attribute comparison of a guessed style against the round target.
//!
//! Each of the six attributes is graded independently:
//! - identical normalized text is `Correct`
//! - periods sharing an arabic-numeral token (century or year fragment) are `Partial`
//! - list-valued attributes sharing a comma/semicolon/slash/conjunction token are `Partial`
//! - anything else is `Wrong`
//!
//! Roman numerals are not converted, so `"XII–XVI вв."` never overlaps with
//! `"14 век"`.

use crate::alias::Resolution;
use crate::catalog::{normalize, HintKey, StyleRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of graded attributes per attempt.
pub const HINT_COUNT: usize = HintKey::ALL.len();

/// Leftmost-first: a four digit year is consumed as two-digit pairs.
static PERIOD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{1,2}|[0-9]{4}").expect("Invalid period token regex"));

static LIST_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;/]|\s+(?:и|and)\s+").expect("Invalid list separator regex"));

/// Grade of a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintStatus {
    Correct,
    Partial,
    Wrong,
}

/// Feedback for one attribute of one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResult {
    pub key: HintKey,
    pub label: String,
    pub status: HintStatus,
    /// The guessed style's raw value; `None` when the guess was not recognized.
    pub value: Option<String>,
}

/// Compare every attribute of `target` against the guess, in `HintKey::ALL` order.
pub fn compare_attributes(target: &StyleRecord, guess: &Resolution) -> Vec<HintResult> {
    match guess {
        Resolution::Unresolved(_) => HintKey::ALL
            .iter()
            .map(|&key| HintResult {
                key,
                label: key.label().to_string(),
                status: HintStatus::Wrong,
                value: None,
            })
            .collect(),
        Resolution::Resolved(guessed) => HintKey::ALL
            .iter()
            .map(|&key| {
                let value = guessed.attribute(key);
                HintResult {
                    key,
                    label: key.label().to_string(),
                    status: compare_values(key, target.attribute(key), value),
                    value: Some(value.to_string()),
                }
            })
            .collect(),
    }
}

/// The target's own attributes, all marked correct.
pub fn reveal_hints(target: &StyleRecord) -> Vec<HintResult> {
    HintKey::ALL
        .iter()
        .map(|&key| HintResult {
            key,
            label: key.label().to_string(),
            status: HintStatus::Correct,
            value: Some(target.attribute(key).to_string()),
        })
        .collect()
}

/// Grade a single pair of raw attribute values.
pub fn compare_values(key: HintKey, target: &str, guess: &str) -> HintStatus {
    let target = normalize(target);
    let guess = normalize(guess);

    if target == guess {
        return HintStatus::Correct;
    }

    let overlap = match key {
        HintKey::Period => {
            let target_tokens = period_tokens(&target);
            period_tokens(&guess)
                .iter()
                .any(|t| target_tokens.contains(t))
        }
        _ => {
            let target_tokens = list_tokens(&target);
            let guess_tokens = list_tokens(&guess);
            if !target_tokens.is_empty() && !guess_tokens.is_empty() {
                guess_tokens.iter().any(|t| target_tokens.contains(t))
            } else {
                !target.is_empty()
                    && !guess.is_empty()
                    && (target.contains(&guess) || guess.contains(&target))
            }
        }
    };

    if overlap {
        HintStatus::Partial
    } else {
        HintStatus::Wrong
    }
}

/// Arabic-numeral fragments of a period string.
fn period_tokens(value: &str) -> HashSet<&str> {
    PERIOD_TOKEN.find_iter(value).map(|m| m.as_str()).collect()
}

/// Items of a list-valued attribute.
fn list_tokens(value: &str) -> HashSet<&str> {
    LIST_SEPARATOR
        .split(value)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
