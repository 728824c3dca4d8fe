//! Architectural style catalog.
//!
//! The catalog is loaded once at startup from JSON and is immutable for the
//! rest of the session. Records are shared through `Arc` so the alias index,
//! the sampler and the session can all hold the same allocation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errors from loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style at index {index} has a blank name")]
    BlankName { index: usize },

    #[error("Duplicate style name: {0}")]
    DuplicateName(String),

    #[error("Catalog contains no styles")]
    Empty,
}

/// Normalize free text for comparison: trimmed and lowercased.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// ============================================================================
// Hint Keys
// ============================================================================

/// The six compared attributes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKey {
    Period,
    Region,
    Form,
    Materials,
    Decor,
    Idea,
}

impl HintKey {
    /// All keys in the fixed output order.
    pub const ALL: [HintKey; 6] = [
        HintKey::Period,
        HintKey::Region,
        HintKey::Form,
        HintKey::Materials,
        HintKey::Decor,
        HintKey::Idea,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HintKey::Period => "period",
            HintKey::Region => "region",
            HintKey::Form => "form",
            HintKey::Materials => "materials",
            HintKey::Decor => "decor",
            HintKey::Idea => "idea",
        }
    }

    /// Player-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            HintKey::Period => "Период",
            HintKey::Region => "Регион",
            HintKey::Form => "Форма",
            HintKey::Materials => "Материалы",
            HintKey::Decor => "Декор",
            HintKey::Idea => "Идея",
        }
    }
}

impl fmt::Display for HintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Style Records
// ============================================================================

/// A single architectural style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    /// Canonical, unique name.
    pub name: String,

    /// Alternative names accepted as guesses.
    #[serde(default)]
    pub aliases: Vec<String>,

    pub period: String,
    pub region: String,
    pub form: String,
    pub materials: String,
    pub decor: String,
    pub idea: String,

    /// Photos of buildings in this style. Empty means the style is never drawn.
    pub photo_urls: Vec<String>,
}

impl StyleRecord {
    /// Raw attribute value for a hint key.
    pub fn attribute(&self, key: HintKey) -> &str {
        match key {
            HintKey::Period => &self.period,
            HintKey::Region => &self.region,
            HintKey::Form => &self.form,
            HintKey::Materials => &self.materials,
            HintKey::Decor => &self.decor,
            HintKey::Idea => &self.idea,
        }
    }

    /// Canonical name followed by aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Normalized name and aliases, blanks dropped.
    pub fn normalized_names(&self) -> HashSet<String> {
        self.names()
            .map(normalize)
            .filter(|n| !n.is_empty())
            .collect()
    }

    /// Whether the style can be chosen as a round target.
    pub fn is_selectable(&self) -> bool {
        !self.photo_urls.is_empty()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The ordered, immutable set of styles for a session.
#[derive(Debug, Clone)]
pub struct Catalog {
    styles: Vec<Arc<StyleRecord>>,
}

impl Catalog {
    /// Build a catalog from records, validating names.
    pub fn from_styles(styles: Vec<StyleRecord>) -> Result<Self, CatalogError> {
        if styles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, style) in styles.iter().enumerate() {
            if style.name.trim().is_empty() {
                return Err(CatalogError::BlankName { index });
            }
            if !seen.insert(style.name.as_str()) {
                return Err(CatalogError::DuplicateName(style.name.clone()));
            }
            if !style.is_selectable() {
                tracing::warn!(style = %style.name, "style has no photos and will never be drawn");
            }
        }

        tracing::debug!(count = styles.len(), "catalog loaded");

        Ok(Self {
            styles: styles.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a catalog from a JSON array of style records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let styles: Vec<StyleRecord> = serde_json::from_str(json)?;
        Self::from_styles(styles)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn styles(&self) -> &[Arc<StyleRecord>] {
        &self.styles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<StyleRecord>> {
        self.styles.iter()
    }

    /// Find a style by its exact canonical name.
    pub fn get(&self, name: &str) -> Option<&Arc<StyleRecord>> {
        self.styles.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Total number of photos across all styles.
    pub fn photo_count(&self) -> usize {
        self.styles.iter().map(|s| s.photo_urls.len()).sum()
    }
}

// ============================================================================
// Sample Data
// ============================================================================

fn sample_style(
    name: &str,
    aliases: &[&str],
    attributes: [&str; 6],
    folder: &str,
    photos: usize,
) -> StyleRecord {
    let [period, region, form, materials, decor, idea] = attributes;
    StyleRecord {
        name: name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        period: period.to_string(),
        region: region.to_string(),
        form: form.to_string(),
        materials: materials.to_string(),
        decor: decor.to_string(),
        idea: idea.to_string(),
        photo_urls: (1..=photos)
            .map(|i| format!("/archistyle_photos/{folder}/{i:02}.jpg"))
            .collect(),
    }
}

/// Build a small catalog of five European styles, three photos each.
pub fn sample_catalog() -> Catalog {
    let styles = vec![
        sample_style(
            "Готическая архитектура",
            &["Готика", "gothic", "готический стиль"],
            [
                "XII–XVI вв.",
                "Европа",
                "стрельчатые арки, шпили, вертикальность",
                "камень, стекло",
                "витражи, розы, скульптура",
                "устремлённость к небу и свет",
            ],
            "gothic",
            3,
        ),
        sample_style(
            "Романская архитектура",
            &["romanesque", "романский стиль"],
            [
                "X–XII вв.",
                "Европа",
                "полуциркульные арки, массивные стены",
                "камень",
                "скульптура, аркатурные пояса",
                "крепость веры",
            ],
            "romanesque",
            3,
        ),
        sample_style(
            "Архитектура барокко",
            &["Барокко", "baroque"],
            [
                "XVII–XVIII вв.",
                "Европа и Латинская Америка",
                "криволинейные фасады, купола",
                "камень, штукатурка, мрамор",
                "лепнина, скульптура, позолота",
                "динамика и торжественность",
            ],
            "baroque",
            3,
        ),
        sample_style(
            "Палладианская архитектура",
            &["Палладианство", "palladian"],
            [
                "XVI–XVIII вв.",
                "Италия, Англия",
                "симметрия, портики, фронтоны",
                "кирпич, штукатурка",
                "колонны, фронтоны",
                "гармония пропорций",
            ],
            "palladian",
            3,
        ),
        sample_style(
            "Архитектура греческого возрождения",
            &["Неогрек", "greek revival", "neoclassicism"],
            [
                "1780–1860 гг.",
                "Европа, США",
                "портики, фронтоны, симметрия",
                "камень, штукатурка",
                "колонны дорического ордера",
                "демократия и античные идеалы",
            ],
            "neoclassicism",
            3,
        ),
    ];

    Catalog {
        styles: styles.into_iter().map(Arc::new).collect(),
    }
}
