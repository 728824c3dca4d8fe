//! Free-text lookup of styles by name or alias.

use crate::catalog::{normalize, Catalog, StyleRecord};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of resolving guess text against the alias index.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The text named a known style.
    Resolved(Arc<StyleRecord>),
    /// The text matched nothing; carries the original input.
    Unresolved(String),
}

impl Resolution {
    pub fn style(&self) -> Option<&Arc<StyleRecord>> {
        match self {
            Resolution::Resolved(style) => Some(style),
            Resolution::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Maps normalized names and aliases to their owning style.
///
/// The first style to register a key owns it; later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    entries: HashMap<String, Arc<StyleRecord>>,
}

impl AliasIndex {
    /// Build the index from a catalog, in catalog order.
    pub fn build(catalog: &Catalog) -> Self {
        let mut entries = HashMap::new();

        for style in catalog.iter() {
            for name in style.names() {
                let key = normalize(name);
                if key.is_empty() {
                    continue;
                }
                match entries.entry(key) {
                    Entry::Occupied(owner) => {
                        if !Arc::ptr_eq(owner.get(), style) {
                            tracing::debug!(
                                alias = %owner.key(),
                                owner = %owner.get().name,
                                ignored = %style.name,
                                "alias already registered"
                            );
                        }
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(Arc::clone(style));
                    }
                }
            }
        }

        Self { entries }
    }

    /// Resolve guess text to a style.
    pub fn resolve(&self, text: &str) -> Resolution {
        match self.lookup(text) {
            Some(style) => Resolution::Resolved(Arc::clone(style)),
            None => Resolution::Unresolved(text.to_string()),
        }
    }

    /// Look up a style without allocating a resolution.
    pub fn lookup(&self, text: &str) -> Option<&Arc<StyleRecord>> {
        self.entries.get(&normalize(text))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn test_resolve_by_name_and_alias() {
        let catalog = sample_catalog();
        let index = AliasIndex::build(&catalog);

        let by_name = index.resolve("Романская архитектура");
        let by_alias = index.resolve("  ROMANESQUE ");

        assert_eq!(by_name.style().unwrap().name, "Романская архитектура");
        assert_eq!(by_alias.style().unwrap().name, "Романская архитектура");
    }

    #[test]
    fn test_every_name_is_a_key() {
        let catalog = sample_catalog();
        let index = AliasIndex::build(&catalog);

        for style in catalog.iter() {
            let resolved = index.lookup(&style.name).unwrap();
            assert!(Arc::ptr_eq(resolved, style));
        }
    }

    #[test]
    fn test_unresolved_keeps_text() {
        let index = AliasIndex::build(&sample_catalog());
        match index.resolve("xyzzy") {
            Resolution::Unresolved(text) => assert_eq!(text, "xyzzy"),
            Resolution::Resolved(style) => panic!("unexpected match: {}", style.name),
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let index = AliasIndex::build(&sample_catalog());
        let first = index.resolve("gothic");
        let second = index.resolve("gothic");
        assert!(Arc::ptr_eq(first.style().unwrap(), second.style().unwrap()));
    }

    #[test]
    fn test_first_registrant_wins() {
        let base = sample_catalog();
        let mut first = base.styles()[0].as_ref().clone();
        let mut second = base.styles()[1].as_ref().clone();
        first.aliases = vec!["shared".to_string()];
        second.aliases = vec!["Shared ".to_string(), String::new()];

        let catalog = Catalog::from_styles(vec![first.clone(), second]).unwrap();
        let index = AliasIndex::build(&catalog);

        assert_eq!(index.lookup("shared").unwrap().name, first.name);
        // Two names plus one shared alias; the blank alias is skipped.
        assert_eq!(index.len(), 3);
    }
}
