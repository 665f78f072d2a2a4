//! Keyed lookup tables for attributes and events.

use std::collections::HashMap;

use thiserror::Error;

use crate::attributes::AttributeDescriptor;
use crate::data::{HTML_ATTRIBUTES, HTML_EVENTS, SVG_ATTRIBUTES, SVG_EVENTS};
use crate::events::EventDescriptor;

/// A catalog entry: something with a lookup key and a display name to sort by.
pub trait Descriptor: Clone {
    fn key(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
}

impl Descriptor for AttributeDescriptor {
    fn key(&self) -> &'static str {
        self.key
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }
}

impl Descriptor for EventDescriptor {
    fn key(&self) -> &'static str {
        self.key
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A table entry references a key its catalog does not define.
    #[error("unknown {catalog} key: {key:?}")]
    UnresolvedKey { catalog: &'static str, key: String },
}

/// Sorts descriptors by display name, keeping the relative order of equal names.
pub fn sort_by_display_name<T: Descriptor>(items: &mut [T]) {
    items.sort_by(|a, b| a.display_name().cmp(b.display_name()));
}

#[derive(Debug, Clone)]
pub struct Catalog<T> {
    name: &'static str,
    entries: HashMap<&'static str, T>,
}

impl<T: Descriptor> Catalog<T> {
    /// Builds a catalog from its entries. A repeated key keeps the first entry.
    pub fn new(name: &'static str, entries: impl IntoIterator<Item = T>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.entry(entry.key()).or_insert(entry);
        }
        Self { name, entries: map }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Looks every key up in the order given and returns the descriptors sorted by display name.
    ///
    /// Stops at the first key that is missing.
    pub fn resolve(&self, keys: &[&str]) -> Result<Vec<T>, CatalogError> {
        let mut resolved = Vec::with_capacity(keys.len());
        for key in keys {
            let entry = self.get(key).ok_or_else(|| CatalogError::UnresolvedKey {
                catalog: self.name,
                key: key.to_string(),
            })?;
            resolved.push(entry.clone());
        }

        sort_by_display_name(&mut resolved);
        Ok(resolved)
    }
}

/// The four catalogs every composition call reads from.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub html_attributes: Catalog<AttributeDescriptor>,
    pub svg_attributes: Catalog<AttributeDescriptor>,
    pub html_events: Catalog<EventDescriptor>,
    pub svg_events: Catalog<EventDescriptor>,
}

impl Catalogs {
    /// The catalogs shipped with the generator.
    pub fn builtin() -> Self {
        let catalogs = Self {
            html_attributes: Catalog::new("html attribute", HTML_ATTRIBUTES.iter().map(Into::into)),
            svg_attributes: Catalog::new("svg attribute", SVG_ATTRIBUTES.iter().map(Into::into)),
            html_events: Catalog::new("html event", HTML_EVENTS.iter().map(Into::into)),
            svg_events: Catalog::new("svg event", SVG_EVENTS.iter().map(Into::into)),
        };

        tracing::debug!(
            html_attributes = catalogs.html_attributes.len(),
            svg_attributes = catalogs.svg_attributes.len(),
            html_events = catalogs.html_events.len(),
            svg_events = catalogs.svg_events.len(),
            "loaded catalogs"
        );

        catalogs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::ValueKind;
    use std::collections::HashSet;

    fn unique<'a>(keys: impl Iterator<Item = &'a str>) -> bool {
        let mut seen = HashSet::new();
        keys.into_iter().all(|key| seen.insert(key))
    }

    #[test]
    fn raw_tables_have_unique_keys() {
        assert!(unique(HTML_ATTRIBUTES.iter().map(|a| a.key)));
        assert!(unique(SVG_ATTRIBUTES.iter().map(|a| a.key)));
        assert!(unique(HTML_EVENTS.iter().map(|e| e.key)));
        assert!(unique(SVG_EVENTS.iter().map(|e| e.key)));

        let catalogs = Catalogs::builtin();
        assert_eq!(catalogs.html_attributes.len(), HTML_ATTRIBUTES.len());
        assert_eq!(catalogs.svg_attributes.len(), SVG_ATTRIBUTES.len());
        assert_eq!(catalogs.html_events.len(), HTML_EVENTS.len());
        assert_eq!(catalogs.svg_events.len(), SVG_EVENTS.len());
    }

    #[test]
    fn builtin_value_kinds_are_all_known() {
        let catalogs = Catalogs::builtin();
        for table in [&catalogs.html_attributes, &catalogs.svg_attributes] {
            for attr in table.entries.values() {
                assert!(
                    !matches!(attr.kind, ValueKind::Other(_)),
                    "{} has an unknown kind",
                    attr.key
                );
            }
        }
    }

    #[test]
    fn resolve_sorts_by_display_name() {
        let catalogs = Catalogs::builtin();
        let attrs = catalogs
            .html_attributes
            .resolve(&["target", "href"])
            .unwrap();

        let names: Vec<_> = attrs.iter().map(|a| a.display_name).collect();
        assert_eq!(names, ["Href", "Target"]);
    }

    #[test]
    fn resolve_names_the_missing_key() {
        let catalogs = Catalogs::builtin();
        let err = catalogs
            .html_attributes
            .resolve(&["href", "does-not-exist", "also-missing"])
            .unwrap_err();

        assert_eq!(
            err,
            CatalogError::UnresolvedKey {
                catalog: "html attribute",
                key: "does-not-exist".to_string(),
            }
        );
        assert_eq!(err.to_string(), r#"unknown html attribute key: "does-not-exist""#);
    }

    #[test]
    fn sort_is_stable_and_ordinal() {
        let mut attrs = vec![
            AttributeDescriptor::new("b", "b", ValueKind::String),
            AttributeDescriptor::new("first", "Same", ValueKind::String),
            AttributeDescriptor::new("a", "Z", ValueKind::String),
            AttributeDescriptor::new("second", "Same", ValueKind::Bool),
        ];
        sort_by_display_name(&mut attrs);

        let keys: Vec<_> = attrs.iter().map(|a| a.key).collect();
        // Upper case sorts before lower case under byte comparison.
        assert_eq!(keys, ["first", "second", "a", "b"]);
    }
}
