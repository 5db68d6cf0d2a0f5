//! Section Registry
//!
//! Read-only view over the document's sections, captured once at startup.
//! Sections that lack an id or label (or repeat an id) are dropped here with a
//! diagnostic, so nothing downstream ever sees a half-formed section.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::config::NavConfig;
use crate::host::{PageHost, RawSection};

lazy_static! {
    /// An HTML id may contain anything except ASCII whitespace.
    static ref SECTION_ID_RE: Regex = Regex::new(r"^[^\s]+$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    by_id: HashMap<String, usize>,
}

impl SectionRegistry {
    /// Query the host once for every configured section element.
    pub fn collect<H: PageHost + ?Sized>(host: &H, config: &NavConfig) -> Self {
        let raw = host.section_elements(&config.section_tag, &config.label_attribute);
        let registry = Self::from_raw(raw);
        tracing::debug!(sections = registry.len(), tag = %config.section_tag, "collected sections");
        registry
    }

    pub fn from_raw(raw: impl IntoIterator<Item = RawSection>) -> Self {
        let mut registry = Self::default();

        for (position, section) in raw.into_iter().enumerate() {
            // The id must be used exactly as the document holds it, or host
            // lookups will miss. Any whitespace disqualifies it.
            let id = section.id.unwrap_or_default();
            let label = section.label.unwrap_or_default();

            if !SECTION_ID_RE.is_match(&id) {
                tracing::warn!(position, id = %id, "skipping section without a usable id");
                continue;
            }
            if label.trim().is_empty() {
                tracing::warn!(position, id = %id, "skipping section without a label");
                continue;
            }
            if registry.by_id.contains_key(&id) {
                tracing::warn!(position, id = %id, "skipping section with duplicate id");
                continue;
            }

            registry.by_id.insert(id.clone(), registry.sections.len());
            registry.sections.push(Section { id, label });
        }

        registry
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.by_id.get(id).map(|&i| &self.sections[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_document_order() {
        let registry = SectionRegistry::from_raw(vec![
            RawSection::new("section1", "Section 1"),
            RawSection::new("section2", "Section 2"),
            RawSection::new("section3", "Section 3"),
        ]);
        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["section1", "section2", "section3"]);
        assert_eq!(registry.get("section2").unwrap().label, "Section 2");
    }

    #[test]
    fn test_malformed_sections_are_dropped() {
        let registry = SectionRegistry::from_raw(vec![
            RawSection {
                id: None,
                label: Some("No id".to_string()),
            },
            RawSection {
                id: Some("no-label".to_string()),
                label: None,
            },
            RawSection::new("  ", "Blank id"),
            RawSection::new("has space", "Bad id"),
            RawSection::new("ok", "Fine"),
        ]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("ok").is_some());
        assert!(registry.get("no-label").is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let registry = SectionRegistry::from_raw(vec![
            RawSection::new("intro", "First"),
            RawSection::new("intro", "Second"),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("intro").unwrap().label, "First");
    }

    #[test]
    fn test_padded_ids_are_dropped() {
        let registry = SectionRegistry::from_raw(vec![
            RawSection::new(" intro", "Intro"),
            RawSection::new("outro ", "Outro"),
            RawSection::new("\tmiddle\n", "Middle"),
        ]);
        assert!(registry.is_empty());
        assert!(registry.get("intro").is_none());
    }

    #[test]
    fn test_labels_are_kept_verbatim() {
        let registry = SectionRegistry::from_raw(vec![
            RawSection::new("a", "  Alpha \n"),
            RawSection::new("b", " \t "),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().label, "  Alpha \n");
    }
}
