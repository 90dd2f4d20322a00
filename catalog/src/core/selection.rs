//! Selection engine
//!
//! Pure derived-state computations over the immutable record set. Unset or
//! unknown selections yield empty lists or no record, never an error.

use serde::Serialize;
use shared::{CatalogEntry, SelectionState};
use std::collections::BTreeSet;
use std::sync::Arc;

/// The immutable record set loaded for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Arc<[CatalogEntry]>,
}

fn is_set(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct levels, ascending
    pub fn available_levels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.level.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct subjects within a level, ascending
    pub fn available_subjects(&self, level: Option<&str>) -> Vec<String> {
        let Some(level) = is_set(level) else {
            return Vec::new();
        };

        self.entries
            .iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.subject.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Titles within a level and subject, ascending. Duplicates are kept.
    pub fn available_titles(&self, level: Option<&str>, subject: Option<&str>) -> Vec<String> {
        let (Some(level), Some(subject)) = (is_set(level), is_set(subject)) else {
            return Vec::new();
        };

        let mut titles: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.level == level && entry.subject == subject)
            .map(|entry| entry.title.clone())
            .collect();
        titles.sort();
        titles
    }

    /// First entry in feed order matching all three keys
    pub fn resolve_selected(
        &self,
        level: Option<&str>,
        subject: Option<&str>,
        title: Option<&str>,
    ) -> Option<&CatalogEntry> {
        let (Some(level), Some(subject), Some(title)) = (is_set(level), is_set(subject), is_set(title)) else {
            return None;
        };

        self.entries
            .iter()
            .find(|entry| entry.matches(level, subject, title))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Everything the presentation layer renders for one selection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub state: SelectionState,
    pub levels: Vec<String>,
    pub subjects: Vec<String>,
    pub titles: Vec<String>,
    pub selected: Option<CatalogEntry>,
    pub subject_enabled: bool,
    pub title_enabled: bool,
}

impl SelectionView {
    pub fn compute(catalog: &Catalog, state: &SelectionState) -> Self {
        let level = state.level();
        let subject = state.subject();

        Self {
            state: state.clone(),
            levels: catalog.available_levels(),
            subjects: catalog.available_subjects(level),
            titles: catalog.available_titles(level, subject),
            selected: catalog.resolve_selected(level, subject, state.title()).cloned(),
            subject_enabled: level.is_some(),
            title_enabled: level.is_some() && subject.is_some(),
        }
    }
}
