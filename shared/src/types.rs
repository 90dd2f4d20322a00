//! Core types used throughout the catalog browser

use serde::{Deserialize, Serialize};
use std::fmt;

/// Component identifier attached to structured log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Feed fetching and CSV parsing
    Ingestion,
    /// Derived option lists and record resolution
    Selection,
    /// HTTP presentation layer
    WebServer,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Ingestion => write!(f, "ingestion"),
            ComponentId::Selection => write!(f, "selection"),
            ComponentId::WebServer => write!(f, "webserver"),
        }
    }
}

/// One catalog entry from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub level: String,
    pub subject: String,
    pub title: String,
    pub cover_url: Option<String>,
    pub document_url: Option<String>,
}

impl CatalogEntry {
    /// True when all three selection keys match exactly
    pub fn matches(&self, level: &str, subject: &str, title: &str) -> bool {
        self.level == level && self.subject == subject && self.title == title
    }
}

/// A change the user made to one of the three dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SelectionEvent {
    #[serde(rename = "level_changed")]
    LevelChanged {
        #[serde(default)]
        value: Option<String>,
    },
    #[serde(rename = "subject_changed")]
    SubjectChanged {
        #[serde(default)]
        value: Option<String>,
    },
    #[serde(rename = "title_changed")]
    TitleChanged {
        #[serde(default)]
        value: Option<String>,
    },
    #[serde(rename = "reset")]
    Reset,
}

/// The user's partial (level, subject, title) choice.
///
/// Fields form a dependency chain: `subject` is only set when `level` is,
/// `title` only when `subject` is. Every transition returns a new state and
/// resets everything downstream of the field it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Blank values coming from a placeholder option mean "unset"
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    /// Select a level; subject and title are always cleared
    pub fn with_level(&self, level: Option<String>) -> Self {
        Self {
            level: normalize(level),
            subject: None,
            title: None,
        }
    }

    /// Select a subject; title is always cleared. Ignored without a level.
    pub fn with_subject(&self, subject: Option<String>) -> Self {
        if self.level.is_none() {
            return self.clone();
        }
        Self {
            level: self.level.clone(),
            subject: normalize(subject),
            title: None,
        }
    }

    /// Select a title. Ignored unless level and subject are both set.
    pub fn with_title(&self, title: Option<String>) -> Self {
        if self.level.is_none() || self.subject.is_none() {
            return self.clone();
        }
        Self {
            level: self.level.clone(),
            subject: self.subject.clone(),
            title: normalize(title),
        }
    }

    pub fn apply(&self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::LevelChanged { value } => self.with_level(value),
            SelectionEvent::SubjectChanged { value } => self.with_subject(value),
            SelectionEvent::TitleChanged { value } => self.with_title(value),
            SelectionEvent::Reset => Self::cleared(),
        }
    }

    /// Repair a state received from outside so the dependency chain holds
    pub fn sanitized(self) -> Self {
        Self::new()
            .with_level(self.level)
            .with_subject(self.subject)
            .with_title(self.title)
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
