//! Program sections
//!
//! A program document has eight fixed sections. The title page becomes the
//! cover; the other seven form the body in [`SectionKey::BODY`] order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key of one program section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    TitlePage,
    ExplanatoryNote,
    Goal,
    Tasks,
    Results,
    Curriculum,
    Assessment,
    Literature,
}

/// Error for a section key string that names no section
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown section key: {0}")]
pub struct UnknownSectionKey(pub String);

impl SectionKey {
    /// Every key, title page first
    pub const ALL: [SectionKey; 8] = [
        SectionKey::TitlePage,
        SectionKey::ExplanatoryNote,
        SectionKey::Goal,
        SectionKey::Tasks,
        SectionKey::Results,
        SectionKey::Curriculum,
        SectionKey::Assessment,
        SectionKey::Literature,
    ];

    /// Canonical body order (title page excluded)
    pub const BODY: [SectionKey; 7] = [
        SectionKey::ExplanatoryNote,
        SectionKey::Goal,
        SectionKey::Tasks,
        SectionKey::Results,
        SectionKey::Curriculum,
        SectionKey::Assessment,
        SectionKey::Literature,
    ];

    /// The key as stored in program records
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::TitlePage => "titlePage",
            SectionKey::ExplanatoryNote => "explanatoryNote",
            SectionKey::Goal => "goal",
            SectionKey::Tasks => "tasks",
            SectionKey::Results => "results",
            SectionKey::Curriculum => "curriculum",
            SectionKey::Assessment => "assessment",
            SectionKey::Literature => "literature",
        }
    }

    /// Built-in human-readable label
    pub fn default_label(self) -> &'static str {
        match self {
            SectionKey::TitlePage => "Титульный лист",
            SectionKey::ExplanatoryNote => "Пояснительная записка",
            SectionKey::Goal => "Цель программы",
            SectionKey::Tasks => "Задачи",
            SectionKey::Results => "Планируемые результаты",
            SectionKey::Curriculum => "Учебный план",
            SectionKey::Assessment => "Контрольно-измерительные материалы",
            SectionKey::Literature => "Список литературы",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = UnknownSectionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSectionKey(s.to_string()))
    }
}

/// Raw text of every section
///
/// Missing sections read as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionText {
    texts: BTreeMap<SectionKey, String>,
}

impl SectionText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, key: SectionKey, text: impl Into<String>) -> Self {
        self.set(key, text);
        self
    }

    pub fn set(&mut self, key: SectionKey, text: impl Into<String>) {
        self.texts.insert(key, text.into());
    }

    /// Text of a section, empty if unset
    pub fn get(&self, key: SectionKey) -> &str {
        self.texts.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Cover text
    pub fn title_page(&self) -> &str {
        self.get(SectionKey::TitlePage)
    }

    /// Sections that have been set, in key order
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        self.texts.iter().map(|(key, text)| (*key, text.as_str()))
    }

    /// True when no section holds any non-whitespace text
    pub fn is_blank(&self) -> bool {
        self.texts.values().all(|text| text.trim().is_empty())
    }
}

/// Human-readable section labels with per-key overrides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionLabels {
    overrides: BTreeMap<SectionKey, String>,
}

impl SectionLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style override
    pub fn with_label(mut self, key: SectionKey, label: impl Into<String>) -> Self {
        self.overrides.insert(key, label.into());
        self
    }

    pub fn set(&mut self, key: SectionKey, label: impl Into<String>) {
        self.overrides.insert(key, label.into());
    }

    /// Label for a key, falling back to the built-in one
    pub fn get(&self, key: SectionKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_excludes_title_page() {
        assert!(!SectionKey::BODY.contains(&SectionKey::TitlePage));
        assert_eq!(SectionKey::BODY.len() + 1, SectionKey::ALL.len());
    }

    #[test]
    fn test_key_round_trip_through_str() {
        for key in SectionKey::ALL {
            assert_eq!(key.as_str().parse::<SectionKey>(), Ok(key));
        }
        assert_eq!(
            "summary".parse::<SectionKey>(),
            Err(UnknownSectionKey("summary".to_string()))
        );
    }

    #[test]
    fn test_missing_section_reads_empty() {
        let sections = SectionText::new().with(SectionKey::Goal, "Learn Rust");
        assert_eq!(sections.get(SectionKey::Goal), "Learn Rust");
        assert_eq!(sections.get(SectionKey::Tasks), "");
    }

    #[test]
    fn test_sections_deserialize_from_record() {
        let json = r#"{"titlePage": "Cover", "goal": "Goal text"}"#;
        let sections: SectionText = serde_json::from_str(json).unwrap();
        assert_eq!(sections.title_page(), "Cover");
        assert_eq!(sections.get(SectionKey::Goal), "Goal text");
    }

    #[test]
    fn test_is_blank() {
        assert!(SectionText::new().is_blank());
        assert!(SectionText::new().with(SectionKey::Goal, "  \n").is_blank());
        assert!(!SectionText::new().with(SectionKey::Goal, "x").is_blank());
    }

    #[test]
    fn test_label_override() {
        let labels = SectionLabels::new().with_label(SectionKey::Goal, "Цель");
        assert_eq!(labels.get(SectionKey::Goal), "Цель");
        assert_eq!(labels.get(SectionKey::Tasks), "Задачи");
    }
}
