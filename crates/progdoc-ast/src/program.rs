//! Stored program record
//!
//! The shape the surrounding application persists. The assembler never reads
//! it; callers adapt it into a title, section texts and a profile.

use serde::{Deserialize, Serialize};

use crate::profile::FormattingProfile;
use crate::section::SectionText;

/// Program difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgramLevel {
    #[default]
    #[serde(rename = "Базовый")]
    Basic,
    #[serde(rename = "Продвинутый")]
    Advanced,
    #[serde(rename = "Углублённый")]
    InDepth,
}

/// Token usage reported by the text generator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub model_name: String,
    pub total_tokens: u64,
    pub prompt_tokens: u64,
    pub candidates_tokens: u64,
}

/// A program record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub level: ProgramLevel,
    #[serde(default)]
    pub institution_code: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub sections: SectionText,
    /// Absent in records created before formatting was configurable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatting: Option<FormattingProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<GenerationStats>,
}

impl Program {
    /// A record with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            hours: 0,
            level: ProgramLevel::default(),
            institution_code: String::new(),
            author: String::new(),
            model_id: None,
            created_at: String::new(),
            updated_at: String::new(),
            sections: SectionText::default(),
            formatting: None,
            stats: None,
        }
    }
}
