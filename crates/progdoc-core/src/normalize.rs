//! Generated-reply normalization
//!
//! Text generators answer with a JSON object keyed by section, often wrapped
//! in a Markdown code fence and with the section label repeated at the start
//! of each value. This module turns such a reply into a clean
//! [`SectionText`] so the parser never sees provider-specific shapes.

use std::sync::OnceLock;

use progdoc_ast::{SectionKey, SectionLabels, SectionText};
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Number of reply characters quoted in [`NormalizeError::InvalidJson`]
const SNIPPET_CHARS: usize = 100;

/// Task group markers that must start on their own line
const TASK_GROUPS: [&str; 2] = ["Развивающие:", "Воспитательные:"];

/// Errors raised while normalizing a generated reply
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Nothing left after removing code fences
    #[error("Empty reply from text generator")]
    EmptyReply,

    /// The reply is not valid JSON
    #[error("Failed to parse reply as JSON ({source}). Raw: {snippet}...")]
    InvalidJson {
        snippet: String,
        #[source]
        source: serde_json::Error,
    },

    /// The reply is JSON but not an object
    #[error("Reply is not a JSON object")]
    NotAnObject,

    /// A label could not be turned into a pattern
    #[error("Invalid label pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Parse a generated reply into section texts.
///
/// Unknown keys are ignored; `null` values become empty sections and other
/// non-string values are kept as their JSON text.
pub fn sections_from_reply(
    reply: &str,
    labels: &SectionLabels,
) -> Result<SectionText, NormalizeError> {
    let text = strip_code_fences(reply);
    if text.is_empty() {
        return Err(NormalizeError::EmptyReply);
    }

    let value: Value =
        serde_json::from_str(&text).map_err(|source| NormalizeError::InvalidJson {
            snippet: text.chars().take(SNIPPET_CHARS).collect(),
            source,
        })?;
    let object = value.as_object().ok_or(NormalizeError::NotAnObject)?;

    let mut sections = SectionText::new();
    for (name, value) in object {
        let Ok(key) = name.parse::<SectionKey>() else {
            debug!(key = %name, "ignoring unknown reply key");
            continue;
        };

        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };

        let mut content = strip_label(&raw, labels.get(key))?;
        if key == SectionKey::Tasks {
            content = split_task_groups(&content);
        }
        sections.set(key, content);
    }

    Ok(sections)
}

/// Remove ```` ```json ```` / ```` ``` ```` fences and surrounding whitespace
fn strip_code_fences(reply: &str) -> String {
    static FENCE_RE: OnceLock<Regex> = OnceLock::new();
    let re = FENCE_RE.get_or_init(|| Regex::new(r"```json\n?|\n?```").unwrap());
    re.replace_all(reply, "").trim().to_string()
}

/// Remove repetitions of the section label at the start of the text
fn strip_label(text: &str, label: &str) -> Result<String, regex::Error> {
    let re = Regex::new(&format!(r"(?i)^(\s*{}[:.]?\s*)+", regex::escape(label)))?;
    Ok(re.replace(text, "").trim().to_string())
}

/// Put each task group marker on a new line
fn split_task_groups(text: &str) -> String {
    let mut out = text.to_string();
    for marker in TASK_GROUPS {
        let escaped = regex::escape(marker);
        for pattern in [
            format!(r"(?i)([.!;])\s*({})", escaped),
            format!(r"(?i)([^\n])\s*({})", escaped),
        ] {
            // Patterns are built from fixed markers
            if let Ok(re) = Regex::new(&pattern) {
                out = re.replace(&out, "${1}\n${2}").into_owned();
            }
        }
    }
    out
}
