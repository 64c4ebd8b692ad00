//! The assembled document
//!
//! Built fresh on every export and never mutated afterwards. The cover comes
//! first, then an explicit page break, then every body section as a heading,
//! its content nodes and a trailing spacer.

use serde::{Deserialize, Serialize};

use crate::content::{ContentNode, Justification, ParagraphStyle, RunStyle};
use crate::section::SectionKey;

/// Page margins, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
}

/// Running header showing the current page number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    /// Text placed before the page number field
    pub prefix: String,
    pub justification: Justification,
    pub run: RunStyle,
}

/// Cover (title page) paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cover {
    pub text: String,
    pub style: ParagraphStyle,
    pub run: RunStyle,
}

/// Section heading paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub style: ParagraphStyle,
    pub run: RunStyle,
}

/// One body element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    PageBreak,
    Heading(Heading),
    Node(ContentNode),
    /// Empty paragraph with the given spacing
    Spacer(ParagraphStyle),
}

/// A body element and the section it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub section: Option<SectionKey>,
    pub block: Block,
}

/// A complete, styled document ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledDocument {
    pub cover: Cover,
    pub entries: Vec<Entry>,
    pub page: PageSetup,
    pub header: Option<PageHeader>,
}

impl AssembledDocument {
    /// Headings in document order
    pub fn headings(&self) -> impl Iterator<Item = (SectionKey, &Heading)> {
        self.entries.iter().filter_map(|entry| match (&entry.block, entry.section) {
            (Block::Heading(heading), Some(key)) => Some((key, heading)),
            _ => None,
        })
    }

    /// Parsed content nodes of one section
    pub fn section_nodes(&self, key: SectionKey) -> Vec<&ContentNode> {
        self.entries
            .iter()
            .filter(|entry| entry.section == Some(key))
            .filter_map(|entry| match &entry.block {
                Block::Node(node) => Some(node),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Paragraph, ParagraphRole};

    fn run() -> RunStyle {
        RunStyle {
            font_family: "Arial".to_string(),
            size_half_points: 28,
            bold: false,
        }
    }

    fn sample() -> AssembledDocument {
        AssembledDocument {
            cover: Cover {
                text: "Title".to_string(),
                style: ParagraphStyle::default(),
                run: run(),
            },
            entries: vec![
                Entry {
                    section: None,
                    block: Block::PageBreak,
                },
                Entry {
                    section: Some(SectionKey::Goal),
                    block: Block::Heading(Heading {
                        text: "ЦЕЛЬ".to_string(),
                        style: ParagraphStyle::default(),
                        run: run(),
                    }),
                },
                Entry {
                    section: Some(SectionKey::Goal),
                    block: Block::Node(ContentNode::Paragraph(Paragraph {
                        text: "Body".to_string(),
                        role: ParagraphRole::Body,
                        style: ParagraphStyle::default(),
                        run: run(),
                    })),
                },
            ],
            page: PageSetup {
                margin_top: 1134,
                margin_bottom: 1134,
                margin_left: 1701,
                margin_right: 851,
            },
            header: None,
        }
    }

    #[test]
    fn test_headings() {
        let doc = sample();
        let headings: Vec<_> = doc.headings().collect();
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].0, SectionKey::Goal);
        assert_eq!(headings[0].1.text, "ЦЕЛЬ");
    }

    #[test]
    fn test_section_nodes() {
        let doc = sample();
        assert_eq!(doc.section_nodes(SectionKey::Goal).len(), 1);
        assert!(doc.section_nodes(SectionKey::Tasks).is_empty());
    }
}
