//! Content nodes produced by the section parser
//!
//! A section body is a flat sequence of paragraphs and tables. Every node
//! already carries the paragraph and run styles resolved from the active
//! formatting profile, so the writer needs no further lookups.

use serde::{Deserialize, Serialize};

/// Paragraph justification (`w:jc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justification {
    Left,
    Center,
    Right,
    /// Justified text
    Both,
}

impl Justification {
    /// The `w:val` attribute value
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Justification::Left => "left",
            Justification::Center => "center",
            Justification::Right => "right",
            Justification::Both => "both",
        }
    }
}

/// Paragraph spacing, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub before: Option<u32>,
    pub after: Option<u32>,
    /// Line spacing with the auto rule (240 = single)
    pub line: Option<u32>,
}

impl Spacing {
    /// Spacing with only a value after the paragraph
    pub fn after(after: u32) -> Self {
        Self {
            after: Some(after),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none() && self.line.is_none()
    }
}

/// Paragraph-level properties
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Paragraph style ID (e.g. "Heading1")
    pub style_id: Option<String>,
    pub justification: Option<Justification>,
    pub spacing: Spacing,
}

impl ParagraphStyle {
    pub fn is_empty(&self) -> bool {
        self.style_id.is_none() && self.justification.is_none() && self.spacing.is_empty()
    }
}

/// Run-level properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStyle {
    pub font_family: String,
    /// Font size in half-points (`w:sz`)
    pub size_half_points: u32,
    pub bold: bool,
}

impl RunStyle {
    /// The same style with bold switched on
    pub fn bolded(&self) -> Self {
        Self {
            bold: true,
            ..self.clone()
        }
    }
}

/// How a paragraph came out of the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphRole {
    /// Regular prose, styled with alignment and spacing
    Body,
    /// A line kept verbatim after a failed table parse
    Verbatim,
}

/// A paragraph node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub role: ParagraphRole,
    pub style: ParagraphStyle,
    pub run: RunStyle,
}

/// A flat table: one header row and zero or more body rows
///
/// All rows have the same number of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header_cells: Vec<String>,
    pub body_rows: Vec<Vec<String>>,
    /// Run style shared by all cells (header cells are rendered bold)
    pub run: RunStyle,
}

impl Table {
    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.header_cells.len()
    }

    /// All rows, header first, paired with a header flag
    pub fn rows(&self) -> impl Iterator<Item = (bool, &[String])> {
        std::iter::once((true, self.header_cells.as_slice()))
            .chain(self.body_rows.iter().map(|row| (false, row.as_slice())))
    }
}

/// One parsed unit of a section body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Paragraph(Paragraph),
    Table(Table),
}

impl ContentNode {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            ContentNode::Paragraph(p) => Some(p),
            ContentNode::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            ContentNode::Table(t) => Some(t),
            ContentNode::Paragraph(_) => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, ContentNode::Table(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> RunStyle {
        RunStyle {
            font_family: "Arial".to_string(),
            size_half_points: 24,
            bold: false,
        }
    }

    #[test]
    fn test_table_rows_header_first() {
        let table = Table {
            header_cells: vec!["A".to_string(), "B".to_string()],
            body_rows: vec![vec!["1".to_string(), "2".to_string()]],
            run: run(),
        };
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].0);
        assert_eq!(rows[0].1, ["A", "B"]);
        assert!(!rows[1].0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_bolded_keeps_font() {
        let bold = run().bolded();
        assert!(bold.bold);
        assert_eq!(bold.font_family, "Arial");
        assert_eq!(bold.size_half_points, 24);
    }

    #[test]
    fn test_node_serializes_with_type_tag() {
        let node = ContentNode::Paragraph(Paragraph {
            text: "Hello".to_string(),
            role: ParagraphRole::Body,
            style: ParagraphStyle::default(),
            run: run(),
        });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["role"], "body");
        assert_eq!(json["text"], "Hello");
    }

    #[test]
    fn test_justification_values() {
        assert_eq!(Justification::Both.as_ooxml(), "both");
        assert_eq!(Justification::Right.as_ooxml(), "right");
    }

    #[test]
    fn test_empty_paragraph_style() {
        assert!(ParagraphStyle::default().is_empty());
        let style = ParagraphStyle {
            spacing: Spacing::after(240),
            ..Default::default()
        };
        assert!(!style.is_empty());
    }
}
