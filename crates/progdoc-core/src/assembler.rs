//! Document Assembler
//!
//! Combines the cover text, every body section (each run through the
//! section parser) and the formatting profile into one
//! [`AssembledDocument`].
//!
//! Layout produced:
//!
//! 1. Cover paragraph, centered and bold, pushed down the page
//! 2. Page break
//! 3. For each section in [`SectionKey::BODY`] order: uppercased heading,
//!    parsed content nodes, spacer paragraph
//!
//! Page margins are converted from centimeters to twips and an optional
//! running header shows the page number.

use progdoc_ast::units::{cm_to_twips, pt_to_half_points};
use progdoc_ast::{
    AssembledDocument, Block, Cover, Entry, FormattingProfile, Heading, Justification,
    PageHeader, PageSetup, ParagraphStyle, RunStyle, SectionKey, SectionLabels, SectionText,
    Spacing,
};
use tracing::debug;

use crate::parser::parse_section;

/// Space above the cover text, in twips
pub const COVER_OFFSET: u32 = 2000;

/// Paragraph style of section headings
pub const HEADING_STYLE_ID: &str = "Heading1";

/// Space above a section heading, in twips
pub const HEADING_SPACING_BEFORE: u32 = 240;

/// Space below a section heading, in twips
pub const HEADING_SPACING_AFTER: u32 = 120;

/// Space after the last paragraph of a section, in twips
pub const SECTION_SPACING_AFTER: u32 = 240;

/// Text before the page number in the running header
pub const PAGE_NUMBER_PREFIX: &str = "Стр. ";

/// Font size of the running header, in points
pub const PAGE_NUMBER_SIZE_PT: f64 = 10.0;

/// Assemble a document with the given labels and profile.
///
/// Shorthand for [`DocumentAssembler::new`] followed by
/// [`DocumentAssembler::assemble`].
pub fn assemble(
    title: &str,
    sections: &SectionText,
    labels: &SectionLabels,
    profile: &FormattingProfile,
) -> AssembledDocument {
    DocumentAssembler::new(profile)
        .with_labels(labels.clone())
        .assemble(title, sections)
}

/// Builds [`AssembledDocument`]s for one formatting profile
#[derive(Debug, Clone)]
pub struct DocumentAssembler<'a> {
    profile: &'a FormattingProfile,
    labels: SectionLabels,
}

impl<'a> DocumentAssembler<'a> {
    /// Create an assembler using the built-in section labels
    pub fn new(profile: &'a FormattingProfile) -> Self {
        Self {
            profile,
            labels: SectionLabels::default(),
        }
    }

    /// Use custom section labels
    pub fn with_labels(mut self, labels: SectionLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Assemble the cover and all body sections.
    ///
    /// The title page entry of `sections` is not read; `title` is the cover
    /// text.
    pub fn assemble(&self, title: &str, sections: &SectionText) -> AssembledDocument {
        let mut entries = vec![Entry {
            section: None,
            block: Block::PageBreak,
        }];

        for key in SectionKey::BODY {
            let nodes = parse_section(sections.get(key), self.profile);
            debug!(section = %key, nodes = nodes.len(), "assembled section");

            entries.push(Entry {
                section: Some(key),
                block: Block::Heading(self.heading(key)),
            });
            entries.extend(nodes.into_iter().map(|node| Entry {
                section: Some(key),
                block: Block::Node(node),
            }));
            entries.push(Entry {
                section: Some(key),
                block: Block::Spacer(ParagraphStyle {
                    spacing: Spacing::after(SECTION_SPACING_AFTER),
                    ..Default::default()
                }),
            });
        }

        AssembledDocument {
            cover: self.cover(title),
            entries,
            page: self.page_setup(),
            header: self.page_header(),
        }
    }

    fn cover(&self, title: &str) -> Cover {
        Cover {
            text: title.to_string(),
            style: ParagraphStyle {
                style_id: None,
                justification: Some(Justification::Center),
                spacing: Spacing {
                    before: Some(COVER_OFFSET),
                    ..Default::default()
                },
            },
            run: self.profile.body_run().bolded(),
        }
    }

    fn heading(&self, key: SectionKey) -> Heading {
        Heading {
            text: self.labels.get(key).to_uppercase(),
            style: ParagraphStyle {
                style_id: Some(HEADING_STYLE_ID.to_string()),
                justification: Some(Justification::Center),
                spacing: Spacing {
                    before: Some(HEADING_SPACING_BEFORE),
                    after: Some(HEADING_SPACING_AFTER),
                    line: None,
                },
            },
            run: self.profile.heading_run(),
        }
    }

    fn page_setup(&self) -> PageSetup {
        PageSetup {
            margin_top: cm_to_twips(self.profile.margin_top),
            margin_bottom: cm_to_twips(self.profile.margin_bottom),
            margin_left: cm_to_twips(self.profile.margin_left),
            margin_right: cm_to_twips(self.profile.margin_right),
        }
    }

    fn page_header(&self) -> Option<PageHeader> {
        if !self.profile.show_page_numbers {
            return None;
        }
        Some(PageHeader {
            prefix: PAGE_NUMBER_PREFIX.to_string(),
            justification: Justification::Right,
            run: RunStyle {
                font_family: self.profile.font_family.clone(),
                size_half_points: pt_to_half_points(PAGE_NUMBER_SIZE_PT),
                bold: false,
            },
        })
    }
}
