//! progdoc-ast - Data model for program documents
//!
//! This crate provides the types shared by the parser, the assembler and the
//! office-document writer:
//!
//! - [`FormattingProfile`]: the user-chosen print style of one export
//! - [`SectionKey`] / [`SectionText`] / [`SectionLabels`]: the program sections
//! - [`ContentNode`]: one parsed unit of a section body (paragraph or table)
//! - [`AssembledDocument`]: the finished, styled document tree
//! - [`Program`]: the stored program record the surrounding application keeps

pub mod content;
pub mod document;
pub mod profile;
pub mod program;
pub mod section;
pub mod units;

pub use content::{
    ContentNode, Justification, Paragraph, ParagraphRole, ParagraphStyle, RunStyle, Spacing,
    Table,
};
pub use document::{AssembledDocument, Block, Cover, Entry, Heading, PageHeader, PageSetup};
pub use profile::{Alignment, FormattingProfile, ProfileError};
pub use program::{GenerationStats, Program, ProgramLevel};
pub use section::{SectionKey, SectionLabels, SectionText, UnknownSectionKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
