//! progdoc-core - From section text to a styled document tree
//!
//! The core of progdoc is a small transpiler: freeform section text, which
//! may embed pipe-delimited tables between paragraphs, is turned into styled
//! content nodes, and the nodes of all sections are assembled into one
//! [`AssembledDocument`](progdoc_ast::AssembledDocument).
//!
//! # Example
//!
//! ```
//! use progdoc_ast::{FormattingProfile, SectionKey, SectionLabels, SectionText};
//! use progdoc_core::assemble;
//!
//! let sections = SectionText::new()
//!     .with(SectionKey::TitlePage, "Robotics")
//!     .with(SectionKey::Curriculum, "| Topic | Hours |\n|---|---|\n| Intro | 2 |");
//!
//! let doc = assemble(
//!     sections.title_page(),
//!     &sections,
//!     &SectionLabels::default(),
//!     &FormattingProfile::default(),
//! );
//! assert_eq!(doc.headings().count(), 7);
//! assert!(doc.section_nodes(SectionKey::Curriculum)[0].is_table());
//! ```

pub mod assembler;
pub mod naming;
pub mod normalize;
pub mod parser;

// Re-export main types and functions
pub use assembler::{assemble, DocumentAssembler};
pub use naming::suggested_file_name;
pub use normalize::{sections_from_reply, NormalizeError};
pub use parser::parse_section;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
