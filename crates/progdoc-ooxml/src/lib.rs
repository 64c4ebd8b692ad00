//! # progdoc-ooxml
//!
//! Serializes an [`AssembledDocument`](progdoc_ast::AssembledDocument) into
//! a WordprocessingML package (`.docx`).
//!
//! The writer builds every part itself: there is no template. Output is
//! deterministic, so the same document always gives the same bytes.
//!
//! ## Example
//!
//! ```
//! use progdoc_ast::{FormattingProfile, SectionKey, SectionLabels, SectionText};
//! use progdoc_ooxml::DocxWriter;
//!
//! let sections = SectionText::new().with(SectionKey::Goal, "Teach the basics");
//! let doc = progdoc_core::assemble(
//!     "Robotics",
//!     &sections,
//!     &SectionLabels::default(),
//!     &FormattingProfile::default(),
//! );
//! let bytes = DocxWriter::generate(&doc)?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), progdoc_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod error;
pub mod package;
pub mod relationships;
pub mod writer;

pub use archive::OoxmlArchive;
pub use error::{OoxmlError, Result};
pub use relationships::Relationships;
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
