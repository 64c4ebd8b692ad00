//! Error types for DOCX packaging

use thiserror::Error;

/// Errors that can occur while writing or reading a package
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// The ZIP container could not be written or read
    #[error("Package archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing the package bytes failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A part read back from a package is not well-formed
    #[error("Malformed part XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A part expected in the package is missing
    #[error("Package part not found: {0}")]
    MissingFile(String),
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
