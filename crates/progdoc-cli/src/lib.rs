//! progdoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for progdoc, including:
//! - Render: Convert program records (JSON) to DOCX
//! - Inspect: Show how a section text is parsed
//! - Import: Merge a generated reply into a program record
//! - Defaults: Print the default configuration
//!
//! # Library Usage
//!
//! ```ignore
//! use progdoc_cli::{render_command, run_cli};
//!
//! // Run the full CLI
//! run_cli()?;
//!
//! // Or use individual commands programmatically
//! render_command(&["program.json".to_string()], None, None)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render every program in a directory
//! progdoc render 'programs/*.json'
//!
//! # Render one program to a chosen file
//! progdoc render chess.json --output chess.docx
//!
//! # See how a section text is split into paragraphs and tables
//! progdoc inspect curriculum.txt --format json
//! ```

pub mod app;
pub mod config;

// Re-export main entry point and types
pub use app::{
    defaults_command, format_nodes, import_command, inspect_command, render_command,
    render_program,
};
pub use app::{run_cli, OutputFormat};
pub use config::Settings;
