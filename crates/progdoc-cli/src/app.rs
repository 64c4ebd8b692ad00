//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use sha2::{Digest, Sha256};
use tracing::debug;

use progdoc_ast::{ContentNode, FormattingProfile, ParagraphRole, Program};
use progdoc_core::{assemble, parse_section, sections_from_reply, suggested_file_name};
use progdoc_ooxml::DocxWriter;

use crate::config::Settings;

/// Output format for inspected content
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "progdoc")]
#[command(author, version, about = "Educational program documents to DOCX", long_about = None)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render program records (JSON) to DOCX
    Render {
        /// Program JSON files or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output DOCX file (single input only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (default: progdoc.toml next to the input)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Parse a raw section text and print its content nodes
    Inspect {
        /// Section text file
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Configuration file (default: progdoc.toml next to the input)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Import a generated reply into a program record
    Import {
        /// Reply file (JSON object keyed by section, optionally fenced)
        reply: PathBuf,

        /// Program JSON file to update
        #[arg(short, long)]
        program: PathBuf,

        /// Configuration file (default: progdoc.toml next to the program)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the default configuration
    Defaults,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments, sets up logging and dispatches to the appropriate
/// command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            inputs,
            output,
            config,
        } => {
            render_command(&inputs, output.as_deref(), config.as_deref())?;
        }
        Commands::Inspect {
            input,
            format,
            config,
        } => {
            inspect_command(&input, format, config.as_deref())?;
        }
        Commands::Import {
            reply,
            program,
            config,
        } => {
            import_command(&reply, &program, config.as_deref())?;
        }
        Commands::Defaults => {
            defaults_command()?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Execute the render command
///
/// Returns the paths of the written files.
pub fn render_command(
    inputs: &[String],
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    println!("progdoc v{}", progdoc_core::VERSION);

    let files = expand_inputs(inputs)?;
    if files.is_empty() {
        anyhow::bail!("No input files matched: {}", inputs.join(", "));
    }
    if output.is_some() && files.len() > 1 {
        anyhow::bail!(
            "--output can only be used with a single input ({} given)",
            files.len()
        );
    }

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        written.push(render_program(file, output, config)?);
    }

    if written.len() > 1 {
        println!("Rendered {} programs", written.len());
    }
    Ok(written)
}

/// Expand glob patterns; plain paths are kept as given
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.contains(['*', '?', '[']) {
            files.push(PathBuf::from(input));
            continue;
        }

        let pattern =
            glob(input).with_context(|| format!("Invalid glob pattern: {}", input))?;
        for entry in pattern {
            let path = entry.with_context(|| format!("Failed to read match of: {}", input))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }
    Ok(files)
}

/// Render one program record
pub fn render_program(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<PathBuf> {
    println!("Rendering: {}", input.display());

    // Check input file exists
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let program = read_program(input)?;
    let settings = Settings::discover(input, config)?;

    let profile = match &program.formatting {
        Some(profile) => profile.clone(),
        None => {
            debug!("program has no formatting, using configured defaults");
            FormattingProfile::from(&settings.formatting)
        }
    };
    profile
        .validate()
        .with_context(|| format!("Invalid formatting in: {}", input.display()))?;
    let labels = settings
        .section_labels()
        .context("Invalid [labels] in configuration")?;

    let doc = assemble(
        program.sections.title_page(),
        &program.sections,
        &labels,
        &profile,
    );
    println!("  {} sections assembled", doc.headings().count());

    let bytes = DocxWriter::generate(&doc).context("Failed to generate DOCX")?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => settings
            .output
            .directory
            .join(suggested_file_name(&program.name)),
    };
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let hash = format!("{:x}", hasher.finalize());

    println!("  Output: {}", output_path.display());
    println!("  Size: {} bytes", bytes.len());
    println!("  SHA-256: {}", hash);

    Ok(output_path)
}

/// Execute the inspect command
pub fn inspect_command(input: &Path, format: OutputFormat, config: Option<&Path>) -> Result<()> {
    // Check input file exists
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    let settings = Settings::discover(input, config)?;
    let profile = FormattingProfile::from(&settings.formatting);
    profile
        .validate()
        .context("Invalid [formatting] in configuration")?;

    let nodes = parse_section(&text, &profile);
    print!("{}", format_nodes(&nodes, format)?);
    Ok(())
}

/// Describe parsed content nodes
pub fn format_nodes(nodes: &[ContentNode], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(nodes).context("Failed to serialize nodes")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, node) in nodes.iter().enumerate() {
                match node {
                    ContentNode::Paragraph(para) => {
                        let kind = match para.role {
                            ParagraphRole::Body => "paragraph",
                            ParagraphRole::Verbatim => "verbatim",
                        };
                        out.push_str(&format!("[{}] {}: {}\n", i + 1, kind, para.text));
                    }
                    ContentNode::Table(table) => {
                        out.push_str(&format!(
                            "[{}] table: {} columns, {} body rows\n",
                            i + 1,
                            table.column_count(),
                            table.body_rows.len()
                        ));
                        for (_, cells) in table.rows() {
                            out.push_str(&format!("    | {} |\n", cells.join(" | ")));
                        }
                    }
                }
            }
            if nodes.is_empty() {
                out.push_str("(no content)\n");
            }
            Ok(out)
        }
    }
}

/// Execute the import command
///
/// Sections present in the reply replace those of the program; the others
/// are kept.
pub fn import_command(reply: &Path, program_path: &Path, config: Option<&Path>) -> Result<()> {
    println!("Importing: {}", reply.display());

    // Check input files exist
    if !reply.exists() {
        anyhow::bail!("Reply file not found: {}", reply.display());
    }
    if !program_path.exists() {
        anyhow::bail!("Program file not found: {}", program_path.display());
    }

    let settings = Settings::discover(program_path, config)?;
    let labels = settings
        .section_labels()
        .context("Invalid [labels] in configuration")?;

    let reply_text = fs::read_to_string(reply)
        .with_context(|| format!("Failed to read reply: {}", reply.display()))?;
    let sections = sections_from_reply(&reply_text, &labels)
        .with_context(|| format!("Failed to normalize reply: {}", reply.display()))?;

    let mut program = read_program(program_path)?;
    let mut count = 0;
    for (key, text) in sections.iter() {
        program.sections.set(key, text);
        count += 1;
    }

    let json = serde_json::to_string_pretty(&program).context("Failed to serialize program")?;
    fs::write(program_path, json)
        .with_context(|| format!("Failed to write program: {}", program_path.display()))?;

    println!("  {} sections updated in {}", count, program_path.display());
    Ok(())
}

/// Execute the defaults command
pub fn defaults_command() -> Result<()> {
    let text = Settings::default()
        .to_toml_string()
        .context("Failed to serialize default configuration")?;
    print!("{}", text);
    Ok(())
}

fn read_program(path: &Path) -> Result<Program> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read program: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse program JSON: {}", path.display()))
}
