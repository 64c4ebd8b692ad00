//! Section Parser
//!
//! Turns one section's raw text into an ordered sequence of
//! [`ContentNode`]s.
//!
//! # Recognized Syntax
//!
//! - Every non-blank line is a paragraph.
//! - A pipe table: a line starting with `|`, immediately followed by a
//!   separator line containing `-`, then further `|` rows:
//!
//! ```text
//! | Topic | Hours |
//! |-------|-------|
//! | Intro | 2     |
//! ```
//!
//! Nothing else of Markdown is recognized. Parsing never fails: table-like
//! input that turns out not to be a table is kept line by line as verbatim
//! paragraphs.

use progdoc_ast::{
    ContentNode, FormattingProfile, Paragraph, ParagraphRole, ParagraphStyle, Table,
};
use tracing::debug;

/// Cell delimiter
const DELIMITER: char = '|';

/// Character that marks a separator (rule) line
const RULE: char = '-';

/// Parse a section's text into content nodes.
///
/// Pure function of its inputs; identical inputs give identical nodes.
pub fn parse_section(text: &str, profile: &FormattingProfile) -> Vec<ContentNode> {
    SectionParser::new(profile).parse(text)
}

/// Line-oriented parser with a paragraph buffer and a table buffer
struct SectionParser<'a> {
    profile: &'a FormattingProfile,
    /// Emitted nodes
    nodes: Vec<ContentNode>,
    /// Lines waiting to become paragraphs
    paragraph_lines: Vec<&'a str>,
    /// Lines of the table being collected
    table_lines: Vec<&'a str>,
    in_table: bool,
}

impl<'a> SectionParser<'a> {
    fn new(profile: &'a FormattingProfile) -> Self {
        Self {
            profile,
            nodes: Vec::new(),
            paragraph_lines: Vec::new(),
            table_lines: Vec::new(),
            in_table: false,
        }
    }

    fn parse(mut self, text: &'a str) -> Vec<ContentNode> {
        // `\r\n` endings leave a trailing `\r` that trimming removes
        let lines: Vec<&'a str> = text.split('\n').map(str::trim).collect();

        for (i, &line) in lines.iter().enumerate() {
            let next = lines.get(i + 1).copied();
            self.process_line(line, next);
        }

        if self.in_table {
            self.flush_table();
        } else {
            self.flush_paragraphs();
        }

        self.nodes
    }

    fn process_line(&mut self, line: &'a str, next: Option<&str>) {
        if !self.in_table && is_table_start(line, next) {
            self.flush_paragraphs();
            self.in_table = true;
            self.table_lines.push(line);
            return;
        }

        if self.in_table {
            if line.is_empty() {
                self.flush_table();
                self.in_table = false;
            } else if !line.starts_with(DELIMITER) {
                self.flush_table();
                self.in_table = false;
                self.paragraph_lines.push(line);
            } else {
                self.table_lines.push(line);
            }
        } else {
            self.paragraph_lines.push(line);
        }
    }

    /// Emit one body paragraph per non-blank buffered line
    fn flush_paragraphs(&mut self) {
        if self.paragraph_lines.is_empty() {
            return;
        }

        let style = self.profile.body_paragraph();
        let run = self.profile.body_run();
        for line in self.paragraph_lines.drain(..) {
            if line.is_empty() {
                continue;
            }
            self.nodes.push(ContentNode::Paragraph(Paragraph {
                text: line.to_string(),
                role: ParagraphRole::Body,
                style: style.clone(),
                run: run.clone(),
            }));
        }
    }

    /// Emit the buffered table, or its lines as verbatim paragraphs
    fn flush_table(&mut self) {
        if self.table_lines.is_empty() {
            return;
        }

        let lines = std::mem::take(&mut self.table_lines);
        match self.build_table(&lines) {
            Some(table) => {
                debug!(
                    columns = table.column_count(),
                    rows = table.body_rows.len(),
                    "parsed table"
                );
                self.nodes.push(ContentNode::Table(table));
            }
            None => {
                debug!(lines = lines.len(), "table fallback to paragraphs");
                let run = self.profile.body_run();
                for line in lines {
                    self.nodes.push(ContentNode::Paragraph(Paragraph {
                        text: line.to_string(),
                        role: ParagraphRole::Verbatim,
                        style: ParagraphStyle::default(),
                        run: run.clone(),
                    }));
                }
            }
        }
    }

    /// Build a table from header, separator and body lines
    fn build_table(&self, lines: &[&str]) -> Option<Table> {
        if lines.len() < 2 || !lines[1].contains(RULE) {
            return None;
        }

        let mut header_cells = split_row(lines[0]);
        let mut body_rows: Vec<Vec<String>> = lines[2..].iter().map(|l| split_row(l)).collect();

        let columns = body_rows
            .iter()
            .map(Vec::len)
            .fold(header_cells.len(), usize::max);
        if columns == 0 {
            return None;
        }

        header_cells.resize(columns, String::new());
        for row in &mut body_rows {
            row.resize(columns, String::new());
        }

        Some(Table {
            header_cells,
            body_rows,
            run: self.profile.body_run(),
        })
    }
}

/// A `|` line whose next line is a non-empty rule line
fn is_table_start(line: &str, next: Option<&str>) -> bool {
    line.starts_with(DELIMITER) && next.is_some_and(|n| !n.is_empty() && n.contains(RULE))
}

/// Split a row into trimmed cells, dropping the empty cells produced by a
/// leading and a trailing delimiter
fn split_row(line: &str) -> Vec<String> {
    let line = line.trim();
    let mut parts: Vec<&str> = line.split(DELIMITER).collect();

    if line.starts_with(DELIMITER) {
        parts.remove(0);
    }
    if line.ends_with(DELIMITER) {
        parts.pop();
    }

    parts.into_iter().map(|p| p.trim().to_string()).collect()
}
