//! DOCX Writer
//!
//! This module writes a `progdoc_ast::AssembledDocument` to a complete DOCX
//! package. All styling has already been resolved by the assembler; the
//! writer only maps paragraphs, runs, tables, page breaks, page geometry and
//! the running header onto WordprocessingML.
//!
//! # Example
//!
//! ```ignore
//! use progdoc_ooxml::DocxWriter;
//!
//! let doc = progdoc_core::assemble(title, &sections, &labels, &profile);
//! let output = DocxWriter::generate(&doc)?;
//! std::fs::write("program.docx", output)?;
//! ```

use std::io::Cursor;

use progdoc_ast::{
    AssembledDocument, Block, ContentNode, Justification, PageHeader, PageSetup, Paragraph,
    ParagraphStyle, RunStyle, Table,
};
use tracing::debug;

use crate::archive::OoxmlArchive;
use crate::error::Result;
use crate::package::{self, escape_xml, R_NS, W_NS};
use crate::relationships::Relationships;

/// A4 page width, in twips
pub const PAGE_WIDTH: u32 = 11906;

/// A4 page height, in twips
pub const PAGE_HEIGHT: u32 = 16838;

/// Distance of header and footer from the page edge, in twips
const HEADER_DISTANCE: u32 = 708;

/// Table width in fiftieths of a percent (100%)
const TABLE_WIDTH_PCT: u32 = 5000;

/// Cell border width, in eighths of a point
const BORDER_SIZE: u32 = 4;

const BORDER_COLOR: &str = "000000";

/// Header row shading
const HEADER_FILL: &str = "F2F2F2";

/// Vertical tab, the manual line break of pasted office text
const SOFT_BREAK: char = '\u{B}';

/// DOCX Writer for generating DOCX packages from an assembled document
pub struct DocxWriter {
    /// XML output buffer
    output: String,
    /// Document relationships (word/_rels/document.xml.rels)
    relationships: Relationships,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self {
            output: String::new(),
            relationships: Relationships::new(),
        }
    }

    /// Generate a DOCX package from an assembled document
    ///
    /// # Returns
    ///
    /// The package bytes. Identical documents give identical bytes.
    pub fn generate(doc: &AssembledDocument) -> Result<Vec<u8>> {
        let archive = DocxWriter::new().build_archive(doc);

        let mut output = Cursor::new(Vec::new());
        archive.write_to(&mut output)?;

        let bytes = output.into_inner();
        debug!(bytes = bytes.len(), "wrote docx package");
        Ok(bytes)
    }

    /// Build all package parts without zipping them
    pub fn build_archive(mut self, doc: &AssembledDocument) -> OoxmlArchive {
        self.relationships.add("styles.xml", Relationships::TYPE_STYLES);
        self.relationships
            .add("settings.xml", Relationships::TYPE_SETTINGS);
        let header_id = self
            .relationships
            .add("header1.xml", Relationships::TYPE_HEADER);

        let document_xml = self.generate_document_xml(doc, &header_id);
        let header_xml = self.generate_header_xml(doc.header.as_ref());

        let mut archive = OoxmlArchive::new();
        archive.set_string(package::CONTENT_TYPES_PATH, package::content_types_xml());
        archive.set_string(
            package::ROOT_RELS_PATH,
            package::root_relationships().to_xml(),
        );
        archive.set_string(
            package::CORE_PROPS_PATH,
            package::core_properties_xml(document_title(doc)),
        );
        archive.set_string(package::APP_PROPS_PATH, package::app_properties_xml());
        archive.set_string(package::DOCUMENT_PATH, document_xml);
        archive.set_string(package::DOCUMENT_RELS_PATH, self.relationships.to_xml());
        archive.set_string(package::STYLES_PATH, package::styles_xml());
        archive.set_string(package::SETTINGS_PATH, package::settings_xml());
        archive.set_string(package::HEADER_PATH, header_xml);

        debug!(parts = archive.file_list().len(), "built package parts");
        archive
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, doc: &AssembledDocument, header_id: &str) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            "<w:document xmlns:w=\"{}\" xmlns:r=\"{}\">\n",
            W_NS, R_NS
        ));
        self.output.push_str("<w:body>\n");

        self.generate_paragraph(&doc.cover.style, &doc.cover.text, &doc.cover.run);

        let content_width = content_width(&doc.page);
        for entry in &doc.entries {
            self.generate_block(&entry.block, content_width);
        }

        self.generate_section_properties(&doc.page, header_id);

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// Generate XML for a single block
    fn generate_block(&mut self, block: &Block, content_width: u32) {
        match block {
            Block::PageBreak => self.generate_page_break(),
            Block::Heading(heading) => {
                self.generate_paragraph(&heading.style, &heading.text, &heading.run)
            }
            Block::Node(ContentNode::Paragraph(para)) => self.generate_content_paragraph(para),
            Block::Node(ContentNode::Table(table)) => {
                self.generate_table(table, content_width);
                // Keep consecutive tables apart
                self.output.push_str("<w:p/>\n");
            }
            Block::Spacer(style) => {
                self.output.push_str("<w:p>\n");
                self.generate_paragraph_properties(style);
                self.output.push_str("</w:p>\n");
            }
        }
    }

    fn generate_content_paragraph(&mut self, para: &Paragraph) {
        self.generate_paragraph(&para.style, &para.text, &para.run);
    }

    /// Generate a paragraph holding one run
    fn generate_paragraph(&mut self, style: &ParagraphStyle, text: &str, run: &RunStyle) {
        self.output.push_str("<w:p>\n");
        self.generate_paragraph_properties(style);
        self.generate_run(text, run);
        self.output.push_str("</w:p>\n");
    }

    /// Generate `w:pPr`, or nothing for an empty style
    fn generate_paragraph_properties(&mut self, style: &ParagraphStyle) {
        if style.is_empty() {
            return;
        }

        self.output.push_str("<w:pPr>\n");
        if let Some(style_id) = &style.style_id {
            self.output
                .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", escape_xml(style_id)));
        }
        if !style.spacing.is_empty() {
            self.output.push_str("<w:spacing");
            if let Some(before) = style.spacing.before {
                self.output.push_str(&format!(" w:before=\"{}\"", before));
            }
            if let Some(after) = style.spacing.after {
                self.output.push_str(&format!(" w:after=\"{}\"", after));
            }
            if let Some(line) = style.spacing.line {
                self.output
                    .push_str(&format!(" w:line=\"{}\" w:lineRule=\"auto\"", line));
            }
            self.output.push_str("/>\n");
        }
        if let Some(justification) = style.justification {
            self.generate_justification(justification);
        }
        self.output.push_str("</w:pPr>\n");
    }

    fn generate_justification(&mut self, justification: Justification) {
        self.output.push_str(&format!(
            "<w:jc w:val=\"{}\"/>\n",
            justification.as_ooxml()
        ));
    }

    /// Generate a text run
    ///
    /// Soft breaks inside the text become `w:br` elements.
    fn generate_run(&mut self, text: &str, run: &RunStyle) {
        self.output.push_str("<w:r>\n");
        self.generate_run_properties(run);
        for (i, segment) in text.split(SOFT_BREAK).enumerate() {
            if i > 0 {
                self.output.push_str("<w:br/>\n");
            }
            self.output.push_str(&format!(
                "<w:t xml:space=\"preserve\">{}</w:t>\n",
                escape_xml(segment)
            ));
        }
        self.output.push_str("</w:r>\n");
    }

    fn generate_run_properties(&mut self, run: &RunStyle) {
        let font = escape_xml(&run.font_family);
        self.output.push_str("<w:rPr>\n");
        self.output.push_str(&format!(
            "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:eastAsia=\"{0}\" w:cs=\"{0}\"/>\n",
            font
        ));
        if run.bold {
            self.output.push_str("<w:b/>\n<w:bCs/>\n");
        }
        self.output.push_str(&format!(
            "<w:sz w:val=\"{0}\"/>\n<w:szCs w:val=\"{0}\"/>\n",
            run.size_half_points
        ));
        self.output.push_str("</w:rPr>\n");
    }

    /// Generate XML for a page break
    fn generate_page_break(&mut self) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:r>\n");
        self.output.push_str("<w:br w:type=\"page\"/>\n");
        self.output.push_str("</w:r>\n");
        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a table
    fn generate_table(&mut self, table: &Table, content_width: u32) {
        let columns = table.column_count().max(1) as u32;

        self.output.push_str("<w:tbl>\n");
        self.output.push_str("<w:tblPr>\n");
        self.output.push_str(&format!(
            "<w:tblW w:w=\"{}\" w:type=\"pct\"/>\n",
            TABLE_WIDTH_PCT
        ));
        self.output.push_str("</w:tblPr>\n");

        // Table grid (column definitions)
        self.output.push_str("<w:tblGrid>\n");
        for _ in 0..columns {
            self.output.push_str(&format!(
                "<w:gridCol w:w=\"{}\"/>\n",
                content_width / columns
            ));
        }
        self.output.push_str("</w:tblGrid>\n");

        let header_run = table.run.bolded();
        for (is_header, cells) in table.rows() {
            self.output.push_str("<w:tr>\n");

            if is_header {
                self.output.push_str("<w:trPr>\n");
                self.output.push_str("<w:tblHeader/>\n");
                self.output.push_str("</w:trPr>\n");
            }

            let run = if is_header { &header_run } else { &table.run };
            for cell in cells {
                self.generate_cell(cell, run, is_header, columns);
            }

            self.output.push_str("</w:tr>\n");
        }

        self.output.push_str("</w:tbl>\n");
    }

    /// Generate one bordered cell with centered text
    fn generate_cell(&mut self, text: &str, run: &RunStyle, is_header: bool, columns: u32) {
        self.output.push_str("<w:tc>\n");

        self.output.push_str("<w:tcPr>\n");
        self.output.push_str(&format!(
            "<w:tcW w:w=\"{}\" w:type=\"pct\"/>\n",
            TABLE_WIDTH_PCT / columns
        ));
        self.output.push_str("<w:tcBorders>\n");
        for side in ["top", "left", "bottom", "right"] {
            self.output.push_str(&format!(
                "<w:{} w:val=\"single\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>\n",
                side, BORDER_SIZE, BORDER_COLOR
            ));
        }
        self.output.push_str("</w:tcBorders>\n");
        if is_header {
            self.output.push_str(&format!(
                "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>\n",
                HEADER_FILL
            ));
        }
        self.output.push_str("</w:tcPr>\n");

        // A cell must hold at least one paragraph
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n");
        self.generate_justification(Justification::Center);
        self.output.push_str("</w:pPr>\n");
        if !text.is_empty() {
            self.generate_run(text, run);
        }
        self.output.push_str("</w:p>\n");

        self.output.push_str("</w:tc>\n");
    }

    /// Generate the final `w:sectPr` with page size, margins and header
    fn generate_section_properties(&mut self, page: &PageSetup, header_id: &str) {
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:headerReference w:type=\"default\" r:id=\"{}\"/>\n",
            escape_xml(header_id)
        ));
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            PAGE_WIDTH, PAGE_HEIGHT
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{}\" w:right=\"{}\" w:bottom=\"{}\" w:left=\"{}\" w:header=\"{}\" w:footer=\"{}\" w:gutter=\"0\"/>\n",
            page.margin_top,
            page.margin_right,
            page.margin_bottom,
            page.margin_left,
            HEADER_DISTANCE,
            HEADER_DISTANCE
        ));
        self.output.push_str("</w:sectPr>\n");
    }

    /// Generate word/header1.xml
    ///
    /// Without page numbers the header holds a single empty paragraph.
    fn generate_header_xml(&mut self, header: Option<&PageHeader>) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            "<w:hdr xmlns:w=\"{}\" xmlns:r=\"{}\">\n",
            W_NS, R_NS
        ));

        match header {
            Some(header) => self.generate_page_number(header),
            None => self.output.push_str("<w:p/>\n"),
        }

        self.output.push_str("</w:hdr>");
        std::mem::take(&mut self.output)
    }

    /// Paragraph with the prefix text and a PAGE field
    fn generate_page_number(&mut self, header: &PageHeader) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n");
        self.generate_justification(header.justification);
        self.output.push_str("</w:pPr>\n");

        self.generate_run(&header.prefix, &header.run);
        self.generate_field_char("begin", &header.run);
        self.output.push_str("<w:r>\n");
        self.generate_run_properties(&header.run);
        self.output
            .push_str("<w:instrText xml:space=\"preserve\"> PAGE </w:instrText>\n");
        self.output.push_str("</w:r>\n");
        self.generate_field_char("separate", &header.run);
        self.generate_run("1", &header.run);
        self.generate_field_char("end", &header.run);

        self.output.push_str("</w:p>\n");
    }

    fn generate_field_char(&mut self, kind: &str, run: &RunStyle) {
        self.output.push_str("<w:r>\n");
        self.generate_run_properties(run);
        self.output
            .push_str(&format!("<w:fldChar w:fldCharType=\"{}\"/>\n", kind));
        self.output.push_str("</w:r>\n");
    }
}

/// Text width between the side margins
fn content_width(page: &PageSetup) -> u32 {
    PAGE_WIDTH.saturating_sub(page.margin_left.saturating_add(page.margin_right))
}

/// First non-blank line of the cover, used as the package title
fn document_title(doc: &AssembledDocument) -> &str {
    doc.cover
        .text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}
