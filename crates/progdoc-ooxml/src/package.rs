//! Fixed package parts
//!
//! Everything in the package except `word/document.xml` and the header is
//! the same for every export: content types, root relationships, styles,
//! settings and document properties.

use crate::relationships::Relationships;

/// WordprocessingML main namespace
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace (`r:` prefix)
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub const ROOT_RELS_PATH: &str = "_rels/.rels";
pub const CORE_PROPS_PATH: &str = "docProps/core.xml";
pub const APP_PROPS_PATH: &str = "docProps/app.xml";
pub const DOCUMENT_PATH: &str = "word/document.xml";
pub const DOCUMENT_RELS_PATH: &str = "word/_rels/document.xml.rels";
pub const STYLES_PATH: &str = "word/styles.xml";
pub const SETTINGS_PATH: &str = "word/settings.xml";
pub const HEADER_PATH: &str = "word/header1.xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Escape text for XML content or attributes.
///
/// Characters XML 1.0 does not allow (C0 controls other than tab, line feed
/// and carriage return, U+FFFE, U+FFFF) are dropped first.
pub fn escape_xml(text: &str) -> String {
    if text.chars().all(is_xml_char) {
        return quick_xml::escape::escape(text).into_owned();
    }
    let cleaned: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    quick_xml::escape::escape(cleaned.as_str()).into_owned()
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => false,
        _ => true,
    }
}

/// `[Content_Types].xml`
pub fn content_types_xml() -> String {
    let overrides = [
        (
            DOCUMENT_PATH,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            STYLES_PATH,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            SETTINGS_PATH,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml",
        ),
        (
            HEADER_PATH,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml",
        ),
        (
            CORE_PROPS_PATH,
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            APP_PROPS_PATH,
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];

    let mut xml = String::from(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push('\n');
    for (path, content_type) in overrides {
        xml.push_str(&format!(
            "  <Override PartName=\"/{}\" ContentType=\"{}\"/>\n",
            path, content_type
        ));
    }
    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`
pub fn root_relationships() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(DOCUMENT_PATH, Relationships::TYPE_OFFICE_DOCUMENT);
    rels.add(CORE_PROPS_PATH, Relationships::TYPE_CORE_PROPERTIES);
    rels.add(APP_PROPS_PATH, Relationships::TYPE_EXTENDED_PROPERTIES);
    rels
}

/// `word/styles.xml`: Normal and Heading1
pub fn styles_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<w:styles xmlns:w="{W_NS}">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:lang w:val="ru-RU"/></w:rPr></w:rPrDefault>
    <w:pPrDefault/>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:keepNext/><w:outlineLvl w:val="0"/></w:pPr>
  </w:style>
</w:styles>"#
    )
}

/// `word/settings.xml`
pub fn settings_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<w:settings xmlns:w="{W_NS}">
  <w:defaultTabStop w:val="708"/>
  <w:characterSpacingControl w:val="doNotCompress"/>
  <w:compat>
    <w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>
  </w:compat>
</w:settings>"#
    )
}

/// `docProps/core.xml` with a title and no timestamps
pub fn core_properties_xml(title: &str) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    );
    if !title.is_empty() {
        xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}

/// `docProps/app.xml`
pub fn app_properties_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>progdoc {}</Application></Properties>"#,
        crate::VERSION
    )
}
