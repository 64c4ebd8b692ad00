//! Behavior tests for section parsing and document assembly
//!
//! Each test builds the expected node sequence by hand and compares it with
//! what the parser and assembler produce.

use progdoc_ast::{
    Block, ContentNode, FormattingProfile, Justification, Paragraph, ParagraphRole,
    ParagraphStyle, RunStyle, SectionKey, SectionLabels, SectionText, Spacing, Table,
};
use progdoc_core::{assemble, parse_section};

fn profile() -> FormattingProfile {
    FormattingProfile::default()
}

fn body_run() -> RunStyle {
    RunStyle {
        font_family: "Times New Roman".to_string(),
        size_half_points: 28,
        bold: false,
    }
}

fn body(text: &str) -> ContentNode {
    ContentNode::Paragraph(Paragraph {
        text: text.to_string(),
        role: ParagraphRole::Body,
        style: ParagraphStyle {
            style_id: None,
            justification: Some(Justification::Both),
            spacing: Spacing {
                before: None,
                after: Some(120),
                line: Some(240),
            },
        },
        run: body_run(),
    })
}

fn verbatim(text: &str) -> ContentNode {
    ContentNode::Paragraph(Paragraph {
        text: text.to_string(),
        role: ParagraphRole::Verbatim,
        style: ParagraphStyle::default(),
        run: body_run(),
    })
}

fn cells(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Input:
/// ```text
/// Занятия проходят два раза в неделю.
/// | Раздел | Теория | Практика |
/// |---|---|---|
/// | Дебют | 2 | 4 |
/// | Эндшпиль | 1 |
///
/// Итого: 7 часов.
/// ```
#[test]
fn test_curriculum_section() {
    let input = "Занятия проходят два раза в неделю.\n\
                 | Раздел | Теория | Практика |\n\
                 |---|---|---|\n\
                 | Дебют | 2 | 4 |\n\
                 | Эндшпиль | 1 |\n\
                 \n\
                 Итого: 7 часов.";

    let expected = vec![
        body("Занятия проходят два раза в неделю."),
        ContentNode::Table(Table {
            header_cells: cells(&["Раздел", "Теория", "Практика"]),
            body_rows: vec![cells(&["Дебют", "2", "4"]), cells(&["Эндшпиль", "1", ""])],
            run: body_run(),
        }),
        body("Итого: 7 часов."),
    ];

    assert_eq!(parse_section(input, &profile()), expected);
}

#[test]
fn test_table_round_trip() {
    let nodes = parse_section("| A | B |\n|---|---|\n| 1 | 2 |", &profile());
    assert_eq!(
        nodes,
        vec![ContentNode::Table(Table {
            header_cells: cells(&["A", "B"]),
            body_rows: vec![cells(&["1", "2"])],
            run: body_run(),
        })]
    );
}

#[test]
fn test_fallback_keeps_every_line() {
    let nodes = parse_section("| A | B |\nnot a separator\n| 1 | 2 |", &profile());
    assert_eq!(nodes.len(), 3);
    assert!(nodes.iter().all(|node| !node.is_table()));
    let texts: Vec<_> = nodes
        .iter()
        .filter_map(|node| node.as_paragraph())
        .map(|p| p.text.as_str())
        .collect();
    assert_eq!(texts, ["| A | B |", "not a separator", "| 1 | 2 |"]);
}

#[test]
fn test_rule_without_columns_is_verbatim() {
    let nodes = parse_section("|\n|---|", &profile());
    assert_eq!(nodes, vec![verbatim("|"), verbatim("|---|")]);
}

#[test]
fn test_column_padding_from_wider_body() {
    let nodes = parse_section("| A | B |\n|---|---|\n| 1 | 2 | 3 |", &profile());
    let table = nodes[0].as_table().unwrap();
    assert_eq!(table.header_cells, cells(&["A", "B", ""]));
    assert_eq!(table.column_count(), 3);
}

#[test]
fn test_paragraph_preservation() {
    let inputs = [
        "one",
        "  one  \n\n two\n\n\nthree ",
        "Цель: научить.\nЗадачи: развить.",
        "\n\n\n",
        "a | b | c\nno leading pipe",
    ];
    for input in inputs {
        let expected: Vec<_> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let nodes = parse_section(input, &profile());
        let texts: Vec<_> = nodes
            .iter()
            .filter_map(|node| node.as_paragraph())
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(texts, expected, "input: {:?}", input);
        assert_eq!(nodes.len(), expected.len());
    }
}

#[test]
fn test_parse_is_idempotent() {
    let input = "x\n| A |\n|-|\n| 1 |\ny";
    assert_eq!(parse_section(input, &profile()), parse_section(input, &profile()));
}

#[test]
fn test_section_order_ignores_insertion_order() {
    let mut forward = SectionText::new();
    let mut backward = SectionText::new();
    for key in SectionKey::BODY {
        forward.set(key, key.as_str());
    }
    for key in SectionKey::BODY.into_iter().rev() {
        backward.set(key, key.as_str());
    }

    let labels = SectionLabels::default();
    let a = assemble("T", &forward, &labels, &profile());
    let b = assemble("T", &backward, &labels, &profile());
    assert_eq!(a, b);

    let keys: Vec<_> = a.headings().map(|(key, _)| key).collect();
    assert_eq!(keys, SectionKey::BODY);
}

#[test]
fn test_empty_section_keeps_heading() {
    let sections = SectionText::new().with(SectionKey::Goal, "");
    let doc = assemble("T", &sections, &SectionLabels::default(), &profile());

    assert!(doc
        .headings()
        .any(|(key, heading)| key == SectionKey::Goal && heading.text == "ЦЕЛЬ ПРОГРАММЫ"));
    assert!(doc.section_nodes(SectionKey::Goal).is_empty());
}

#[test]
fn test_title_page_text_not_in_body() {
    let sections = SectionText::new().with(SectionKey::TitlePage, "Обложка");
    let doc = assemble(
        sections.title_page(),
        &sections,
        &SectionLabels::default(),
        &profile(),
    );
    assert_eq!(doc.cover.text, "Обложка");
    let in_body = doc.entries.iter().any(|entry| match &entry.block {
        Block::Node(ContentNode::Paragraph(p)) => p.text == "Обложка",
        _ => false,
    });
    assert!(!in_body);
}

#[test]
fn test_font_doubling_in_assembled_document() {
    let doc = assemble("T", &SectionText::new(), &SectionLabels::default(), &profile());
    assert_eq!(doc.cover.run.size_half_points, 28);
    assert!(doc.headings().all(|(_, h)| h.run.size_half_points == 32));
    assert_eq!(doc.page.margin_top, 1134);
}
