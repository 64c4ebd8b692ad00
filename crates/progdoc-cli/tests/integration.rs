//! Integration tests for progdoc CLI
//!
//! These tests drive the command functions against real files:
//! program JSON -> DOCX, and generated reply -> program JSON.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use progdoc_ast::{FormattingProfile, Program, SectionKey};
use progdoc_cli::{import_command, render_command, render_program};
use progdoc_ooxml::OoxmlArchive;
use tempfile::TempDir;

fn sample_program() -> Program {
    let mut program = Program::named("Юный шахматист");
    program.hours = 72;
    program
        .sections
        .set(SectionKey::TitlePage, "Программа «Юный шахматист»");
    program
        .sections
        .set(SectionKey::Goal, "Развить логическое мышление.");
    program.sections.set(
        SectionKey::Curriculum,
        "| Тема | Часы |\n|---|---|\n| Дебют | 4 |",
    );
    program
}

fn write_program(dir: &Path, name: &str, program: &Program) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(program).unwrap()).unwrap();
    path
}

fn read_document_xml(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();
    String::from_utf8(archive.document_xml().unwrap().to_vec()).unwrap()
}

#[test]
fn test_render_to_explicit_output() {
    let temp = TempDir::new().unwrap();
    let input = write_program(temp.path(), "chess.json", &sample_program());
    let output = temp.path().join("chess.docx");

    let written = render_program(&input, Some(&output), None).unwrap();
    assert_eq!(written, output);

    let xml = read_document_xml(&output);
    assert!(xml.contains("Программа «Юный шахматист»"));
    assert!(xml.contains("ЦЕЛЬ ПРОГРАММЫ"));
    assert!(xml.contains("<w:tbl>"));
    // Defaults apply when the record has no formatting
    assert!(xml.contains("w:ascii=\"Times New Roman\""));
}

#[test]
fn test_render_uses_suggested_name_and_config_directory() {
    let temp = TempDir::new().unwrap();
    let input = write_program(temp.path(), "chess.json", &sample_program());
    let out_dir = temp.path().join("out");
    fs::write(
        temp.path().join("progdoc.toml"),
        format!(
            "[output]\ndirectory = {:?}\n\n[labels]\ngoal = \"Цель\"\n",
            out_dir.display().to_string()
        ),
    )
    .unwrap();

    let written = render_command(&[input.display().to_string()], None, None).unwrap();
    assert_eq!(written, [out_dir.join("Юный_шахматист_Program.docx")]);

    let xml = read_document_xml(&written[0]);
    assert!(xml.contains(">ЦЕЛЬ<"));
    assert!(!xml.contains("ЦЕЛЬ ПРОГРАММЫ"));
}

#[test]
fn test_record_formatting_wins_over_config() {
    let temp = TempDir::new().unwrap();
    let mut program = sample_program();
    program.formatting = Some(FormattingProfile {
        font_family: "Arial".to_string(),
        ..FormattingProfile::default()
    });
    let input = write_program(temp.path(), "chess.json", &program);
    fs::write(
        temp.path().join("progdoc.toml"),
        "[formatting]\nfont_family = \"Calibri\"\n",
    )
    .unwrap();
    let output = temp.path().join("chess.docx");

    render_program(&input, Some(&output), None).unwrap();
    let xml = read_document_xml(&output);
    assert!(xml.contains("w:ascii=\"Arial\""));
    assert!(!xml.contains("Calibri"));
}

#[test]
fn test_render_is_reproducible() {
    let temp = TempDir::new().unwrap();
    let input = write_program(temp.path(), "chess.json", &sample_program());
    let first = temp.path().join("first.docx");
    let second = temp.path().join("second.docx");

    render_program(&input, Some(&first), None).unwrap();
    render_program(&input, Some(&second), None).unwrap();
    assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
}

#[test]
fn test_render_glob() {
    let temp = TempDir::new().unwrap();
    let mut other = sample_program();
    other.name = "Robotics".to_string();
    write_program(temp.path(), "a.json", &sample_program());
    write_program(temp.path(), "b.json", &other);
    fs::write(
        temp.path().join("progdoc.toml"),
        format!(
            "[output]\ndirectory = {:?}\n",
            temp.path().display().to_string()
        ),
    )
    .unwrap();

    let pattern = temp.path().join("*.json").display().to_string();
    let written = render_command(&[pattern], None, None).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn test_output_with_many_inputs_rejected() {
    let temp = TempDir::new().unwrap();
    let a = write_program(temp.path(), "a.json", &sample_program());
    let b = write_program(temp.path(), "b.json", &sample_program());

    let result = render_command(
        &[a.display().to_string(), b.display().to_string()],
        Some(&temp.path().join("out.docx")),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn test_missing_input() {
    let temp = TempDir::new().unwrap();
    let err = render_program(&temp.path().join("missing.json"), None, None).unwrap_err();
    assert!(err.to_string().contains("Input file not found"));
}

#[test]
fn test_invalid_formatting_rejected() {
    let temp = TempDir::new().unwrap();
    let mut program = sample_program();
    program.formatting = Some(FormattingProfile {
        font_size: 0.0,
        ..FormattingProfile::default()
    });
    let input = write_program(temp.path(), "chess.json", &program);

    let err = render_program(&input, Some(&temp.path().join("x.docx")), None).unwrap_err();
    assert!(format!("{:#}", err).contains("fontSize"));
}

#[test]
fn test_import_reply() {
    let temp = TempDir::new().unwrap();
    let program_path = write_program(temp.path(), "chess.json", &sample_program());
    let reply_path = temp.path().join("reply.txt");
    fs::write(
        &reply_path,
        "```json\n{\"tasks\": \"Задачи: Обучающие: знать. Развивающие: думать\", \"goal\": null}\n```",
    )
    .unwrap();

    import_command(&reply_path, &program_path, None).unwrap();

    let program: Program =
        serde_json::from_str(&fs::read_to_string(&program_path).unwrap()).unwrap();
    assert_eq!(
        program.sections.get(SectionKey::Tasks),
        "Обучающие: знать.\nРазвивающие: думать"
    );
    assert_eq!(program.sections.get(SectionKey::Goal), "");
    // Sections missing from the reply are kept
    assert!(program
        .sections
        .get(SectionKey::Curriculum)
        .contains("Дебют"));
    assert_eq!(program.hours, 72);
}

#[test]
fn test_import_invalid_reply_leaves_program() {
    let temp = TempDir::new().unwrap();
    let program_path = write_program(temp.path(), "chess.json", &sample_program());
    let before = fs::read_to_string(&program_path).unwrap();
    let reply_path = temp.path().join("reply.txt");
    fs::write(&reply_path, "not json at all").unwrap();

    assert!(import_command(&reply_path, &program_path, None).is_err());
    assert_eq!(fs::read_to_string(&program_path).unwrap(), before);
}
