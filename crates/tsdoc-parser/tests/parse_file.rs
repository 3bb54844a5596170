use std::fs;
use std::path::Path;

use ast_grep_language::SupportLang;
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use tsdoc_parser::{ParserError, VariableKind, format_value, parse_file, parse_source};

#[test]
fn parses_file_from_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.ts");
    fs::write(
        &path,
        "/** App settings. */\nexport const SETTINGS = { retries: 3, hosts: [\"a\", \"b\"] };\n",
    )
    .expect("write source");

    let file = parse_file(&path).expect("parse succeeds");
    assert_eq!(file.file_path, path);
    assert_eq!(file.variables.len(), 1);

    let settings = &file.variables[0];
    assert_eq!(settings.kind, VariableKind::Const);
    assert!(settings.is_exported);
    assert_eq!(
        settings.doc_comment.as_ref().map(|d| d.description.as_str()),
        Some("App settings.")
    );

    let value = settings.value.as_deref().expect("initializer captured");
    assert_eq!(
        format_value(value, true),
        "{\n  retries: 3,\n  hosts: [\"a\", \"b\"]\n}"
    );
}

#[test]
fn tsx_files_are_supported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("view.tsx");
    fs::write(
        &path,
        "/** Renders a title. */\nexport function Title(props: { text: string }) {\n  return <h1>{props.text}</h1>;\n}\n",
    )
    .expect("write source");

    let file = parse_file(&path).expect("parse succeeds");
    assert_eq!(file.functions.len(), 1);
    assert_eq!(file.functions[0].name, "Title");
}

#[test]
fn missing_file_is_read_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.ts");
    let err = parse_file(&path).expect_err("missing file fails");
    assert!(matches!(err, ParserError::ReadFile { path: p, .. } if p == path));
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = parse_file(Path::new("script.py")).expect_err("python is rejected");
    assert!(matches!(err, ParserError::UnsupportedLanguage(name) if name == "script.py"));
}

#[test]
fn parse_source_matches_sample_fixture() {
    let source = include_str!("fixtures/sample.ts");
    let file = parse_source(source, SupportLang::TypeScript, Path::new("fixtures/sample.ts"));
    assert_eq!(file.len(), 19);
    let json = serde_json::to_value(&file).expect("serialize parsed file");
    assert_eq!(json["classes"][0]["name"], "HttpClient");
    assert_eq!(json["variables"][0]["kind"], "let");
}
