use super::*;
use pretty_assertions::assert_eq;
use crate::types::VariableKind;

#[test]
fn duplicate_declarators_keep_first() {
    let file = sample();
    let lets: Vec<(&str, Option<&str>)> = file
        .variables
        .iter()
        .filter(|v| v.kind == VariableKind::Let)
        .map(|v| (v.name.as_str(), v.value.as_deref()))
        .collect();
    assert_eq!(lets, vec![("counter", Some("0")), ("total", Some("10"))]);
    assert_eq!(
        variable(&file, "total").type_annotation.as_deref(),
        Some("number")
    );
}

#[test]
fn var_without_initializer() {
    let file = sample();
    let legacy = variable(&file, "legacy");
    assert_eq!(legacy.kind, VariableKind::Var);
    assert_eq!(legacy.value, None);
    assert!(legacy.doc_comment.is_none());
}

#[test]
fn exported_const_takes_doc_from_export() {
    let file = sample();
    let defaults = variable(&file, "DEFAULTS");
    assert_eq!(defaults.kind, VariableKind::Const);
    assert!(defaults.is_exported);
    assert_eq!(
        defaults.value.as_deref(),
        Some("{ name: \"x\", tags: [\"a\", \"b\", \"c\"] }")
    );
    assert_eq!(description(defaults.doc_comment.as_ref()), "Default settings.");
}

#[test]
fn statement_comment_shared_by_all_declarators() {
    let file = parse_and_extract("/** Pair. */\nconst a = 1, b = 2;");
    assert_eq!(description(variable(&file, "a").doc_comment.as_ref()), "Pair.");
    assert_eq!(description(variable(&file, "b").doc_comment.as_ref()), "Pair.");
}

#[test]
fn declarator_comment_suppresses_statement_comment() {
    let file = parse_and_extract("/** Pair. */\nconst a = 1,\n  /** Second. */ b = 2;");
    assert!(variable(&file, "a").doc_comment.is_none());
    assert_eq!(description(variable(&file, "b").doc_comment.as_ref()), "Second.");
}

#[test]
fn destructuring_declarators_are_skipped() {
    let file = parse_and_extract("const { a, b } = obj, [c] = list, d = 4;");
    assert_eq!(names(&file.variables), vec!["d"]);
}

#[test]
fn repeated_names_within_one_statement() {
    let file = parse_and_extract("var a = 1, b = 2, a = 3;");
    assert_eq!(names(&file.variables), vec!["a", "b"]);
    assert_eq!(variable(&file, "a").value.as_deref(), Some("1"));
}
