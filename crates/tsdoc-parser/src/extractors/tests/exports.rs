use super::*;
use pretty_assertions::assert_eq;

#[test]
fn export_flags_follow_wrapper() {
    let file = parse_and_extract("export class A {}\nclass B {}\nexport declare class C {}");
    let flags: Vec<(&str, bool)> = file
        .classes
        .iter()
        .map(|c| (c.name.as_str(), c.is_exported))
        .collect();
    assert_eq!(flags, vec![("A", true), ("B", false), ("C", true)]);
}

#[test]
fn exported_payload_is_extracted_once() {
    let file = parse_and_extract("export interface I { a: string }\nexport type T = I;");
    assert_eq!(file.interfaces.len(), 1);
    assert_eq!(file.type_aliases.len(), 1);
}

#[test]
fn declare_without_export_is_not_exported() {
    let file = parse_and_extract("declare enum E { A }\ndeclare const VERSION: string;");
    let e = enumeration(&file, "E");
    assert!(e.is_declare);
    assert!(!e.is_exported);
    let version = variable(&file, "VERSION");
    assert!(!version.is_exported);
    assert_eq!(version.type_annotation.as_deref(), Some("string"));
}

#[test]
fn doc_comment_above_export_keyword() {
    let file = parse_and_extract("/** Wrapped. */\nexport declare function f(): void;");
    assert_eq!(description(function(&file, "f").doc_comment.as_ref()), "Wrapped.");
}

#[test]
fn walk_continues_past_preceding_exports() {
    let file = parse_and_extract("/** Head. */\nexport const a = 1;\nfunction f() {}");
    assert_eq!(description(function(&file, "f").doc_comment.as_ref()), "Head.");
}
