use std::path::Path;

use ast_grep_language::{LanguageExt, SupportLang};
use pretty_assertions::assert_eq;

use super::*;
use crate::types::{Class, Enum, Function, Interface, Named, TypeAlias, Variable};

mod doc_comments;
mod enums;
mod exports;
mod type_aliases;
mod variables;

const SAMPLE: &str = include_str!("../../../tests/fixtures/sample.ts");

fn parse_and_extract(source: &str) -> ParsedFile {
    let root = SupportLang::TypeScript.ast_grep(source);
    extract(&root, Path::new("sample.ts"))
}

fn sample() -> ParsedFile {
    parse_and_extract(SAMPLE)
}

fn find_by_name<'a, T: Named>(items: &'a [T], name: &str) -> &'a T {
    items
        .iter()
        .find(|i| i.name() == name)
        .unwrap_or_else(|| panic!("should find item named '{name}'"))
}

fn names<T: Named>(items: &[T]) -> Vec<&str> {
    items.iter().map(Named::name).collect()
}

fn class<'a>(file: &'a ParsedFile, name: &str) -> &'a Class {
    find_by_name(&file.classes, name)
}

fn interface<'a>(file: &'a ParsedFile, name: &str) -> &'a Interface {
    find_by_name(&file.interfaces, name)
}

fn enumeration<'a>(file: &'a ParsedFile, name: &str) -> &'a Enum {
    find_by_name(&file.enums, name)
}

fn function<'a>(file: &'a ParsedFile, name: &str) -> &'a Function {
    find_by_name(&file.functions, name)
}

fn variable<'a>(file: &'a ParsedFile, name: &str) -> &'a Variable {
    find_by_name(&file.variables, name)
}

fn type_alias<'a>(file: &'a ParsedFile, name: &str) -> &'a TypeAlias {
    find_by_name(&file.type_aliases, name)
}

fn description(doc: Option<&crate::types::DocComment>) -> &str {
    doc.map_or("", |d| d.description.as_str())
}

#[test]
fn sample_collects_every_kind() {
    let file = sample();
    assert_eq!(file.file_path, Path::new("sample.ts"));
    assert_eq!(names(&file.classes), vec!["HttpClient", "Shape"]);
    assert_eq!(
        names(&file.interfaces),
        vec!["ClientOptions", "Retryable", "BaseOptions"]
    );
    assert_eq!(
        names(&file.enums),
        vec!["Color", "Direction", "ExternalEnum", "Permission"]
    );
    assert_eq!(
        names(&file.functions),
        vec!["add", "ids", "loadUser", "external"]
    );
    assert_eq!(
        names(&file.variables),
        vec!["counter", "total", "legacy", "DEFAULTS"]
    );
    assert_eq!(names(&file.type_aliases), vec!["Id", "Mapper"]);
}

#[test]
fn empty_source_yields_empty_file() {
    let file = parse_and_extract("");
    assert!(file.is_empty());
}

#[test]
fn declaration_kind_classification() {
    assert_eq!(DeclarationKind::of("export_statement"), DeclarationKind::Wrapper);
    assert_eq!(DeclarationKind::of("ambient_declaration"), DeclarationKind::Wrapper);
    assert_eq!(
        DeclarationKind::of("abstract_class_declaration"),
        DeclarationKind::Class
    );
    assert_eq!(
        DeclarationKind::of("function_signature"),
        DeclarationKind::Function
    );
    assert_eq!(
        DeclarationKind::of("variable_declaration"),
        DeclarationKind::Variables
    );
    assert_eq!(DeclarationKind::of("statement_block"), DeclarationKind::Block);
    assert_eq!(DeclarationKind::of("identifier"), DeclarationKind::Other);
}
