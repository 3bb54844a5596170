//! # tsdoc-parser
//!
//! ast-grep-based extraction of a documentation model from TypeScript
//! sources.
//!
//! - [`parse_file`] / [`parse_source`] walk a file once and collect classes,
//!   interfaces, enums, functions, variables and type aliases, each with its
//!   attached `/** */` comment parsed into a [`DocComment`].
//! - [`value::parse_value`] classifies initializer text and
//!   [`value::format_value`] pretty-prints object and array literals.
//!
//! Only file access and unsupported extensions produce errors. Nameless
//! declarations, malformed tags and unparseable literals degrade to partial
//! data.

mod error;
mod extractors;
mod jsdoc;
pub mod parser;
pub mod types;
pub mod value;

use std::path::Path;

use ast_grep_language::SupportLang;

pub use error::ParserError;
pub use types::{
    Accessibility, Class, Declaration, DocComment, Enum, EnumMember, Function, Interface, Method,
    Named, Parameter, ParsedFile, Property, TypeAlias, Variable, VariableKind,
};
pub use value::{ValueInfo, ValueKind, format_value, format_value_with, parse_value};

/// Read and extract one TypeScript or TSX file.
///
/// # Errors
/// Returns [`ParserError::UnsupportedLanguage`] for extensions other than
/// `.ts`, `.mts`, `.cts` and `.tsx`, and [`ParserError::ReadFile`] when the
/// file cannot be read.
pub fn parse_file(path: &Path) -> Result<ParsedFile, ParserError> {
    let display = path.to_string_lossy();
    let lang = parser::detect_language(&display)
        .ok_or_else(|| ParserError::UnsupportedLanguage(display.to_string()))?;
    let source = std::fs::read_to_string(path).map_err(|source| ParserError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_source(&source, lang, path))
}

/// Extract declarations from in-memory source.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang, file_path: &Path) -> ParsedFile {
    let tree = parser::parse_tree(source, lang);
    extractors::extract(&tree, file_path)
}
