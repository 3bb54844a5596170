//! Literal value classification and display formatting.
//!
//! Initializer text is re-parsed with the TypeScript grammar by wrapping it
//! as `const __value__ = <text>` plus a terminating `;` on its own line, so a
//! trailing line comment cannot swallow it, and inspecting the declarator's
//! value node.
//! Nothing here fails: text that does not parse as a single expression
//! classifies as [`ValueKind::Unknown`] and formats unchanged.

mod format;

use ast_grep_core::{Doc, Node};
use ast_grep_language::SupportLang;
use serde::{Deserialize, Serialize};

use crate::parser::{AstTree, parse_tree};

pub use format::{format_value, format_value_with};

const WRAPPER_PREFIX: &str = "const __value__ = ";

const SKIPPED_ENTRY_KINDS: &[&str] = &["{", "}", "[", "]", ",", "comment"];

/// Structural class of a literal expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Object,
    Array,
    Function,
    #[default]
    Unknown,
}

impl ValueKind {
    /// Classify a tree-sitter node kind.
    #[must_use]
    pub fn classify(node_kind: &str) -> Self {
        match node_kind {
            "string" | "template_string" => Self::String,
            "number" => Self::Number,
            "true" | "false" => Self::Boolean,
            "null" => Self::Null,
            "undefined" => Self::Undefined,
            "object" => Self::Object,
            "array" => Self::Array,
            "function_expression" | "function" | "arrow_function" | "generator_function" => {
                Self::Function
            }
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Object => "object",
            Self::Array => "array",
            Self::Function => "function",
            Self::Unknown => "unknown",
        }
    }

    const fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `key: value` entry of an object literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectProperty {
    /// Key text; string keys are unquoted.
    pub key: String,
    /// Value text, with nested containers summarized as `{...}` / `[...]`.
    pub value: String,
    pub kind: ValueKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayItem {
    pub value: String,
    pub kind: ValueKind,
}

/// Classified literal value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueInfo {
    pub kind: ValueKind,
    /// The input text, trimmed.
    pub value: String,
    /// Object entries, in source order. Empty for non-objects.
    pub properties: Vec<ObjectProperty>,
    /// Array elements, in source order. Empty for non-arrays.
    pub items: Vec<ArrayItem>,
    /// Shared kind of every array element, when there is exactly one.
    pub element_type: Option<ValueKind>,
}

impl ValueInfo {
    fn unknown(text: &str) -> Self {
        Self {
            value: text.to_string(),
            ..Self::default()
        }
    }

    /// Display label: `string[]` for homogeneous arrays, `array` for mixed
    /// or empty ones, the kind name otherwise.
    #[must_use]
    pub fn type_label(&self) -> String {
        match (self.kind, self.element_type) {
            (ValueKind::Array, Some(element)) => format!("{element}[]"),
            (kind, _) => kind.to_string(),
        }
    }
}

/// Classify literal expression text.
///
/// Total: malformed or empty input yields [`ValueKind::Unknown`] carrying
/// the trimmed text.
#[must_use]
pub fn parse_value(text: &str) -> ValueInfo {
    let text = text.trim();
    if text.is_empty() {
        return ValueInfo::unknown(text);
    }

    let tree = wrap_and_parse(text);
    let root = tree.root();
    let Some(node) = value_node(&root, text) else {
        tracing::debug!(text, "value does not parse as a single expression");
        return ValueInfo::unknown(text);
    };

    let kind = ValueKind::classify(node.kind().as_ref());
    let mut info = ValueInfo {
        kind,
        value: text.to_string(),
        ..ValueInfo::default()
    };
    match kind {
        ValueKind::Object => info.properties = object_properties(&node),
        ValueKind::Array => {
            info.items = array_items(&node);
            info.element_type = element_type(&info.items);
        }
        _ => {}
    }
    info
}

pub(crate) fn wrap_and_parse(text: &str) -> AstTree {
    parse_tree(&format!("{WRAPPER_PREFIX}{text}\n;"), SupportLang::TypeScript)
}

/// The declarator's value node, when the initializer covers exactly `text`
/// and parsed without recovery. Comments may surround the expression.
pub(crate) fn value_node<'r, D: Doc>(root: &Node<'r, D>, text: &str) -> Option<Node<'r, D>> {
    let declaration = root
        .children()
        .find(|c| c.kind().as_ref() == "lexical_declaration")?;
    let mut declarators = declaration
        .children()
        .filter(|c| c.kind().as_ref() == "variable_declarator");
    let declarator = declarators.next()?;
    if declarators.next().is_some() {
        return None;
    }
    let value = declarator.field("value")?;

    let single_expression = declarator
        .children()
        .skip_while(|c| c.kind().as_ref() != "=")
        .skip(1)
        .filter(|c| c.kind().as_ref() != "comment")
        .count()
        == 1;
    let covers_text = declaration
        .text()
        .strip_prefix(WRAPPER_PREFIX)
        .and_then(|rest| rest.strip_suffix(';'))
        .is_some_and(|rhs| rhs.trim() == text);

    (single_expression && covers_text && is_well_formed(&value)).then_some(value)
}

/// No `ERROR` nodes and no zero-width (missing) tokens anywhere below.
pub(crate) fn is_well_formed<D: Doc>(node: &Node<D>) -> bool {
    !node
        .dfs()
        .any(|n| n.kind().as_ref() == "ERROR" || n.text().is_empty())
}

/// Container children other than delimiters and comments.
pub(crate) fn entries<'r, D: Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| !SKIPPED_ENTRY_KINDS.contains(&c.kind().as_ref()))
        .collect()
}

fn summarize<D: Doc>(node: &Node<D>, kind: ValueKind) -> String {
    match kind {
        ValueKind::Object => "{...}".to_string(),
        ValueKind::Array => "[...]".to_string(),
        _ => node.text().to_string(),
    }
}

fn unquote(key: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = key
            .strip_prefix(quote)
            .and_then(|k| k.strip_suffix(quote))
        {
            return inner;
        }
    }
    key
}

fn object_properties<D: Doc>(node: &Node<D>) -> Vec<ObjectProperty> {
    entries(node)
        .iter()
        .filter_map(|entry| match entry.kind().as_ref() {
            "pair" => {
                let key = entry.field("key")?;
                let value = entry.field("value")?;
                let kind = ValueKind::classify(value.kind().as_ref());
                Some(ObjectProperty {
                    key: unquote(&key.text()).to_string(),
                    value: summarize(&value, kind),
                    kind,
                })
            }
            "shorthand_property_identifier" => {
                let name = entry.text().to_string();
                Some(ObjectProperty {
                    key: name.clone(),
                    value: name,
                    kind: ValueKind::Unknown,
                })
            }
            _ => None,
        })
        .collect()
}

fn array_items<D: Doc>(node: &Node<D>) -> Vec<ArrayItem> {
    entries(node)
        .iter()
        .map(|item| {
            let kind = ValueKind::classify(item.kind().as_ref());
            ArrayItem {
                value: item.text().to_string(),
                kind,
            }
        })
        .collect()
}

fn element_type(items: &[ArrayItem]) -> Option<ValueKind> {
    let (first, rest) = items.split_first()?;
    rest.iter()
        .all(|item| item.kind == first.kind)
        .then_some(first.kind)
}
