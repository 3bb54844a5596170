use serde::{Deserialize, Serialize};

use super::named::impl_named;
use super::{DocComment, Function, Method, Property};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub constructor: Option<Method>,
    pub methods: Vec<Method>,
    pub properties: Vec<Property>,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub type_parameters: Vec<String>,
    pub is_abstract: bool,
    pub is_exported: bool,
    pub doc_comment: Option<DocComment>,
    pub start_line: u32,
    pub end_line: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<Method>,
    pub properties: Vec<Property>,
    pub extends: Vec<String>,
    pub type_parameters: Vec<String>,
    pub is_exported: bool,
    pub doc_comment: Option<DocComment>,
    pub start_line: u32,
    pub end_line: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    /// Raw initializer text; `None` for ordinal members.
    pub value: Option<String>,
    /// The initializer is an expression rather than a plain literal.
    pub is_computed_value: bool,
    pub doc_comment: Option<DocComment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub is_const: bool,
    pub is_declare: bool,
    pub is_exported: bool,
    pub doc_comment: Option<DocComment>,
    pub start_line: u32,
    pub end_line: u32,
}

/// Declaration keyword of a variable statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    Const,
    #[default]
    Let,
    Var,
}

impl VariableKind {
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "const" => Some(Self::Const),
            "let" => Some(Self::Let),
            "var" => Some(Self::Var),
            _ => None,
        }
    }
}

impl std::fmt::Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Const => "const",
            Self::Let => "let",
            Self::Var => "var",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub type_annotation: Option<String>,
    /// Raw initializer text. See [`crate::value::format_value`] for display.
    pub value: Option<String>,
    pub kind: VariableKind,
    pub is_exported: bool,
    pub doc_comment: Option<DocComment>,
    pub start_line: u32,
    pub end_line: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: String,
    pub type_definition: String,
    pub type_parameters: Vec<String>,
    pub is_exported: bool,
    pub doc_comment: Option<DocComment>,
    pub start_line: u32,
    pub end_line: u32,
}

impl_named!(Class, Interface, EnumMember, Enum, Variable, TypeAlias);

/// One top-level entity recovered from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "declaration", rename_all = "snake_case")]
pub enum Declaration {
    Class(Class),
    Interface(Interface),
    Enum(Enum),
    Function(Function),
    Variable(Variable),
    TypeAlias(TypeAlias),
}

impl Declaration {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Class(c) => &c.name,
            Self::Interface(i) => &i.name,
            Self::Enum(e) => &e.name,
            Self::Function(f) => &f.name,
            Self::Variable(v) => &v.name,
            Self::TypeAlias(t) => &t.name,
        }
    }

    #[must_use]
    pub const fn is_exported(&self) -> bool {
        match self {
            Self::Class(c) => c.is_exported,
            Self::Interface(i) => i.is_exported,
            Self::Enum(e) => e.is_exported,
            Self::Function(f) => f.is_exported,
            Self::Variable(v) => v.is_exported,
            Self::TypeAlias(t) => t.is_exported,
        }
    }

    #[must_use]
    pub const fn doc_comment(&self) -> Option<&DocComment> {
        match self {
            Self::Class(c) => c.doc_comment.as_ref(),
            Self::Interface(i) => i.doc_comment.as_ref(),
            Self::Enum(e) => e.doc_comment.as_ref(),
            Self::Function(f) => f.doc_comment.as_ref(),
            Self::Variable(v) => v.doc_comment.as_ref(),
            Self::TypeAlias(t) => t.doc_comment.as_ref(),
        }
    }
}
