use serde::{Deserialize, Serialize};

use super::DocComment;
use super::named::impl_named;

/// `public` / `private` / `protected` modifier on a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Public,
    Private,
    Protected,
}

impl Accessibility {
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }
}

impl std::fmt::Display for Accessibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_annotation: Option<String>,
    pub optional: bool,
    pub default: Option<String>,
}

/// A method, constructor, interface method signature or free function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<String>,
    pub is_async: bool,
    pub is_generator: bool,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_optional: bool,
    pub accessibility: Option<Accessibility>,
    /// Only meaningful for free functions.
    pub is_exported: bool,
    pub doc_comment: Option<DocComment>,
    pub start_line: u32,
    pub end_line: u32,
}

/// Free functions share the method shape.
pub type Function = Method;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub type_annotation: Option<String>,
    pub default_value: Option<String>,
    pub is_optional: bool,
    pub is_readonly: bool,
    pub is_static: bool,
    pub accessibility: Option<Accessibility>,
    pub doc_comment: Option<DocComment>,
    pub start_line: u32,
    pub end_line: u32,
}

impl_named!(Parameter, Method, Property);
