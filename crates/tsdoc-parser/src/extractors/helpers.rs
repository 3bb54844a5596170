//! Shared node helpers used by every declaration processor.
//!
//! Text and type-annotation access, wrapper detection, parameter lists and
//! the backward sibling scan that attaches `/** */` comments.

use ast_grep_core::{Doc, Node};

use crate::types::{Accessibility, DocComment, Parameter};

const COMMENT_KIND: &str = "comment";

/// Node kinds that wrap a declaration without being one themselves.
const WRAPPER_KINDS: &[&str] = &["export_statement", "ambient_declaration"];

pub(super) fn text<D: Doc>(node: &Node<D>) -> String {
    node.text().to_string()
}

pub(super) fn field_text<D: Doc>(node: &Node<D>, field: &str) -> Option<String> {
    node.field(field).map(|n| text(&n))
}

/// Text of a `type_annotation`-like node without its leading `:`.
pub(super) fn annotation_text<D: Doc>(node: &Node<D>) -> String {
    node.text()
        .trim_start()
        .trim_start_matches(':')
        .trim()
        .to_string()
}

pub(super) fn field_annotation<D: Doc>(node: &Node<D>, field: &str) -> Option<String> {
    node.field(field)
        .map(|n| annotation_text(&n))
        .filter(|t| !t.is_empty())
}

pub(super) fn has_child_kind<D: Doc>(node: &Node<D>, kind: &str) -> bool {
    node.children().any(|c| c.kind().as_ref() == kind)
}

/// 1-based start and end lines.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn line_span<D: Doc>(node: &Node<D>) -> (u32, u32) {
    (
        node.start_pos().line() as u32 + 1,
        node.end_pos().line() as u32 + 1,
    )
}

pub(super) fn accessibility<D: Doc>(node: &Node<D>) -> Option<Accessibility> {
    node.children()
        .find(|c| c.kind().as_ref() == "accessibility_modifier")
        .and_then(|c| Accessibility::from_keyword(c.text().trim()))
}

// ── wrappers ───────────────────────────────────────────────────────

pub(super) fn is_wrapper_kind(kind: &str) -> bool {
    WRAPPER_KINDS.contains(&kind)
}

/// Enclosing wrapper constructs, innermost first.
///
/// `export declare enum E {}` yields `[ambient_declaration, export_statement]`.
pub(super) fn wrapper_chain<'r, D: Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    let mut chain = Vec::new();
    let mut current = node.parent();
    while let Some(parent) = current {
        if !is_wrapper_kind(parent.kind().as_ref()) {
            break;
        }
        current = parent.parent();
        chain.push(parent);
    }
    chain
}

pub(super) fn chain_contains<D: Doc>(chain: &[Node<D>], kind: &str) -> bool {
    chain.iter().any(|n| n.kind().as_ref() == kind)
}

// ── doc comment attachment ─────────────────────────────────────────

/// Progress of a backward walk over preceding siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScanState {
    Scanning,
    Found(DocComment),
    Stopped,
}

/// How a preceding sibling affects the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiblingRole {
    Comment,
    Transparent,
    Other,
}

impl SiblingRole {
    fn of(kind: &str) -> Self {
        if kind == COMMENT_KIND {
            Self::Comment
        } else if kind == "export_statement" || kind == "decorator" {
            Self::Transparent
        } else {
            Self::Other
        }
    }
}

/// Walks back from a node looking for the nearest `/**` comment.
///
/// Plain comments, wrapper siblings and member decorators are skipped; any
/// other sibling ends the walk without a result.
pub(crate) struct DocCommentScan<'r, D: Doc> {
    cursor: Option<Node<'r, D>>,
    state: ScanState,
}

impl<'r, D: Doc> DocCommentScan<'r, D> {
    pub(crate) fn before(node: &Node<'r, D>) -> Self {
        Self {
            cursor: node.prev(),
            state: ScanState::Scanning,
        }
    }

    /// Advance by one sibling.
    pub(crate) fn step(&mut self) -> &ScanState {
        if self.state != ScanState::Scanning {
            return &self.state;
        }
        let Some(sibling) = self.cursor.take() else {
            self.state = ScanState::Stopped;
            return &self.state;
        };
        match SiblingRole::of(sibling.kind().as_ref()) {
            SiblingRole::Comment => match DocComment::parse(&sibling.text()) {
                Some(doc) => self.state = ScanState::Found(doc),
                None => self.cursor = sibling.prev(),
            },
            SiblingRole::Transparent => self.cursor = sibling.prev(),
            SiblingRole::Other => self.state = ScanState::Stopped,
        }
        &self.state
    }

    pub(crate) fn finish(mut self) -> Option<DocComment> {
        while self.step() == &ScanState::Scanning {}
        match self.state {
            ScanState::Found(doc) => Some(doc),
            ScanState::Scanning | ScanState::Stopped => None,
        }
    }
}

pub(super) fn doc_comment_before<D: Doc>(node: &Node<D>) -> Option<DocComment> {
    DocCommentScan::before(node).finish()
}

/// Doc comment for a declaration: directly above it first, then above each
/// enclosing wrapper, innermost first.
pub(super) fn resolve_doc_comment<D: Doc>(
    node: &Node<D>,
    wrappers: &[Node<D>],
) -> Option<DocComment> {
    doc_comment_before(node).or_else(|| wrappers.iter().find_map(doc_comment_before))
}

// ── signatures ─────────────────────────────────────────────────────

pub(super) fn type_parameters<D: Doc>(node: &Node<D>) -> Vec<String> {
    let Some(params) = node.field("type_parameters") else {
        return Vec::new();
    };
    params
        .children()
        .filter(|c| c.kind().as_ref() == "type_parameter")
        .map(|c| text(&c).split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

pub(super) fn parameters<D: Doc>(node: &Node<D>) -> Vec<Parameter> {
    let Some(params) = node.field("parameters") else {
        return Vec::new();
    };
    params
        .children()
        .filter_map(|c| {
            let optional = match c.kind().as_ref() {
                "required_parameter" => false,
                "optional_parameter" => true,
                _ => return None,
            };
            let name = field_text(&c, "pattern")?;
            Some(Parameter {
                name,
                type_annotation: field_annotation(&c, "type"),
                optional,
                default: field_text(&c, "value"),
            })
        })
        .collect()
}

pub(super) fn return_type<D: Doc>(node: &Node<D>) -> Option<String> {
    field_annotation(node, "return_type")
}
