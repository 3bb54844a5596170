use ast_grep_core::{Doc, Node};

use super::DeclContext;
use crate::extractors::helpers;
use crate::types::{Enum, EnumMember};

/// Initializer kinds that count as plain literals.
const LITERAL_VALUE_KINDS: &[&str] = &["string", "number", "true", "false"];

// ── enum_declaration ───────────────────────────────────────────────

pub(crate) fn process_enum<'r, D: Doc>(
    node: &Node<'r, D>,
    ctx: &DeclContext<'r, D>,
) -> Option<Enum> {
    let name = helpers::field_text(node, "name")?;
    let (start_line, end_line) = helpers::line_span(node);

    let members = node
        .field("body")
        .map(|body| body.children().filter_map(|m| process_member(&m)).collect())
        .unwrap_or_default();

    Some(Enum {
        name,
        members,
        is_const: helpers::has_child_kind(node, "const"),
        is_declare: ctx.is_declare(),
        is_exported: ctx.is_exported(),
        doc_comment: ctx.doc_comment(node),
        start_line,
        end_line,
    })
}

fn process_member<D: Doc>(node: &Node<D>) -> Option<EnumMember> {
    let (name, value) = match node.kind().as_ref() {
        "property_identifier" | "string" => (helpers::text(node), None),
        "enum_assignment" => (helpers::field_text(node, "name")?, node.field("value")),
        _ => return None,
    };
    if name.is_empty() {
        return None;
    }

    let is_computed_value = value
        .as_ref()
        .is_some_and(|v| !LITERAL_VALUE_KINDS.contains(&v.kind().as_ref()));

    Some(EnumMember {
        name,
        value: value.map(|v| helpers::text(&v)),
        is_computed_value,
        doc_comment: helpers::doc_comment_before(node),
    })
}
