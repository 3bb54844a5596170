use ast_grep_core::{Doc, Node};

use super::DeclContext;
use super::functions::process_method;
use crate::extractors::helpers;
use crate::types::{Interface, Property};

// ── interface_declaration ──────────────────────────────────────────

pub(crate) fn process_interface<'r, D: Doc>(
    node: &Node<'r, D>,
    ctx: &DeclContext<'r, D>,
) -> Option<Interface> {
    let name = helpers::field_text(node, "name")?;
    let (start_line, end_line) = helpers::line_span(node);

    let mut interface = Interface {
        name,
        extends: extract_extends(node),
        type_parameters: helpers::type_parameters(node),
        is_exported: ctx.is_exported(),
        doc_comment: ctx.doc_comment(node),
        start_line,
        end_line,
        ..Interface::default()
    };

    if let Some(body) = node.field("body") {
        for member in body.children() {
            match member.kind().as_ref() {
                "property_signature" => {
                    if let Some(property) = process_property_signature(&member) {
                        interface.properties.push(property);
                    }
                }
                "method_signature" => {
                    if let Some(method) = process_method(&member) {
                        interface.methods.push(method);
                    }
                }
                _ => {}
            }
        }
    }

    Some(interface)
}

fn process_property_signature<D: Doc>(node: &Node<D>) -> Option<Property> {
    let name = helpers::field_text(node, "name")?;
    let (start_line, end_line) = helpers::line_span(node);
    Some(Property {
        name,
        type_annotation: helpers::field_annotation(node, "type"),
        is_optional: helpers::has_child_kind(node, "?"),
        is_readonly: helpers::has_child_kind(node, "readonly"),
        doc_comment: helpers::doc_comment_before(node),
        start_line,
        end_line,
        ..Property::default()
    })
}

fn extract_extends<D: Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|c| c.kind().as_ref() == "extends_type_clause")
        .flat_map(|clause| {
            clause
                .children()
                .filter(|c| {
                    let k = c.kind();
                    k.as_ref() != "extends" && k.as_ref() != "," && k.as_ref() != "comment"
                })
                .map(|c| helpers::text(&c))
                .collect::<Vec<_>>()
        })
        .collect()
}
