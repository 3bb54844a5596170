use ast_grep_core::{Doc, Node};

use super::DeclContext;
use super::functions::process_method;
use crate::extractors::helpers;
use crate::types::{Class, Method, Property};

const CONSTRUCTOR: &str = "constructor";

// ── class_declaration / abstract_class_declaration ─────────────────

pub(crate) fn process_class<'r, D: Doc>(
    node: &Node<'r, D>,
    ctx: &DeclContext<'r, D>,
) -> Option<Class> {
    let name = helpers::field_text(node, "name")?;
    let (start_line, end_line) = helpers::line_span(node);

    let mut class = Class {
        name,
        extends: extract_extends(node),
        implements: extract_implements(node),
        type_parameters: helpers::type_parameters(node),
        is_abstract: node.kind().as_ref() == "abstract_class_declaration",
        is_exported: ctx.is_exported(),
        doc_comment: ctx.doc_comment(node),
        start_line,
        end_line,
        ..Class::default()
    };

    if let Some(body) = node.field("body") {
        for member in body.children() {
            match member.kind().as_ref() {
                "method_definition" | "method_signature" | "abstract_method_signature" => {
                    if let Some(method) = process_method(&member) {
                        add_method(&mut class, method);
                    }
                }
                "public_field_definition" => {
                    if let Some(property) = process_field(&member) {
                        class.properties.push(property);
                    }
                }
                _ => {}
            }
        }
    }

    Some(class)
}

/// Constructors are lifted out of the method list; the first one wins.
fn add_method(class: &mut Class, method: Method) {
    if method.name == CONSTRUCTOR {
        if class.constructor.is_none() {
            class.constructor = Some(method);
        }
    } else {
        class.methods.push(method);
    }
}

fn process_field<D: Doc>(node: &Node<D>) -> Option<Property> {
    let name = helpers::field_text(node, "name")?;
    let (start_line, end_line) = helpers::line_span(node);
    Some(Property {
        name,
        type_annotation: helpers::field_annotation(node, "type"),
        default_value: helpers::field_text(node, "value"),
        is_optional: helpers::has_child_kind(node, "?"),
        is_readonly: helpers::has_child_kind(node, "readonly"),
        is_static: helpers::has_child_kind(node, "static"),
        accessibility: helpers::accessibility(node),
        doc_comment: helpers::doc_comment_before(node),
        start_line,
        end_line,
    })
}

fn heritage_clause<'r, D: Doc>(node: &Node<'r, D>, clause_kind: &str) -> Option<Node<'r, D>> {
    node.children()
        .filter(|c| c.kind().as_ref() == "class_heritage")
        .flat_map(|heritage| heritage.children().collect::<Vec<_>>())
        .find(|c| c.kind().as_ref() == clause_kind)
}

fn extract_extends<D: Doc>(node: &Node<D>) -> Option<String> {
    let clause = heritage_clause(node, "extends_clause")?;
    let base = clause.text().trim_start().trim_start_matches("extends").trim().to_string();
    (!base.is_empty()).then_some(base)
}

fn extract_implements<D: Doc>(node: &Node<D>) -> Vec<String> {
    let Some(clause) = heritage_clause(node, "implements_clause") else {
        return Vec::new();
    };
    clause
        .children()
        .filter(|c| {
            let k = c.kind();
            k.as_ref() != "implements" && k.as_ref() != "," && k.as_ref() != "comment"
        })
        .map(|c| helpers::text(&c))
        .collect()
}
