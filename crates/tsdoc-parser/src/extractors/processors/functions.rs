use ast_grep_core::{Doc, Node};

use super::DeclContext;
use crate::extractors::helpers;
use crate::types::{Function, Method};

// ── function_declaration / generator_function_declaration / function_signature

pub(crate) fn process_function<'r, D: Doc>(
    node: &Node<'r, D>,
    ctx: &DeclContext<'r, D>,
) -> Option<Function> {
    let mut function = build_callable(node)?;
    function.doc_comment = ctx.doc_comment(node);
    function.is_exported = ctx.is_exported();
    Some(function)
}

/// Method-shaped record for a class or interface member.
pub(super) fn process_method<D: Doc>(node: &Node<D>) -> Option<Method> {
    let mut method = build_callable(node)?;
    method.doc_comment = helpers::doc_comment_before(node);
    Some(method)
}

fn build_callable<D: Doc>(node: &Node<D>) -> Option<Method> {
    let name = helpers::field_text(node, "name")?;
    let kind = node.kind();
    let (start_line, end_line) = helpers::line_span(node);

    Some(Method {
        name,
        parameters: helpers::parameters(node),
        return_type: helpers::return_type(node),
        is_async: helpers::has_child_kind(node, "async"),
        is_generator: kind.as_ref() == "generator_function_declaration"
            || helpers::has_child_kind(node, "*"),
        is_static: helpers::has_child_kind(node, "static"),
        is_abstract: kind.as_ref() == "abstract_method_signature"
            || helpers::has_child_kind(node, "abstract"),
        is_optional: helpers::has_child_kind(node, "?"),
        accessibility: helpers::accessibility(node),
        start_line,
        end_line,
        ..Method::default()
    })
}
