use ast_grep_core::{Doc, Node};

use super::DeclContext;
use crate::extractors::helpers;
use crate::types::TypeAlias;

pub(crate) fn process_type_alias<'r, D: Doc>(
    node: &Node<'r, D>,
    ctx: &DeclContext<'r, D>,
) -> Option<TypeAlias> {
    let name = helpers::field_text(node, "name")?;
    let (start_line, end_line) = helpers::line_span(node);
    Some(TypeAlias {
        name,
        type_definition: helpers::field_text(node, "value").unwrap_or_default(),
        type_parameters: helpers::type_parameters(node),
        is_exported: ctx.is_exported(),
        doc_comment: ctx.doc_comment(node),
        start_line,
        end_line,
    })
}
