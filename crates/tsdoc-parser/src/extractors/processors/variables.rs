use std::collections::HashSet;

use ast_grep_core::{Doc, Node};

use super::DeclContext;
use crate::extractors::helpers;
use crate::types::{DocComment, Variable, VariableKind};

// ── lexical_declaration / variable_declaration ─────────────────────

/// One [`Variable`] per distinct declarator name, in source order.
///
/// A declarator's own comment wins. The statement's comment is shared by
/// every declarator, but only when none of them carries its own.
pub(crate) fn process_variable_statement<'r, D: Doc>(
    node: &Node<'r, D>,
    ctx: &DeclContext<'r, D>,
) -> Vec<Variable> {
    let kind = statement_kind(node);
    let mut seen = HashSet::new();
    let declarators: Vec<(Node<'r, D>, String)> = node
        .children()
        .filter(|c| c.kind().as_ref() == "variable_declarator")
        .filter_map(|declarator| {
            let name = declarator_name(&declarator)?;
            seen.insert(name.clone()).then_some((declarator, name))
        })
        .collect();

    let own_docs: Vec<Option<DocComment>> = declarators
        .iter()
        .map(|(declarator, _)| helpers::doc_comment_before(declarator))
        .collect();
    let shared_doc = if own_docs.iter().all(Option::is_none) {
        ctx.doc_comment(node)
    } else {
        None
    };

    declarators
        .into_iter()
        .zip(own_docs)
        .map(|((declarator, name), own_doc)| {
            let (start_line, end_line) = helpers::line_span(&declarator);
            Variable {
                name,
                type_annotation: helpers::field_annotation(&declarator, "type"),
                value: helpers::field_text(&declarator, "value"),
                kind,
                is_exported: ctx.is_exported(),
                doc_comment: own_doc.or_else(|| shared_doc.clone()),
                start_line,
                end_line,
            }
        })
        .collect()
}

fn statement_kind<D: Doc>(node: &Node<D>) -> VariableKind {
    let keyword = node
        .field("kind")
        .or_else(|| node.children().next())
        .map(|k| helpers::text(&k))
        .unwrap_or_default();
    VariableKind::from_keyword(&keyword).unwrap_or_else(|| {
        tracing::debug!(keyword, "unrecognized variable keyword, assuming let");
        VariableKind::default()
    })
}

/// Plain identifier names only; destructuring patterns are skipped.
fn declarator_name<D: Doc>(declarator: &Node<D>) -> Option<String> {
    let name = declarator.field("name")?;
    if name.kind().as_ref() != "identifier" {
        tracing::debug!(pattern = %name.text(), "skipping destructuring declarator");
        return None;
    }
    Some(helpers::text(&name))
}
