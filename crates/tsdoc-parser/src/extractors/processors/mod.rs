//! Per-kind declaration processors.
//!
//! Each processor takes the declaration node plus its [`DeclContext`] and
//! returns `None` when the node has no resolvable name.

mod classes;
mod enums;
mod functions;
mod interfaces;
mod type_aliases;
mod variables;

use ast_grep_core::{Doc, Node};

use super::helpers;
use crate::types::DocComment;

pub(super) use classes::process_class;
pub(super) use enums::process_enum;
pub(super) use functions::process_function;
pub(super) use interfaces::process_interface;
pub(super) use type_aliases::process_type_alias;
pub(super) use variables::process_variable_statement;

/// Wrapper constructs enclosing a declaration node.
pub(crate) struct DeclContext<'r, D: Doc> {
    wrappers: Vec<Node<'r, D>>,
}

impl<'r, D: Doc> DeclContext<'r, D> {
    pub(super) fn of(node: &Node<'r, D>) -> Self {
        Self {
            wrappers: helpers::wrapper_chain(node),
        }
    }

    pub(super) fn is_exported(&self) -> bool {
        helpers::chain_contains(&self.wrappers, "export_statement")
    }

    pub(super) fn is_declare(&self) -> bool {
        helpers::chain_contains(&self.wrappers, "ambient_declaration")
    }

    /// Doc comment above `node`, falling back to the wrapper positions.
    pub(super) fn doc_comment(&self, node: &Node<'r, D>) -> Option<DocComment> {
        helpers::resolve_doc_comment(node, &self.wrappers)
    }
}
