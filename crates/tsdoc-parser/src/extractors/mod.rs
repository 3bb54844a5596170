//! Declaration extraction over a parsed TypeScript tree.
//!
//! One depth-first walk classifies each node with [`DeclarationKind`] and
//! hands declaration nodes to their processor. `export` and `declare`
//! wrappers are transparent: the walk continues into them and the payload is
//! dispatched exactly once, with the wrapper chain supplying the export flag
//! and the fallback doc comment position. Function, method and `static { }`
//! block bodies are not entered, so locals never surface as top-level
//! declarations.

mod helpers;
mod processors;

use std::path::Path;

use ast_grep_core::{AstGrep, Doc, Node};

use crate::types::{Declaration, ParsedFile};
use processors::DeclContext;

/// Parents whose `statement_block` child is a callable body.
const CALLABLE_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "generator_function",
    "arrow_function",
    "method_definition",
    "class_static_block",
];

/// What the walk does with a node, decided from its kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclarationKind {
    Wrapper,
    Class,
    Interface,
    Enum,
    Function,
    Variables,
    TypeAlias,
    Block,
    Other,
}

impl DeclarationKind {
    fn of(kind: &str) -> Self {
        match kind {
            "export_statement" | "ambient_declaration" => Self::Wrapper,
            "class_declaration" | "abstract_class_declaration" => Self::Class,
            "interface_declaration" => Self::Interface,
            "enum_declaration" => Self::Enum,
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                Self::Function
            }
            "lexical_declaration" | "variable_declaration" => Self::Variables,
            "type_alias_declaration" => Self::TypeAlias,
            "statement_block" => Self::Block,
            _ => Self::Other,
        }
    }
}

/// Extract every declaration in `root` into a [`ParsedFile`].
pub fn extract<D: Doc>(root: &AstGrep<D>, file_path: &Path) -> ParsedFile {
    let mut file = ParsedFile::new(file_path);
    visit(&root.root(), &mut file);
    tracing::debug!(
        file = %file_path.display(),
        declarations = file.len(),
        "extracted declarations"
    );
    file
}

fn visit<D: Doc>(node: &Node<D>, file: &mut ParsedFile) {
    let kind = DeclarationKind::of(node.kind().as_ref());
    match kind {
        DeclarationKind::Wrapper | DeclarationKind::Other => {}
        DeclarationKind::Block => {
            if is_callable_body(node) {
                return;
            }
        }
        DeclarationKind::Variables => {
            let ctx = DeclContext::of(node);
            for variable in processors::process_variable_statement(node, &ctx) {
                file.push(Declaration::Variable(variable));
            }
        }
        DeclarationKind::Class
        | DeclarationKind::Interface
        | DeclarationKind::Enum
        | DeclarationKind::Function
        | DeclarationKind::TypeAlias => {
            let ctx = DeclContext::of(node);
            match dispatch(kind, node, &ctx) {
                Some(declaration) => file.push(declaration),
                None => tracing::debug!(
                    kind = %node.kind(),
                    line = node.start_pos().line() + 1,
                    "skipping declaration without a name"
                ),
            }
        }
    }

    for child in node.children() {
        visit(&child, file);
    }
}

fn dispatch<'r, D: Doc>(
    kind: DeclarationKind,
    node: &Node<'r, D>,
    ctx: &DeclContext<'r, D>,
) -> Option<Declaration> {
    match kind {
        DeclarationKind::Class => processors::process_class(node, ctx).map(Declaration::Class),
        DeclarationKind::Interface => {
            processors::process_interface(node, ctx).map(Declaration::Interface)
        }
        DeclarationKind::Enum => processors::process_enum(node, ctx).map(Declaration::Enum),
        DeclarationKind::Function => {
            processors::process_function(node, ctx).map(Declaration::Function)
        }
        DeclarationKind::TypeAlias => {
            processors::process_type_alias(node, ctx).map(Declaration::TypeAlias)
        }
        DeclarationKind::Wrapper
        | DeclarationKind::Variables
        | DeclarationKind::Block
        | DeclarationKind::Other => None,
    }
}

fn is_callable_body<D: Doc>(block: &Node<D>) -> bool {
    block
        .parent()
        .is_some_and(|p| CALLABLE_KINDS.contains(&p.kind().as_ref()))
}

#[cfg(test)]
mod tests;
