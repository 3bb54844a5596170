//! Pretty-printing of object and array literals.
//!
//! Rendering is bottom-up with a depth counter. Nested containers that are
//! small enough stay on one line; everything else, and every container at
//! depth 0, is laid out one entry per line.

use ast_grep_core::{Doc, Node};
use tsdoc_config::FormatConfig;

use super::{ValueKind, entries, value_node, wrap_and_parse};
use crate::error::FormatError;

/// Format a literal for display with the default layout.
///
/// Returns the trimmed input unchanged when `pretty` is false, when the
/// value is not an object or array, or when it cannot be rendered.
#[must_use]
pub fn format_value(text: &str, pretty: bool) -> String {
    format_value_with(
        text,
        &FormatConfig {
            pretty,
            ..FormatConfig::default()
        },
    )
}

/// Format a literal using the thresholds and `pretty` flag from `config`.
#[must_use]
pub fn format_value_with(text: &str, config: &FormatConfig) -> String {
    let text = text.trim();
    if !config.pretty || text.is_empty() {
        return text.to_string();
    }

    let tree = wrap_and_parse(text);
    let root = tree.root();
    let Some(node) = value_node(&root, text) else {
        return text.to_string();
    };

    let kind = ValueKind::classify(node.kind().as_ref());
    if !kind.is_container() && !is_delimited(text) {
        return text.to_string();
    }

    let renderer = Renderer { config };
    match renderer.render(&node, 0) {
        Ok(rendered) => rendered,
        Err(err) => {
            tracing::debug!(error = %err, text, "falling back to raw literal text");
            text.to_string()
        }
    }
}

fn is_delimited(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}')) || (text.starts_with('[') && text.ends_with(']'))
}

struct Renderer<'c> {
    config: &'c FormatConfig,
}

impl Renderer<'_> {
    fn render<D: Doc>(&self, node: &Node<D>, depth: usize) -> Result<String, FormatError> {
        let body = match node.kind().as_ref() {
            "ERROR" => {
                return Err(FormatError::Malformed {
                    kind: node.kind().to_string(),
                });
            }
            "array" => self.render_array(node, depth)?,
            "object" => self.render_object(node, depth)?,
            _ => node.text().to_string(),
        };

        if depth > 0 {
            return Ok(body);
        }
        let body = match leading_comments(node) {
            Some(comments) if body.contains('\n') || comments.starts_with("//") => {
                format!("{comments}\n{body}")
            }
            Some(comments) => format!("{comments} {body}"),
            None => body,
        };
        Ok(match trailing_comments(node) {
            Some(comments) => format!("{body} {comments}"),
            None => body,
        })
    }

    fn render_array<D: Doc>(&self, node: &Node<D>, depth: usize) -> Result<String, FormatError> {
        let items = entries(node)
            .iter()
            .map(|item| self.render(item, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        if items.is_empty() {
            return Ok("[]".to_string());
        }

        let inline = depth > 0
            && items.len() <= self.config.max_inline_array_items
            && fits(&items, self.config.max_inline_item_length);
        Ok(if inline {
            format!("[{}]", items.join(", "))
        } else {
            self.multi_line('[', &items, ']', depth)
        })
    }

    fn render_object<D: Doc>(&self, node: &Node<D>, depth: usize) -> Result<String, FormatError> {
        let pairs = entries(node)
            .iter()
            .map(|entry| self.render_entry(entry, depth))
            .collect::<Result<Vec<_>, _>>()?;
        if pairs.is_empty() {
            return Ok("{}".to_string());
        }

        let inline = depth > 0
            && pairs.len() <= self.config.max_inline_object_pairs
            && fits(&pairs, self.config.max_inline_pair_length);
        Ok(if inline {
            format!("{{ {} }}", pairs.join(", "))
        } else {
            self.multi_line('{', &pairs, '}', depth)
        })
    }

    /// `key: value` for pairs; shorthand, spread and method entries verbatim.
    fn render_entry<D: Doc>(&self, entry: &Node<D>, depth: usize) -> Result<String, FormatError> {
        if entry.kind().as_ref() != "pair" {
            return Ok(entry.text().to_string());
        }
        let key = entry.field("key").ok_or(FormatError::IncompletePair("key"))?;
        let value = entry
            .field("value")
            .ok_or(FormatError::IncompletePair("value"))?;
        Ok(format!("{}: {}", key.text(), self.render(&value, depth + 1)?))
    }

    fn multi_line(&self, open: char, entries: &[String], close: char, depth: usize) -> String {
        let inner = self.config.indent(depth + 1);
        let outer = self.config.indent(depth);
        let separator = format!(",\n{inner}");
        format!("{open}\n{inner}{}\n{outer}{close}", entries.join(&separator))
    }
}

/// Every part is single-line and shorter than `max_len` characters.
fn fits(parts: &[String], max_len: usize) -> bool {
    parts
        .iter()
        .all(|p| !p.contains('\n') && p.chars().count() < max_len)
}

/// Comments directly before the value, joined by spaces.
fn leading_comments<D: Doc>(node: &Node<D>) -> Option<String> {
    let mut comments = Vec::new();
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != "comment" {
            break;
        }
        comments.push(sibling.text().to_string());
        current = sibling.prev();
    }
    comments.reverse();
    join_comments(comments)
}

/// Comments after the value, whether the grammar attached them to the
/// declarator or to the declaration around it.
fn trailing_comments<D: Doc>(node: &Node<D>) -> Option<String> {
    let mut comments = Vec::new();
    let mut current = node.next();
    if current.is_none() {
        current = node.parent().and_then(|declarator| declarator.next());
    }
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != "comment" {
            break;
        }
        comments.push(sibling.text().to_string());
        current = sibling.next();
    }
    join_comments(comments)
}

fn join_comments(comments: Vec<String>) -> Option<String> {
    (!comments.is_empty()).then(|| comments.join(" "))
}
