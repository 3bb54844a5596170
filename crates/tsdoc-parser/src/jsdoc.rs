//! `JSDoc` / TSDoc block comment parsing.
//!
//! A comment is only treated as documentation when it opens with `/**`.
//! The text before the first tag line becomes the description; each
//! `@tag value` fragment after it is routed into a dedicated field or
//! into the catch-all `tags` map. Malformed tags are dropped, never fatal.

use crate::types::DocComment;

const DOC_OPEN: &str = "/**";
const DOC_CLOSE: &str = "*/";

impl DocComment {
    /// Parse the raw text of a block comment, delimiters included.
    ///
    /// Returns `None` when the comment is not a `/**` documentation comment.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if !is_doc_comment(text) {
            return None;
        }

        let content = strip_delimiters(text);
        let mut doc = Self::default();
        if content.starts_with('@') {
            doc.apply_tags(&content);
        } else {
            let (description, tag_block) = split_description(&content);
            doc.description = description.trim().to_string();
            if let Some(block) = tag_block {
                doc.apply_tags(block);
            }
        }
        Some(doc)
    }

    fn apply_tags(&mut self, block: &str) {
        self.examples.clear();

        for fragment in split_tag_fragments(block) {
            let Some((name, value)) = split_tag(&fragment) else {
                tracing::trace!(fragment = %fragment, "skipping unparseable doc tag");
                continue;
            };
            match name {
                "param" => match parse_param(value) {
                    Some((param, description)) => {
                        self.params.insert(param, description);
                    }
                    None => tracing::trace!(value, "dropping @param without a name"),
                },
                "returns" | "return" => self.returns = Some(value.to_string()),
                "example" => {
                    let example = clean_example(value);
                    if !example.is_empty() {
                        self.examples.push(example);
                    }
                }
                "deprecated" => self.deprecated = Some(value.to_string()),
                "since" => self.since = Some(value.to_string()),
                _ => {
                    self.tags.insert(name.to_string(), value.to_string());
                }
            }
        }
    }
}

/// Whether a comment's text opens with the documentation delimiter.
pub(crate) fn is_doc_comment(text: &str) -> bool {
    let text = text.trim_start();
    text.starts_with(DOC_OPEN) && !text.starts_with("/**/")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_param_name_char(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '$'
}

// ── delimiter stripping ────────────────────────────────────────────

fn strip_delimiters(text: &str) -> String {
    text.lines()
        .filter_map(strip_line)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn strip_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let body = if let Some(rest) = trimmed.strip_prefix(DOC_OPEN) {
        rest.trim_start()
    } else if trimmed.starts_with(DOC_CLOSE) {
        return None;
    } else if let Some(rest) = trimmed.strip_prefix('*') {
        rest.strip_prefix(' ').unwrap_or(rest)
    } else {
        trimmed
    };
    let body = body.trim_end();
    Some(body.strip_suffix(DOC_CLOSE).unwrap_or(body).trim_end())
}

// ── description / tag block split ──────────────────────────────────

/// Split at the first line that starts with `@`.
fn split_description(content: &str) -> (&str, Option<&str>) {
    for (idx, _) in content.match_indices('\n') {
        let rest = content[idx + 1..].trim_start();
        if rest.starts_with('@') {
            return (&content[..idx], Some(rest));
        }
    }
    (content, None)
}

/// A line begins a new tag when it reads `@name` followed by whitespace or
/// end of line.
fn starts_tag(line: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix('@') else {
        return false;
    };
    let name_len = rest
        .find(|c: char| !is_word_char(c))
        .unwrap_or(rest.len());
    name_len > 0 && rest[name_len..].chars().next().is_none_or(char::is_whitespace)
}

fn split_tag_fragments(block: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();
    for line in block.lines() {
        match fragments.last_mut() {
            Some(current) if !starts_tag(line) => {
                current.push('\n');
                current.push_str(line);
            }
            _ => fragments.push(line.trim_start().to_string()),
        }
    }
    fragments
}

/// `@name value...` -> `(name, trimmed value)`.
fn split_tag(fragment: &str) -> Option<(&str, &str)> {
    let clean = fragment.trim_start_matches('@').trim();
    let name_len = clean
        .find(|c: char| !is_word_char(c))
        .unwrap_or(clean.len());
    if name_len == 0 {
        return None;
    }
    let (name, rest) = clean.split_at(name_len);
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((name, rest.trim()))
}

// ── recognized tags ────────────────────────────────────────────────

/// `{type} name - description`, with the type and dash optional. Also
/// accepts the bracketed optional form `[name=default]`.
fn parse_param(value: &str) -> Option<(String, String)> {
    let mut rest = value;
    if let Some(after) = rest.strip_prefix('{') {
        let close = after.find('}')?;
        if close == 0 {
            return None;
        }
        rest = &after[close + 1..];
    }
    rest = rest.trim_start();

    let (name, tail) = if let Some(bracketed) = rest.strip_prefix('[') {
        let close = bracketed.find(']')?;
        let inner = &bracketed[..close];
        let name = inner.split('=').next().unwrap_or_default().trim();
        (name, &bracketed[close + 1..])
    } else {
        let len = rest
            .find(|c: char| !is_param_name_char(c))
            .unwrap_or(rest.len());
        rest.split_at(len)
    };

    if name.is_empty() || !name.chars().all(is_param_name_char) {
        return None;
    }

    let description = if tail.starts_with(char::is_whitespace) {
        tail.trim()
    } else {
        ""
    };
    let description = description
        .strip_prefix('-')
        .map_or(description, str::trim_start);
    Some((name.to_string(), description.to_string()))
}

/// Drop every code fence line, wherever it sits in the example.
fn clean_example(value: &str) -> String {
    value
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
