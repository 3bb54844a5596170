//! Parser error types for tsdoc-parser.

use std::path::PathBuf;

/// Errors that cross the extraction boundary.
///
/// Everything else (nameless declarations, malformed tags, unparseable
/// literals) degrades to partial data instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),
}

/// Raised while rendering a literal; callers fall back to the raw text.
#[derive(Debug, thiserror::Error)]
pub(crate) enum FormatError {
    #[error("Malformed {kind} node in literal")]
    Malformed { kind: String },

    #[error("Pair without {0}")]
    IncompletePair(&'static str),
}
