use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured content of a `/** ... */` documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocComment {
    /// Free text before the first tag. May be empty.
    pub description: String,
    /// `@param` text keyed by parameter name. Later tags overwrite earlier ones.
    pub params: HashMap<String, String>,
    pub returns: Option<String>,
    pub examples: Vec<String>,
    pub deprecated: Option<String>,
    pub since: Option<String>,
    /// Every tag without a dedicated field, keyed by tag name.
    pub tags: HashMap<String, String>,
}

impl DocComment {
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}
