//! Layout settings for the literal value formatter.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Arrays with at most this many items may render on one line.
pub const DEFAULT_MAX_INLINE_ARRAY_ITEMS: usize = 3;
/// Every inline array item must be shorter than this many characters.
pub const DEFAULT_MAX_INLINE_ITEM_LENGTH: usize = 30;
/// Objects with at most this many pairs may render on one line.
pub const DEFAULT_MAX_INLINE_OBJECT_PAIRS: usize = 2;
/// Every inline `key: value` pair must be shorter than this many characters.
pub const DEFAULT_MAX_INLINE_PAIR_LENGTH: usize = 40;
/// Spaces per nesting level in multi-line output.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

const fn default_pretty() -> bool {
    true
}

const fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

const fn default_max_inline_array_items() -> usize {
    DEFAULT_MAX_INLINE_ARRAY_ITEMS
}

const fn default_max_inline_item_length() -> usize {
    DEFAULT_MAX_INLINE_ITEM_LENGTH
}

const fn default_max_inline_object_pairs() -> usize {
    DEFAULT_MAX_INLINE_OBJECT_PAIRS
}

const fn default_max_inline_pair_length() -> usize {
    DEFAULT_MAX_INLINE_PAIR_LENGTH
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatConfig {
    /// Pretty-print object and array initializers.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    #[serde(default = "default_max_inline_array_items")]
    pub max_inline_array_items: usize,

    #[serde(default = "default_max_inline_item_length")]
    pub max_inline_item_length: usize,

    #[serde(default = "default_max_inline_object_pairs")]
    pub max_inline_object_pairs: usize,

    #[serde(default = "default_max_inline_pair_length")]
    pub max_inline_pair_length: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent_width: default_indent_width(),
            max_inline_array_items: default_max_inline_array_items(),
            max_inline_item_length: default_max_inline_item_length(),
            max_inline_object_pairs: default_max_inline_object_pairs(),
            max_inline_pair_length: default_max_inline_pair_length(),
        }
    }
}

impl FormatConfig {
    /// Reject settings the formatter cannot honor.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when `indent_width` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "format.indent_width".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Indentation prefix for the given nesting depth.
    #[must_use]
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = FormatConfig::default();
        assert!(config.pretty);
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.max_inline_array_items, 3);
        assert_eq!(config.max_inline_item_length, 30);
        assert_eq!(config.max_inline_object_pairs, 2);
        assert_eq!(config.max_inline_pair_length, 40);
    }

    #[test]
    fn indent_scales_with_depth() {
        let config = FormatConfig::default();
        assert_eq!(config.indent(0), "");
        assert_eq!(config.indent(2), "    ");
    }

    #[test]
    fn zero_indent_is_rejected() {
        let config = FormatConfig {
            indent_width: 0,
            ..FormatConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
