//! # tsdoc-config
//!
//! Layered configuration loading for tsdoc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TSDOC_*` prefix, `__` as separator)
//! 2. Project-level `.tsdoc/config.toml`
//! 3. User-level `~/.config/tsdoc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TSDOC_FORMAT__INDENT_WIDTH` -> `format.indent_width`,
//! `TSDOC_FORMAT__PRETTY` -> `format.pretty`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tsdoc_config::TsDocConfig;
//!
//! let config = TsDocConfig::load().expect("config");
//! println!("indent: {}", config.format.indent_width);
//! ```

mod error;
mod format;

pub use error::ConfigError;
pub use format::{
    DEFAULT_INDENT_WIDTH, DEFAULT_MAX_INLINE_ARRAY_ITEMS, DEFAULT_MAX_INLINE_ITEM_LENGTH,
    DEFAULT_MAX_INLINE_OBJECT_PAIRS, DEFAULT_MAX_INLINE_PAIR_LENGTH, FormatConfig,
};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG: &str = ".tsdoc/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TsDocConfig {
    #[serde(default)]
    pub format: FormatConfig,
}

impl TsDocConfig {
    /// Load configuration from all sources, resolving the project file
    /// relative to the current directory.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with the project file resolved under `project_root`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.format.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = project_root.join(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TSDOC_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tsdoc").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TsDocConfig::default();
        assert!(config.format.pretty);
        assert_eq!(config.format.max_inline_array_items, DEFAULT_MAX_INLINE_ARRAY_ITEMS);
    }

    #[test]
    fn figment_builds_without_files() {
        let dir = std::env::temp_dir().join("tsdoc-config-missing-root");
        let config: TsDocConfig = TsDocConfig::figment(&dir)
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.format.indent_width, DEFAULT_INDENT_WIDTH);
    }
}
