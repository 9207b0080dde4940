//! Configuration loading and management
//!
//! Everything here has a compiled-in default; a TOML file only needs the
//! keys it wants to override.

mod io;
mod settings;

pub use settings::{ColorSettings, Rgb, Settings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.settings.validate()?;
        Ok(config)
    }

    /// Create a config with the compiled-in defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Resolve the config to use at startup.
    ///
    /// An explicit path must exist and parse. Without one, the global config
    /// is used if present; a broken global config falls back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let global = Self::global_config_path();
        if !global.exists() {
            return Ok(Self::with_defaults());
        }

        match Self::from_file(&global) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    "[singleplexer] Failed to load config ({}): {:#}. Falling back to defaults.",
                    global.display(),
                    e
                );
                Ok(Self::with_defaults())
            }
        }
    }

    /// Path `init` writes to when no `--config` is given
    pub fn default_write_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SplitPolicy;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::with_defaults());
        assert_eq!(config.settings.title, "Terminal singleplexer");
        assert_eq!(config.settings.prompt, "> ");
        assert_eq!(config.settings.columns, 120);
        assert_eq!(config.settings.rows, 30);
        assert_eq!(config.settings.split_policy, SplitPolicy::Literal);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
[settings]
prompt = "$ "
split_policy = "collapse"

[settings.colors]
stderr = [255, 128, 0]
"#,
        )
        .unwrap();

        assert_eq!(config.settings.prompt, "$ ");
        assert_eq!(config.settings.split_policy, SplitPolicy::Collapse);
        assert_eq!(config.settings.colors.stderr, [255, 128, 0]);
        assert_eq!(config.settings.colors.error, [255, 0, 0]);
        assert_eq!(config.settings.font_size, 14.0);
    }

    #[test]
    fn test_invalid_split_policy_is_rejected() {
        let result = Config::from_toml("[settings]\nsplit_policy = \"shell\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(Config::from_toml("[settings]\nfont_size = 0.0\n").is_err());
        assert!(Config::from_toml("[settings]\nfont_size = -12.0\n").is_err());
        assert!(Config::from_toml("[settings]\nfont_size = nan\n").is_err());
        assert!(Config::from_toml("[settings]\nrows = 0\n").is_err());
        assert!(Config::from_toml("[settings]\ncolumns = 0\n").is_err());
    }

    #[test]
    fn test_default_write_path_prefers_explicit() {
        let explicit = Path::new("/tmp/custom.toml");
        assert_eq!(Config::default_write_path(Some(explicit)), explicit);
        assert_eq!(Config::default_write_path(None), Config::global_config_path());
    }
}
