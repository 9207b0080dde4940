//! Configuration file I/O operations

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use tracing::debug;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.singleplexer/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".singleplexer")
    }

    /// Get the global config file path (~/.singleplexer/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Write the configuration to `path`, replacing any existing file.
    ///
    /// Writers are serialized by an exclusive lock on a `.toml.lock` sibling.
    /// The content lands in a per-process temp file that is renamed over
    /// `path`, so readers never see a partial file. Both helper files are
    /// removed before returning.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        let lock_path = path.with_extension("toml.lock");
        let lock = File::create(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
        lock.lock_exclusive().context("Failed to acquire config lock")?;

        let written = replace_contents(path, content.as_bytes());

        let _ = FileExt::unlock(&lock);
        drop(lock);
        if let Err(e) = std::fs::remove_file(&lock_path) {
            debug!("[singleplexer] Could not remove {}: {}", lock_path.display(), e);
        }

        written
    }
}

/// Write `bytes` to a temp file next to `path` and rename it into place
fn replace_contents(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension(format!("toml.{}.tmp", std::process::id()));

    let result = (|| -> Result<()> {
        let mut temp = File::create(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
        temp.write_all(bytes).context("Failed to write config content")?;
        temp.sync_all().context("Failed to sync config file")?;
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to replace config file: {}", path.display()))
    })();

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    }
    result
}
