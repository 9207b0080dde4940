//! Init command implementation

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::info;

use singleplexer::config::Config;

/// Write the default configuration to `config_path` (or the global path).
pub async fn init_command(config_path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let config_path = Config::default_write_path(config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::with_defaults().save_to_file(&config_path)?;
    info!("[singleplexer] Wrote default config");
    println!("Created: {}", config_path.display());

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = init_command(Some(path.as_path()), false).await.unwrap();
        assert_eq!(written, path);

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\nprompt = \"$ \"\n").unwrap();

        assert!(init_command(Some(path.as_path()), false).await.is_err());
        assert_eq!(Config::from_file(&path).unwrap().settings.prompt, "$ ");

        init_command(Some(path.as_path()), true).await.unwrap();
        assert_eq!(Config::from_file(&path).unwrap().settings.prompt, "> ");
    }
}
