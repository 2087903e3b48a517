//! Settings manager
//!
//! Owns the active [`Config`] and the file it persists to, by default
//! `<platform config dir>/shapekit/config.toml`.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "shapekit";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct SettingsManager {
    config_path: PathBuf,
    config: Config,
}

impl SettingsManager {
    /// Manager bound to the platform config file, holding defaults until
    /// [`load_or_default`](Self::load_or_default) is called.
    pub fn new() -> SettingsResult<Self> {
        Ok(Self::with_path(Self::default_config_path()?))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            config: Config::default(),
        }
    }

    /// `<config dir>/shapekit/config.toml`, falling back to the home
    /// directory when the platform has no config dir.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Creates the directory holding the config file if needed.
    pub fn ensure_config_dir(&self) -> SettingsResult<()> {
        if let Some(dir) = self.config_path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e))
                })?;
            }
        }
        Ok(())
    }

    /// Loads the config file. A missing file gives defaults; an unreadable
    /// or invalid one is logged and also gives defaults.
    pub fn load_or_default(&mut self) -> &Config {
        self.config = if !self.config_path.exists() {
            tracing::debug!(
                "No config at {}, using defaults",
                self.config_path.display()
            );
            Config::default()
        } else {
            match Config::load_from_file(&self.config_path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring config at {}: {}",
                        self.config_path.display(),
                        e
                    );
                    Config::default()
                }
            }
        };
        &self.config
    }

    /// Writes the current config, creating its directory first.
    pub fn save(&self) -> SettingsResult<()> {
        self.ensure_config_dir()?;
        self.config.save_to_file(&self.config_path)
    }
}
