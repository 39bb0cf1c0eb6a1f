use crate::components::tab_switcher::default_subjects;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Mount point the host screen provides for the tab bar
pub const DEFAULT_MOUNT_ID: &str = "subject-switcher";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Mount point the tab bar renders into
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,
    /// Subject selected at startup; the first subject when unset
    #[serde(default)]
    pub initial_subject: Option<String>,
}

fn default_mount_id() -> String {
    DEFAULT_MOUNT_ID.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mount_id: default_mount_id(),
            subjects: default_subjects(),
            initial_subject: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".subject-tabs"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Whether a config file is present on disk
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Load the config, falling back to defaults
    pub fn load() -> Config {
        let Some(config_path) = Self::config_path() else {
            return Config::default();
        };
        if !config_path.exists() {
            return Config::default();
        }

        let parsed = fs::read_to_string(&config_path)
            .map_err(anyhow::Error::from)
            .and_then(|contents| Self::parse(&contents));
        match parsed {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), "ignoring config file: {}", e);
                Config::default()
            }
        }
    }

    pub fn parse(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}
