//! Plugin configuration: where the plugin lives and where its data file is.
//!
//! The plugin directory holds three small files:
//! - `settings.json`: the settings blob (data folder, action keyword)
//! - `config.txt`: optional one-line absolute path overriding the data file
//! - `todos.data.json`: the default data file

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};

pub const CONFIG_FILE: &str = "config.txt";
pub const DATA_FILE: &str = "todos.data.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "tdq.log";
pub const DEFAULT_ACTION_KEYWORD: &str = "td";

/// Environment variable overriding the plugin directory.
pub const HOME_ENV: &str = "TDQ_HOME";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub folder_path: Option<PathBuf>,
    #[serde(default = "default_action_keyword")]
    pub action_keyword: String,
}

fn default_action_keyword() -> String {
    DEFAULT_ACTION_KEYWORD.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder_path: None,
            action_keyword: default_action_keyword(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PluginConfig {
    plugin_dir: PathBuf,
    pub settings: Settings,
}

impl PluginConfig {
    /// Load the settings blob from `plugin_dir`, falling back to defaults when absent.
    pub fn load(plugin_dir: impl Into<PathBuf>) -> Result<Self> {
        let plugin_dir = plugin_dir.into();
        let settings_path = plugin_dir.join(SETTINGS_FILE);

        let settings = if settings_path.exists() {
            let contents = fs::read_to_string(&settings_path)
                .map_err(|e| TodoError::Settings(e.to_string()))?;
            serde_json::from_str(&contents).map_err(|e| TodoError::Settings(e.to_string()))?
        } else {
            Settings::default()
        };

        Ok(Self { plugin_dir, settings })
    }

    pub fn with_settings(plugin_dir: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
            settings,
        }
    }

    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.plugin_dir).map_err(|e| TodoError::Settings(e.to_string()))?;
        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| TodoError::Settings(e.to_string()))?;
        fs::write(self.plugin_dir.join(SETTINGS_FILE), json)
            .map_err(|e| TodoError::Settings(e.to_string()))
    }

    pub fn plugin_dir(&self) -> &Path {
        &self.plugin_dir
    }

    pub fn action_keyword(&self) -> &str {
        &self.settings.action_keyword
    }

    /// Resolve the data file path. A non-blank `config.txt` wins, then the
    /// configured folder, then the plugin directory.
    pub fn data_file_path(&self) -> PathBuf {
        let config_path = self.plugin_dir.join(CONFIG_FILE);
        if let Ok(contents) = fs::read_to_string(&config_path) {
            let trimmed = contents.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        match &self.settings.folder_path {
            Some(folder) => folder.join(DATA_FILE),
            None => self.plugin_dir.join(DATA_FILE),
        }
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.plugin_dir.join(LOG_FILE)
    }

    pub fn default_plugin_dir() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            if !home.trim().is_empty() {
                return PathBuf::from(home);
            }
        }

        dirs::data_dir()
            .map(|dir| dir.join("tdq"))
            .unwrap_or_else(|| PathBuf::from(".tdq"))
    }
}
