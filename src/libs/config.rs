//! Configuration management for todue.
//!
//! Settings live in `config.json` inside the per-user data directory
//! (see [`DataStorage`]). Every section is optional; a missing file or a
//! missing section means defaults, so todue works without running `init`.
//!
//! ```rust,no_run
//! use todue::libs::config::Config;
//!
//! let config = Config::read()?;
//! let storage = config.storage_or_default();
//! println!("backend: {:?}", storage.backend);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section, as listed by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where the task collection is persisted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `blobs` table in `todue.db`.
    #[default]
    Sqlite,
    /// `todos.json` next to the configuration.
    Json,
}

impl StorageBackend {
    pub const ALL: [StorageBackend; 2] = [StorageBackend::Sqlite, StorageBackend::Json];

    pub fn name(self) -> &'static str {
        match self {
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::Json => "json",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Initial view settings of every session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ViewConfig {
    /// Start in the completed view instead of the pending one.
    #[serde(default)]
    pub show_completed: bool,
    /// Direction of the first due-date sort of a session.
    #[serde(default)]
    pub sort_ascending: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Config {
    /// Reads `config.json` from the data directory, or defaults when absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads a configuration file at an explicit path.
    ///
    /// A missing file is not an error; an unparsable one is.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        serde_json::from_str(&config_str).map_err(|err| {
            tracing::warn!(error = %err, path = %path.display(), "configuration unparsable");
            msg_error_anyhow!(Message::ConfigParseError)
        })
    }

    /// Writes the configuration as pretty JSON into the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn storage_or_default(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    pub fn view_or_default(&self) -> ViewConfig {
        self.view.clone().unwrap_or_default()
    }

    /// Interactive setup wizard.
    ///
    /// Lists the configurable sections, then prompts for each selected one
    /// with the current values pre-filled. The caller decides whether to save.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "storage".to_string(),
                name: Message::ConfigModuleStorage.to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: Message::ConfigModuleView.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "storage" => {
                    let default = config.storage_or_default();
                    msg_print!(Message::ConfigModuleStorage);
                    let names: Vec<&str> = StorageBackend::ALL.iter().map(|backend| backend.name()).collect();
                    let current = StorageBackend::ALL.iter().position(|backend| *backend == default.backend).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptStorageBackend.to_string())
                        .items(&names)
                        .default(current)
                        .interact()?;
                    config.storage = Some(StorageConfig {
                        backend: StorageBackend::ALL[choice],
                    });
                }
                "view" => {
                    let default = config.view_or_default();
                    msg_print!(Message::ConfigModuleView);
                    config.view = Some(ViewConfig {
                        show_completed: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowCompleted.to_string())
                            .default(default.show_completed)
                            .interact()?,
                        sort_ascending: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptSortAscending.to_string())
                            .default(default.sort_ascending)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
