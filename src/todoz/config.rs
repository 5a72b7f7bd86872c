use crate::error::{Result, TodozError};
use crate::model::Todo;
use crate::store::{validate_key, TODOS_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for todoz, stored in `{data_dir}/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Key the collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Start a fresh list with one empty todo ready to be titled
    #[serde(default = "default_seed_placeholder")]
    pub seed_placeholder: bool,
}

fn default_storage_key() -> String {
    TODOS_KEY.to_string()
}

fn default_seed_placeholder() -> bool {
    true
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            seed_placeholder: default_seed_placeholder(),
        }
    }
}

/// Settable keys, as spelled on the command line.
pub const CONFIG_KEYS: &[&str] = &["storage-key", "seed-placeholder"];

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        fs::write(config_path, content).map_err(TodozError::Io)?;
        Ok(())
    }

    /// The collection a brand new list starts with.
    pub fn seed(&self) -> Vec<Todo> {
        if self.seed_placeholder {
            vec![Todo::new(1, "")]
        } else {
            Vec::new()
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "storage-key" => Ok(self.storage_key.clone()),
            "seed-placeholder" => Ok(self.seed_placeholder.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(TodozError::Config("storage-key cannot be empty".into()));
                }
                validate_key(value).map_err(|_| {
                    TodozError::Config(format!(
                        "storage-key {:?} cannot be used as a file name",
                        value
                    ))
                })?;
                self.storage_key = value.to_string();
            }
            "seed-placeholder" => {
                self.seed_placeholder = value.trim().parse().map_err(|_| {
                    TodozError::Config(format!(
                        "seed-placeholder expects true or false, got {:?}",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TodozError {
    TodozError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
