use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "records.json";

/// Keys accepted by `get`/`set`, in display order.
pub const CONFIG_KEYS: [&str; 4] = ["data-file", "atomic-save", "escape-csv", "unique-ids"];

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Records file, relative to the data directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Write through a temp file and rename instead of overwriting in place
    #[serde(default)]
    pub atomic_save: bool,

    /// Quote CSV fields that contain commas, quotes or newlines on export
    #[serde(default)]
    pub escape_csv: bool,

    /// Reject adds and updates that would duplicate an existing id
    #[serde(default = "default_unique_ids")]
    pub unique_ids: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_unique_ids() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            atomic_save: false,
            escape_csv: false,
            unique_ids: default_unique_ids(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    /// Full path of the records file for a given data directory.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "atomic-save" => Some(self.atomic_save.to_string()),
            "escape-csv" => Some(self.escape_csv.to_string()),
            "unique-ids" => Some(self.unique_ids.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
            }
            "atomic-save" => self.atomic_save = parse_bool(key, value)?,
            "escape-csv" => self.escape_csv = parse_bool(key, value)?,
            "unique-ids" => self.unique_ids = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|v| (*key, v)))
            .collect()
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("{} expects true or false, got {}", key, other)),
    }
}
