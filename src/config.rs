use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::model::EditPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted lists; empty means the default
    pub data_dir: String,
    /// Directory the CSV export is written to
    pub export_dir: String,
    /// File name of the CSV export, without extension
    pub export_file_stem: String,
    /// Label printed before amounts in the tables
    pub currency_label: String,
    /// Log filter used when no environment override is set
    pub log_level: String,
    /// An edited amount of zero keeps the previous amount
    pub edit_zero_keeps_previous: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            export_dir: ".".to_string(),
            export_file_stem: "controle_financeiro".to_string(),
            currency_label: "R$".to_string(),
            log_level: "info".to_string(),
            edit_zero_keeps_previous: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".finance-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Load the config, writing the defaults on first run
    pub fn load_or_init() -> Config {
        if let Some(config) = Self::load() {
            return config;
        }
        let config = Config::default();
        // A read-only home still gets a working default config
        let _ = config.save();
        config
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

    /// Directory for the persisted lists and the log file
    pub fn data_path(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        Self::config_dir()
            .map(|dir| dir.join("data"))
            .unwrap_or_else(|| PathBuf::from(".finance-tui"))
    }

    pub fn export_path(&self) -> PathBuf {
        PathBuf::from(&self.export_dir)
    }

    pub fn edit_policy(&self) -> EditPolicy {
        EditPolicy {
            zero_keeps_previous: self.edit_zero_keeps_previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"currency_label":"€"}"#).unwrap();
        assert_eq!(config.currency_label, "€");
        assert_eq!(config.export_file_stem, "controle_financeiro");
        assert!(config.edit_zero_keeps_previous);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = Config {
            data_dir: "/tmp/ledger".to_string(),
            ..Config::default()
        };
        assert_eq!(config.data_path(), PathBuf::from("/tmp/ledger"));
    }

    #[test]
    fn test_edit_policy_follows_flag() {
        let config = Config {
            edit_zero_keeps_previous: false,
            ..Config::default()
        };
        assert!(!config.edit_policy().zero_keeps_previous);
    }
}
