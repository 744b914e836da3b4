use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::currency::DEFAULT_CURRENCY_LABEL;
use crate::domain::RateTable;
use crate::errors::Result;
use crate::storage::{config_file, write_document};

/// Persisted application settings: the live rate table plus the label used
/// when rendering amounts. This file is the durable side of the rate store;
/// every `rates set` rewrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency_label: String,
    #[serde(default)]
    pub rates: RateTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_label: DEFAULT_CURRENCY_LABEL.into(),
            rates: RateTable::default(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::at_path(config_file())
    }

    /// Manager backed by an explicit file (tests point this at a temp dir).
    pub fn at_path(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Loads the config, falling back to defaults when no file exists yet.
    /// Rates are re-clamped after deserializing so a hand-edited file cannot
    /// introduce a negative rate.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.rates.sanitize();
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_document(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
