use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILE: &str = "addr_book.json";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for the address book, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// File name of the contact store, relative to the data directory
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Records per page for `show all`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Write the store after every change
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_autosave() -> bool {
    true
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            page_size: default_page_size(),
            autosave: default_autosave(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn store_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.store_file)
    }
}
