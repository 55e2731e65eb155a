//! Configuration management

use crate::error::{LedgerError, Result};
use crate::infrastructure::store::DEFAULT_LEDGER_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "tally.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ledger file, relative to the directory holding the config
    #[serde(default = "default_ledger_file")]
    pub file: PathBuf,
}

fn default_ledger_file() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: default_ledger_file(),
        }
    }
}

impl Config {
    /// Load tally.toml from the given directory, falling back to defaults when absent
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(LedgerError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save tally.toml into the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Resolve the ledger file: an explicit override wins, otherwise the
    /// configured file relative to `dir`
    pub fn ledger_path(&self, dir: &Path, file_override: Option<&Path>) -> PathBuf {
        match file_override {
            Some(file) => file.to_path_buf(),
            None => dir.join(&self.file),
        }
    }
}
