//! Config management use case

use crate::error::{LedgerError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and changing tally.toml in one directory
pub struct ConfigService {
    dir: PathBuf,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(dir: PathBuf) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.dir)?;

        match key {
            "file" => Ok(config.file.display().to_string()),
            _ => Err(LedgerError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: file",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.dir)?;

        match key {
            "file" => {
                if value.trim().is_empty() {
                    return Err(LedgerError::Config(
                        "Ledger file path cannot be empty".to_string(),
                    ));
                }
                config.file = PathBuf::from(value);
            }
            _ => {
                return Err(LedgerError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: file",
                    key
                )));
            }
        }

        config.save_to_dir(&self.dir)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_default_file() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());
        assert_eq!(service.get("file").unwrap(), "records.txt");
    }

    #[test]
    fn test_set_then_get_file() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        service.set("file", "ledger.txt").unwrap();

        assert_eq!(service.get("file").unwrap(), "ledger.txt");
        assert_eq!(service.list().unwrap().file, PathBuf::from("ledger.txt"));
    }

    #[test]
    fn test_set_empty_file_rejected() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());
        assert!(service.set("file", "  ").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        assert!(matches!(service.get("color"), Err(LedgerError::Config(_))));
        assert!(matches!(
            service.set("color", "red"),
            Err(LedgerError::Config(_))
        ));
    }
}
