//! Config management use case

use crate::error::{JotterError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for managing jotter configuration
pub struct ConfigService {
    dir: PathBuf,
}

impl ConfigService {
    /// Create a config service over the given working directory
    pub fn new(dir: PathBuf) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.dir)?;

        match key {
            "journal" => Ok(config.journal.display().to_string()),
            _ => Err(JotterError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: journal",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.dir)?;

        match key {
            "journal" => {
                if value.trim().is_empty() {
                    return Err(JotterError::Config(
                        "journal path may not be empty".to_string(),
                    ));
                }
                config.journal = PathBuf::from(value);
            }
            _ => {
                return Err(JotterError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: journal",
                    key
                )));
            }
        }

        config.save_to_dir(&self.dir)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.dir)
    }
}
