use crate::error::{HabitzError, Result};
use crate::model::Outcome;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for habitz, stored as config.json in the data root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HabitzConfig {
    /// Result recorded by `mark` when none is given on the command line.
    #[serde(default = "default_result")]
    pub default_result: Outcome,
}

fn default_result() -> Outcome {
    Outcome::Good
}

impl Default for HabitzConfig {
    fn default() -> Self {
        Self {
            default_result: default_result(),
        }
    }
}

impl HabitzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HabitzError::Io)?;
        let config: HabitzConfig =
            serde_json::from_str(&content).map_err(HabitzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HabitzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HabitzError::Serialization)?;
        fs::write(config_path, content).map_err(HabitzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-result" => Some(self.default_result.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-result" => {
                self.default_result = value.parse()?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
