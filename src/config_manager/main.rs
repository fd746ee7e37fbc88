use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};
use crate::config_manager::system::SystemConfig;
use crate::config_manager::model::ModelConfig;
use crate::config_manager::ui::UiConfig;

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub context: Option<serde_json::Value>,

    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(default)]
    pub model_config: ModelConfig,

    #[serde(default)]
    pub ui_config: UiConfig,
}

impl Config {
    /// Load configuration from a JSON, JSON-LD or YAML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        use crate::config_manager::utils::{read_config_value, validate_config};
        let value = read_config_value(path)?;
        validate_config(&value)
    }

    /// Load the first candidate file that exists. A present file that fails
    /// to parse or validate is an error; defaults apply only when no
    /// candidate exists.
    pub fn resolve(paths: &[String]) -> anyhow::Result<Self> {
        for path in paths {
            if !Path::new(path).exists() {
                debug!("Config candidate not present: {}", path);
                continue;
            }
            let config = Self::load(path)
                .with_context(|| format!("Invalid configuration file: {}", path))?;
            info!("Loaded configuration from: {}", path);
            return Ok(config);
        }

        warn!("No config file found (tried {:?}), using defaults", paths);
        Ok(Self::default())
    }
}
