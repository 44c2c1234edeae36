// File: src/config.rs
// Purpose: Configuration parsing from attryme.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::format::DEFAULT_ALERT_HEADER;

/// Default configuration file name
pub const CONFIG_FILE: &str = "attryme.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validator: ValidatorSection,

    #[serde(default)]
    pub prompt: PromptSection,
}

/// How errors are reported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorSection {
    /// Render the error list as HTML for a modal dialog (default: false)
    #[serde(default = "default_false")]
    pub rich: bool,

    /// Heading shown above the error list
    #[serde(default = "default_alert_header")]
    pub alert_header: String,
}

/// How confirmations are answered
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PromptSection {
    /// Answer every confirmation without asking (`true` = OK, `false` = CANCEL)
    #[serde(default)]
    pub assume: Option<bool>,
}

fn default_false() -> bool {
    false
}

fn default_alert_header() -> String {
    DEFAULT_ALERT_HEADER.to_string()
}

impl Default for ValidatorSection {
    fn default() -> Self {
        Self {
            rich: false,
            alert_header: default_alert_header(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
