//! YAML Configuration File Support for Motormart
//!
//! Catalog behavior that is not part of the vehicle data lives in a single
//! YAML file: how cards are presented and which page controls exist.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Motormart Catalog Configuration
//! version: "1.0"
//!
//! presenter:
//!   placeholder_image: "images/placeholder.png"
//!   currency_symbol: "$"
//!   detail_page: "vehicle.html"
//!
//! controls:
//!   search: true
//!   sort: true
//! ```

use std::fs;
use std::path::Path;

use presenter::{PresenterSettings, SettingsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::{CatalogContext, Controls};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(#[from] SettingsError),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Configuration format version
    pub version: String,

    /// Card presentation settings
    #[serde(default)]
    pub presenter: PresenterSettings,

    /// Page controls that are present
    #[serde(default)]
    pub controls: Controls,
}

impl CatalogConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CatalogConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;
        self.presenter.validate()?;
        Ok(())
    }

    /// A fresh, unloaded context built from this configuration.
    pub fn context(&self) -> CatalogContext {
        CatalogContext::new(self.controls, self.presenter.clone())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            presenter: PresenterSettings::default(),
            controls: Controls::default(),
        }
    }
}
