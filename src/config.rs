//! YAML configuration file support for wirefix.
//!
//! Every stage configuration can be set from a single YAML file. Sections and
//! fields are optional; anything left out takes the stage default.
//!
//! ## Example
//!
//! ```yaml
//! # wirefix pipeline configuration
//! version: "1.0"
//! name: "production"
//!
//! recover:
//!   max_input_bytes: 524288
//!   strip_fences: true
//!   repair: true
//!
//! validate:
//!   max_depth: 32
//!   payload_keys: ["json", "wireframe"]
//!   require_title: true
//!   require_coordinates: true
//!
//! normalize:
//!   version: 1
//!   max_depth: 32
//!   component_id_prefix: "comp"
//!   page_id_prefix: "page"
//!   accept_synonyms: true
//!   preserve_unknown: false
//!   grid:
//!     columns: 3
//!     column_step: 120
//!     row_step: 80
//! ```

use std::fs;
use std::path::Path;

use normalize::NormalizeConfig;
use recover::RecoverConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validate::ValidateConfig;

/// Failure to load a [`WirefixConfig`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("malformed YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("invalid stage config: {0}")]
    Validation(String),

    #[error("config version {0} is not supported (expected 1.0)")]
    UnsupportedVersion(String),
}

/// Stage configurations for one pipeline, as read from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WirefixConfig {
    /// Format version, `"1.0"` or `"1"`.
    pub version: String,

    /// Free-form label, echoed in logs only.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub recover: RecoverConfig,

    #[serde(default)]
    pub validate: ValidateConfig,

    #[serde(default)]
    pub normalize: NormalizeConfig,
}

impl WirefixConfig {
    /// Read and check a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and check YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: WirefixConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the version, then each stage config in pipeline order.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if !matches!(self.version.as_str(), "1.0" | "1") {
            return Err(ConfigLoadError::UnsupportedVersion(self.version.clone()));
        }

        self.recover
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("recover: {e}")))?;
        self.validate
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("validate: {e}")))?;
        self.normalize
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("normalize: {e}")))?;

        Ok(())
    }
}

impl Default for WirefixConfig {
    fn default() -> Self {
        Self {
            version: "1.0".into(),
            name: None,
            recover: RecoverConfig::default(),
            validate: ValidateConfig::default(),
            normalize: NormalizeConfig::default(),
        }
    }
}
