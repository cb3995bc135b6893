use schema::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for [`validate_with`](crate::validate_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Deepest component nesting inspected before reporting an error.
    pub max_depth: usize,
    /// Top-level keys accepted as the payload wrapper, tried in order.
    pub payload_keys: Vec<String>,
    /// Report a missing `title` as an error.
    pub require_title: bool,
    /// Report components without numeric `x`/`y` as errors.
    pub require_coordinates: bool,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            payload_keys: vec!["json".to_string()],
            require_title: true,
            require_coordinates: true,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max_depth must be >= 1")]
    ZeroMaxDepth,
    #[error("payload_keys must name at least one non-empty key")]
    NoPayloadKeys,
}

impl ValidateConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        if self.payload_keys.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::NoPayloadKeys);
        }
        Ok(())
    }

    /// The key named in "missing payload key" errors.
    pub fn primary_payload_key(&self) -> &str {
        self.payload_keys
            .iter()
            .map(String::as_str)
            .find(|k| !k.trim().is_empty())
            .unwrap_or("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ValidateConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.primary_payload_key(), "json");
    }

    #[test]
    fn rejects_degenerate_settings() {
        let cfg = ValidateConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroMaxDepth));

        let cfg = ValidateConfig {
            payload_keys: vec![" ".into()],
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoPayloadKeys));
    }
}
