//! Configuration for text recovery.
//!
//! ```rust
//! use recover::RecoverConfig;
//!
//! let config = RecoverConfig {
//!     max_input_bytes: Some(512 * 1024),
//!     ..Default::default()
//! };
//! config.validate().expect("valid recover config");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for [`recover_with`](crate::recover_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoverConfig {
    /// Reject raw payloads larger than this many bytes before any parsing.
    ///
    /// Default: `None` (unlimited)
    pub max_input_bytes: Option<usize>,

    /// Remove triple-backtick fences and their language tags.
    ///
    /// Default: `true`
    pub strip_fences: bool,

    /// Attempt truncation, bracket closing and object extraction when the
    /// direct parse fails. With `false` only the direct parse is tried.
    ///
    /// Default: `true`
    pub repair: bool,
}

impl Default for RecoverConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: None,
            strip_fences: true,
            repair: true,
        }
    }
}

/// Misconfiguration detected by [`RecoverConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("max_input_bytes must be > 0 when set")]
    ZeroInputLimit,
}

impl RecoverConfig {
    /// Checks internal consistency. Call once at start-up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == Some(0) {
            return Err(ConfigError::ZeroInputLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = RecoverConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.strip_fences);
        assert!(cfg.repair);
    }

    #[test]
    fn zero_limit_rejected() {
        let cfg = RecoverConfig {
            max_input_bytes: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroInputLimit));
    }
}
