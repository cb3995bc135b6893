//! Configuration types for the tree normalizer.
//!
//! [`NormalizeConfig`] controls id generation, auto-layout, nesting bounds and
//! how loosely the normalizer reads property names. Like the other stage
//! configs it is cheap to clone and deserializes from YAML or JSON with every
//! field optional.
//!
//! # Quick Start
//!
//! ```rust
//! use normalize::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! config.validate().expect("Invalid configuration");
//! assert_eq!(config.max_depth, 32);
//! assert_eq!(config.grid.columns, 3);
//! ```
//!
//! # Custom Layout
//!
//! ```rust
//! use normalize::{GridLayout, NormalizeConfig};
//!
//! let config = NormalizeConfig {
//!     grid: GridLayout {
//!         columns: 4,
//!         column_step: 160.0,
//!         ..GridLayout::default()
//!     },
//!     preserve_unknown: true,
//!     ..NormalizeConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! ```
use schema::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Runtime configuration for [`normalize_with`](crate::normalize_with) and
/// [`flatten_with`](crate::flatten_with).
///
/// # Serialization
///
/// ```yaml
/// version: 1
/// max_depth: 32
/// component_id_prefix: comp
/// page_id_prefix: page
/// default_page_name: Page
/// accept_synonyms: true
/// preserve_unknown: false
/// grid:
///   origin_x: 50
///   origin_y: 50
///   columns: 3
///   column_step: 120
///   row_step: 80
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Version of the normalization rules.
    ///
    /// Bump when defaults change in a way that alters output for the same
    /// input, so stored documents can be re-normalized deliberately.
    ///
    /// Default: `1`
    pub version: u32,

    /// Deepest nesting level kept. Children below it are dropped and a
    /// `normalize_depth_truncated` warning is logged.
    ///
    /// Default: `32`
    pub max_depth: usize,

    /// Placement used for components without numeric coordinates.
    pub grid: GridLayout,

    /// Prefix of generated component ids.
    ///
    /// Default: `"comp"`
    pub component_id_prefix: String,

    /// Prefix of generated page ids.
    ///
    /// Default: `"page"`
    pub page_id_prefix: String,

    /// Name given to pages that carry none.
    ///
    /// Default: `"Page"`
    pub default_page_name: String,

    /// Read synonym property names (`backgroundColor`, `label`, ...). With
    /// `false` only canonical names are honored.
    ///
    /// Default: `true`
    pub accept_synonyms: bool,

    /// Keep unrecognized component properties in [`Component::extra`](schema::Component::extra).
    ///
    /// Default: `false`
    pub preserve_unknown: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_depth: DEFAULT_MAX_DEPTH,
            grid: GridLayout::default(),
            component_id_prefix: "comp".to_string(),
            page_id_prefix: "page".to_string(),
            default_page_name: "Page".to_string(),
            accept_synonyms: true,
            preserve_unknown: false,
        }
    }
}

/// Row-major auto-layout grid.
///
/// The `n`-th sibling without coordinates lands at
/// `(origin_x + (n mod columns) * column_step, origin_y + floor(n / columns) * row_step)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub columns: usize,
    pub column_step: f64,
    pub row_step: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 50.0,
            columns: 3,
            column_step: 120.0,
            row_step: 80.0,
        }
    }
}

/// Misconfiguration detected by [`NormalizeConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// `max_depth` was zero; not even top-level components would survive.
    #[error("max_depth must be >= 1")]
    ZeroMaxDepth,

    /// The grid has no columns.
    #[error("grid.columns must be >= 1")]
    ZeroColumns,

    /// A grid offset or step was NaN or infinite.
    #[error("grid.{0} must be finite")]
    NonFiniteGrid(&'static str),

    /// An id prefix was empty or contained whitespace.
    #[error("{0} must be non-empty and contain no whitespace")]
    InvalidIdPrefix(&'static str),

    #[error("default_page_name must not be empty")]
    EmptyPageName,
}

impl NormalizeConfig {
    /// Checks internal consistency. Call once at start-up; the normalizer
    /// itself assumes a valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }
        if self.grid.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        let offsets = [
            ("origin_x", self.grid.origin_x),
            ("origin_y", self.grid.origin_y),
            ("column_step", self.grid.column_step),
            ("row_step", self.grid.row_step),
        ];
        if let Some((name, _)) = offsets.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFiniteGrid(name));
        }
        for (name, prefix) in [
            ("component_id_prefix", &self.component_id_prefix),
            ("page_id_prefix", &self.page_id_prefix),
        ] {
            if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidIdPrefix(name));
            }
        }
        if self.default_page_name.trim().is_empty() {
            return Err(ConfigError::EmptyPageName);
        }
        Ok(())
    }
}
