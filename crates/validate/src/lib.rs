//! Wirefix structural validator.
//!
//! Diagnoses a recovered JSON value without changing it. The result feeds
//! logs and client warnings; normalization runs regardless of the verdict, so
//! every rule here is advisory.
//!
//! ## Rules
//!
//! - The top level carries a payload wrapper (`json` by default). When it is
//!   missing, an error is recorded and the top-level object is checked instead.
//! - The payload carries a `title` and a `components` array, or a `pages`
//!   array whose pages each carry `components`.
//! - Every component is an object with a non-empty `type`; `text`, `input`
//!   and `button` need a resolvable label; `x` and `y` are numeric.
//! - Unknown types are listed in `unsupportedTypes`, not reported as errors.
//!
//! ```
//! use serde_json::json;
//!
//! let res = validate::validate(&json!({"json": {"components": [{"type": "text"}]}}));
//! assert!(!res.is_valid);
//! assert!(res.errors.iter().any(|e| e.contains("missing label")));
//! assert!(res.errors.iter().any(|e| e.contains("x and y")));
//! ```
use serde_json::Value;
use tracing::debug;

mod config;
mod result;
mod rules;

pub use crate::config::{ConfigError, ValidateConfig};
pub use crate::result::ValidationResult;

/// Validate with the default configuration.
pub fn validate(doc: &Value) -> ValidationResult {
    validate_with(doc, &ValidateConfig::default())
}

/// Validate a recovered payload. Never panics and never fails.
pub fn validate_with(doc: &Value, cfg: &ValidateConfig) -> ValidationResult {
    let mut walker = rules::Walker::new(cfg);

    match doc.as_object() {
        None => walker.result.error("payload is not a JSON object"),
        Some(top) => {
            let wrapped = cfg
                .payload_keys
                .iter()
                .find_map(|key| top.get(key.as_str()).and_then(Value::as_object));
            let payload = match wrapped {
                Some(inner) => inner,
                None => {
                    walker.result.error(format!(
                        "missing payload key `{}`",
                        cfg.primary_payload_key()
                    ));
                    top
                }
            };
            walker.check_payload(payload);
        }
    }

    let result = walker.result.finish();
    debug!(
        is_valid = result.is_valid,
        errors = result.errors.len(),
        unsupported = result.unsupported_types.len(),
        "validate_complete"
    );
    result
}
