//! Wirefix text recovery layer.
//!
//! Raw model output enters the pipeline here. Responses are frequently wrapped
//! in Markdown fences, cut off by a length limit, or followed by chatty prose.
//! This crate salvages the JSON value inside, or says clearly that there is
//! none.
//!
//! ## Strategy ladder
//!
//! Each step runs only if the previous one failed:
//!
//! 1. Strip code fences and leading blank lines, trim.
//! 2. Parse the cleaned text directly.
//! 3. If it does not end with `}`, cut back to the last `}` and parse; if the
//!    cut-off prefix still has open brackets, close them and parse again.
//! 4. Parse the greedy first-`{`-to-last-`}` span, then the first balanced
//!    top-level object.
//! 5. Give up with [`RecoverError::Unrecoverable`] carrying the direct-parse
//!    error message.
//!
//! No schema checks happen here: any syntactically valid JSON value is handed
//! to the next stage. Every branch taken is reported through `tracing`.
//!
//! ## Example
//!
//! ```
//! use recover::{recover, RecoveryStrategy};
//!
//! let found = recover("```json\n{\"json\":{\"title\":\"A\"}} trailing-junk\n```").unwrap();
//! assert_eq!(found.value["json"]["title"], "A");
//! assert_eq!(found.strategy, RecoveryStrategy::Truncated);
//! ```
use std::borrow::Cow;
use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn, Level};

mod config;
mod error;
mod fence;
mod repair;

pub use crate::config::{ConfigError, RecoverConfig};
pub use crate::error::RecoverError;
pub use crate::fence::strip_fences;

/// Which rung of the ladder produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStrategy {
    /// The cleaned text parsed as-is.
    Direct,
    /// Cut back to the last closing brace.
    Truncated,
    /// Cut back to the last closing brace, then closed the open brackets.
    ClosedBrackets,
    /// Greedy first-`{`-to-last-`}` span.
    OutermostObject,
    /// First balanced top-level object.
    FirstObject,
}

impl RecoveryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecoveryStrategy::Direct => "direct",
            RecoveryStrategy::Truncated => "truncated",
            RecoveryStrategy::ClosedBrackets => "closed_brackets",
            RecoveryStrategy::OutermostObject => "outermost_object",
            RecoveryStrategy::FirstObject => "first_object",
        }
    }

    /// True for anything other than a clean direct parse.
    pub fn is_partial(&self) -> bool {
        !matches!(self, RecoveryStrategy::Direct)
    }
}

impl fmt::Display for RecoveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recovered JSON value and how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Recovered {
    pub value: Value,
    pub strategy: RecoveryStrategy,
}

/// Recover a JSON value from raw text using the default configuration.
pub fn recover(raw: &str) -> Result<Recovered, RecoverError> {
    recover_with(raw, &RecoverConfig::default())
}

/// Recover a JSON value from raw text.
pub fn recover_with(raw: &str, cfg: &RecoverConfig) -> Result<Recovered, RecoverError> {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "recover.recover", raw_len = raw.len());
    let _guard = span.enter();

    match recover_inner(raw, cfg) {
        Ok(found) => {
            let elapsed_micros = start.elapsed().as_micros();
            if found.strategy.is_partial() {
                info!(strategy = %found.strategy, elapsed_micros, "recover_partial");
            } else {
                debug!(elapsed_micros, "recover_success");
            }
            Ok(found)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "recover_failure");
            Err(err)
        }
    }
}

fn recover_inner(raw: &str, cfg: &RecoverConfig) -> Result<Recovered, RecoverError> {
    if let Some(limit) = cfg.max_input_bytes {
        if raw.len() > limit {
            return Err(RecoverError::InputTooLarge {
                len: raw.len(),
                limit,
            });
        }
    }

    let cleaned: Cow<str> = if cfg.strip_fences {
        Cow::Owned(strip_fences(raw))
    } else {
        Cow::Borrowed(raw.trim())
    };
    if cleaned.is_empty() {
        return Err(RecoverError::EmptyInput);
    }

    let direct_err = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => return Ok(found(value, RecoveryStrategy::Direct)),
        Err(err) => err,
    };
    debug!(error = %direct_err, "recover_direct_parse_failed");

    if !cfg.repair {
        return Err(unrecoverable(&direct_err));
    }

    // Length limits cut responses mid-stream; the prefix up to the last
    // complete object is usually salvageable.
    if !cleaned.ends_with('}') {
        if let Some(prefix) = repair::truncate_to_last_brace(&cleaned) {
            info!(
                dropped_bytes = cleaned.len() - prefix.len(),
                "recover_truncated"
            );
            if let Some(value) = parse(prefix) {
                return Ok(found(value, RecoveryStrategy::Truncated));
            }
            if let Some(patched) = repair::close_open_brackets(prefix) {
                if let Some(value) = parse(&patched) {
                    info!(
                        added_closers = patched.len() - prefix.len(),
                        "recover_closed_brackets"
                    );
                    return Ok(found(value, RecoveryStrategy::ClosedBrackets));
                }
            }
        }
    }

    if let Some(candidate) = repair::outermost_object(&cleaned) {
        if let Some(value) = parse(candidate) {
            info!(candidate_len = candidate.len(), "recover_outermost_object");
            return Ok(found(value, RecoveryStrategy::OutermostObject));
        }
    }

    if let Some(candidate) = repair::first_balanced_object(&cleaned) {
        if let Some(value) = parse(candidate) {
            info!(candidate_len = candidate.len(), "recover_first_object");
            return Ok(found(value, RecoveryStrategy::FirstObject));
        }
    }

    Err(unrecoverable(&direct_err))
}

fn parse(candidate: &str) -> Option<Value> {
    serde_json::from_str(candidate).ok()
}

fn found(value: Value, strategy: RecoveryStrategy) -> Recovered {
    Recovered { value, strategy }
}

fn unrecoverable(err: &serde_json::Error) -> RecoverError {
    RecoverError::Unrecoverable {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn direct_parse() {
        let found = recover(r#"{"title":"Login"}"#).expect("direct parse");
        assert_eq!(found.strategy, RecoveryStrategy::Direct);
        assert_eq!(found.value, json!({"title": "Login"}));
    }

    #[test]
    fn non_object_values_are_accepted() {
        let found = recover("[1, 2, 3]").expect("array parses");
        assert_eq!(found.value, json!([1, 2, 3]));
    }

    #[test]
    fn trailing_junk_is_dropped() {
        let found = recover(r#"{"json":{"title":"A"}} trailing-junk"#).expect("recovered");
        assert_eq!(found.value, json!({"json": {"title": "A"}}));
        assert_eq!(found.strategy, RecoveryStrategy::Truncated);
    }

    #[test]
    fn truncated_prefix_recovered() {
        let raw = r#"{"a":{"b":1}}{"c": tr"#;
        let found = recover(raw).expect("recovered");
        assert_eq!(found.value, json!({"a": {"b": 1}}));
    }

    #[test]
    fn cut_off_component_list_is_closed() {
        let raw = r#"{"title":"A","components":[{"type":"button"},{"type":"inp"#;
        let found = recover(raw).expect("recovered");
        assert_eq!(found.strategy, RecoveryStrategy::ClosedBrackets);
        assert_eq!(
            found.value,
            json!({"title": "A", "components": [{"type": "button"}]})
        );
    }

    #[test]
    fn leading_prose_uses_outermost_object() {
        let raw = "Here is your wireframe: {\"title\":\"A\"}";
        let found = recover(raw).expect("recovered");
        assert_eq!(found.value, json!({"title": "A"}));
        assert_eq!(found.strategy, RecoveryStrategy::OutermostObject);
    }

    #[test]
    fn two_objects_yield_the_first() {
        let raw = "first {\"a\":1} then {\"b\":2}";
        let found = recover(raw).expect("recovered");
        assert_eq!(found.value, json!({"a": 1}));
        assert_eq!(found.strategy, RecoveryStrategy::FirstObject);
    }

    #[test]
    fn backticks_in_string_values_are_kept() {
        let raw = r#"{"json":{"title":"Setup","components":[{"type":"text","text":"Run ```npm i``` first"}]}}"#;
        let found = recover(raw).expect("recovered");
        assert_eq!(found.strategy, RecoveryStrategy::Direct);
        assert_eq!(
            found.value["json"]["components"][0]["text"],
            "Run ```npm i``` first"
        );
    }

    #[test]
    fn no_brace_fails() {
        let res = recover("the model refused to answer");
        assert!(matches!(res, Err(RecoverError::Unrecoverable { .. })));
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(recover(""), Err(RecoverError::EmptyInput));
        assert_eq!(recover("```json\n```"), Err(RecoverError::EmptyInput));
    }

    #[test]
    fn size_limit_enforced() {
        let cfg = RecoverConfig {
            max_input_bytes: Some(4),
            ..Default::default()
        };
        let res = recover_with(r#"{"a":1}"#, &cfg);
        assert_eq!(res, Err(RecoverError::InputTooLarge { len: 7, limit: 4 }));
    }

    #[test]
    fn repair_can_be_disabled() {
        let cfg = RecoverConfig {
            repair: false,
            ..Default::default()
        };
        let res = recover_with(r#"{"a":1} junk"#, &cfg);
        assert!(matches!(res, Err(RecoverError::Unrecoverable { .. })));
    }
}
