//! Error types produced by the recover crate.
//!
//! Recovery never panics on malformed input. Every failure surfaces as a
//! [`RecoverError`] value so the transport layer can pattern-match and trigger
//! its fallback path instead of null-checking.
//!
//! | Error | Meaning |
//! |-------|---------|
//! | [`EmptyInput`](RecoverError::EmptyInput) | Nothing left after fence stripping and trimming |
//! | [`InputTooLarge`](RecoverError::InputTooLarge) | Raw text exceeds the configured byte limit |
//! | [`Unrecoverable`](RecoverError::Unrecoverable) | Every strategy failed; carries the first parse error |
//!
//! ```rust
//! use recover::{recover, RecoverError};
//!
//! match recover("no json here") {
//!     Ok(found) => println!("recovered via {}", found.strategy),
//!     Err(RecoverError::Unrecoverable { message }) => println!("fallback: {message}"),
//!     Err(other) => println!("fallback: {other}"),
//! }
//! ```
use thiserror::Error;

/// Reasons no JSON value could be salvaged from a raw payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecoverError {
    /// The payload was empty or whitespace-only once fences were removed.
    #[error("raw payload is empty")]
    EmptyInput,

    /// The payload exceeded [`RecoverConfig::max_input_bytes`](crate::RecoverConfig::max_input_bytes).
    #[error("raw payload size {len} exceeds limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },

    /// No strategy produced parseable JSON. `message` is the error from the
    /// direct parse of the cleaned text, which is the most useful one to show.
    #[error("no recoverable JSON: {message}")]
    Unrecoverable { message: String },
}

impl RecoverError {
    /// True when a regeneration attempt could plausibly succeed.
    ///
    /// Oversized input will be oversized again; everything else came from a
    /// truncated or garbled model response.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, RecoverError::InputTooLarge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = RecoverError::InputTooLarge { len: 20, limit: 10 };
        assert_eq!(err.to_string(), "raw payload size 20 exceeds limit of 10");

        let err = RecoverError::Unrecoverable {
            message: "expected value at line 1 column 1".into(),
        };
        assert!(err.to_string().contains("line 1 column 1"));
    }

    #[test]
    fn only_size_errors_are_final() {
        assert!(RecoverError::EmptyInput.is_retryable());
        assert!(!RecoverError::InputTooLarge { len: 2, limit: 1 }.is_retryable());
    }
}
