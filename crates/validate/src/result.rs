use serde::{Deserialize, Serialize};

/// Diagnosis of one payload. Advisory only; nothing downstream is blocked by
/// `is_valid == false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Human-readable problems in document order.
    pub errors: Vec<String>,
    pub has_title: bool,
    pub has_components: bool,
    /// Component types outside the registry, first-seen order, no duplicates.
    pub unsupported_types: Vec<String>,
    pub has_nested_components: bool,
}

impl ValidationResult {
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub(crate) fn unsupported(&mut self, kind: &str) {
        if !self.unsupported_types.iter().any(|k| k == kind) {
            self.unsupported_types.push(kind.to_string());
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        self.is_valid = self.errors.is_empty();
        self
    }
}
