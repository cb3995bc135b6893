//! Per-node checks.
//!
//! Paths in error messages follow the JSON shape of the payload, e.g.
//! `pages[1].components[0].children[2]`, so a reader can find the node
//! without re-running anything.
use schema::{as_text, is_supported_type, ComponentProfile, FieldKey};
use serde_json::{Map, Value};

use crate::config::ValidateConfig;
use crate::result::ValidationResult;

pub(crate) struct Walker<'a> {
    cfg: &'a ValidateConfig,
    pub(crate) result: ValidationResult,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(cfg: &'a ValidateConfig) -> Self {
        Self {
            cfg,
            result: ValidationResult::default(),
        }
    }

    pub(crate) fn check_payload(&mut self, payload: &Map<String, Value>) {
        self.result.has_title = payload
            .get("title")
            .and_then(as_text)
            .is_some();
        if !self.result.has_title && self.cfg.require_title {
            self.result.error("missing title");
        }

        if let Some(list) = payload.get("components").and_then(Value::as_array) {
            self.result.has_components = true;
            self.check_list(list, "components", 1);
            return;
        }

        match payload.get("pages").and_then(Value::as_array) {
            Some(pages) => self.check_pages(pages),
            None => self.result.error("missing components array"),
        }
    }

    fn check_pages(&mut self, pages: &[Value]) {
        for (i, page) in pages.iter().enumerate() {
            let path = format!("pages[{i}]");
            let Some(page) = page.as_object() else {
                self.result.error(format!("{path}: not an object"));
                continue;
            };
            match page.get("components").and_then(Value::as_array) {
                Some(list) => {
                    self.result.has_components = true;
                    self.check_list(list, &format!("{path}.components"), 1);
                }
                None => self
                    .result
                    .error(format!("{path}: missing components array")),
            }
        }
    }

    fn check_list(&mut self, list: &[Value], path: &str, depth: usize) {
        if depth > self.cfg.max_depth {
            self.result.error(format!(
                "{path}: nesting exceeds max depth {}",
                self.cfg.max_depth
            ));
            return;
        }
        for (i, node) in list.iter().enumerate() {
            self.check_component(node, &format!("{path}[{i}]"), depth);
        }
    }

    fn check_component(&mut self, node: &Value, path: &str, depth: usize) {
        let Some(obj) = node.as_object() else {
            self.result.error(format!("{path}: not an object"));
            return;
        };

        match FieldKey::Type.resolve(obj, as_text) {
            None => self.result.error(format!("{path}: missing type")),
            Some(kind) => {
                let kind = kind.to_ascii_lowercase();
                if !is_supported_type(&kind) {
                    self.result.unsupported(&kind);
                }
                if ComponentProfile::for_type(&kind).requires_label && !has_label(obj, &kind) {
                    self.result.error(format!("{path} ({kind}): missing label"));
                }
                if self.cfg.require_coordinates && !has_coordinates(obj) {
                    self.result.error(format!(
                        "{path} ({kind}): x and y must both be numeric"
                    ));
                }
            }
        }

        if let Some(children) = nested_list(obj) {
            self.result.has_nested_components = true;
            self.check_list(children, &format!("{path}.children"), depth + 1);
        }
    }
}

fn has_label(obj: &Map<String, Value>, kind: &str) -> bool {
    if FieldKey::Text.resolve(obj, as_text).is_some() {
        return true;
    }
    ComponentProfile::for_type(kind).kind == "input"
        && FieldKey::Placeholder.resolve(obj, as_text).is_some()
}

/// Both axes must be JSON numbers. Numeric strings such as `"10px"` are
/// schema drift here even though the normalizer coerces them.
fn has_coordinates(obj: &Map<String, Value>) -> bool {
    FieldKey::X.resolve(obj, json_number).is_some()
        && FieldKey::Y.resolve(obj, json_number).is_some()
}

fn json_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

/// First non-empty list under any children synonym.
fn nested_list(obj: &Map<String, Value>) -> Option<&Vec<Value>> {
    FieldKey::Children.resolve(obj, |v| v.as_array().filter(|a| !a.is_empty()))
}
