//! Component-level normalization.
//!
//! Every output field is resolved in the same order: explicit canonical
//! property, then synonyms (when enabled), then the type profile. A value that
//! is present but unusable (`null`, `"wide"`, `NaN`) counts as absent.
use schema::{
    as_finite_number, as_id, as_text, Component, ComponentProfile, FieldKey, DEFAULT_TYPE,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::NormalizeConfig;
use crate::ids::IdGenerator;
use crate::layout::grid_position;

/// One normalization pass. Owns the id generator so ids are unique across
/// every list the pass touches.
pub(crate) struct Pass<'a> {
    pub(crate) cfg: &'a NormalizeConfig,
    pub(crate) ids: IdGenerator,
    pub(crate) defaults_applied: u64,
    pub(crate) truncated_subtrees: u64,
}

impl<'a> Pass<'a> {
    pub(crate) fn new(cfg: &'a NormalizeConfig) -> Self {
        Self {
            cfg,
            ids: IdGenerator::new(),
            defaults_applied: 0,
            truncated_subtrees: 0,
        }
    }

    /// Normalizes one sibling list at `depth` (top level is 1).
    ///
    /// String entries become text components; other non-object entries are
    /// skipped. Layout indices count emitted components only.
    pub(crate) fn list(&mut self, items: &[Value], depth: usize) -> Vec<Component> {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let index = out.len();
            match item {
                Value::Object(obj) => out.push(self.component(obj, index, depth)),
                Value::String(text) if !text.trim().is_empty() => {
                    let mut obj = Map::new();
                    obj.insert("type".into(), Value::String("text".into()));
                    obj.insert("text".into(), Value::String(text.clone()));
                    out.push(self.component(&obj, index, depth));
                }
                other => debug!(kind = value_kind(other), depth, "normalize_skip_entry"),
            }
        }
        out
    }

    fn component(&mut self, obj: &Map<String, Value>, index: usize, depth: usize) -> Component {
        let kind = match self.field(obj, FieldKey::Type, as_text) {
            Some(raw) => canonical_type(&raw),
            None => {
                self.defaults_applied += 1;
                DEFAULT_TYPE.to_string()
            }
        };
        let profile = ComponentProfile::for_type(&kind);

        let id = match self.field(obj, FieldKey::Id, as_id) {
            Some(id) => id,
            None => self.ids.next(&self.cfg.component_id_prefix),
        };

        let (grid_x, grid_y) = grid_position(index, &self.cfg.grid);
        let x = self.number(obj, FieldKey::X, grid_x);
        let y = self.number(obj, FieldKey::Y, grid_y);

        let text = self.text(obj, FieldKey::Text, profile.label);
        let fill = self.text(obj, FieldKey::Fill, profile.fill);
        let text_color = self.text(obj, FieldKey::TextColor, profile.text_color);
        let font_weight = self.text(obj, FieldKey::FontWeight, profile.font_weight);
        let font_family = self.text(obj, FieldKey::FontFamily, profile.font_family);
        let stroke = self.optional_text(obj, FieldKey::Stroke, profile.stroke);
        let placeholder = self.optional_text(obj, FieldKey::Placeholder, profile.placeholder);

        let children = self.children(obj, &id, depth);
        let extra = if self.cfg.preserve_unknown {
            unknown_fields(obj)
        } else {
            Map::new()
        };

        Component {
            width: self.number(obj, FieldKey::Width, profile.width),
            height: self.number(obj, FieldKey::Height, profile.height),
            stroke_width: self.number(obj, FieldKey::StrokeWidth, profile.stroke_width),
            font_size: self.number(obj, FieldKey::FontSize, profile.font_size),
            border_radius: self.number(obj, FieldKey::BorderRadius, profile.border_radius),
            id,
            kind,
            text,
            x,
            y,
            fill,
            stroke,
            text_color,
            font_weight,
            font_family,
            placeholder,
            children,
            extra,
        }
    }

    fn children(
        &mut self,
        obj: &Map<String, Value>,
        parent_id: &str,
        depth: usize,
    ) -> Option<Vec<Component>> {
        let items = self.field(obj, FieldKey::Children, |v| {
            v.as_array().filter(|a| !a.is_empty())
        })?;
        if depth >= self.cfg.max_depth {
            self.truncated_subtrees += 1;
            warn!(
                parent_id,
                depth,
                max_depth = self.cfg.max_depth,
                dropped = items.len(),
                "normalize_depth_truncated"
            );
            return None;
        }
        let children = self.list(items, depth + 1);
        (!children.is_empty()).then_some(children)
    }

    /// Resolves `key` through the synonym table, or the canonical name only
    /// when synonyms are disabled.
    fn field<'v, T>(
        &self,
        obj: &'v Map<String, Value>,
        key: FieldKey,
        convert: impl Fn(&'v Value) -> Option<T>,
    ) -> Option<T> {
        if self.cfg.accept_synonyms {
            key.resolve(obj, convert)
        } else {
            obj.get(key.canonical()).and_then(convert)
        }
    }

    fn number(&mut self, obj: &Map<String, Value>, key: FieldKey, default: f64) -> f64 {
        match self.field(obj, key, as_finite_number) {
            Some(n) => n,
            None => {
                self.defaults_applied += 1;
                default
            }
        }
    }

    fn text(&mut self, obj: &Map<String, Value>, key: FieldKey, default: &str) -> String {
        match self.field(obj, key, as_text) {
            Some(s) => s,
            None => {
                self.defaults_applied += 1;
                default.to_string()
            }
        }
    }

    fn optional_text(
        &mut self,
        obj: &Map<String, Value>,
        key: FieldKey,
        default: Option<&str>,
    ) -> Option<String> {
        self.field(obj, key, as_text)
            .or_else(|| default.map(str::to_string))
    }
}

/// Lowercased type name; aliases map to their canonical profile name, unknown
/// names are kept.
fn canonical_type(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match ComponentProfile::lookup(&lowered) {
        Some(profile) => profile.kind.to_string(),
        None => lowered,
    }
}

fn unknown_fields(obj: &Map<String, Value>) -> Map<String, Value> {
    obj.iter()
        .filter(|(k, _)| !FieldKey::is_known_key(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn run(items: Value) -> Vec<Component> {
        let cfg = NormalizeConfig::default();
        let mut pass = Pass::new(&cfg);
        pass.list(items.as_array().unwrap(), 1)
    }

    #[test]
    fn button_defaults() {
        let out = run(json!([{"type": "button"}]));
        let b = &out[0];
        assert_eq!(b.kind, "button");
        assert_eq!(b.text, "Button");
        assert_eq!((b.width, b.height), (120.0, 40.0));
        assert_eq!(b.fill, "#3B82F6");
        assert_eq!(b.text_color, "#FFFFFF");
        assert_eq!(b.font_size, 16.0);
        assert_eq!(b.border_radius, 8.0);
        assert!(b.id.starts_with("comp_"));
    }

    #[test]
    fn label_fills_text() {
        let out = run(json!([{"type": "button", "label": "Sign in"}]));
        assert_eq!(out[0].text, "Sign in");
    }

    #[test]
    fn input_text_defaults_to_empty() {
        let out = run(json!([{"type": "input"}]));
        assert_eq!(out[0].text, "");
        assert_eq!(out[0].placeholder.as_deref(), Some("Enter text..."));
    }

    #[test]
    fn alias_and_case_are_canonicalized() {
        let out = run(json!([{"type": " BTN "}, {"type": "Hologram"}, {}]));
        assert_eq!(out[0].kind, "button");
        assert_eq!(out[1].kind, "hologram");
        assert_eq!(out[1].text, "Component");
        assert_eq!(out[2].kind, "rect");
    }

    #[test]
    fn grid_applies_per_missing_coordinate() {
        let out = run(json!([{"x": 5}, {"y": "7px"}, {}, {}]));
        assert_eq!((out[0].x, out[0].y), (5.0, 50.0));
        assert_eq!((out[1].x, out[1].y), (170.0, 7.0));
        assert_eq!((out[2].x, out[2].y), (290.0, 50.0));
        assert_eq!((out[3].x, out[3].y), (50.0, 130.0));
    }

    #[test]
    fn non_finite_and_garbage_numbers_default() {
        let out = run(json!([{"type": "rect", "width": "wide", "height": null}]));
        let p = ComponentProfile::for_type("rect");
        assert_eq!(out[0].width, p.width);
        assert_eq!(out[0].height, p.height);
    }

    #[test]
    fn strings_become_text_and_junk_is_skipped() {
        let out = run(json!(["Hello", 42, null, {"type": "text", "text": "Bye"}]));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, "text");
        assert_eq!(out[0].text, "Hello");
        assert_eq!(out[1].text, "Bye");
        assert_eq!((out[1].x, out[1].y), (170.0, 50.0));
    }

    #[test]
    fn synonyms_can_be_disabled() {
        let cfg = NormalizeConfig {
            accept_synonyms: false,
            ..Default::default()
        };
        let mut pass = Pass::new(&cfg);
        let items = json!([{"type": "rect", "backgroundColor": "#ABCDEF"}]);
        let out = pass.list(items.as_array().unwrap(), 1);
        assert_eq!(out[0].fill, ComponentProfile::for_type("rect").fill);
    }

    #[test]
    fn unknown_fields_only_when_preserved() {
        let items = json!([{"type": "rect", "vendorTag": "x1"}]);
        assert!(run(items.clone())[0].extra.is_empty());

        let cfg = NormalizeConfig {
            preserve_unknown: true,
            ..Default::default()
        };
        let mut pass = Pass::new(&cfg);
        let out = pass.list(items.as_array().unwrap(), 1);
        assert_eq!(out[0].extra.get("vendorTag"), Some(&json!("x1")));
        assert!(!out[0].extra.contains_key("type"));
    }
}
