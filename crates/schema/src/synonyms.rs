//! Field synonym table.
//!
//! Model output drifts between property names (`backgroundColor` vs `fill`,
//! `label` vs `text`, `components` vs `children`). Each canonical field owns an
//! ordered key list with the canonical name first; lookups walk the list and
//! the first key whose value is usable wins. An explicit canonical value thus
//! always beats a synonym, and a synonym always beats a profile default.
use serde_json::{Map, Value};

/// Keys under which a wrapped document payload may appear.
pub const PAYLOAD_KEYS: &[&str] = &["json", "wireframe", "document"];

/// Canonical component fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Id,
    Type,
    Text,
    X,
    Y,
    Width,
    Height,
    Fill,
    Stroke,
    StrokeWidth,
    TextColor,
    FontSize,
    FontWeight,
    FontFamily,
    BorderRadius,
    Placeholder,
    Children,
}

impl FieldKey {
    pub const ALL: [FieldKey; 17] = [
        FieldKey::Id,
        FieldKey::Type,
        FieldKey::Text,
        FieldKey::X,
        FieldKey::Y,
        FieldKey::Width,
        FieldKey::Height,
        FieldKey::Fill,
        FieldKey::Stroke,
        FieldKey::StrokeWidth,
        FieldKey::TextColor,
        FieldKey::FontSize,
        FieldKey::FontWeight,
        FieldKey::FontFamily,
        FieldKey::BorderRadius,
        FieldKey::Placeholder,
        FieldKey::Children,
    ];

    /// Accepted property names, canonical first.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            FieldKey::Id => &["id", "key", "uid"],
            FieldKey::Type => &["type", "kind", "component"],
            FieldKey::Text => &["text", "label", "content", "value", "title", "name"],
            FieldKey::X => &["x", "left"],
            FieldKey::Y => &["y", "top"],
            FieldKey::Width => &["width", "w"],
            FieldKey::Height => &["height", "h"],
            FieldKey::Fill => &["fill", "backgroundColor", "background", "bgColor"],
            FieldKey::Stroke => &["stroke", "borderColor"],
            FieldKey::StrokeWidth => &["strokeWidth", "borderWidth"],
            FieldKey::TextColor => &["textColor", "color", "fontColor"],
            FieldKey::FontSize => &["fontSize", "font_size", "size"],
            FieldKey::FontWeight => &["fontWeight", "font_weight", "weight"],
            FieldKey::FontFamily => &["fontFamily", "font_family", "font"],
            FieldKey::BorderRadius => &["borderRadius", "radius", "cornerRadius"],
            FieldKey::Placeholder => &["placeholder", "hint"],
            FieldKey::Children => &["children", "components", "items", "elements"],
        }
    }

    pub fn canonical(self) -> &'static str {
        self.synonyms()[0]
    }

    /// First synonym whose value `convert` accepts.
    pub fn resolve<'a, T>(
        self,
        obj: &'a Map<String, Value>,
        convert: impl Fn(&'a Value) -> Option<T>,
    ) -> Option<T> {
        self.synonyms()
            .iter()
            .filter_map(|key| obj.get(*key))
            .find_map(convert)
    }

    /// True when `key` is any synonym of any canonical field.
    pub fn is_known_key(key: &str) -> bool {
        FieldKey::ALL
            .iter()
            .any(|field| field.synonyms().contains(&key))
    }
}

/// Reads a finite number from a JSON number or a numeric string such as
/// `"120"` or `"120px"`.
pub fn as_finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            s.strip_suffix("px").unwrap_or(s).trim().parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Reads a trimmed, non-empty string. Numbers are rendered as text so ids
/// and weights such as `600` survive.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads an identifier verbatim. Blank strings count as absent but are never
/// trimmed, so `" a "` stays `" a "`.
pub fn as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn canonical_name_beats_synonym() {
        let o = obj(json!({"backgroundColor": "#ABCDEF", "fill": "#000000"}));
        assert_eq!(FieldKey::Fill.resolve(&o, as_text).as_deref(), Some("#000000"));
    }

    #[test]
    fn synonym_used_when_canonical_missing() {
        let o = obj(json!({"backgroundColor": "#ABCDEF"}));
        assert_eq!(FieldKey::Fill.resolve(&o, as_text).as_deref(), Some("#ABCDEF"));
    }

    #[test]
    fn unusable_canonical_falls_through() {
        let o = obj(json!({"fill": null, "background": "#111111"}));
        assert_eq!(FieldKey::Fill.resolve(&o, as_text).as_deref(), Some("#111111"));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        assert_eq!(as_finite_number(&json!("120px")), Some(120.0));
        assert_eq!(as_finite_number(&json!(" 42 ")), Some(42.0));
        assert_eq!(as_finite_number(&json!("wide")), None);
        assert_eq!(as_finite_number(&json!(true)), None);
    }

    #[test]
    fn ids_are_not_trimmed() {
        assert_eq!(as_id(&json!(" a ")).as_deref(), Some(" a "));
        assert_eq!(as_id(&json!(7)).as_deref(), Some("7"));
        assert_eq!(as_id(&json!("   ")), None);
        assert_eq!(as_id(&json!(null)), None);
    }

    #[test]
    fn known_keys_cover_synonyms() {
        assert!(FieldKey::is_known_key("borderColor"));
        assert!(FieldKey::is_known_key("children"));
        assert!(!FieldKey::is_known_key("vendorTag"));
        assert_eq!(FieldKey::Children.canonical(), "children");
    }
}
