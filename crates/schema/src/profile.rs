//! Component type profiles.
//!
//! A [`ComponentProfile`] is the full default-field record for one component
//! type. The registry below is the single source of defaults for the nested
//! normalizer and for flattening; neither path hard-codes a size or color.
//!
//! Types outside the registry resolve to the generic profile, so an unknown
//! `type` never blocks rendering.
use serde::{Deserialize, Serialize};

/// Type used when a component omits `type` entirely.
pub const DEFAULT_TYPE: &str = "rect";

/// Font stack shared by every profile.
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";

/// The three component kinds accepted by the design-tool export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlatKind {
    /// Static label. Containers and text-like types land here.
    Text,
    /// Free-entry field. Everything without a closer match lands here.
    Input,
    Button,
}

impl FlatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlatKind::Text => "text",
            FlatKind::Input => "input",
            FlatKind::Button => "button",
        }
    }

    /// Resolves a type name that is already inside the strict set.
    pub fn from_type(kind: &str) -> Option<FlatKind> {
        match kind {
            "text" => Some(FlatKind::Text),
            "input" => Some(FlatKind::Input),
            "button" => Some(FlatKind::Button),
            _ => None,
        }
    }
}

/// Default-field record for one component type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentProfile {
    /// Canonical type name.
    pub kind: &'static str,
    /// Other names models use for the same type.
    pub aliases: &'static [&'static str],
    /// Canned text when the source carries neither `text` nor `label`.
    pub label: &'static str,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub stroke: Option<&'static str>,
    pub stroke_width: f64,
    pub text_color: &'static str,
    pub font_size: f64,
    pub font_weight: &'static str,
    pub font_family: &'static str,
    pub border_radius: f64,
    pub placeholder: Option<&'static str>,
    /// Whether the validator insists on a resolvable label.
    pub requires_label: bool,
    /// Nearest design-tool kind when flattening.
    pub flat_kind: FlatKind,
}

const GENERIC: ComponentProfile = ComponentProfile {
    kind: "component",
    aliases: &[],
    label: "Component",
    width: 100.0,
    height: 50.0,
    fill: "#F9FAFB",
    stroke: Some("#D1D5DB"),
    stroke_width: 1.0,
    text_color: "#374151",
    font_size: 14.0,
    font_weight: "normal",
    font_family: DEFAULT_FONT_FAMILY,
    border_radius: 4.0,
    placeholder: None,
    requires_label: false,
    flat_kind: FlatKind::Input,
};

static PROFILES: &[ComponentProfile] = &[
    ComponentProfile {
        kind: "rect",
        aliases: &["rectangle", "shape", "box"],
        label: "Rectangle",
        ..GENERIC
    },
    ComponentProfile {
        kind: "text",
        aliases: &["paragraph", "label", "p", "span", "caption"],
        label: "Text",
        width: 200.0,
        height: 30.0,
        fill: "transparent",
        stroke: None,
        stroke_width: 0.0,
        border_radius: 0.0,
        requires_label: true,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
    ComponentProfile {
        kind: "heading",
        aliases: &["h1", "h2", "h3", "title", "header-text"],
        label: "Heading",
        width: 300.0,
        height: 40.0,
        fill: "transparent",
        stroke: None,
        stroke_width: 0.0,
        text_color: "#111827",
        font_size: 24.0,
        font_weight: "bold",
        border_radius: 0.0,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
    ComponentProfile {
        kind: "button",
        aliases: &["btn", "submit", "cta"],
        label: "Button",
        width: 120.0,
        height: 40.0,
        fill: "#3B82F6",
        stroke: Some("#2563EB"),
        text_color: "#FFFFFF",
        font_size: 16.0,
        font_weight: "bold",
        border_radius: 8.0,
        requires_label: true,
        flat_kind: FlatKind::Button,
        ..GENERIC
    },
    ComponentProfile {
        kind: "input",
        aliases: &["textfield", "text-input", "textbox", "email", "password", "search"],
        label: "",
        width: 200.0,
        height: 35.0,
        fill: "#FFFFFF",
        text_color: "#6B7280",
        border_radius: 6.0,
        placeholder: Some("Enter text..."),
        requires_label: true,
        ..GENERIC
    },
    ComponentProfile {
        kind: "textarea",
        aliases: &["multiline", "text-area"],
        label: "",
        width: 300.0,
        height: 100.0,
        fill: "#FFFFFF",
        text_color: "#6B7280",
        border_radius: 6.0,
        placeholder: Some("Enter text..."),
        ..GENERIC
    },
    ComponentProfile {
        kind: "checkbox",
        aliases: &["toggle", "switch", "radio"],
        label: "Checkbox",
        width: 20.0,
        height: 20.0,
        fill: "#FFFFFF",
        border_radius: 4.0,
        ..GENERIC
    },
    ComponentProfile {
        kind: "link",
        aliases: &["anchor", "a"],
        label: "Link",
        width: 100.0,
        height: 24.0,
        fill: "transparent",
        stroke: None,
        stroke_width: 0.0,
        text_color: "#3B82F6",
        border_radius: 0.0,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
    ComponentProfile {
        kind: "image",
        aliases: &["img", "picture", "avatar", "icon"],
        label: "Image",
        width: 200.0,
        height: 150.0,
        fill: "#E5E7EB",
        stroke: Some("#9CA3AF"),
        text_color: "#6B7280",
        border_radius: 4.0,
        ..GENERIC
    },
    ComponentProfile {
        kind: "divider",
        aliases: &["hr", "separator", "line"],
        label: "",
        width: 400.0,
        height: 1.0,
        fill: "#E5E7EB",
        stroke: None,
        stroke_width: 0.0,
        border_radius: 0.0,
        ..GENERIC
    },
    ComponentProfile {
        kind: "container",
        aliases: &["div", "section", "group", "panel", "frame", "hero", "content"],
        label: "Container",
        width: 400.0,
        height: 300.0,
        fill: "#FFFFFF",
        stroke: Some("#E5E7EB"),
        border_radius: 8.0,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
    ComponentProfile {
        kind: "form",
        aliases: &["fieldset"],
        label: "Form",
        width: 360.0,
        height: 400.0,
        fill: "#FFFFFF",
        stroke: Some("#E5E7EB"),
        border_radius: 8.0,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
    ComponentProfile {
        kind: "card",
        aliases: &["tile"],
        label: "Card",
        width: 300.0,
        height: 200.0,
        fill: "#FFFFFF",
        stroke: Some("#E5E7EB"),
        border_radius: 12.0,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
    ComponentProfile {
        kind: "navbar",
        aliases: &["nav", "navigation", "header", "menu", "toolbar"],
        label: "Navigation",
        width: 800.0,
        height: 60.0,
        fill: "#1F2937",
        stroke: None,
        stroke_width: 0.0,
        text_color: "#FFFFFF",
        font_size: 16.0,
        border_radius: 0.0,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
    ComponentProfile {
        kind: "footer",
        aliases: &["bottom-bar"],
        label: "Footer",
        width: 800.0,
        height: 80.0,
        fill: "#F3F4F6",
        stroke: None,
        stroke_width: 0.0,
        text_color: "#6B7280",
        border_radius: 0.0,
        flat_kind: FlatKind::Text,
        ..GENERIC
    },
];

impl ComponentProfile {
    /// Registry lookup by canonical name or alias, ASCII case-insensitive.
    pub fn lookup(kind: &str) -> Option<&'static ComponentProfile> {
        let kind = kind.trim();
        PROFILES.iter().find(|p| {
            p.kind.eq_ignore_ascii_case(kind)
                || p.aliases.iter().any(|a| a.eq_ignore_ascii_case(kind))
        })
    }

    /// Registry lookup that falls back to the generic profile.
    pub fn for_type(kind: &str) -> &'static ComponentProfile {
        Self::lookup(kind).unwrap_or(&GENERIC)
    }

    pub fn generic() -> &'static ComponentProfile {
        &GENERIC
    }
}

/// Whether `kind` names a registered type or alias.
pub fn is_supported_type(kind: &str) -> bool {
    ComponentProfile::lookup(kind).is_some()
}

/// Canonical names of every registered type.
pub fn supported_types() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_profile_has_finite_geometry() {
        for p in PROFILES.iter().chain(std::iter::once(&GENERIC)) {
            for v in [p.width, p.height, p.stroke_width, p.font_size, p.border_radius] {
                assert!(v.is_finite(), "{} has non-finite default", p.kind);
            }
        }
    }

    #[test]
    fn canonical_names_are_unique() {
        let mut names: Vec<&str> = supported_types().collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn containers_flatten_to_text() {
        for kind in ["container", "form", "card", "navbar"] {
            assert_eq!(ComponentProfile::for_type(kind).flat_kind, FlatKind::Text);
        }
        assert_eq!(ComponentProfile::for_type("image").flat_kind, FlatKind::Input);
        assert_eq!(ComponentProfile::for_type("mystery").flat_kind, FlatKind::Input);
    }

    #[test]
    fn input_profile_allows_empty_label() {
        let p = ComponentProfile::for_type("input");
        assert_eq!(p.label, "");
        assert_eq!(p.width, 200.0);
        assert_eq!(p.height, 35.0);
        assert_eq!(p.fill, "#FFFFFF");
        assert_eq!(p.border_radius, 6.0);
    }
}
