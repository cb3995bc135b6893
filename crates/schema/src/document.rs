//! Canonical wireframe document types.
//!
//! These are the shapes handed to collaborators after normalization:
//!
//! ```text
//! Document
//! ├── title?: String
//! ├── components?: [Component]      (single page)
//! └── pages?: [Page]                (multi-page)
//!      ├── id, name, path
//!      └── components: [Component]
//!
//! Component
//! ├── id, type, text
//! ├── x, y, width, height, strokeWidth, fontSize, borderRadius   (finite f64)
//! ├── fill, textColor, fontWeight, fontFamily                    (always set)
//! ├── stroke?, placeholder?                                      (profile-dependent)
//! └── children?: [Component]
//! ```
//!
//! Optional fields are skipped during serialization rather than written as
//! `null`, which keeps the exported JSON free of placeholders.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A normalized wireframe document.
///
/// Exactly one of `components` / `pages` is populated by the normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Component>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
}

/// One page of a multi-page document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub path: String,
    pub components: Vec<Component>,
}

/// A single visual node with geometry and style.
///
/// `extra` only carries data when the normalizer runs with unknown-field
/// preservation enabled; it is flattened into the component object so a
/// round trip through JSON keeps vendor keys at their original position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    pub stroke_width: f64,
    pub text_color: String,
    pub font_size: f64,
    pub font_weight: String,
    pub font_family: String,
    pub border_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
    #[serde(flatten, default)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// True when the document carries a `pages` list.
    pub fn is_multi_page(&self) -> bool {
        self.pages.is_some()
    }

    /// Every top-level component list, in page order.
    pub fn component_lists(&self) -> Vec<&[Component]> {
        match (&self.pages, &self.components) {
            (Some(pages), _) => pages.iter().map(|p| p.components.as_slice()).collect(),
            (None, Some(components)) => vec![components.as_slice()],
            (None, None) => Vec::new(),
        }
    }

    /// Total number of components, nested ones included.
    pub fn component_count(&self) -> usize {
        self.component_lists()
            .into_iter()
            .flat_map(|list| list.iter())
            .map(Component::subtree_size)
            .sum()
    }

    /// Serializes into a JSON value.
    pub fn to_value(&self) -> Value {
        // Document holds only strings, finite floats and maps; serialization
        // cannot fail, so an error maps to `Null` rather than a panic.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Component {
    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Component::subtree_size)
            .sum::<usize>()
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> Component {
        Component {
            id: id.into(),
            kind: "text".into(),
            text: "Hi".into(),
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            fill: "transparent".into(),
            stroke: None,
            stroke_width: 0.0,
            text_color: "#374151".into(),
            font_size: 14.0,
            font_weight: "normal".into(),
            font_family: "Inter, sans-serif".into(),
            border_radius: 0.0,
            placeholder: None,
            children: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let doc = Document {
            title: None,
            components: Some(vec![leaf("a")]),
            pages: None,
        };
        let value = doc.to_value();
        assert!(value.get("title").is_none());
        assert!(value.get("pages").is_none());
        let comp = &value["components"][0];
        assert!(comp.get("stroke").is_none());
        assert!(comp.get("placeholder").is_none());
        assert!(comp.get("children").is_none());
        assert_eq!(comp["type"], "text");
        assert_eq!(comp["textColor"], "#374151");
    }

    #[test]
    fn counts_nested_components() {
        let mut parent = leaf("p");
        parent.children = Some(vec![leaf("c1"), leaf("c2")]);
        let doc = Document {
            title: Some("T".into()),
            components: Some(vec![parent, leaf("d")]),
            pages: None,
        };
        assert_eq!(doc.component_count(), 4);
        assert!(!doc.is_multi_page());
    }
}
