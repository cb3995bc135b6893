use std::time::Instant;

use schema::{as_id, as_text, Component, Document, FieldKey, Page, PAYLOAD_KEYS};
use serde_json::{Map, Value};
use tracing::{info, warn, Level};

use crate::component::Pass;
use crate::config::NormalizeConfig;
use crate::layout::page_path;

/// Normalize with the default configuration.
pub fn normalize(value: &Value) -> Document {
    normalize_with(value, &NormalizeConfig::default())
}

/// Rewrite any recovered JSON value into a canonical [`Document`].
///
/// Accepted shapes, checked in order after unwrapping a `json` /
/// `wireframe` / `document` payload key:
///
/// 1. an object whose `pages` array yields at least one page (multi-page);
/// 2. an object carrying `type` (a single component), unless it also has a
///    `title` and a top-level `components`/`pages` list;
/// 3. an object with a component list (`components` or a synonym);
/// 4. a bare array of components.
///
/// Anything else yields an empty single-page document. Never fails.
pub fn normalize_with(value: &Value, cfg: &NormalizeConfig) -> Document {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "normalize.normalize");
    let _guard = span.enter();

    let mut pass = Pass::new(cfg);
    let doc = build_document(unwrap_payload(value), &mut pass);

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        pages = doc.pages.as_ref().map_or(0, Vec::len),
        components = doc.component_count(),
        generated_ids = pass.ids.issued(),
        defaults_applied = pass.defaults_applied,
        truncated_subtrees = pass.truncated_subtrees,
        elapsed_micros,
        "normalize_success"
    );
    doc
}

/// Normalize a bare component list as the top level of a page.
pub fn normalize_components(items: &[Value], cfg: &NormalizeConfig) -> Vec<Component> {
    Pass::new(cfg).list(items, 1)
}

fn unwrap_payload(value: &Value) -> &Value {
    let Some(obj) = value.as_object() else {
        return value;
    };
    PAYLOAD_KEYS
        .iter()
        .filter_map(|key| obj.get(*key))
        .find(|inner| inner.is_object() || inner.is_array())
        .unwrap_or(value)
}

fn build_document(value: &Value, pass: &mut Pass<'_>) -> Document {
    let obj = match value {
        Value::Object(obj) => obj,
        Value::Array(items) => return single_page(None, pass.list(items, 1)),
        _ => {
            warn!("normalize_unusable_root");
            return single_page(None, Vec::new());
        }
    };

    let title = obj.get("title").and_then(as_text);

    if let Some(pages) = obj.get("pages").and_then(Value::as_array) {
        let pages = build_pages(pages, pass);
        if !pages.is_empty() {
            return Document {
                title,
                components: None,
                pages: Some(pages),
            };
        }
    }

    if is_bare_component(obj, title.is_some()) {
        return single_page(None, pass.list(std::slice::from_ref(value), 1));
    }

    match component_list(obj) {
        Some(items) => single_page(title, pass.list(items, 1)),
        None => single_page(title, Vec::new()),
    }
}

fn build_pages(pages: &[Value], pass: &mut Pass<'_>) -> Vec<Page> {
    let mut out = Vec::with_capacity(pages.len());
    for (index, page) in pages.iter().enumerate() {
        match page {
            Value::Object(obj) => out.push(build_page(obj, pass)),
            Value::Array(items) => {
                let mut obj = Map::new();
                obj.insert("components".into(), Value::Array(items.clone()));
                out.push(build_page(&obj, pass));
            }
            _ => warn!(index, "normalize_skip_page"),
        }
    }
    out
}

fn build_page(obj: &Map<String, Value>, pass: &mut Pass<'_>) -> Page {
    let id = match obj.get("id").and_then(as_id) {
        Some(id) => id,
        None => pass.ids.next(&pass.cfg.page_id_prefix),
    };
    let name = obj
        .get("name")
        .or_else(|| obj.get("title"))
        .and_then(as_text)
        .unwrap_or_else(|| pass.cfg.default_page_name.clone());
    let path = obj
        .get("path")
        .and_then(as_text)
        .unwrap_or_else(|| page_path(&name));
    let components = component_list(obj)
        .map(|items| pass.list(items, 1))
        .unwrap_or_default();

    Page {
        id,
        name,
        path,
        components,
    }
}

/// A `type` key marks a component unless the object also looks like a
/// titled document, i.e. carries both `title` and a top-level list.
fn is_bare_component(obj: &Map<String, Value>, titled: bool) -> bool {
    if !obj.contains_key("type") {
        return false;
    }
    let has_document_list = obj.contains_key("components") || obj.contains_key("pages");
    !(titled && has_document_list)
}

fn component_list(obj: &Map<String, Value>) -> Option<&Vec<Value>> {
    FieldKey::Children.resolve(obj, Value::as_array)
}

fn single_page(title: Option<String>, components: Vec<Component>) -> Document {
    Document {
        title,
        components: Some(components),
        pages: None,
    }
}
