//! Canned wireframe served when no document could be recovered.
//!
//! The layout is a navbar, a hero carrying the user's description, a content
//! block with three sections and a footer. It is built as raw JSON and run
//! through the normalizer, so it satisfies the same invariants as recovered
//! output.

use normalize::NormalizeConfig;
use schema::Document;
use serde_json::{Value, json};

const PAGE_WIDTH: f64 = 800.0;
const TITLE_CHARS: usize = 60;

/// Build the fallback document for `description`.
pub fn fallback_document(description: &str) -> Document {
    fallback_document_with(description, &NormalizeConfig::default())
}

/// Build the fallback document with an explicit normalizer configuration.
pub fn fallback_document_with(description: &str, cfg: &NormalizeConfig) -> Document {
    let description = match description.trim() {
        "" => "Your wireframe",
        trimmed => trimmed,
    };
    let title: String = description.chars().take(TITLE_CHARS).collect();

    let sections: Vec<Value> = (0..3)
        .map(|i| {
            json!({
                "type": "text",
                "text": format!("Section {}", i + 1),
                "x": 40.0 + f64::from(i) * 250.0,
                "y": 40,
                "width": 220,
                "height": 160
            })
        })
        .collect();

    let raw = json!({
        "title": title,
        "components": [
            {"type": "navbar", "text": "Navigation", "x": 0, "y": 0, "width": PAGE_WIDTH, "height": 60},
            {"type": "container", "text": "Hero", "x": 0, "y": 80, "width": PAGE_WIDTH, "height": 200,
             "children": [
                {"type": "heading", "text": description, "x": 40, "y": 60, "width": PAGE_WIDTH - 80.0, "height": 40}
             ]},
            {"type": "container", "text": "Content", "x": 0, "y": 300, "width": PAGE_WIDTH, "height": 240,
             "children": sections},
            {"type": "footer", "text": "Footer", "x": 0, "y": 560, "width": PAGE_WIDTH, "height": 80}
        ]
    });

    normalize::normalize_with(&raw, cfg)
}
