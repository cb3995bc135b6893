//! Flattening for the design-tool export.
//!
//! The design tool only understands `text`, `input` and `button` nodes placed
//! in page coordinates. Flattening walks each page depth-first (pre-order,
//! siblings in order) with an explicit stack, translates every node by its
//! ancestors' absolute position, coerces its type through the profile
//! registry and emits one list per page with no `children`.
use schema::{Component, ComponentProfile, Document, FlatKind, Page};
use tracing::{debug, warn};

use crate::config::NormalizeConfig;

/// Flatten with the default configuration.
pub fn flatten(doc: &Document) -> Document {
    flatten_with(doc, &NormalizeConfig::default())
}

/// Flatten a normalized document. Page structure and title are kept; each
/// component list becomes a single ordered sequence.
pub fn flatten_with(doc: &Document, cfg: &NormalizeConfig) -> Document {
    let pages = doc.pages.as_ref().map(|pages| {
        pages
            .iter()
            .map(|page| Page {
                id: page.id.clone(),
                name: page.name.clone(),
                path: page.path.clone(),
                components: flatten_list(&page.components, cfg),
            })
            .collect()
    });
    let components = match (&doc.pages, &doc.components) {
        (None, Some(list)) => Some(flatten_list(list, cfg)),
        (None, None) => Some(Vec::new()),
        (Some(_), _) => None,
    };

    Document {
        title: doc.title.clone(),
        components,
        pages,
    }
}

struct Frame<'a> {
    node: &'a Component,
    offset: (f64, f64),
    depth: usize,
}

fn flatten_list(list: &[Component], cfg: &NormalizeConfig) -> Vec<Component> {
    let mut out = Vec::new();
    let mut stack: Vec<Frame<'_>> = list
        .iter()
        .rev()
        .map(|node| Frame {
            node,
            offset: (0.0, 0.0),
            depth: 1,
        })
        .collect();

    while let Some(Frame {
        node,
        offset,
        depth,
    }) = stack.pop()
    {
        let abs = (offset.0 + node.x, offset.1 + node.y);
        out.push(coerce(node, abs));

        let Some(children) = node.children.as_deref() else {
            continue;
        };
        if depth >= cfg.max_depth {
            warn!(
                parent_id = %node.id,
                dropped = children.len(),
                "flatten_depth_truncated"
            );
            continue;
        }
        stack.extend(children.iter().rev().map(|child| Frame {
            node: child,
            offset: abs,
            depth: depth + 1,
        }));
    }

    debug!(input = list.len(), output = out.len(), "flatten_list");
    out
}

/// Copy of `node` at absolute `(x, y)` with its type in the strict set.
fn coerce(node: &Component, (x, y): (f64, f64)) -> Component {
    let mut flat = Component {
        x,
        y,
        children: None,
        ..node.clone()
    };
    if FlatKind::from_type(&node.kind).is_some() {
        return flat;
    }

    let source = ComponentProfile::for_type(&node.kind);
    let target = ComponentProfile::for_type(source.flat_kind.as_str());
    flat.kind = target.kind.to_string();
    flat.fill = target.fill.to_string();
    flat.stroke = target.stroke.map(str::to_string);
    flat.stroke_width = target.stroke_width;
    flat.text_color = target.text_color.to_string();
    flat.font_size = target.font_size;
    flat.font_weight = target.font_weight.to_string();
    flat.border_radius = target.border_radius;

    match source.flat_kind {
        FlatKind::Text | FlatKind::Button => {
            flat.placeholder = None;
        }
        FlatKind::Input => {
            let hint = node
                .placeholder
                .clone()
                .filter(|p| !p.is_empty())
                .or_else(|| (!node.text.is_empty()).then(|| node.text.clone()))
                .unwrap_or_else(|| source.label.to_string());
            flat.placeholder = Some(hint);
            flat.text = String::new();
        }
    }
    flat
}
