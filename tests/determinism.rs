use serde_json::{Value, json};
use wirefix::{Document, flatten, normalize, process_raw, process_value};

/// Replace generated ids so two runs can be compared structurally.
fn with_stable_ids(mut doc: Document) -> Document {
    fn walk(list: &mut [wirefix::Component], next: &mut usize) {
        for c in list {
            c.id = format!("id{next}");
            *next += 1;
            if let Some(children) = c.children.as_mut() {
                walk(children, next);
            }
        }
    }
    let mut next = 0;
    if let Some(list) = doc.components.as_mut() {
        walk(list, &mut next);
    }
    for page in doc.pages.iter_mut().flatten() {
        page.id = format!("page{next}");
        next += 1;
        walk(&mut page.components, &mut next);
    }
    doc
}

fn samples() -> Vec<Value> {
    vec![
        json!({"json": {"title": "Dashboard", "components": [
            {"type": "navbar", "label": "Acme"},
            {"type": "card", "children": [
                {"type": "heading", "content": "Revenue"},
                {"type": "text", "value": "$12k"}
            ]},
            {"type": "card", "children": [{"type": "image"}]},
            {"type": "button"},
            {"type": "TextField", "hint": "Search"}
        ]}}),
        json!({"pages": [
            {"name": "Home", "components": [{"type": "hero"}, "Tagline"]},
            {"title": "Pricing Plans", "components": [{"type": "card"}, {"type": "card"}, {"type": "card"}, {"type": "card"}]}
        ]}),
        json!({"type": "form", "children": [{"type": "input"}, {"type": "submit"}]}),
    ]
}

#[test]
fn normalize_is_idempotent() {
    for sample in samples() {
        let once = normalize(&sample);
        let twice = normalize(&once.to_value());
        assert_eq!(once, twice, "re-normalization changed {sample}");
    }
}

#[test]
fn normalize_is_deterministic_up_to_generated_ids() {
    for sample in samples() {
        let a = with_stable_ids(normalize(&sample));
        let b = with_stable_ids(normalize(&sample));
        assert_eq!(a, b);
    }
}

#[test]
fn raw_and_value_paths_agree() {
    let value = samples().remove(0);
    let raw = format!("```json\n{}\n```", value);
    let from_raw = process_raw(&raw).expect("fenced sample recovers");
    let from_value = process_value(&value);
    assert_eq!(from_raw.validation, from_value.validation);
    assert_eq!(
        with_stable_ids(from_raw.document),
        with_stable_ids(from_value.document)
    );
}

#[test]
fn flatten_is_stable_on_flat_documents() {
    for sample in samples() {
        let flat = flatten(&normalize(&sample));
        assert_eq!(flatten(&flat), flat);
    }
}
